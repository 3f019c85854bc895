//! Display surface trait
//!
//! Defines the interface to the physical display a widget draws on.

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use sidelight_core::config::{Offset, Region, WIDGET_HEIGHT, WIDGET_WIDTH};

use crate::buffer::RegionBuffer;

/// Display surface errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Region lies entirely outside the panel
    InvalidCoordinates,
    /// Surface is not ready to accept pixels
    NotInitialized,
}

/// Display surface trait
///
/// Receives a region buffer after it has been rendered and rotated. The
/// region's `offset` is its position inside the widget's layout; pixels
/// falling outside the panel are clipped by the implementation.
pub trait DisplaySurface {
    /// Put a region's pixels on the panel
    fn present(
        &mut self,
        region: Region,
        offset: Offset,
        pixels: &RegionBuffer,
    ) -> Result<(), DisplayError>;

    /// Whether the panel can take a `present` now
    ///
    /// Callers skip presenting while this is false and keep the composed
    /// buffer for the next redraw.
    fn is_ready(&self) -> bool {
        true
    }
}

impl<T: DisplaySurface + ?Sized> DisplaySurface for &mut T {
    fn present(
        &mut self,
        region: Region,
        offset: Offset,
        pixels: &RegionBuffer,
    ) -> Result<(), DisplayError> {
        (**self).present(region, offset, pixels)
    }

    fn is_ready(&self) -> bool {
        (**self).is_ready()
    }
}

const PANEL_AREA: usize = WIDGET_WIDTH * WIDGET_HEIGHT;

/// In-memory copy of the full 160×68 widget
///
/// Assembles presented regions at their layout offsets. Boards with a
/// framebuffer-style driver can flush it as a whole; on the host it is the
/// surface used to inspect composed output.
#[derive(Clone, PartialEq, Eq)]
pub struct PanelFrame {
    pixels: [Rgb565; PANEL_AREA],
    presented: u32,
}

impl core::fmt::Debug for PanelFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PanelFrame")
            .field("width", &WIDGET_WIDTH)
            .field("height", &WIDGET_HEIGHT)
            .field("presented", &self.presented)
            .finish_non_exhaustive()
    }
}

impl Default for PanelFrame {
    fn default() -> Self {
        Self::new(Rgb565::WHITE)
    }
}

impl PanelFrame {
    /// Create a frame filled with one colour
    pub const fn new(color: Rgb565) -> Self {
        Self {
            pixels: [color; PANEL_AREA],
            presented: 0,
        }
    }

    /// Read a pixel; `None` outside the panel
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x < WIDGET_WIDTH && y < WIDGET_HEIGHT {
            Some(self.pixels[y * WIDGET_WIDTH + x])
        } else {
            None
        }
    }

    /// Number of successful presents
    pub fn presented(&self) -> u32 {
        self.presented
    }

    /// Panel size in pixels
    pub fn size(&self) -> Size {
        Size::new(WIDGET_WIDTH as u32, WIDGET_HEIGHT as u32)
    }
}

impl DisplaySurface for PanelFrame {
    fn present(
        &mut self,
        _region: Region,
        offset: Offset,
        pixels: &RegionBuffer,
    ) -> Result<(), DisplayError> {
        let n = RegionBuffer::SIZE as i32;
        let x0 = offset.x.max(0);
        let x1 = (offset.x + n).min(WIDGET_WIDTH as i32);
        let y0 = offset.y.max(0);
        let y1 = (offset.y + n).min(WIDGET_HEIGHT as i32);
        if x0 >= x1 || y0 >= y1 {
            return Err(DisplayError::InvalidCoordinates);
        }

        for y in y0..y1 {
            let src = pixels.row((y - offset.y) as usize);
            let dst = y as usize * WIDGET_WIDTH;
            let sx = (x0 - offset.x) as usize;
            let width = (x1 - x0) as usize;
            self.pixels[dst + x0 as usize..dst + x0 as usize + width]
                .copy_from_slice(&src[sx..sx + width]);
        }
        self.presented += 1;
        Ok(())
    }
}
