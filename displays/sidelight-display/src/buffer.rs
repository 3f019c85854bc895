//! Square region pixel buffer
//!
//! Row-major, one `Rgb565` per pixel. Owned by a widget instance and only
//! ever written by its region renderer and the compositor.

use core::convert::Infallible;

use embedded_graphics::{
    pixelcolor::{Rgb565, Rgb888},
    prelude::*,
};
use sidelight_core::config::{Rgb, CANVAS_SIZE};

/// Pixels per region buffer
pub const REGION_AREA: usize = CANVAS_SIZE * CANVAS_SIZE;

/// Convert a configured colour to the panel format
pub fn to_rgb565(color: Rgb) -> Rgb565 {
    Rgb888::new(color.r, color.g, color.b).into()
}

/// 68×68 offscreen buffer for one region
#[derive(Clone, PartialEq, Eq)]
pub struct RegionBuffer {
    pixels: [Rgb565; REGION_AREA],
}

impl core::fmt::Debug for RegionBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("RegionBuffer")
            .field("size", &CANVAS_SIZE)
            .finish_non_exhaustive()
    }
}

impl Default for RegionBuffer {
    fn default() -> Self {
        Self::new(Rgb565::WHITE)
    }
}

impl RegionBuffer {
    /// Side length in pixels
    pub const SIZE: usize = CANVAS_SIZE;

    /// Create a buffer filled with one colour
    pub const fn new(color: Rgb565) -> Self {
        Self {
            pixels: [color; REGION_AREA],
        }
    }

    /// Read a pixel; `None` outside the buffer
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgb565> {
        if x < Self::SIZE && y < Self::SIZE {
            Some(self.pixels[y * Self::SIZE + x])
        } else {
            None
        }
    }

    /// Write a pixel; writes outside the buffer are dropped
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Rgb565) {
        if x < Self::SIZE && y < Self::SIZE {
            self.pixels[y * Self::SIZE + x] = color;
        }
    }

    /// Overwrite every pixel
    pub fn fill(&mut self, color: Rgb565) {
        self.pixels.fill(color);
    }

    /// Full copy of another buffer
    pub fn copy_from(&mut self, other: &RegionBuffer) {
        self.pixels.copy_from_slice(&other.pixels);
    }

    /// One row of pixels
    pub fn row(&self, y: usize) -> &[Rgb565] {
        let start = y.min(Self::SIZE - 1) * Self::SIZE;
        &self.pixels[start..start + Self::SIZE]
    }

    /// All pixels, row-major
    pub fn pixels(&self) -> &[Rgb565] {
        &self.pixels
    }

    /// Number of pixels of a colour
    pub fn count(&self, color: Rgb565) -> usize {
        self.pixels.iter().filter(|&&p| p == color).count()
    }
}

impl OriginDimensions for RegionBuffer {
    fn size(&self) -> Size {
        Size::new(Self::SIZE as u32, Self::SIZE as u32)
    }
}

impl DrawTarget for RegionBuffer {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as usize, y as usize, color);
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.fill(color);
        Ok(())
    }
}
