//! Rotation compositor
//!
//! The panel is mounted sideways, so every region is drawn upright and then
//! turned 90° clockwise about its centre before being handed to the
//! surface. The turn happens in place through a scratch copy; one
//! compositor serves every widget instance.

use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};

use crate::buffer::RegionBuffer;

const N: usize = RegionBuffer::SIZE;

/// Where the pixel at `(x, y)` of an upright region lands after the turn
pub const fn rotated(x: usize, y: usize) -> (usize, usize) {
    (N - 1 - y, x)
}

/// In-place quarter-turn for region buffers
pub struct Compositor {
    scratch: RegionBuffer,
}

impl Default for Compositor {
    fn default() -> Self {
        Self::new()
    }
}

impl Compositor {
    /// Create a compositor with its own scratch buffer
    pub const fn new() -> Self {
        Self {
            scratch: RegionBuffer::new(Rgb565::BLACK),
        }
    }

    /// Rotate `canvas` a quarter turn clockwise
    ///
    /// The canvas is cleared to `background` before the rotated pixels are
    /// written back, so the result carries nothing of the upright drawing.
    pub fn compose(&mut self, canvas: &mut RegionBuffer, background: Rgb565) {
        self.scratch.copy_from(canvas);
        canvas.fill(background);
        for y in 0..N {
            for x in 0..N {
                if let Some(color) = self.scratch.pixel(x, y) {
                    let (rx, ry) = rotated(x, y);
                    canvas.set_pixel(rx, ry, color);
                }
            }
        }
    }
}
