//! Symbol glyphs
//!
//! The monospace fonts carry no symbols, so the few icons the widget needs
//! are stroked from primitives inside a fixed-height cell.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, Polyline},
};

/// Glyph cell height in pixels
pub const GLYPH_HEIGHT: u32 = 14;

/// Icons drawn next to status text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Bluetooth rune
    Bluetooth,
    /// Cross, link lost
    Close,
    /// Tick, link up
    Check,
    /// Rune with broadcast dots
    Pairing,
    /// Lightning bolt, USB power present
    Charging,
}

const RUNE: [Point; 6] = [
    Point::new(1, 4),
    Point::new(7, 10),
    Point::new(4, 13),
    Point::new(4, 1),
    Point::new(7, 4),
    Point::new(1, 10),
];

const TICK: [Point; 3] = [Point::new(0, 8), Point::new(3, 11), Point::new(8, 3)];

const BOLT: [Point; 4] = [
    Point::new(5, 0),
    Point::new(1, 7),
    Point::new(6, 7),
    Point::new(2, 13),
];

impl Glyph {
    /// Cell width in pixels
    pub const fn width(self) -> u32 {
        match self {
            Glyph::Bluetooth | Glyph::Close | Glyph::Check => 9,
            Glyph::Pairing => 15,
            Glyph::Charging => 7,
        }
    }

    /// Draw the glyph with its cell's top-left corner at `origin`
    pub fn draw<D>(self, target: &mut D, origin: Point, color: Rgb565) -> Result<(), D::Error>
    where
        D: DrawTarget<Color = Rgb565>,
    {
        let stroke = PrimitiveStyle::with_stroke(color, 1);
        match self {
            Glyph::Bluetooth => {
                Polyline::new(&RUNE)
                    .translate(origin)
                    .into_styled(stroke)
                    .draw(target)?;
            }
            Glyph::Close => {
                Line::new(Point::new(1, 3), Point::new(7, 11))
                    .translate(origin)
                    .into_styled(stroke)
                    .draw(target)?;
                Line::new(Point::new(7, 3), Point::new(1, 11))
                    .translate(origin)
                    .into_styled(stroke)
                    .draw(target)?;
            }
            Glyph::Check => {
                Polyline::new(&TICK)
                    .translate(origin)
                    .into_styled(stroke)
                    .draw(target)?;
            }
            Glyph::Pairing => {
                Glyph::Bluetooth.draw(target, origin, color)?;
                for dx in [10, 13] {
                    Circle::new(origin + Point::new(dx, 6), 2)
                        .into_styled(PrimitiveStyle::with_fill(color))
                        .draw(target)?;
                }
            }
            Glyph::Charging => {
                Polyline::new(&BOLT)
                    .translate(origin)
                    .into_styled(stroke)
                    .draw(target)?;
            }
        }
        Ok(())
    }
}
