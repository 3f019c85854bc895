//! Fonts and text placement
//!
//! All region text is drawn with the built-in monospace fonts, top-aligned
//! so that `y` is the first pixel row of the glyph cell.

use core::fmt::{self, Write};

use embedded_graphics::{
    mono_font::{
        ascii::{FONT_10X20, FONT_6X10, FONT_7X13, FONT_9X15},
        MonoFont, MonoTextStyle,
    },
    pixelcolor::Rgb565,
    prelude::*,
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};
use heapless::String;

/// Battery percentage, layer name, short keystroke runs
pub const LARGE: &MonoFont<'static> = &FONT_10X20;
/// Uptime value, modifier boxes in the middle region
pub const MEDIUM: &MonoFont<'static> = &FONT_9X15;
/// Link status, wrapped keystrokes, modifier row
pub const SMALL: &MonoFont<'static> = &FONT_7X13;
/// Captions and the wpm readout
pub const TINY: &MonoFont<'static> = &FONT_6X10;

/// Horizontal anchoring of a text run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    /// `x` is the left edge
    Left(i32),
    /// `x` is the centre
    Center(i32),
    /// `x` is one past the right edge
    Right(i32),
}

impl Anchor {
    /// Left edge of a run of the given width
    pub fn left_edge(self, width: u32) -> i32 {
        match self {
            Anchor::Left(x) => x,
            Anchor::Center(x) => x - width as i32 / 2,
            Anchor::Right(x) => x - width as i32,
        }
    }
}

/// Width in pixels of `text` set in `font`
pub fn text_width(font: &MonoFont<'_>, text: &str) -> u32 {
    let count = text.chars().count() as u32;
    if count == 0 {
        return 0;
    }
    count * font.character_size.width + (count - 1) * font.character_spacing
}

/// Draw `text` at the given anchor and top row
pub fn draw_text<D>(
    target: &mut D,
    text: &str,
    anchor: Anchor,
    y: i32,
    font: &MonoFont<'_>,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (x, alignment) = match anchor {
        Anchor::Left(x) => (x, Alignment::Left),
        Anchor::Center(x) => (x, Alignment::Center),
        Anchor::Right(x) => (x - 1, Alignment::Right),
    };
    let character_style = MonoTextStyle::new(font, color);
    let text_style = TextStyleBuilder::new()
        .alignment(alignment)
        .baseline(Baseline::Top)
        .build();
    Text::with_text_style(text, Point::new(x, y), character_style, text_style).draw(target)?;
    Ok(())
}

/// Writer that silently drops what does not fit
struct Truncating<'a, const N: usize>(&'a mut String<N>);

impl<const N: usize> Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Format into a fixed-capacity string, truncating on overflow
pub fn format<const N: usize>(args: fmt::Arguments<'_>) -> String<N> {
    let mut out = String::new();
    let _ = Truncating(&mut out).write_fmt(args);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(LARGE, ""), 0);
        assert_eq!(text_width(LARGE, "72%"), 30);
        assert_eq!(text_width(SMALL, "USB"), 21);
    }

    #[test]
    fn test_anchor() {
        assert_eq!(Anchor::Left(4).left_edge(30), 4);
        assert_eq!(Anchor::Center(34).left_edge(30), 19);
        assert_eq!(Anchor::Right(64).left_edge(21), 43);
    }

    #[test]
    fn test_format_truncates() {
        let s: String<4> = format(format_args!("{}%", 100));
        assert_eq!(s.as_str(), "100%");
        let s: String<3> = format(format_args!("{}%", 100));
        assert_eq!(s.as_str(), "100");
    }
}
