//! Middle region painters

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{Polyline, PrimitiveStyle, Rectangle},
};
use heapless::String;
use sidelight_core::config::{MiddleVariant, KEYSTROKE_CAPACITY};
use sidelight_core::history::GraphScale;

use super::{battery_text, draw_borders, draw_modifier_row, ModifierRow, RenderInput};
use crate::glyph::Glyph;
use crate::text::{self, draw_text, Anchor, LARGE, MEDIUM, SMALL, TINY};

const CENTRE: i32 = 34;

/// Longest keystroke run drawn on a single line
pub const SINGLE_LINE_MAX: usize = 6;

const KEYSTROKE_BYTES: usize = KEYSTROKE_CAPACITY * 4;

const GRAPH_FRAME: Rectangle = Rectangle::new(Point::new(2, 6), Size::new(64, 44));

const GRAPH_AREA: GraphArea = GraphArea {
    left: 5,
    width: 58,
    baseline: 46,
    height: 36,
};

const LARGE_MODIFIERS: ModifierRow = ModifierRow {
    box_width: 15,
    box_height: 24,
    gap: 1,
    y: 22,
};

/// Plot area of the typing-speed graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphArea {
    /// x of the first point
    pub left: i32,
    /// Horizontal distance from the first point to the last
    pub width: u32,
    /// y of a sample equal to the window minimum
    pub baseline: i32,
    /// Rise from the baseline to a sample equal to the window maximum
    pub height: u16,
}

/// Connected-line points for a sample window
///
/// Points are evenly spaced from `left` to `left + width`; vertical
/// position is `baseline - (sample - min) * height / range`, with a flat
/// window scaled by a range of 1.
pub fn graph_points<const N: usize>(samples: &[u8; N], area: &GraphArea) -> [Point; N] {
    let scale = GraphScale::from_samples(samples);
    let steps = N.saturating_sub(1).max(1) as i32;
    let mut points = [Point::zero(); N];
    for (i, (point, &sample)) in points.iter_mut().zip(samples.iter()).enumerate() {
        let x = area.left + i as i32 * area.width as i32 / steps;
        let y = area.baseline - i32::from(scale.scale(sample, area.height));
        *point = Point::new(x, y);
    }
    points
}

/// Split a keystroke run at `len / 2` characters
///
/// Counting characters rather than bytes keeps the split on a character
/// boundary.
pub fn split_keystrokes(text: &str) -> (&str, &str) {
    let mid = text.chars().count() / 2;
    let at = text
        .char_indices()
        .nth(mid)
        .map_or(text.len(), |(index, _)| index);
    text.split_at(at)
}

/// Uptime as `Hh Mm` past the first hour, `Mm Ss` before it
pub fn format_uptime(uptime_ms: u64) -> String<24> {
    let secs = uptime_ms / 1000;
    let hours = secs / 3600;
    let minutes = (secs / 60) % 60;
    let seconds = secs % 60;
    if hours > 0 {
        text::format(format_args!("{}h {}m", hours, minutes))
    } else {
        text::format(format_args!("{}m {}s", minutes, seconds))
    }
}

pub(crate) fn render<D>(variant: MiddleVariant, input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match variant {
        MiddleVariant::Keystrokes => keystrokes(input, target),
        MiddleVariant::TypingSpeed => typing_speed(input, target),
        MiddleVariant::Uptime => uptime(input, target),
        MiddleVariant::Modifiers => modifiers(input, target),
        MiddleVariant::Battery => battery(input, target),
    }
}

fn keystrokes<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let fg = input.fg();
    draw_borders(target, fg)?;

    let typed = input.state.keystrokes.text::<KEYSTROKE_BYTES>();
    let len = typed.chars().count();
    if len == 0 {
        draw_text(target, "...", Anchor::Center(CENTRE), 27, SMALL, fg)
    } else if len <= SINGLE_LINE_MAX {
        draw_text(target, &typed, Anchor::Center(CENTRE), 24, LARGE, fg)
    } else {
        let (first, second) = split_keystrokes(&typed);
        draw_text(target, first, Anchor::Center(CENTRE), 17, SMALL, fg)?;
        draw_text(target, second, Anchor::Center(CENTRE), 36, SMALL, fg)
    }
}

fn typing_speed<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let fg = input.fg();
    let history = &input.state.typing_speed;

    GRAPH_FRAME
        .into_styled(PrimitiveStyle::with_stroke(fg, 1))
        .draw(target)?;
    let points = graph_points(history.samples(), &GRAPH_AREA);
    Polyline::new(&points)
        .into_styled(PrimitiveStyle::with_stroke(fg, 1))
        .draw(target)?;

    let wpm: String<4> = text::format(format_args!("{}", history.latest()));
    draw_text(target, "WPM", Anchor::Left(2), 54, TINY, fg)?;
    draw_text(target, &wpm, Anchor::Right(66), 54, TINY, fg)
}

fn uptime<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let fg = input.fg();
    draw_text(target, "UPTIME", Anchor::Center(CENTRE), 14, TINY, fg)?;
    draw_text(
        target,
        &format_uptime(input.uptime_ms),
        Anchor::Center(CENTRE),
        30,
        MEDIUM,
        fg,
    )
}

fn modifiers<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let fg = input.fg();
    draw_borders(target, fg)?;
    draw_modifier_row(target, input.state.modifiers, LARGE_MODIFIERS, MEDIUM, fg, input.bg())
}

fn battery<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let fg = input.fg();
    draw_text(target, &battery_text(input.state.battery), Anchor::Center(CENTRE), 24, LARGE, fg)?;
    if input.state.charging {
        Glyph::Charging.draw(target, Point::new(30, 48), fg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::buffer::RegionBuffer;
    use crate::renderers::render_region;
    use proptest::prelude::*;
    use sidelight_core::config::{Region, WidgetConfig};
    use sidelight_core::state::WidgetState;

    fn draw(state: &WidgetState, variant: MiddleVariant, uptime_ms: u64) -> RegionBuffer {
        let config = WidgetConfig {
            middle: variant,
            ..WidgetConfig::default()
        };
        let mut buffer = RegionBuffer::default();
        render_region(
            Region::Middle,
            &RenderInput::new(state, &config, uptime_ms),
            &mut buffer,
        )
        .unwrap_or_else(|never| match never {});
        buffer
    }

    #[test]
    fn test_split_keystrokes() {
        assert_eq!(split_keystrokes("abcdefg"), ("abc", "defg"));
        assert_eq!(split_keystrokes("abcdefghijkl"), ("abcdef", "ghijkl"));
        assert_eq!(split_keystrokes(""), ("", ""));
        assert_eq!(split_keystrokes("x"), ("", "x"));
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(0).as_str(), "0m 0s");
        assert_eq!(format_uptime(59_999).as_str(), "0m 59s");
        assert_eq!(format_uptime(125_000).as_str(), "2m 5s");
        assert_eq!(format_uptime(3_600_000).as_str(), "1h 0m");
        assert_eq!(format_uptime(3_723_000).as_str(), "1h 2m");
        assert_eq!(format_uptime(100 * 3_600_000 + 59 * 60_000).as_str(), "100h 59m");
    }

    #[test]
    fn test_graph_points_scaled() {
        let mut samples = [0u8; 10];
        samples[8] = 10;
        samples[9] = 20;
        let points = graph_points(&samples, &GRAPH_AREA);

        assert_eq!(points[0], Point::new(5, 46));
        assert_eq!(points[9], Point::new(63, 46 - 36));
        // Half of the range reaches half of the height
        assert_eq!(points[8].y, 46 - 18);
        assert_eq!(points[7].y, 46);
    }

    #[test]
    fn test_graph_points_flat() {
        let samples = [42u8; 10];
        let points = graph_points(&samples, &GRAPH_AREA);
        for point in points {
            assert_eq!(point.y, GRAPH_AREA.baseline);
        }
    }

    #[test]
    fn test_placeholder_when_empty() {
        let state = WidgetState::new();
        let empty = draw(&state, MiddleVariant::Keystrokes, 0);
        let mut typed = WidgetState::new();
        typed.keystrokes.push('.');
        typed.keystrokes.push('.');
        typed.keystrokes.push('.');
        let dots = draw(&typed, MiddleVariant::Keystrokes, 0);

        // Placeholder uses the small font, typed dots the large one
        assert_ne!(empty, dots);
        assert!(empty.count(Rgb565::BLACK) > 2 * 68);
    }

    #[test]
    fn test_keystrokes_borders() {
        let state = WidgetState::new();
        let buffer = draw(&state, MiddleVariant::Keystrokes, 0);
        assert!(buffer.row(0).iter().all(|&p| p == Rgb565::BLACK));
        assert!(buffer.row(67).iter().all(|&p| p == Rgb565::BLACK));
    }

    #[test]
    fn test_uptime_depends_on_clock() {
        let state = WidgetState::new();
        let a = draw(&state, MiddleVariant::Uptime, 1_000);
        let b = draw(&state, MiddleVariant::Uptime, 61_000);
        let c = draw(&state, MiddleVariant::Uptime, 1_000);
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    proptest! {
        #[test]
        fn prop_graph_points_inside_area(samples in proptest::array::uniform10(any::<u8>())) {
            let points = graph_points(&samples, &GRAPH_AREA);
            for (i, point) in points.iter().enumerate() {
                prop_assert!(point.y <= GRAPH_AREA.baseline);
                prop_assert!(point.y >= GRAPH_AREA.baseline - i32::from(GRAPH_AREA.height));
                if i > 0 {
                    prop_assert!(point.x > points[i - 1].x);
                }
            }
        }

        #[test]
        fn prop_split_rejoins(text in "[a-z!@#]{0,12}") {
            let (first, second) = split_keystrokes(&text);
            prop_assert_eq!(first.len(), text.len() / 2);
            prop_assert_eq!([first, second].concat(), text);
        }
    }
}
