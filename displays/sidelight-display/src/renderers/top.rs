//! Top region painters
//!
//! Battery and link state, plus the modifier row and peer indicator on the
//! compact status layout.

use embedded_graphics::{
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use heapless::String;
use sidelight_core::config::TopVariant;

use super::{draw_link, draw_modifier_row, ModifierRow, RenderInput};
use crate::glyph::{Glyph, GLYPH_HEIGHT};
use crate::text::{self, draw_text, text_width, Anchor, LARGE, SMALL, TINY};

const CENTRE: i32 = 34;

/// Gauge bar outline
const BAR: Rectangle = Rectangle::new(Point::new(4, 8), Size::new(52, 20));
/// Fillable interior of the gauge bar
const BAR_INNER: Rectangle = Rectangle::new(Point::new(6, 10), Size::new(48, 16));
/// Terminal nub on the right of the gauge
const BAR_NUB: Rectangle = Rectangle::new(Point::new(56, 14), Size::new(3, 8));

const STATUS_MODIFIERS: ModifierRow = ModifierRow {
    box_width: 14,
    box_height: 18,
    gap: 2,
    y: 46,
};

/// Filled width of a battery bar: `bar_width * percent / 100`, floored
///
/// Percentages above 100 fill the whole bar.
pub fn battery_fill_width(bar_width: u32, percent: u8) -> u32 {
    bar_width * u32::from(percent.min(100)) / 100
}

/// Battery percentage as shown, e.g. `72%`
pub fn battery_text(percent: u8) -> String<4> {
    text::format(format_args!("{}%", percent))
}

pub(crate) fn render<D>(variant: TopVariant, input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    match variant {
        TopVariant::Status => status(input, target),
        TopVariant::Battery => battery(input, target),
        TopVariant::Gauge => gauge(input, target),
        TopVariant::PeerBattery => peer_battery(input, target),
    }
}

/// Letter plus tick or cross for the other half's link
fn draw_peer<D>(
    target: &mut D,
    letter: &str,
    connected: bool,
    y: i32,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let glyph = if connected { Glyph::Check } else { Glyph::Close };
    let width = text_width(SMALL, letter) + 2 + glyph.width();
    let x = Anchor::Center(CENTRE).left_edge(width);
    let text_y = y + (GLYPH_HEIGHT as i32 - SMALL.character_size.height as i32) / 2;
    draw_text(target, letter, Anchor::Left(x), text_y, SMALL, color)?;
    glyph.draw(
        target,
        Point::new(x + text_width(SMALL, letter) as i32 + 2, y),
        color,
    )
}

fn status<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let state = input.state;
    let fg = input.fg();

    draw_text(target, &battery_text(state.battery), Anchor::Left(4), 2, LARGE, fg)?;
    draw_link(target, state.link_status(), Anchor::Right(64), 5, SMALL, fg)?;
    if let Some(connected) = state.peer_connected {
        draw_peer(target, "R", connected, 26, fg)?;
    }
    draw_modifier_row(target, state.modifiers, STATUS_MODIFIERS, SMALL, fg, input.bg())
}

fn battery<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let state = input.state;
    let fg = input.fg();

    draw_text(target, &battery_text(state.battery), Anchor::Center(CENTRE), 10, LARGE, fg)?;
    if state.charging {
        Glyph::Charging.draw(target, Point::new(2, 13), fg)?;
    }
    draw_link(target, state.link_status(), Anchor::Center(CENTRE), 40, SMALL, fg)
}

fn gauge<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let state = input.state;
    let fg = input.fg();

    BAR.into_styled(PrimitiveStyle::with_stroke(fg, 1)).draw(target)?;
    target.fill_solid(&BAR_NUB, fg)?;
    let fill = battery_fill_width(BAR_INNER.size.width, state.battery);
    if fill > 0 {
        target.fill_solid(
            &Rectangle::new(BAR_INNER.top_left, Size::new(fill, BAR_INNER.size.height)),
            fg,
        )?;
    }
    if state.charging {
        Glyph::Charging.draw(target, Point::new(60, 11), fg)?;
    }

    draw_text(target, &battery_text(state.battery), Anchor::Center(CENTRE), 31, TINY, fg)?;
    draw_link(target, state.link_status(), Anchor::Center(CENTRE), 45, SMALL, fg)
}

fn peer_battery<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let state = input.state;
    let fg = input.fg();

    draw_text(target, &battery_text(state.battery), Anchor::Center(CENTRE), 10, LARGE, fg)?;
    if state.charging {
        Glyph::Charging.draw(target, Point::new(2, 13), fg)?;
    }
    // A peripheral always has a central; no report yet means not linked
    draw_peer(target, "C", state.peer_connected.unwrap_or(false), 40, fg)
}
