//! Region renderers
//!
//! One painter per configured variant. Every painter clears its target to
//! the background first, so the result depends only on the inputs and
//! never on what the buffer held before.

pub mod bottom;
pub mod middle;
pub mod top;

use embedded_graphics::{
    mono_font::MonoFont,
    pixelcolor::Rgb565,
    prelude::*,
    primitives::{PrimitiveStyle, Rectangle},
};
use sidelight_core::config::{Region, WidgetConfig};
use sidelight_core::modifiers::Modifiers;
use sidelight_core::state::{LinkStatus, WidgetState};

use crate::buffer::{to_rgb565, RegionBuffer};
use crate::glyph::{Glyph, GLYPH_HEIGHT};
use crate::text::{self, draw_text, text_width, Anchor};

pub use bottom::bottom_text;
pub use middle::{format_uptime, graph_points, split_keystrokes, GraphArea};
pub use top::{battery_fill_width, battery_text};

/// Canvas side length in pixels
pub(crate) const SIDE: u32 = RegionBuffer::SIZE as u32;

/// Everything a painter reads
#[derive(Debug, Clone, Copy)]
pub struct RenderInput<'a> {
    pub state: &'a WidgetState,
    pub config: &'a WidgetConfig,
    /// Milliseconds since boot, read once per redraw
    pub uptime_ms: u64,
}

impl<'a> RenderInput<'a> {
    pub fn new(state: &'a WidgetState, config: &'a WidgetConfig, uptime_ms: u64) -> Self {
        Self {
            state,
            config,
            uptime_ms,
        }
    }

    /// Ink colour
    pub fn fg(&self) -> Rgb565 {
        to_rgb565(self.config.palette.foreground)
    }

    /// Paper colour
    pub fn bg(&self) -> Rgb565 {
        to_rgb565(self.config.palette.background)
    }
}

/// Draw one region with the painter its configuration selects
pub fn render_region<D>(region: Region, input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.clear(input.bg())?;
    match region {
        Region::Top => top::render(input.config.top, input, target),
        Region::Middle => middle::render(input.config.middle, input, target),
        Region::Bottom => bottom::render(input, target),
    }
}

/// Glyph and text making up a link indicator
fn link_parts(status: LinkStatus) -> (Option<Glyph>, heapless::String<4>) {
    match status {
        LinkStatus::Usb => (None, text::format(format_args!("USB"))),
        LinkStatus::Connected { number } => {
            (Some(Glyph::Bluetooth), text::format(format_args!("{}", number)))
        }
        LinkStatus::Disconnected { number } => {
            (Some(Glyph::Close), text::format(format_args!("{}", number)))
        }
        LinkStatus::Pairing => (Some(Glyph::Pairing), heapless::String::new()),
    }
}

/// Draw a link indicator; `y` is the top row of the glyph cell
pub(crate) fn draw_link<D>(
    target: &mut D,
    status: LinkStatus,
    anchor: Anchor,
    y: i32,
    font: &MonoFont<'_>,
    color: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let (glyph, label) = link_parts(status);
    let gap = if glyph.is_some() && !label.is_empty() { 2 } else { 0 };
    let glyph_width = glyph.map_or(0, Glyph::width);
    let width = glyph_width + gap + text_width(font, &label);

    let mut x = anchor.left_edge(width);
    if let Some(glyph) = glyph {
        glyph.draw(target, Point::new(x, y), color)?;
        x += (glyph_width + gap) as i32;
    }
    if !label.is_empty() {
        let text_y = y + (GLYPH_HEIGHT as i32 - font.character_size.height as i32) / 2;
        draw_text(target, &label, Anchor::Left(x), text_y, font, color)?;
    }
    Ok(())
}

/// Geometry of a modifier row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ModifierRow {
    pub box_width: u32,
    pub box_height: u32,
    pub gap: u32,
    pub y: i32,
}

impl ModifierRow {
    /// Left edge of the first box when the row is centred on the canvas
    pub fn start_x(&self) -> i32 {
        let total = 4 * self.box_width + 3 * self.gap;
        (SIDE as i32 - total as i32) / 2
    }
}

/// Four boxes in ctrl, alt, gui, shift order; held ones inverted
pub(crate) fn draw_modifier_row<D>(
    target: &mut D,
    held: Modifiers,
    row: ModifierRow,
    font: &MonoFont<'_>,
    fg: Rgb565,
    bg: Rgb565,
) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let mut x = row.start_x();
    let text_y = row.y + (row.box_height as i32 - font.character_size.height as i32) / 2;
    for (flag, letter) in Modifiers::DISPLAY_ORDER {
        let centre = x + row.box_width as i32 / 2;
        if held.contains(flag) {
            Rectangle::new(Point::new(x, row.y), Size::new(row.box_width, row.box_height))
                .into_styled(PrimitiveStyle::with_fill(fg))
                .draw(target)?;
            draw_text(target, letter, Anchor::Center(centre), text_y, font, bg)?;
        } else {
            draw_text(target, letter, Anchor::Center(centre), text_y, font, fg)?;
        }
        x += (row.box_width + row.gap) as i32;
    }
    Ok(())
}

/// Horizontal rules on the first and last row
pub(crate) fn draw_borders<D>(target: &mut D, color: Rgb565) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    target.fill_solid(&Rectangle::new(Point::zero(), Size::new(SIDE, 1)), color)?;
    target.fill_solid(
        &Rectangle::new(Point::new(0, SIDE as i32 - 1), Size::new(SIDE, 1)),
        color,
    )?;
    Ok(())
}
