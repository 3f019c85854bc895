//! Widget instance
//!
//! One physical display: its configuration, its private state copy and the
//! three region buffers it draws into.

use heapless::Vec;
use sidelight_core::config::{Region, WidgetConfig};
use sidelight_core::state::{Changes, StateUpdate, WidgetState};
use sidelight_core::traits::StatusSource;
use sidelight_display::{
    render_region, Compositor, DisplayError, DisplaySurface, RegionBuffer, RenderInput,
};

use crate::listeners::InputState;

/// A registered status widget
pub struct WidgetInstance<S> {
    surface: S,
    config: WidgetConfig,
    state: WidgetState,
    buffers: [RegionBuffer; 3],
}

impl<S: DisplaySurface> WidgetInstance<S> {
    /// Create an instance seeded from the keyboard's state providers
    ///
    /// Nothing is drawn until [`redraw_all`](Self::redraw_all).
    pub fn new<P: StatusSource + ?Sized>(surface: S, config: WidgetConfig, source: &P) -> Self {
        Self {
            surface,
            config,
            state: WidgetState::from_source(source),
            buffers: [
                RegionBuffer::default(),
                RegionBuffer::default(),
                RegionBuffer::default(),
            ],
        }
    }

    /// Take over the keyboard-wide histories and held modifiers
    pub fn adopt_input(&mut self, input: &InputState) {
        self.state.keystrokes = input.keystrokes.clone();
        self.state.typing_speed = input.typing_speed;
        self.state.modifiers = input.modifiers();
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Last composed pixels of a region
    pub fn buffer(&self, region: Region) -> &RegionBuffer {
        &self.buffers[region.index()]
    }

    /// Apply an update, then redraw the regions whose inputs it touched
    pub fn apply(&mut self, update: &StateUpdate, compositor: &mut Compositor, uptime_ms: u64) -> Changes {
        let changes = self.state.apply(update);
        let regions: Vec<Region, 3> = self.config.affected(changes).collect();
        for region in regions {
            self.redraw(region, compositor, uptime_ms);
        }
        changes
    }

    /// Render, rotate and present one region
    ///
    /// A failed present, or a surface that is not ready yet, leaves the
    /// buffer composed; the next redraw of the region presents again.
    pub fn redraw(&mut self, region: Region, compositor: &mut Compositor, uptime_ms: u64) {
        let input = RenderInput::new(&self.state, &self.config, uptime_ms);
        let buffer = &mut self.buffers[region.index()];
        render_region(region, &input, buffer).unwrap_or_else(|never| match never {});
        compositor.compose(buffer, input.bg());

        trace!("redraw {}", region);
        let presented = if self.surface.is_ready() {
            self.surface
                .present(region, self.config.layout.offset(region), buffer)
        } else {
            Err(DisplayError::NotInitialized)
        };
        if let Err(e) = presented {
            warn!("present {} failed: {}", region, e);
        }
    }

    /// Draw every region
    pub fn redraw_all(&mut self, compositor: &mut Compositor, uptime_ms: u64) {
        for region in Region::ALL {
            self.redraw(region, compositor, uptime_ms);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidelight_core::config::{MiddleVariant, Offset};
    use sidelight_core::keycode::usage;
    use sidelight_core::modifiers::Modifiers;
    use sidelight_core::traits::StaticSource;

    #[derive(Default)]
    struct Log {
        presented: std::vec::Vec<Region>,
        fail: bool,
        asleep: bool,
    }

    impl DisplaySurface for Log {
        fn present(&mut self, region: Region, _offset: Offset, _pixels: &RegionBuffer) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.presented.push(region);
            Ok(())
        }

        fn is_ready(&self) -> bool {
            !self.asleep
        }
    }

    fn instance(config: WidgetConfig) -> WidgetInstance<Log> {
        WidgetInstance::new(Log::default(), config, &StaticSource::default())
    }

    #[test]
    fn test_nothing_drawn_until_asked() {
        let widget = instance(WidgetConfig::default());
        assert!(widget.surface().presented.is_empty());
    }

    #[test]
    fn test_redraw_all_order() {
        let mut widget = instance(WidgetConfig::default());
        widget.redraw_all(&mut Compositor::new(), 0);
        assert_eq!(widget.surface().presented, [Region::Top, Region::Middle, Region::Bottom]);
    }

    #[test]
    fn test_apply_redraws_affected_only() {
        let mut widget = instance(WidgetConfig::default());
        let mut compositor = Compositor::new();

        let changes = widget.apply(&StateUpdate::TypingSpeed(30), &mut compositor, 0);
        assert_eq!(changes, Changes::TYPING_SPEED);
        assert!(widget.surface().presented.is_empty());

        widget.apply(&StateUpdate::Uptime, &mut compositor, 0);
        assert!(widget.surface().presented.is_empty());

        let config = WidgetConfig {
            middle: MiddleVariant::Uptime,
            ..WidgetConfig::default()
        };
        let mut uptime = instance(config);
        uptime.apply(&StateUpdate::Uptime, &mut compositor, 5_000);
        assert_eq!(uptime.surface().presented, [Region::Middle]);
    }

    #[test]
    fn test_present_failure_keeps_state() {
        let mut widget = instance(WidgetConfig::default());
        widget.surface_mut().fail = true;
        let before = widget.buffer(Region::Top).clone();

        widget.apply(
            &StateUpdate::Battery {
                percent: 12,
                charging: None,
            },
            &mut Compositor::new(),
            0,
        );
        assert_eq!(widget.state().battery, 12);
        assert_ne!(widget.buffer(Region::Top), &before);
        assert!(widget.surface().presented.is_empty());
    }

    #[test]
    fn test_not_ready_surface_skipped() {
        let mut widget = instance(WidgetConfig::default());
        widget.surface_mut().asleep = true;
        widget.redraw_all(&mut Compositor::new(), 0);
        assert!(widget.surface().presented.is_empty());
        assert_ne!(widget.buffer(Region::Top), &RegionBuffer::default());

        widget.surface_mut().asleep = false;
        widget.redraw(Region::Bottom, &mut Compositor::new(), 0);
        assert_eq!(widget.surface().presented, [Region::Bottom]);
    }

    #[test]
    fn test_adopt_input() {
        let mut input = InputState::new();
        input.tracker.update(usage::LEFT_CTRL, true);
        input.keystrokes.push('q');
        input.typing_speed.push(44);

        let mut widget = instance(WidgetConfig::default());
        widget.adopt_input(&input);
        assert_eq!(widget.state().keystrokes, input.keystrokes);
        assert_eq!(widget.state().typing_speed.latest(), 44);
        assert_eq!(widget.state().modifiers, Modifiers::CTRL);
    }
}
