//! End-to-end dispatch through `StatusContext`

use embedded_graphics::{pixelcolor::Rgb565, prelude::RgbColor};
use sidelight_core::config::{MiddleVariant, Offset, Region, WidgetConfig};
use sidelight_core::events::Notification;
use sidelight_core::history::GraphScale;
use sidelight_core::keycode::usage;
use sidelight_core::state::{Changes, LinkInfo, LinkStatus};
use sidelight_core::traits::{FixedClock, StaticSource};
use sidelight_display::renderers::{battery_text, bottom_text};
use sidelight_display::{
    render_region, Compositor, DisplayError, DisplaySurface, PanelFrame, RegionBuffer, RenderInput,
};
use sidelight_status::StatusContext;

/// Surface that remembers what it was given
#[derive(Default)]
struct Recorder {
    presents: Vec<Region>,
    frame: PanelFrame,
}

impl Recorder {
    fn count(&self, region: Region) -> usize {
        self.presents.iter().filter(|&&r| r == region).count()
    }
}

impl DisplaySurface for Recorder {
    fn present(&mut self, region: Region, offset: Offset, pixels: &RegionBuffer) -> Result<(), DisplayError> {
        self.presents.push(region);
        self.frame.present(region, offset, pixels)
    }
}

type Context = StatusContext<Recorder, FixedClock, 2>;

fn context_with(configs: &[WidgetConfig]) -> Context {
    let mut context = Context::with_default_listeners(FixedClock(0));
    for config in configs {
        context
            .register(Recorder::default(), config.clone(), &StaticSource::default())
            .unwrap();
    }
    context
}

/// What a region should hold for an instance's current state
fn expected(context: &Context, index: usize, region: Region) -> RegionBuffer {
    let widget = context.instance(index).unwrap();
    let input = RenderInput::new(widget.state(), widget.config(), context.clock().0);
    let mut buffer = RegionBuffer::default();
    render_region(region, &input, &mut buffer).unwrap_or_else(|never| match never {});
    Compositor::new().compose(&mut buffer, input.bg());
    buffer
}

#[test]
fn test_battery_redraws_only_top() {
    let mut context = context_with(&[WidgetConfig::default(), WidgetConfig::dashboard()]);
    let middles: Vec<RegionBuffer> = context
        .instances()
        .map(|w| w.buffer(Region::Middle).clone())
        .collect();
    let bottoms: Vec<RegionBuffer> = context
        .instances()
        .map(|w| w.buffer(Region::Bottom).clone())
        .collect();

    let changes = context.on_notification(&Notification::battery(41));
    assert_eq!(changes, Changes::BATTERY);

    for (i, widget) in context.instances().enumerate() {
        let surface = widget.surface();
        // Three from registration, one from the battery update
        assert_eq!(surface.count(Region::Top), 2);
        assert_eq!(surface.count(Region::Middle), 1);
        assert_eq!(surface.count(Region::Bottom), 1);
        assert_eq!(surface.presents.len(), 4);
        assert_eq!(widget.buffer(Region::Middle), &middles[i]);
        assert_eq!(widget.buffer(Region::Bottom), &bottoms[i]);
    }
}

#[test]
fn test_key_release_never_types() {
    let mut context = context_with(&[WidgetConfig::default()]);
    context.on_notification(&Notification::key(usage::A, false));
    context.on_notification(&Notification::key(usage::N9, false));

    let widget = context.instance(0).unwrap();
    assert!(widget.state().keystrokes.is_empty());
    // Releases still refresh the modifier row, never the keystroke region
    assert_eq!(widget.surface().count(Region::Middle), 1);
    assert_eq!(widget.surface().count(Region::Top), 3);
}

#[test]
fn test_battery_layer_and_key_scenario() {
    let mut context = context_with(&[WidgetConfig::default()]);
    context.on_notification(&Notification::battery(72));
    context.on_notification(&Notification::layer(0, Some("")));
    context.on_notification(&Notification::key(usage::A, true));
    context.on_notification(&Notification::key(usage::A, false));

    let widget = context.instance(0).unwrap();
    let state = widget.state();
    assert_eq!(battery_text(state.battery).as_str(), "72%");
    assert_eq!(bottom_text(state, widget.config()).as_str(), "BASE");
    assert_eq!(state.keystrokes.text::<12>().as_str(), "a");

    for region in Region::ALL {
        assert_eq!(widget.buffer(region), &expected(&context, 0, region));
    }
}

#[test]
fn test_typing_speed_scenario() {
    let config = WidgetConfig::dashboard();
    let mut context = context_with(&[config]);
    let values: Vec<u8> = (0..10).map(|i| if i % 2 == 0 { 10 } else { 20 }).collect();
    for &wpm in &values {
        let changes = context.on_notification(&Notification::TypingSpeedChanged { wpm });
        assert_eq!(changes, Changes::TYPING_SPEED);
    }

    let widget = context.instance(0).unwrap();
    let samples = widget.state().typing_speed.samples();
    assert_eq!(&samples[..], &values[..]);

    let scale = GraphScale::from_samples(samples);
    assert_eq!((scale.min, scale.max, scale.range), (10, 20, 10));

    // Registration plus one redraw per sample
    assert_eq!(widget.surface().count(Region::Middle), 11);
    assert_eq!(widget.surface().count(Region::Top), 1);
    assert_eq!(widget.buffer(Region::Middle), &expected(&context, 0, Region::Middle));
}

#[test]
fn test_instances_stay_in_sync() {
    let mut context = context_with(&[WidgetConfig::default(), WidgetConfig::central()]);
    context.on_notification(&Notification::LinkChanged(LinkInfo::wireless(1, true, true)));
    context.on_notification(&Notification::key(usage::LEFT_SHIFT, true));
    context.on_notification(&Notification::key(usage::A + 1, true));

    let a = context.instance(0).unwrap().state();
    let b = context.instance(1).unwrap().state();
    assert_eq!(a, b);
    assert_eq!(a.link_status(), LinkStatus::Connected { number: 2 });
    assert_eq!(a.keystrokes.text::<12>().as_str(), "B");
}

#[test]
fn test_role_name_drawn_once() {
    let mut context = context_with(&[WidgetConfig::peripheral()]);
    context.on_notification(&Notification::layer(2, Some("NAV")));
    context.on_notification(&Notification::PeerLinkChanged { connected: true });

    let widget = context.instance(0).unwrap();
    assert_eq!(widget.surface().count(Region::Bottom), 1);
    assert_eq!(widget.surface().count(Region::Top), 2);
    assert_eq!(widget.state().peer_connected, Some(true));
}

#[test]
fn test_tick_refreshes_uptime_only() {
    let config = WidgetConfig {
        middle: MiddleVariant::Uptime,
        ..WidgetConfig::default()
    };
    let mut context = context_with(&[config]);
    let before = context.instance(0).unwrap().buffer(Region::Middle).clone();

    context.clock_mut().0 = 3_723_000;
    assert_eq!(context.on_tick(), Changes::UPTIME);

    let widget = context.instance(0).unwrap();
    assert_eq!(widget.surface().count(Region::Middle), 2);
    assert_eq!(widget.surface().count(Region::Top), 1);
    assert_ne!(widget.buffer(Region::Middle), &before);
    assert_eq!(widget.buffer(Region::Middle), &expected(&context, 0, Region::Middle));
}

#[test]
fn test_panel_shows_rotated_regions() {
    let context = context_with(&[WidgetConfig::default()]);
    let widget = context.instance(0).unwrap();
    let frame = &widget.surface().frame;
    let layout = widget.config().layout;

    // Every visible panel pixel of the top region matches its buffer
    let top = widget.buffer(Region::Top);
    for y in 0..68usize {
        for x in 0..68usize {
            let px = layout.top.x as usize + x;
            assert_eq!(frame.pixel(px, y), top.pixel(x, y));
        }
    }
    // The keystroke border rows become the outer columns after the turn
    let middle = widget.buffer(Region::Middle);
    assert!((0..68).all(|y| middle.pixel(0, y) == Some(Rgb565::BLACK)));
    assert!((0..68).all(|y| middle.pixel(67, y) == Some(Rgb565::BLACK)));
}

#[test]
fn test_late_registration_catches_up() {
    let mut context = context_with(&[WidgetConfig::default()]);
    context.on_notification(&Notification::key(usage::A, true));
    context.on_notification(&Notification::TypingSpeedChanged { wpm: 50 });

    context
        .register(Recorder::default(), WidgetConfig::dashboard(), &StaticSource::default())
        .unwrap();
    context.on_notification(&Notification::key(usage::A + 1, true));

    let a = context.instance(0).unwrap().state();
    let b = context.instance(1).unwrap().state();
    assert_eq!(a, b);
    assert_eq!(b.keystrokes.text::<12>().as_str(), "ab");
    assert_eq!(b.typing_speed.samples()[9], 50);

    // The late widget's graph is drawn from the shared history
    assert_eq!(
        context.instance(1).unwrap().buffer(Region::Middle),
        &expected(&context, 1, Region::Middle)
    );
}
