//! Bottom region painters

use embedded_graphics::{pixelcolor::Rgb565, prelude::*};
use sidelight_core::config::{BottomVariant, Label, WidgetConfig};
use sidelight_core::state::WidgetState;

use super::RenderInput;
use crate::text::{draw_text, Anchor, LARGE};

/// Text the bottom region shows
pub fn bottom_text(state: &WidgetState, config: &WidgetConfig) -> Label {
    match &config.bottom {
        BottomVariant::Layer => state.layer.text(&config.layer_names),
        BottomVariant::RoleName(name) => name.clone(),
    }
}

pub(crate) fn render<D>(input: &RenderInput<'_>, target: &mut D) -> Result<(), D::Error>
where
    D: DrawTarget<Color = Rgb565>,
{
    let text = bottom_text(input.state, input.config);
    draw_text(target, &text, Anchor::Center(34), 24, LARGE, input.fg())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidelight_core::config::label;
    use sidelight_core::state::LayerInfo;

    #[test]
    fn test_layer_fallback_names() {
        let config = WidgetConfig::default();
        let mut state = WidgetState::new();
        state.layer = LayerInfo::new(0, Some(label("")));
        assert_eq!(bottom_text(&state, &config).as_str(), "BASE");

        state.layer = LayerInfo::new(2, None);
        assert_eq!(bottom_text(&state, &config).as_str(), "RAISE");

        state.layer = LayerInfo::new(4, None);
        assert_eq!(bottom_text(&state, &config).as_str(), "L4");
    }

    #[test]
    fn test_layer_label_wins() {
        let config = WidgetConfig::default();
        let mut state = WidgetState::new();
        state.layer = LayerInfo::new(1, Some(label("NAV")));
        assert_eq!(bottom_text(&state, &config).as_str(), "NAV");
    }

    #[test]
    fn test_role_name_ignores_layer() {
        let config = WidgetConfig::peripheral();
        let mut state = WidgetState::new();
        state.layer = LayerInfo::new(1, Some(label("NAV")));
        assert_eq!(bottom_text(&state, &config).as_str(), "RIGHT");
    }
}
