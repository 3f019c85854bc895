//! Widget state
//!
//! The aggregated snapshot everything drawable is rendered from, and the
//! updates the dispatcher applies to it.

pub mod layer;
pub mod link;

pub use layer::{layer_text, LayerInfo};
pub use link::{LinkInfo, LinkStatus, Transport};

use crate::history::{KeystrokeBuffer, TypingSpeedHistory};
use crate::modifiers::Modifiers;
use crate::traits::StatusSource;

bitflags::bitflags! {
    /// Which parts of the state an update touched
    ///
    /// Region painters declare the same flags as their inputs; a region
    /// is redrawn only when the two intersect.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Changes: u16 {
        const BATTERY      = 1 << 0;
        const LINK         = 1 << 1;
        const LAYER        = 1 << 2;
        const MODIFIERS    = 1 << 3;
        const KEYSTROKES   = 1 << 4;
        const TYPING_SPEED = 1 << 5;
        const PEER_LINK    = 1 << 6;
        const UPTIME       = 1 << 7;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Changes {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Changes({=u16:#x})", self.bits());
    }
}

/// Mutation applied to every registered widget's state
///
/// Produced once per notification so that shared facts (held modifiers,
/// the decoded character) are computed a single time.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StateUpdate {
    Battery { percent: u8, charging: Option<bool> },
    Link(LinkInfo),
    Layer(LayerInfo),
    /// Key activity: the held modifiers after the event, and the character
    /// typed by a press, if any
    Key {
        modifiers: Modifiers,
        typed: Option<char>,
    },
    TypingSpeed(u8),
    PeerLink(bool),
    /// Clock advanced; nothing stored, clock-driven regions refresh
    Uptime,
}

/// Everything needed to draw one widget
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WidgetState {
    /// Charge in percent (0-100)
    pub battery: u8,
    /// USB power present
    pub charging: bool,
    pub link: LinkInfo,
    /// Link to the other half; `None` when the device is not a split central
    pub peer_connected: Option<bool>,
    pub layer: LayerInfo,
    pub keystrokes: KeystrokeBuffer,
    pub typing_speed: TypingSpeedHistory,
    pub modifiers: Modifiers,
}

impl WidgetState {
    /// Create an empty state
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a state by querying the keyboard's state providers
    pub fn from_source<S: StatusSource + ?Sized>(source: &S) -> Self {
        let mut state = Self {
            battery: source.battery_percent(),
            charging: source.usb_powered(),
            link: source.link(),
            peer_connected: source.peer_connected(),
            layer: source.layer(),
            modifiers: source.explicit_modifiers(),
            ..Self::default()
        };
        state.typing_speed.push(source.typing_speed());
        state
    }

    /// Apply an update and report what changed
    pub fn apply(&mut self, update: &StateUpdate) -> Changes {
        match update {
            StateUpdate::Battery { percent, charging } => {
                self.battery = *percent;
                if let Some(charging) = charging {
                    self.charging = *charging;
                }
                Changes::BATTERY
            }
            StateUpdate::Link(link) => {
                self.link = *link;
                Changes::LINK
            }
            StateUpdate::Layer(layer) => {
                self.layer = layer.clone();
                Changes::LAYER
            }
            StateUpdate::Key { modifiers, typed } => {
                self.modifiers = *modifiers;
                match typed {
                    Some(c) => {
                        self.keystrokes.push(*c);
                        Changes::MODIFIERS | Changes::KEYSTROKES
                    }
                    None => Changes::MODIFIERS,
                }
            }
            StateUpdate::TypingSpeed(wpm) => {
                self.typing_speed.push(*wpm);
                Changes::TYPING_SPEED
            }
            StateUpdate::PeerLink(connected) => {
                self.peer_connected = Some(*connected);
                Changes::PEER_LINK
            }
            StateUpdate::Uptime => Changes::UPTIME,
        }
    }

    /// Link indicator for the current link
    pub fn link_status(&self) -> LinkStatus {
        LinkStatus::from_link(&self.link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::label;

    #[test]
    fn test_battery_update() {
        let mut state = WidgetState::new();
        let changes = state.apply(&StateUpdate::Battery {
            percent: 72,
            charging: None,
        });
        assert_eq!(changes, Changes::BATTERY);
        assert_eq!(state.battery, 72);
        assert!(!state.charging);

        state.apply(&StateUpdate::Battery {
            percent: 73,
            charging: Some(true),
        });
        assert!(state.charging);

        // Missing USB sensing keeps the last known flag
        state.apply(&StateUpdate::Battery {
            percent: 74,
            charging: None,
        });
        assert!(state.charging);
    }

    #[test]
    fn test_key_update() {
        let mut state = WidgetState::new();
        let changes = state.apply(&StateUpdate::Key {
            modifiers: Modifiers::SHIFT,
            typed: None,
        });
        assert_eq!(changes, Changes::MODIFIERS);
        assert!(state.keystrokes.is_empty());

        let changes = state.apply(&StateUpdate::Key {
            modifiers: Modifiers::SHIFT,
            typed: Some('A'),
        });
        assert_eq!(changes, Changes::MODIFIERS | Changes::KEYSTROKES);
        assert_eq!(state.keystrokes.text::<12>().as_str(), "A");
    }

    #[test]
    fn test_layer_and_link_updates() {
        let mut state = WidgetState::new();
        let layer = LayerInfo::new(1, Some(label("NAV")));
        assert_eq!(state.apply(&StateUpdate::Layer(layer.clone())), Changes::LAYER);
        assert_eq!(state.layer, layer);

        let link = LinkInfo::wireless(1, true, false);
        assert_eq!(state.apply(&StateUpdate::Link(link)), Changes::LINK);
        assert_eq!(state.link_status(), LinkStatus::Disconnected { number: 2 });
    }

    #[test]
    fn test_peer_and_uptime() {
        let mut state = WidgetState::new();
        assert_eq!(state.peer_connected, None);
        assert_eq!(state.apply(&StateUpdate::PeerLink(true)), Changes::PEER_LINK);
        assert_eq!(state.peer_connected, Some(true));

        let before = state.clone();
        assert_eq!(state.apply(&StateUpdate::Uptime), Changes::UPTIME);
        assert_eq!(state, before);
    }

    #[test]
    fn test_typing_speed_update() {
        let mut state = WidgetState::new();
        assert_eq!(state.apply(&StateUpdate::TypingSpeed(55)), Changes::TYPING_SPEED);
        assert_eq!(state.typing_speed.latest(), 55);
        assert_eq!(&state.typing_speed.samples()[..9], &[0; 9]);
    }
}
