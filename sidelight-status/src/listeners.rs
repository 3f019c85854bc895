//! Notification listeners
//!
//! A listener turns one notification into at most one `StateUpdate`. The
//! context applies that update to every registered instance, so anything
//! derived from the notification is computed once.

use sidelight_core::events::{Notification, NotificationKind};
use sidelight_core::history::{KeystrokeBuffer, TypingSpeedHistory};
use sidelight_core::keycode;
use sidelight_core::modifiers::{ModifierTracker, Modifiers};
use sidelight_core::state::{LayerInfo, StateUpdate};
use sidelight_core::traits::StatusSource;

/// Keyboard-wide input state
///
/// One copy per context. Widgets registered late start from these rather
/// than from empty histories.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    pub tracker: ModifierTracker,
    pub keystrokes: KeystrokeBuffer,
    pub typing_speed: TypingSpeedHistory,
}

impl InputState {
    pub const fn new() -> Self {
        Self {
            tracker: ModifierTracker::new(),
            keystrokes: KeystrokeBuffer::new(),
            typing_speed: TypingSpeedHistory::new(),
        }
    }

    /// Seed from the state providers before the first widget exists
    pub fn seed<P: StatusSource + ?Sized>(&mut self, source: &P) {
        self.tracker.seed(source.explicit_modifiers());
        self.typing_speed.push(source.typing_speed());
    }

    /// Modifiers currently held
    pub fn modifiers(&self) -> Modifiers {
        self.tracker.flags()
    }
}

/// Notification handler
pub trait Listener: Sync {
    /// Translate a notification; `None` when it carries nothing to apply
    fn handle(&self, notification: &Notification, input: &mut InputState) -> Option<StateUpdate>;
}

/// Battery level and USB power
pub struct BatteryListener;

impl Listener for BatteryListener {
    fn handle(&self, notification: &Notification, _input: &mut InputState) -> Option<StateUpdate> {
        match notification {
            Notification::BatteryChanged {
                percent,
                usb_powered,
            } => Some(StateUpdate::Battery {
                percent: (*percent).min(100),
                charging: *usb_powered,
            }),
            _ => None,
        }
    }
}

/// Transport and profile changes
pub struct LinkListener;

impl Listener for LinkListener {
    fn handle(&self, notification: &Notification, _input: &mut InputState) -> Option<StateUpdate> {
        match notification {
            Notification::LinkChanged(link) => Some(StateUpdate::Link(*link)),
            _ => None,
        }
    }
}

/// Highest active layer
pub struct LayerListener;

impl Listener for LayerListener {
    fn handle(&self, notification: &Notification, _input: &mut InputState) -> Option<StateUpdate> {
        match notification {
            Notification::LayerChanged { index, label } => {
                Some(StateUpdate::Layer(LayerInfo::new(*index, label.clone())))
            }
            _ => None,
        }
    }
}

/// Key presses and releases
///
/// Every event updates the held modifiers. Only a press of a printable key
/// produces a character, decoded against the modifiers after the update.
pub struct KeyStateListener;

impl Listener for KeyStateListener {
    fn handle(&self, notification: &Notification, input: &mut InputState) -> Option<StateUpdate> {
        match notification {
            Notification::KeyStateChanged { keycode, pressed } => {
                input.tracker.update(*keycode, *pressed);
                let typed = if *pressed {
                    keycode::decode(*keycode, input.tracker.shifted())
                } else {
                    None
                };
                if let Some(c) = typed {
                    input.keystrokes.push(c);
                }
                Some(StateUpdate::Key {
                    modifiers: input.tracker.flags(),
                    typed,
                })
            }
            _ => None,
        }
    }
}

/// Words-per-minute samples
pub struct TypingSpeedListener;

impl Listener for TypingSpeedListener {
    fn handle(&self, notification: &Notification, input: &mut InputState) -> Option<StateUpdate> {
        match notification {
            Notification::TypingSpeedChanged { wpm } => {
                input.typing_speed.push(*wpm);
                Some(StateUpdate::TypingSpeed(*wpm))
            }
            _ => None,
        }
    }
}

/// Link to the other half of a split keyboard
pub struct PeerLinkListener;

impl Listener for PeerLinkListener {
    fn handle(&self, notification: &Notification, _input: &mut InputState) -> Option<StateUpdate> {
        match notification {
            Notification::PeerLinkChanged { connected } => Some(StateUpdate::PeerLink(*connected)),
            _ => None,
        }
    }
}

pub static BATTERY: BatteryListener = BatteryListener;
pub static LINK: LinkListener = LinkListener;
pub static LAYER: LayerListener = LayerListener;
pub static KEY_STATE: KeyStateListener = KeyStateListener;
pub static TYPING_SPEED: TypingSpeedListener = TypingSpeedListener;
pub static PEER_LINK: PeerLinkListener = PeerLinkListener;

/// Stock listener for each notification kind
pub fn default_listener(kind: NotificationKind) -> &'static dyn Listener {
    match kind {
        NotificationKind::Battery => &BATTERY,
        NotificationKind::Link => &LINK,
        NotificationKind::Layer => &LAYER,
        NotificationKind::KeyState => &KEY_STATE,
        NotificationKind::TypingSpeed => &TYPING_SPEED,
        NotificationKind::PeerLink => &PEER_LINK,
    }
}
