//! Keyboard state-change notifications
//!
//! One typed notification per state provider. The dispatcher routes each
//! one by its [`NotificationKind`].

use crate::config::Label;
use crate::state::LinkInfo;

/// State-change notification delivered by the keyboard firmware
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Notification {
    /// Fuel gauge reading changed
    BatteryChanged {
        /// Charge in percent, already clamped to 0-100 by the gauge
        percent: u8,
        /// USB power present; `None` on boards without USB sensing
        usb_powered: Option<bool>,
    },
    /// Active transport or wireless profile changed
    LinkChanged(LinkInfo),
    /// Highest active layer changed
    LayerChanged {
        index: u8,
        /// Keymap label for the layer, if any
        label: Option<Label>,
    },
    /// A key was pressed or released
    KeyStateChanged {
        /// HID keyboard usage ID
        keycode: u32,
        pressed: bool,
    },
    /// New typing-speed sample
    TypingSpeedChanged { wpm: u8 },
    /// Link between split halves changed
    PeerLinkChanged { connected: bool },
}

/// Notification discriminant used for subscriptions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotificationKind {
    Battery,
    Link,
    Layer,
    KeyState,
    TypingSpeed,
    PeerLink,
}

impl NotificationKind {
    /// Every notification kind
    pub const ALL: [NotificationKind; 6] = [
        NotificationKind::Battery,
        NotificationKind::Link,
        NotificationKind::Layer,
        NotificationKind::KeyState,
        NotificationKind::TypingSpeed,
        NotificationKind::PeerLink,
    ];
}

impl Notification {
    /// Kind of this notification
    pub fn kind(&self) -> NotificationKind {
        match self {
            Notification::BatteryChanged { .. } => NotificationKind::Battery,
            Notification::LinkChanged(_) => NotificationKind::Link,
            Notification::LayerChanged { .. } => NotificationKind::Layer,
            Notification::KeyStateChanged { .. } => NotificationKind::KeyState,
            Notification::TypingSpeedChanged { .. } => NotificationKind::TypingSpeed,
            Notification::PeerLinkChanged { .. } => NotificationKind::PeerLink,
        }
    }

    /// Check if this notification comes from key activity
    pub fn is_input_event(&self) -> bool {
        matches!(
            self,
            Notification::KeyStateChanged { .. } | Notification::TypingSpeedChanged { .. }
        )
    }

    /// Shorthand for a battery reading without USB sensing
    pub fn battery(percent: u8) -> Self {
        Notification::BatteryChanged {
            percent,
            usb_powered: None,
        }
    }

    /// Shorthand for a key press/release
    pub fn key(keycode: u32, pressed: bool) -> Self {
        Notification::KeyStateChanged { keycode, pressed }
    }

    /// Shorthand for a layer change with an optional label
    pub fn layer(index: u8, label: Option<&str>) -> Self {
        Notification::LayerChanged {
            index,
            label: label.map(crate::config::label),
        }
    }
}
