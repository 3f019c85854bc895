//! State provider queries
//!
//! Pulled at widget initialization. Queries are assumed to always succeed;
//! there is no timeout or retry around them.

use crate::config::Label;
use crate::modifiers::Modifiers;
use crate::state::{LayerInfo, LinkInfo};

/// Read access to the keyboard's current state
pub trait StatusSource {
    /// Battery charge in percent (0-100)
    fn battery_percent(&self) -> u8;

    /// USB power present
    fn usb_powered(&self) -> bool;

    /// Selected transport and active profile flags
    fn link(&self) -> LinkInfo;

    /// Highest active layer and its keymap label
    fn layer(&self) -> LayerInfo;

    /// Modifiers held in the current HID report
    fn explicit_modifiers(&self) -> Modifiers;

    /// Current typing speed (words per minute)
    fn typing_speed(&self) -> u8;

    /// Peer link state; `None` unless the device is a split central
    fn peer_connected(&self) -> Option<bool> {
        None
    }
}

/// Monotonic device clock
///
/// The only impure input to rendering (uptime readout).
pub trait Clock {
    /// Milliseconds since boot
    fn uptime_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn uptime_ms(&self) -> u64 {
        (**self).uptime_ms()
    }
}

/// Clock returning a fixed reading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn uptime_ms(&self) -> u64 {
        self.0
    }
}

/// Snapshot-backed source
///
/// Useful for boards that cache provider readings, and for tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticSource {
    pub battery: u8,
    pub usb_powered: bool,
    pub link: LinkInfo,
    pub layer_index: u8,
    pub layer_label: Option<Label>,
    pub modifiers: Modifiers,
    pub wpm: u8,
    pub peer_connected: Option<bool>,
}

impl StatusSource for StaticSource {
    fn battery_percent(&self) -> u8 {
        self.battery
    }

    fn usb_powered(&self) -> bool {
        self.usb_powered
    }

    fn link(&self) -> LinkInfo {
        self.link
    }

    fn layer(&self) -> LayerInfo {
        LayerInfo::new(self.layer_index, self.layer_label.clone())
    }

    fn explicit_modifiers(&self) -> Modifiers {
        self.modifiers
    }

    fn typing_speed(&self) -> u8 {
        self.wpm
    }

    fn peer_connected(&self) -> Option<bool> {
        self.peer_connected
    }
}
