//! Held-modifier tracking
//!
//! Left and right physical keys of the same modifier fold into one flag.
//! The flag follows the most recent press/release of either key.

use crate::keycode::usage;

bitflags::bitflags! {
    /// Currently held keyboard modifiers
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Modifiers: u8 {
        const CTRL  = 1 << 0;
        const ALT   = 1 << 1;
        const GUI   = 1 << 2;
        const SHIFT = 1 << 3;
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Modifiers {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "Modifiers({=u8:#06b})", self.bits());
    }
}

impl Modifiers {
    /// Display order of the modifier row: ctrl, alt, gui, shift
    pub const DISPLAY_ORDER: [(Modifiers, &'static str); 4] = [
        (Modifiers::CTRL, "C"),
        (Modifiers::ALT, "A"),
        (Modifiers::GUI, "G"),
        (Modifiers::SHIFT, "S"),
    ];

    /// Map a keycode to the modifier it controls, if any
    pub fn from_keycode(keycode: u32) -> Option<Self> {
        match keycode {
            usage::LEFT_CTRL | usage::RIGHT_CTRL => Some(Modifiers::CTRL),
            usage::LEFT_ALT | usage::RIGHT_ALT => Some(Modifiers::ALT),
            usage::LEFT_GUI | usage::RIGHT_GUI => Some(Modifiers::GUI),
            usage::LEFT_SHIFT | usage::RIGHT_SHIFT => Some(Modifiers::SHIFT),
            _ => None,
        }
    }

    /// Whether shifted characters should be produced
    pub fn shifted(&self) -> bool {
        self.contains(Modifiers::SHIFT)
    }
}

/// Modifier state machine
///
/// Continuously live; there is no terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ModifierTracker {
    held: Modifiers,
}

impl ModifierTracker {
    /// Create a tracker with nothing held
    pub const fn new() -> Self {
        Self {
            held: Modifiers::empty(),
        }
    }

    /// Replace the held set with flags queried from the HID report
    pub fn seed(&mut self, explicit: Modifiers) {
        self.held = explicit;
    }

    /// Apply a key press/release
    ///
    /// Returns true if the keycode was a modifier. Other keys leave the
    /// tracker untouched.
    pub fn update(&mut self, keycode: u32, pressed: bool) -> bool {
        match Modifiers::from_keycode(keycode) {
            Some(modifier) => {
                self.held.set(modifier, pressed);
                true
            }
            None => false,
        }
    }

    /// Currently held modifiers
    pub fn flags(&self) -> Modifiers {
        self.held
    }

    /// Whether shift is held
    pub fn shifted(&self) -> bool {
        self.held.shifted()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_and_release() {
        let mut tracker = ModifierTracker::new();
        assert!(tracker.update(usage::LEFT_CTRL, true));
        assert_eq!(tracker.flags(), Modifiers::CTRL);

        assert!(tracker.update(usage::LEFT_CTRL, false));
        assert!(tracker.flags().is_empty());
    }

    #[test]
    fn test_left_and_right_fold() {
        let mut tracker = ModifierTracker::new();
        tracker.update(usage::LEFT_SHIFT, true);
        assert!(tracker.shifted());

        // Most recent event for either physical key wins
        tracker.update(usage::RIGHT_SHIFT, false);
        assert!(!tracker.shifted());

        tracker.update(usage::RIGHT_GUI, true);
        tracker.update(usage::RIGHT_ALT, true);
        assert_eq!(tracker.flags(), Modifiers::GUI | Modifiers::ALT);
    }

    #[test]
    fn test_non_modifier_ignored() {
        let mut tracker = ModifierTracker::new();
        tracker.update(usage::LEFT_ALT, true);

        assert!(!tracker.update(usage::A, true));
        assert!(!tracker.update(usage::ENTER, false));
        assert_eq!(tracker.flags(), Modifiers::ALT);
    }

    #[test]
    fn test_seed() {
        let mut tracker = ModifierTracker::new();
        tracker.seed(Modifiers::CTRL | Modifiers::SHIFT);
        assert!(tracker.shifted());

        tracker.update(usage::RIGHT_CTRL, false);
        assert_eq!(tracker.flags(), Modifiers::SHIFT);
    }

    #[test]
    fn test_display_order() {
        let labels: heapless::Vec<&str, 4> = Modifiers::DISPLAY_ORDER
            .iter()
            .map(|(_, label)| *label)
            .collect();
        assert_eq!(labels.as_slice(), &["C", "A", "G", "S"]);
    }
}
