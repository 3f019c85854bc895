//! Host link and wireless profile status

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Transport carrying keyboard reports to the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Transport {
    Usb,
    #[default]
    Wireless,
}

/// Active transport and wireless profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkInfo {
    pub transport: Transport,
    /// Zero-based profile slot
    pub profile: u8,
    /// Profile has completed pairing
    pub bonded: bool,
    /// Profile currently connected
    pub connected: bool,
}

impl LinkInfo {
    /// USB link; profile flags are irrelevant
    pub const fn usb() -> Self {
        Self {
            transport: Transport::Usb,
            profile: 0,
            bonded: false,
            connected: false,
        }
    }

    /// Wireless link on a profile
    pub const fn wireless(profile: u8, bonded: bool, connected: bool) -> Self {
        Self {
            transport: Transport::Wireless,
            profile,
            bonded,
            connected,
        }
    }
}

/// What the link indicator shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkStatus {
    /// Fixed "USB" text
    Usb,
    /// Connected glyph and 1-based profile number
    Connected { number: u8 },
    /// Disconnected glyph and 1-based profile number
    Disconnected { number: u8 },
    /// Profile slot not bonded yet
    Pairing,
}

impl LinkStatus {
    /// Select the indicator by priority: USB, then bonded+connected,
    /// then bonded, then pairing
    pub fn from_link(link: &LinkInfo) -> Self {
        let number = link.profile.saturating_add(1);
        match (link.transport, link.bonded, link.connected) {
            (Transport::Usb, _, _) => LinkStatus::Usb,
            (Transport::Wireless, true, true) => LinkStatus::Connected { number },
            (Transport::Wireless, true, false) => LinkStatus::Disconnected { number },
            (Transport::Wireless, false, _) => LinkStatus::Pairing,
        }
    }

    /// Profile number shown next to the glyph, if any
    pub fn number(&self) -> Option<u8> {
        match self {
            LinkStatus::Connected { number } | LinkStatus::Disconnected { number } => {
                Some(*number)
            }
            LinkStatus::Usb | LinkStatus::Pairing => None,
        }
    }
}

impl From<&LinkInfo> for LinkStatus {
    fn from(link: &LinkInfo) -> Self {
        LinkStatus::from_link(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usb_wins() {
        let mut link = LinkInfo::wireless(2, true, true);
        link.transport = Transport::Usb;
        assert_eq!(LinkStatus::from_link(&link), LinkStatus::Usb);
    }

    #[test]
    fn test_wireless_states() {
        assert_eq!(
            LinkStatus::from_link(&LinkInfo::wireless(0, true, true)),
            LinkStatus::Connected { number: 1 }
        );
        assert_eq!(
            LinkStatus::from_link(&LinkInfo::wireless(3, true, false)),
            LinkStatus::Disconnected { number: 4 }
        );
        // Not bonded: pairing regardless of the connected flag
        assert_eq!(
            LinkStatus::from_link(&LinkInfo::wireless(1, false, true)),
            LinkStatus::Pairing
        );
        assert_eq!(
            LinkStatus::from_link(&LinkInfo::wireless(1, false, false)),
            LinkStatus::Pairing
        );
    }

    #[test]
    fn test_number() {
        assert_eq!(LinkStatus::Connected { number: 2 }.number(), Some(2));
        assert_eq!(LinkStatus::Pairing.number(), None);
        assert_eq!(LinkStatus::Usb.number(), None);
    }
}
