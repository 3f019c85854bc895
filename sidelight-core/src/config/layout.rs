//! Region layout on the widget strip
//!
//! The three square regions sit side by side on a 160×68 strip. Offsets
//! are fixed at build time; nothing here is computed from content.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{CANVAS_SIZE, WIDGET_WIDTH};

/// One of the three independently redrawn regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Region {
    /// Battery, link status, modifiers
    Top,
    /// Keystrokes, typing speed, uptime, modifiers or battery
    Middle,
    /// Layer or role name
    Bottom,
}

impl Region {
    /// All regions in drawing order
    pub const ALL: [Region; 3] = [Region::Top, Region::Middle, Region::Bottom];

    /// Index into per-region arrays
    pub const fn index(self) -> usize {
        match self {
            Region::Top => 0,
            Region::Middle => 1,
            Region::Bottom => 2,
        }
    }
}

/// Pixel offset of a region's top-left corner on the strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Offset {
    pub x: i32,
    pub y: i32,
}

impl Offset {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Placement of the three regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LayoutConfig {
    /// Anchored to the top-right corner
    pub top: Offset,
    /// Shifted right by a fixed margin
    pub middle: Offset,
    /// Shifted left by a fixed negative margin
    pub bottom: Offset,
}

impl LayoutConfig {
    /// Offset of a region
    pub fn offset(&self, region: Region) -> Offset {
        match region {
            Region::Top => self.top,
            Region::Middle => self.middle,
            Region::Bottom => self.bottom,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            top: Offset::new((WIDGET_WIDTH - CANVAS_SIZE) as i32, 0),
            middle: Offset::new(24, 0),
            bottom: Offset::new(-44, 0),
        }
    }
}
