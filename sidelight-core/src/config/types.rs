//! Widget variant configuration
//!
//! Each widget instance selects one painter per region once at startup.
//! Role-specific behaviour lives in the variant choice, not in branches
//! inside the renderers.

use heapless::String;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{LayoutConfig, Region, MAX_LABEL_LEN};
use crate::state::Changes;

/// Short display label (layer names, role names)
pub type Label = String<MAX_LABEL_LEN>;

/// Build a label, dropping characters past the length limit
pub fn label(text: &str) -> Label {
    let mut out = Label::new();
    for c in text.chars() {
        if out.push(c).is_err() {
            break;
        }
    }
    out
}

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Config does not fit the output buffer
    Serialize,
    /// Stored blob is corrupt or from an incompatible layout
    Deserialize,
}

/// 24-bit colour, converted to the panel format by the display crate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Foreground/background pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Palette {
    pub foreground: Rgb,
    pub background: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            foreground: Rgb::BLACK,
            background: Rgb::WHITE,
        }
    }
}

/// Device role in a split keyboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Role {
    /// Single-piece keyboard
    #[default]
    Standalone,
    /// Half that owns the host link and the keymap
    Central,
    /// Half that only reports to the central
    Peripheral,
}

/// Top region painter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TopVariant {
    /// Battery digits, link status, peer indicator and the modifier row
    #[default]
    Status,
    /// Large centered battery digits over the link status
    Battery,
    /// Battery fill bar, charging glyph and link status
    Gauge,
    /// Battery digits over the link to the central half
    PeerBattery,
}

impl TopVariant {
    /// State changes this painter displays
    pub fn inputs(&self) -> Changes {
        match self {
            TopVariant::Status => {
                Changes::BATTERY | Changes::LINK | Changes::PEER_LINK | Changes::MODIFIERS
            }
            TopVariant::Battery | TopVariant::Gauge => Changes::BATTERY | Changes::LINK,
            TopVariant::PeerBattery => Changes::BATTERY | Changes::PEER_LINK,
        }
    }
}

/// Middle region painter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MiddleVariant {
    /// Recently typed characters
    #[default]
    Keystrokes,
    /// Typing-speed line graph with the latest value
    TypingSpeed,
    /// Device uptime readout
    Uptime,
    /// Large modifier row
    Modifiers,
    /// Battery percentage
    Battery,
}

impl MiddleVariant {
    /// State changes this painter displays
    pub fn inputs(&self) -> Changes {
        match self {
            MiddleVariant::Keystrokes => Changes::KEYSTROKES,
            MiddleVariant::TypingSpeed => Changes::TYPING_SPEED,
            MiddleVariant::Uptime => Changes::UPTIME,
            MiddleVariant::Modifiers => Changes::MODIFIERS,
            MiddleVariant::Battery => Changes::BATTERY,
        }
    }
}

/// Bottom region painter
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BottomVariant {
    /// Active layer label or name
    #[default]
    Layer,
    /// Fixed role identifier for halves without a keymap
    RoleName(Label),
}

impl BottomVariant {
    /// State changes this painter displays
    pub fn inputs(&self) -> Changes {
        match self {
            BottomVariant::Layer => Changes::LAYER,
            BottomVariant::RoleName(_) => Changes::empty(),
        }
    }
}

/// Per-instance widget configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WidgetConfig {
    pub top: TopVariant,
    pub middle: MiddleVariant,
    pub bottom: BottomVariant,
    /// Fallback names for layers 0..=2 when the keymap has no label
    pub layer_names: [Label; 3],
    pub palette: Palette,
    pub layout: LayoutConfig,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self::keystrokes()
    }
}

impl WidgetConfig {
    fn with_variants(top: TopVariant, middle: MiddleVariant, bottom: BottomVariant) -> Self {
        Self {
            top,
            middle,
            bottom,
            layer_names: [label("BASE"), label("LOWER"), label("RAISE")],
            palette: Palette::default(),
            layout: LayoutConfig::default(),
        }
    }

    /// Status row with modifiers, recent keystrokes, layer
    pub fn keystrokes() -> Self {
        Self::with_variants(
            TopVariant::Status,
            MiddleVariant::Keystrokes,
            BottomVariant::Layer,
        )
    }

    /// Battery and link, modifier row, layer
    pub fn central() -> Self {
        Self::with_variants(
            TopVariant::Battery,
            MiddleVariant::Modifiers,
            BottomVariant::Layer,
        )
    }

    /// Battery and peer link, uptime, role name
    pub fn peripheral() -> Self {
        Self::with_variants(
            TopVariant::PeerBattery,
            MiddleVariant::Uptime,
            BottomVariant::RoleName(label("RIGHT")),
        )
    }

    /// Battery gauge, typing-speed graph, layer
    pub fn dashboard() -> Self {
        Self::with_variants(
            TopVariant::Gauge,
            MiddleVariant::TypingSpeed,
            BottomVariant::Layer,
        )
    }

    /// Preset for a device role
    pub fn for_role(role: Role) -> Self {
        match role {
            Role::Standalone => Self::keystrokes(),
            Role::Central => Self::central(),
            Role::Peripheral => Self::peripheral(),
        }
    }

    /// State changes displayed by a region
    pub fn inputs(&self, region: Region) -> Changes {
        match region {
            Region::Top => self.top.inputs(),
            Region::Middle => self.middle.inputs(),
            Region::Bottom => self.bottom.inputs(),
        }
    }

    /// Regions that must be redrawn after `changes`
    pub fn affected(&self, changes: Changes) -> impl Iterator<Item = Region> + '_ {
        Region::ALL
            .into_iter()
            .filter(move |&region| self.inputs(region).intersects(changes))
    }

    /// Encode as a postcard blob
    #[cfg(feature = "serde")]
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }

    /// Decode from a postcard blob
    #[cfg(feature = "serde")]
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)
    }
}
