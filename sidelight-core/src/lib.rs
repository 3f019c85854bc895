//! Board-agnostic core logic for the Sidelight status display
//!
//! This crate contains everything that turns keyboard notifications into
//! drawable state without touching pixels:
//!
//! - Keycode decoding and modifier tracking
//! - Bounded keystroke and typing-speed history
//! - Widget state and the typed notifications that mutate it
//! - Link/profile status selection and layer naming
//! - Configuration types (region variants, layout, palette)
//! - Traits for the external state providers

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod events;
pub mod history;
pub mod keycode;
pub mod modifiers;
pub mod state;
pub mod traits;

pub use config::{Label, Region, WidgetConfig};
pub use events::{Notification, NotificationKind};
pub use modifiers::{ModifierTracker, Modifiers};
pub use state::{Changes, StateUpdate, WidgetState};
