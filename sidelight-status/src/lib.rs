//! Sidelight status dispatch
//!
//! Connects keyboard state notifications to widget instances:
//! - `Registry`: append-only set of live widgets
//! - `Listener`s: turn a notification into one `StateUpdate`
//! - `StatusContext`: owns the registry, the shared input state and the
//!   compositor; routes notifications and redraws only affected regions
//! - `SharedStatus`: the context behind an embassy-sync blocking mutex, for
//!   callers on different tasks or interrupt contexts

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

// Must go first so the other modules see its macros
mod fmt;

pub mod context;
pub mod listeners;
pub mod registry;
pub mod shared;
pub mod widget;

pub use context::StatusContext;
pub use listeners::{InputState, Listener};
pub use registry::{Registry, StatusError};
pub use shared::SharedStatus;
pub use widget::WidgetInstance;
