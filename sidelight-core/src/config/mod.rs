//! Configuration types
//!
//! Build-time constants plus the per-widget variant selection. With the
//! `serde` feature a [`WidgetConfig`] can be stored as postcard binary data.

pub mod layout;
pub mod types;

pub use layout::*;
pub use types::*;

/// Side length of each square region buffer (pixels)
pub const CANVAS_SIZE: usize = 68;

/// Width of the widget strip holding the three regions
pub const WIDGET_WIDTH: usize = 160;

/// Height of the widget strip
pub const WIDGET_HEIGHT: usize = 68;

/// Recent keystrokes kept for display
pub const KEYSTROKE_CAPACITY: usize = 12;

/// Typing-speed samples kept for the graph
pub const TYPING_SPEED_SAMPLES: usize = 10;

/// Maximum label length (layer names, role names)
pub const MAX_LABEL_LEN: usize = 16;

/// Maximum encoded size of a [`WidgetConfig`] blob
pub const CONFIG_BLOB_SIZE: usize = 128;
