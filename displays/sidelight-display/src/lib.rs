//! Pixel side of the Sidelight status widget
//!
//! This crate provides:
//! - `RegionBuffer`: a 68×68 true-colour offscreen buffer implementing
//!   `embedded_graphics::DrawTarget`
//! - Region renderers for every top/middle/bottom variant
//! - `Compositor`: the 90° rotation applied after every region redraw
//! - `DisplaySurface` trait for the physical display driver, and
//!   `PanelFrame`, a host-side surface assembling the full strip
//!
//! # Architecture
//!
//! Renderers are generic over `DrawTarget<Color = Rgb565>` and read a
//! `WidgetState` only. Every redraw fully overwrites its region buffer,
//! then the compositor turns it a quarter turn in place before the
//! surface sees it.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod buffer;
pub mod compositor;
pub mod glyph;
pub mod renderers;
pub mod surface;
pub mod text;

// Re-export key types
pub use buffer::{to_rgb565, RegionBuffer};
pub use compositor::Compositor;
pub use glyph::Glyph;
pub use renderers::{render_region, RenderInput};
pub use surface::{DisplayError, DisplaySurface, PanelFrame};
