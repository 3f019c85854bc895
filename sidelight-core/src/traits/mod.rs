//! External collaborator traits
//!
//! These traits define the interface between the status core and the
//! keyboard firmware that owns the actual state providers.

pub mod source;

pub use source::{Clock, FixedClock, StaticSource, StatusSource};
