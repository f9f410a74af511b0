//! Pagedot core crate.
//!
//! This crate owns the pure computation pieces used by the control layer:
//! geometry types, the backend-agnostic draw command stream, and the layout
//! engine that maps a page-indicator configuration to draw commands and a
//! content size. Nothing here touches pixels; replaying the draw stream is
//! the control crate's job.

pub mod coords;
pub mod layout;
pub mod logging;
pub mod paint;
pub mod scene;
