//! Layout engine for the page indicator.
//!
//! Responsibilities:
//! - compute the minimal content size for a page count (`size`)
//! - place the anchor inside an available rect (`anchor`)
//! - emit per-page draw commands into a [`DrawList`](crate::scene::DrawList)
//!   (`engine`)
//!
//! Everything here is a pure function of the configuration; nothing is
//! retained between render passes.

mod anchor;
mod engine;
mod size;
mod style;

pub use anchor::{HorizontalAlignment, VerticalAlignment, anchor_in};
pub use engine::record;
pub use size::content_size;
pub use style::{DEFAULT_CURRENT_PAGE_TINT, DEFAULT_PAGE_TINT, IndicatorStyle};
