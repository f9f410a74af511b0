//! Pagedot control — host-facing page indicator built on `pagedot-core`.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use pagedot_control::prelude::*;
//!
//! let mut control = PageControl::new();
//! control.set_number_of_pages(5);
//! control.set_current_page(2);
//! control.set_show_line_indicator(true);
//!
//! // In your frame callback:
//! if control.needs_display() {
//!     control.draw(viewport, &mut my_context);
//! }
//! ```
//!
//! The host supplies a [`GraphicsContext`] implementation; the control owns
//! the configuration and geometry, the context owns the pixels. Setters
//! never render synchronously — they mark the control dirty and the host
//! render loop decides when to repaint.

pub mod backend;
pub mod control;
pub mod render;

pub use backend::{GraphicsContext, LineCap, LineJoin};
pub use control::PageControl;

/// Everything a host needs to embed the control.
pub mod prelude {
    pub use crate::backend::{GraphicsContext, LineCap, LineJoin};
    pub use crate::control::PageControl;

    // Re-export the core primitives every host touches.
    pub use pagedot_core::coords::{Rect, Vec2};
    pub use pagedot_core::layout::{HorizontalAlignment, IndicatorStyle, VerticalAlignment};
    pub use pagedot_core::paint::Color;
}
