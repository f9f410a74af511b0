//! Paint model shared between the layout engine and backends.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//!
//! Geometry types remain in `coords`; the fixed role defaults for page dots
//! live with the indicator style in `layout`.

mod color;

pub use color::Color;
