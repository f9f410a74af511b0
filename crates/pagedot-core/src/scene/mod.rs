//! Scene (draw stream) types.
//!
//! Responsibilities:
//! - store backend-agnostic draw commands
//! - preserve the deterministic page-order emission of the layout engine
//! - keep shape-specific helpers isolated per shape file under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::{DotCmd, LineCmd, RingCmd};
