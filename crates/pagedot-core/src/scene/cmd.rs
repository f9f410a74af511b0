use crate::scene::shapes::dot::DotCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::ring::RingCmd;

/// Backend-agnostic draw command stream.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - handle the variant in the control crate's replay
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    /// Page dot: a circle drawn filled and stroked in one color.
    Dot(DotCmd),
    /// Enlarged current-page marker: a stroke-only circle.
    Ring(RingCmd),
    /// Progressive line segment.
    Line(LineCmd),
}
