use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Page dot draw payload.
///
/// Backends draw this filled and then stroked in the same color, so the
/// stroke fattens the dot by half the configured line width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DotCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl DotCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl DrawList {
    /// Records a page dot.
    #[inline]
    pub fn push_dot(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Dot(DotCmd::new(center, radius, color)));
    }
}
