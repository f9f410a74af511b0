use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Enlarged current-page marker: a stroke-only circle overlaid on the dot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingCmd {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl RingCmd {
    #[inline]
    pub fn new(center: Vec2, radius: f32, color: Color) -> Self {
        Self { center, radius, color }
    }
}

impl DrawList {
    /// Records an enlarged current-page ring.
    #[inline]
    pub fn push_ring(&mut self, center: Vec2, radius: f32, color: Color) {
        self.push(DrawCmd::Ring(RingCmd::new(center, radius, color)));
    }
}
