use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Progressive line segment from the first dot through the current one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineCmd {
    pub from: Vec2,
    pub to: Vec2,
    pub color: Color,
}

impl LineCmd {
    #[inline]
    pub fn new(from: Vec2, to: Vec2, color: Color) -> Self {
        Self { from, to, color }
    }
}

impl DrawList {
    /// Records a progressive line segment.
    #[inline]
    pub fn push_line(&mut self, from: Vec2, to: Vec2, color: Color) {
        self.push(DrawCmd::Line(LineCmd::new(from, to, color)));
    }
}
