use pagedot_core::coords::Vec2;
use pagedot_core::paint::Color;

/// Stroke cap shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
    Butt,
    Round,
    Square,
}

/// Stroke join shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
    Miter,
    Round,
    Bevel,
}

/// Primitive draw operations the host's graphics layer must provide.
///
/// The control never reads back from the context; calls arrive in paint
/// order and the context is free to batch or rasterize them however it
/// likes. [`PageControl::draw`](crate::control::PageControl::draw) always
/// requests a `Round` cap and `Round` join before issuing shapes.
pub trait GraphicsContext {
    fn set_fill_color(&mut self, color: Color);
    fn set_stroke_color(&mut self, color: Color);
    fn set_line_style(&mut self, width: f32, cap: LineCap, join: LineJoin);
    fn fill_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_circle(&mut self, center: Vec2, radius: f32);
    fn stroke_line(&mut self, from: Vec2, to: Vec2);
}
