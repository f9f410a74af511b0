//! Mechanical replay of a recorded draw stream against a graphics context.

use pagedot_core::scene::{DrawCmd, DrawList};

use crate::backend::GraphicsContext;

/// Replays `list` against `ctx` in paint order.
///
/// Dots fill then stroke in one color, rings stroke only, lines stroke
/// between their endpoints. Line width and caps are configured by the caller
/// before replay.
pub fn replay(list: &DrawList, ctx: &mut impl GraphicsContext) {
    for cmd in list.items() {
        match cmd {
            DrawCmd::Dot(dot) => {
                ctx.set_fill_color(dot.color);
                ctx.set_stroke_color(dot.color);
                ctx.fill_circle(dot.center, dot.radius);
                ctx.stroke_circle(dot.center, dot.radius);
            }
            DrawCmd::Ring(ring) => {
                ctx.set_stroke_color(ring.color);
                ctx.stroke_circle(ring.center, ring.radius);
            }
            DrawCmd::Line(line) => {
                ctx.set_stroke_color(line.color);
                ctx.stroke_line(line.from, line.to);
            }
        }
    }
}
