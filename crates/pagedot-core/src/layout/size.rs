use crate::coords::Vec2;

use super::IndicatorStyle;

/// Minimal bounding size needed to draw `number_of_pages` dots.
///
/// Height reserves a 3×`line_width` band around the tallest marker so the
/// round stroke caps never clip. Width is clamped to zero so an empty
/// indicator reports a zero, not negative, intrinsic width.
pub fn content_size(style: &IndicatorStyle, number_of_pages: usize) -> Vec2 {
    let pages = number_of_pages as f32;

    let mut height = style.page_radius;
    if style.show_current_page_indicator {
        height = style.current_page_indicator_radius.max(style.page_radius);
    }
    height += 3.0 * style.line_width;

    let mut width = (pages - 1.0) * style.padding + pages * style.page_radius;
    if style.show_current_page_indicator {
        width += style.current_page_indicator_radius;
    }

    Vec2::new(width.max(0.0), height)
}
