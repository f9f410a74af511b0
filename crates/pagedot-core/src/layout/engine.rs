use crate::coords::Vec2;
use crate::scene::DrawList;

use super::IndicatorStyle;

/// Records one render pass worth of draw commands into `list`.
///
/// Commands come out in page order: one dot per page and, at the current
/// page, the progressive line followed by the enlarged ring when enabled.
/// The list is not cleared here; callers clear it between passes.
///
/// `current_page` is clamped to the valid page range, so out-of-range values
/// light up the boundary dot instead of failing.
pub fn record(
    list: &mut DrawList,
    anchor: Vec2,
    style: &IndicatorStyle,
    number_of_pages: usize,
    current_page: i32,
    hides_for_single_page: bool,
) {
    if number_of_pages == 0 {
        return;
    }
    if hides_for_single_page && number_of_pages == 1 {
        return;
    }

    let current = current_page.clamp(0, number_of_pages as i32 - 1);
    let half_dot = style.page_radius / 2.0;

    let mut cursor = anchor;
    for i in 0..number_of_pages as i32 {
        let active = i == current || (current > i && style.show_line_indicator);
        let color = if active { style.active_color() } else { style.inactive_color() };

        list.push_dot(cursor, style.page_radius, color);

        if i == current {
            if current > 0 && style.show_line_indicator {
                let from = Vec2::new(anchor.x + half_dot, anchor.y + half_dot);
                let mut to = Vec2::new(cursor.x + half_dot, cursor.y + half_dot);
                if style.show_current_page_indicator {
                    // Stop short of the ring so the line does not cross it.
                    to.x -= (style.current_page_indicator_radius - style.page_radius) / 2.0;
                }
                list.push_line(from, to, style.active_color());
            }

            if style.show_current_page_indicator {
                let offset = (style.page_radius - style.current_page_indicator_radius) / 2.0;
                let center = Vec2::new(cursor.x + offset, cursor.y + offset);
                list.push_ring(center, style.current_page_indicator_radius, style.active_color());
            }
        }

        // Cursor advances after every page, including the last.
        cursor.x += style.padding + style.page_radius;
    }
}
