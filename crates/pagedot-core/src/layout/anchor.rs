use crate::coords::{Rect, Vec2};

use super::{IndicatorStyle, content_size};

/// Vertical placement of the indicator inside the host rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VerticalAlignment {
    Top,
    #[default]
    Center,
    Bottom,
    /// Vertically centered, without the line-band compensation `Center` applies.
    Fill,
}

/// Horizontal placement of the indicator inside the host rect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum HorizontalAlignment {
    Left,
    #[default]
    Center,
    Right,
    Fill,
    /// Like `Left`, but without the enlarged-ring margin compensation.
    Leading,
    /// Like `Right`, but without the enlarged-ring margin compensation.
    Trailing,
}

/// Computes the anchor: the cursor position of the first page dot.
///
/// When the enlarged ring is shown, `Top`, `Bottom`, `Left`, and `Right`
/// shift the anchor by the margin the ring protrudes beyond a normal dot so
/// it does not clip against the rect edge. The content width used for
/// horizontal placement excludes that ring allowance.
pub fn anchor_in(
    rect: Rect,
    style: &IndicatorStyle,
    number_of_pages: usize,
    vertical: VerticalAlignment,
    horizontal: HorizontalAlignment,
) -> Vec2 {
    let content = content_size(style, number_of_pages);
    let content_height = content.y;
    let mut content_width = content.x;
    if style.show_current_page_indicator {
        content_width -= style.current_page_indicator_radius;
    }

    let ring_margin = style.ring_margin();

    let y = match vertical {
        VerticalAlignment::Top => {
            if style.show_current_page_indicator {
                rect.min().y + ring_margin
            } else {
                rect.min().y
            }
        }
        VerticalAlignment::Center => rect.mid().y - (3.0 * style.line_width) / 2.0,
        VerticalAlignment::Bottom => {
            if style.show_current_page_indicator {
                rect.max().y - (style.page_radius + ring_margin)
            } else {
                rect.max().y - content_height
            }
        }
        VerticalAlignment::Fill => rect.mid().y,
    };

    let x = match horizontal {
        HorizontalAlignment::Center | HorizontalAlignment::Fill => {
            rect.mid().x - content_width / 2.0
        }
        HorizontalAlignment::Left => {
            if style.show_current_page_indicator {
                rect.min().x + ring_margin
            } else {
                rect.min().x
            }
        }
        HorizontalAlignment::Right => {
            if style.show_current_page_indicator {
                rect.max().x - content_width - ring_margin
            } else {
                rect.max().x - content_width
            }
        }
        HorizontalAlignment::Leading => rect.min().x,
        HorizontalAlignment::Trailing => rect.max().x - content_width,
    };

    Vec2::new(x, y)
}
