use crate::paint::Color;

/// Fallback tint for inactive dots: 30%-alpha black.
pub const DEFAULT_PAGE_TINT: Color = Color::from_premul(0.0, 0.0, 0.0, 0.3);

/// Fallback tint for the active role (current dot, ring, line): opaque black.
pub const DEFAULT_CURRENT_PAGE_TINT: Color = Color::from_premul(0.0, 0.0, 0.0, 1.0);

/// Sizing parameters and visual flags for the indicator.
///
/// Magnitudes are best-effort: zero or negative values are not validated and
/// produce degenerate (zero-size or overlapping) output rather than errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorStyle {
    /// Extent of one page dot.
    pub page_radius: f32,
    /// Extent of the enlarged ring drawn around the current page's dot.
    pub current_page_indicator_radius: f32,
    /// Horizontal gap between consecutive dots.
    pub padding: f32,
    /// Stroke width for dots, ring, and progressive line.
    pub line_width: f32,
    /// Draw a connecting line from the first dot through the current one and
    /// tint every passed dot with the active color.
    pub show_line_indicator: bool,
    /// Draw the enlarged ring around the current page's dot.
    pub show_current_page_indicator: bool,
    /// Tint override for inactive dots; `None` falls back to [`DEFAULT_PAGE_TINT`].
    pub page_indicator_tint: Option<Color>,
    /// Tint override for the active role; `None` falls back to
    /// [`DEFAULT_CURRENT_PAGE_TINT`].
    pub current_page_indicator_tint: Option<Color>,
}

impl Default for IndicatorStyle {
    fn default() -> Self {
        Self {
            page_radius: 7.0,
            current_page_indicator_radius: 20.0,
            padding: 9.0,
            line_width: 2.0,
            show_line_indicator: false,
            show_current_page_indicator: false,
            page_indicator_tint: None,
            current_page_indicator_tint: None,
        }
    }
}

impl IndicatorStyle {
    /// Resolved color for inactive dots.
    #[inline]
    pub fn inactive_color(&self) -> Color {
        self.page_indicator_tint.unwrap_or(DEFAULT_PAGE_TINT)
    }

    /// Resolved color for the active role.
    #[inline]
    pub fn active_color(&self) -> Color {
        self.current_page_indicator_tint.unwrap_or(DEFAULT_CURRENT_PAGE_TINT)
    }

    /// Extra margin the enlarged ring protrudes beyond a normal dot.
    #[inline]
    pub(crate) fn ring_margin(&self) -> f32 {
        (self.current_page_indicator_radius + self.line_width - self.page_radius) / 2.0
    }
}
