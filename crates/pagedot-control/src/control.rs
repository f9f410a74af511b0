use pagedot_core::coords::{Rect, Vec2};
use pagedot_core::layout::{self, HorizontalAlignment, IndicatorStyle, VerticalAlignment};
use pagedot_core::paint::Color;
use pagedot_core::scene::DrawList;

use crate::backend::{GraphicsContext, LineCap, LineJoin};
use crate::render;

/// A row of page dots with an optional progressive line and an enlarged ring
/// marking the current page.
///
/// Setters mark the control dirty instead of rendering: the host render loop
/// checks [`needs_display`](Self::needs_display) and calls
/// [`draw`](Self::draw) when it repaints, so rapid successive updates cost
/// one render. Every draw recomputes the full geometry from the current
/// configuration.
pub struct PageControl {
    number_of_pages: usize,
    current_page: i32,
    hides_for_single_page: bool,
    style: IndicatorStyle,
    vertical_alignment: VerticalAlignment,
    horizontal_alignment: HorizontalAlignment,
    draw_list: DrawList,
    needs_display: bool,
}

impl PageControl {
    pub fn new() -> Self {
        Self {
            number_of_pages: 0,
            current_page: 0,
            hides_for_single_page: false,
            style: IndicatorStyle::default(),
            vertical_alignment: VerticalAlignment::default(),
            horizontal_alignment: HorizontalAlignment::default(),
            draw_list: DrawList::new(),
            needs_display: true,
        }
    }

    // ── configuration ─────────────────────────────────────────────────────

    pub fn set_number_of_pages(&mut self, pages: usize) {
        self.number_of_pages = pages;
        self.mark_needs_display();
    }

    pub fn set_current_page(&mut self, page: i32) {
        self.current_page = page;
        self.mark_needs_display();
    }

    pub fn set_hides_for_single_page(&mut self, hides: bool) {
        self.hides_for_single_page = hides;
        self.mark_needs_display();
    }

    /// Tint override for inactive dots; `None` restores the default.
    pub fn set_page_indicator_tint(&mut self, tint: Option<Color>) {
        self.style.page_indicator_tint = tint;
        self.mark_needs_display();
    }

    /// Tint override for the active role; `None` restores the default.
    pub fn set_current_page_indicator_tint(&mut self, tint: Option<Color>) {
        self.style.current_page_indicator_tint = tint;
        self.mark_needs_display();
    }

    pub fn set_page_radius(&mut self, radius: f32) {
        self.style.page_radius = radius;
        self.mark_needs_display();
    }

    pub fn set_current_page_indicator_radius(&mut self, radius: f32) {
        self.style.current_page_indicator_radius = radius;
        self.mark_needs_display();
    }

    pub fn set_padding(&mut self, padding: f32) {
        self.style.padding = padding;
        self.mark_needs_display();
    }

    pub fn set_line_width(&mut self, width: f32) {
        self.style.line_width = width;
        self.mark_needs_display();
    }

    pub fn set_show_line_indicator(&mut self, show: bool) {
        self.style.show_line_indicator = show;
        self.mark_needs_display();
    }

    pub fn set_show_current_page_indicator(&mut self, show: bool) {
        self.style.show_current_page_indicator = show;
        self.mark_needs_display();
    }

    pub fn set_vertical_alignment(&mut self, alignment: VerticalAlignment) {
        self.vertical_alignment = alignment;
        self.mark_needs_display();
    }

    pub fn set_horizontal_alignment(&mut self, alignment: HorizontalAlignment) {
        self.horizontal_alignment = alignment;
        self.mark_needs_display();
    }

    #[inline]
    pub fn number_of_pages(&self) -> usize {
        self.number_of_pages
    }

    #[inline]
    pub fn current_page(&self) -> i32 {
        self.current_page
    }

    #[inline]
    pub fn hides_for_single_page(&self) -> bool {
        self.hides_for_single_page
    }

    #[inline]
    pub fn style(&self) -> &IndicatorStyle {
        &self.style
    }

    #[inline]
    pub fn vertical_alignment(&self) -> VerticalAlignment {
        self.vertical_alignment
    }

    #[inline]
    pub fn horizontal_alignment(&self) -> HorizontalAlignment {
        self.horizontal_alignment
    }

    // ── dirty flag ────────────────────────────────────────────────────────

    /// True when the configuration changed since the last [`draw`](Self::draw).
    #[inline]
    pub fn needs_display(&self) -> bool {
        self.needs_display
    }

    /// Requests a repaint on the next render pass.
    #[inline]
    pub fn mark_needs_display(&mut self) {
        self.needs_display = true;
    }

    // ── sizing ────────────────────────────────────────────────────────────

    /// Minimal size needed to draw `pages` dots with the current style.
    #[inline]
    pub fn size_for_pages(&self, pages: usize) -> Vec2 {
        layout::content_size(&self.style, pages)
    }

    /// Minimal size for the configured page count.
    #[inline]
    pub fn intrinsic_size(&self) -> Vec2 {
        self.size_for_pages(self.number_of_pages)
    }

    // ── rendering ─────────────────────────────────────────────────────────

    /// Recomputes the geometry for `rect` and replays it into `ctx`.
    ///
    /// Clears the dirty flag. A hidden single page issues no context calls
    /// at all.
    pub fn draw(&mut self, rect: Rect, ctx: &mut impl GraphicsContext) {
        self.needs_display = false;

        if self.hides_for_single_page && self.number_of_pages == 1 {
            return;
        }

        log::trace!(
            "drawing {} pages (current {}) into {:?}",
            self.number_of_pages,
            self.current_page,
            rect
        );

        ctx.set_line_style(self.style.line_width, LineCap::Round, LineJoin::Round);

        let anchor = layout::anchor_in(
            rect,
            &self.style,
            self.number_of_pages,
            self.vertical_alignment,
            self.horizontal_alignment,
        );

        self.draw_list.clear();
        layout::record(
            &mut self.draw_list,
            anchor,
            &self.style,
            self.number_of_pages,
            self.current_page,
            self.hides_for_single_page,
        );
        render::replay(&self.draw_list, ctx);
    }
}

impl Default for PageControl {
    fn default() -> Self {
        Self::new()
    }
}
