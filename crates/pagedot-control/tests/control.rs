//! End-to-end tests: configure a `PageControl`, draw into a recording
//! context, and assert on the exact primitive call sequence.

use pretty_assertions::assert_eq;

use pagedot_control::prelude::*;
use pagedot_core::layout::{DEFAULT_CURRENT_PAGE_TINT, DEFAULT_PAGE_TINT};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Call {
    SetFill(Color),
    SetStroke(Color),
    SetLineStyle(f32, LineCap, LineJoin),
    FillCircle(Vec2, f32),
    StrokeCircle(Vec2, f32),
    StrokeLine(Vec2, Vec2),
}

#[derive(Debug, Default)]
struct RecordingContext {
    calls: Vec<Call>,
}

impl GraphicsContext for RecordingContext {
    fn set_fill_color(&mut self, color: Color) {
        self.calls.push(Call::SetFill(color));
    }
    fn set_stroke_color(&mut self, color: Color) {
        self.calls.push(Call::SetStroke(color));
    }
    fn set_line_style(&mut self, width: f32, cap: LineCap, join: LineJoin) {
        self.calls.push(Call::SetLineStyle(width, cap, join));
    }
    fn fill_circle(&mut self, center: Vec2, radius: f32) {
        self.calls.push(Call::FillCircle(center, radius));
    }
    fn stroke_circle(&mut self, center: Vec2, radius: f32) {
        self.calls.push(Call::StrokeCircle(center, radius));
    }
    fn stroke_line(&mut self, from: Vec2, to: Vec2) {
        self.calls.push(Call::StrokeLine(from, to));
    }
}

/// A control anchored at the rect origin: top/leading alignment keeps the
/// first dot's cursor at (0, 0) while the enlarged ring is off.
fn control(pages: usize, current: i32) -> PageControl {
    let mut control = PageControl::new();
    control.set_number_of_pages(pages);
    control.set_current_page(current);
    control.set_vertical_alignment(VerticalAlignment::Top);
    control.set_horizontal_alignment(HorizontalAlignment::Leading);
    control
}

fn draw(control: &mut PageControl) -> Vec<Call> {
    let mut ctx = RecordingContext::default();
    control.draw(Rect::new(0.0, 0.0, 200.0, 40.0), &mut ctx);
    ctx.calls
}

fn fill_circles(calls: &[Call]) -> Vec<(Vec2, f32)> {
    calls
        .iter()
        .filter_map(|c| match c {
            Call::FillCircle(center, radius) => Some((*center, *radius)),
            _ => None,
        })
        .collect()
}

#[test]
fn draws_one_filled_circle_per_page_left_to_right() {
    let calls = draw(&mut control(5, 0));
    let circles = fill_circles(&calls);
    assert_eq!(circles.len(), 5);
    for (i, (center, radius)) in circles.iter().enumerate() {
        assert_eq!(*center, Vec2::new(i as f32 * 16.0, 0.0));
        assert_eq!(*radius, 7.0);
    }
}

#[test]
fn line_style_is_set_once_with_round_caps() {
    let calls = draw(&mut control(3, 1));
    let styles: Vec<_> = calls
        .iter()
        .filter(|c| matches!(c, Call::SetLineStyle(..)))
        .collect();
    assert_eq!(styles, vec![&Call::SetLineStyle(2.0, LineCap::Round, LineJoin::Round)]);
    assert_eq!(calls[0], Call::SetLineStyle(2.0, LineCap::Round, LineJoin::Round));
}

#[test]
fn each_dot_fills_before_it_strokes() {
    let calls = draw(&mut control(3, 1));
    for window in calls.windows(2) {
        if let Call::FillCircle(center, radius) = window[0] {
            assert_eq!(window[1], Call::StrokeCircle(center, radius));
        }
    }
}

#[test]
fn hidden_single_page_issues_no_context_calls() {
    let mut control = control(1, 0);
    control.set_hides_for_single_page(true);
    assert_eq!(draw(&mut control), vec![]);
}

#[test]
fn unhidden_single_page_still_draws() {
    let calls = draw(&mut control(1, 0));
    assert_eq!(fill_circles(&calls).len(), 1);
}

#[test]
fn out_of_range_current_page_clamps_to_the_boundary() {
    let low = draw(&mut control(4, -5));
    let first = draw(&mut control(4, 0));
    assert_eq!(low, first);

    let high = draw(&mut control(4, 42));
    let last = draw(&mut control(4, 3));
    assert_eq!(high, last);
}

#[test]
fn progressive_line_scenario_five_pages_current_two() {
    let mut control = control(5, 2);
    control.set_show_line_indicator(true);
    let calls = draw(&mut control);

    // Five dots, one line, no ring.
    assert_eq!(fill_circles(&calls).len(), 5);
    let lines: Vec<_> = calls
        .iter()
        .filter(|c| matches!(c, Call::StrokeLine(..)))
        .collect();
    assert_eq!(lines, vec![&Call::StrokeLine(Vec2::new(3.5, 3.5), Vec2::new(35.5, 3.5))]);

    // Passed dots and the current one fill with the active tint.
    let fills: Vec<Color> = calls
        .iter()
        .filter_map(|c| match c {
            Call::SetFill(color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![
            DEFAULT_CURRENT_PAGE_TINT,
            DEFAULT_CURRENT_PAGE_TINT,
            DEFAULT_CURRENT_PAGE_TINT,
            DEFAULT_PAGE_TINT,
            DEFAULT_PAGE_TINT,
        ]
    );
}

#[test]
fn without_the_line_only_the_current_dot_is_tinted_active() {
    let calls = draw(&mut control(4, 2));
    let fills: Vec<Color> = calls
        .iter()
        .filter_map(|c| match c {
            Call::SetFill(color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(
        fills,
        vec![
            DEFAULT_PAGE_TINT,
            DEFAULT_PAGE_TINT,
            DEFAULT_CURRENT_PAGE_TINT,
            DEFAULT_PAGE_TINT,
        ]
    );
}

#[test]
fn enlarged_ring_strokes_around_the_current_dot() {
    let mut control = control(5, 2);
    control.set_show_current_page_indicator(true);
    let calls = draw(&mut control);

    // Top alignment compensates for the ring's protrusion: anchor y = 7.5.
    // Current cursor x = 32; ring center shifts by (7 - 20) / 2 on both axes.
    let rings: Vec<_> = calls
        .iter()
        .filter(|c| matches!(c, Call::StrokeCircle(_, r) if *r == 20.0))
        .collect();
    assert_eq!(rings, vec![&Call::StrokeCircle(Vec2::new(25.5, 1.0), 20.0)]);
}

#[test]
fn ring_shortens_the_progressive_line() {
    let mut control = control(5, 2);
    control.set_show_line_indicator(true);
    control.set_show_current_page_indicator(true);
    let calls = draw(&mut control);

    let line = calls
        .iter()
        .find(|c| matches!(c, Call::StrokeLine(..)))
        .copied()
        .unwrap();
    // Anchor (0, 7.5); endpoint pulled back by (20 - 7) / 2.
    assert_eq!(line, Call::StrokeLine(Vec2::new(3.5, 11.0), Vec2::new(29.0, 11.0)));
}

#[test]
fn tint_overrides_reach_the_context() {
    let red = Color::from_straight(1.0, 0.0, 0.0, 1.0);
    let mut control = control(3, 1);
    control.set_current_page_indicator_tint(Some(red));
    let calls = draw(&mut control);
    assert!(calls.contains(&Call::SetFill(red)));
}

#[test]
fn zero_pages_sets_up_the_context_but_draws_nothing() {
    let calls = draw(&mut control(0, 0));
    assert_eq!(calls, vec![Call::SetLineStyle(2.0, LineCap::Round, LineJoin::Round)]);
}

#[test]
fn redraw_after_setter_reflects_the_new_state() {
    let mut control = control(3, 0);
    draw(&mut control);
    control.set_current_page(2);
    assert!(control.needs_display());

    let calls = draw(&mut control);
    let fills: Vec<Color> = calls
        .iter()
        .filter_map(|c| match c {
            Call::SetFill(color) => Some(*color),
            _ => None,
        })
        .collect();
    assert_eq!(fills[2], DEFAULT_CURRENT_PAGE_TINT);
}
