//! Scroll Source Tests
//!
//! Tests for:
//! - ScrollMetrics range and progress math (including degenerate ranges)
//! - ScrollState event delivery (change detection, silent resizes)
//! - Per-axis metric independence
//! - ScrollAxis parsing and display

use std::cell::Cell;
use std::rc::Rc;

use scrollbound::{ScrollAxis, ScrollBoundError, ScrollMetrics, ScrollSource, ScrollState};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Counts deliveries of the scrolled event.
fn scroll_counter(state: &ScrollState) -> Rc<Cell<u32>> {
    let count = Rc::new(Cell::new(0));
    let seen = Rc::clone(&count);
    state.on_scroll().add(move |_| seen.set(seen.get() + 1));
    count
}

// ============================================================================
// ScrollMetrics math
// ============================================================================

#[test]
fn max_offset_is_content_minus_viewport() {
    let metrics = ScrollMetrics::new(0.0, 1000.0, 200.0);
    assert!(approx(metrics.max_offset(), 800.0));
}

#[test]
fn progress_is_offset_over_scrollable_range() {
    let metrics = ScrollMetrics::new(400.0, 1000.0, 200.0);
    assert!(
        approx(metrics.progress(), 0.5),
        "Expected 0.5, got {}",
        metrics.progress()
    );
}

#[test]
fn progress_of_unscrolled_zero_range_is_nan() {
    // Content fits the viewport: 0 / 0.
    let metrics = ScrollMetrics::new(0.0, 500.0, 500.0);
    assert!(metrics.progress().is_nan());
}

#[test]
fn progress_of_scrolled_zero_range_is_infinite() {
    let metrics = ScrollMetrics::new(100.0, 500.0, 500.0);
    assert!(metrics.progress().is_infinite());
}

#[test]
fn negative_range_yields_negative_progress() {
    // Content smaller than the viewport. The math is deliberately unguarded;
    // consumers gate on finiteness, not on range validity.
    let metrics = ScrollMetrics::new(10.0, 100.0, 200.0);
    assert!(approx(metrics.max_offset(), -100.0));
    assert!(
        approx(metrics.progress(), -0.1),
        "Expected -0.1, got {}",
        metrics.progress()
    );
}

// ============================================================================
// ScrollState event delivery
// ============================================================================

#[test]
fn set_offset_notifies_on_change() {
    let state = ScrollState::new();
    state.set_extents(ScrollAxis::Vertical, 1000.0, 200.0);
    let count = scroll_counter(&state);

    state.set_offset(ScrollAxis::Vertical, 100.0);
    state.set_offset(ScrollAxis::Vertical, 200.0);

    assert_eq!(count.get(), 2);
}

#[test]
fn repeated_offset_does_not_notify() {
    let state = ScrollState::new();
    state.set_extents(ScrollAxis::Vertical, 1000.0, 200.0);
    let count = scroll_counter(&state);

    state.set_offset(ScrollAxis::Vertical, 100.0);
    state.set_offset(ScrollAxis::Vertical, 100.0);

    assert_eq!(count.get(), 1, "Unchanged positions are not scroll events");
}

#[test]
fn set_extents_is_silent() {
    let state = ScrollState::new();
    let count = scroll_counter(&state);

    state.set_extents(ScrollAxis::Vertical, 1000.0, 200.0);
    state.set_extents(ScrollAxis::Horizontal, 600.0, 100.0);

    assert_eq!(count.get(), 0, "A resize is not a scroll event");
}

#[test]
fn offset_survives_extent_updates() {
    let state = ScrollState::new();
    state.set_extents(ScrollAxis::Vertical, 1000.0, 200.0);
    state.set_offset(ScrollAxis::Vertical, 150.0);

    state.set_extents(ScrollAxis::Vertical, 2000.0, 400.0);

    let metrics = state.metrics(ScrollAxis::Vertical);
    assert!(approx(metrics.offset, 150.0));
    assert!(approx(metrics.content, 2000.0));
    assert!(approx(metrics.viewport, 400.0));
}

#[test]
fn axes_hold_independent_metrics() {
    let state = ScrollState::new();
    state.set_extents(ScrollAxis::Vertical, 1000.0, 200.0);
    state.set_offset(ScrollAxis::Vertical, 400.0);

    let horizontal = state.metrics(ScrollAxis::Horizontal);
    assert!(
        approx(horizontal.offset, 0.0) && approx(horizontal.content, 0.0),
        "Vertical updates must not leak into the horizontal axis"
    );

    state.set_extents(ScrollAxis::Horizontal, 600.0, 100.0);
    state.set_offset(ScrollAxis::Horizontal, 250.0);

    assert!(approx(state.metrics(ScrollAxis::Vertical).offset, 400.0));
    assert!(approx(state.metrics(ScrollAxis::Horizontal).offset, 250.0));
}

// ============================================================================
// ScrollAxis parsing and display
// ============================================================================

#[test]
fn axis_parses_case_insensitively() {
    assert_eq!("vertical".parse::<ScrollAxis>().unwrap(), ScrollAxis::Vertical);
    assert_eq!(
        "Horizontal".parse::<ScrollAxis>().unwrap(),
        ScrollAxis::Horizontal
    );
    assert_eq!("VERTICAL".parse::<ScrollAxis>().unwrap(), ScrollAxis::Vertical);
}

#[test]
fn axis_rejects_unknown_names() {
    let err = "diagonal".parse::<ScrollAxis>().unwrap_err();
    match &err {
        ScrollBoundError::InvalidAxis(axis) => assert_eq!(axis, "diagonal"),
        other => panic!("Expected InvalidAxis, got {other:?}"),
    }
    assert!(
        err.to_string().contains("diagonal"),
        "The message should name the offending input: {err}"
    );
}

#[test]
fn axis_display_round_trips() {
    for axis in [ScrollAxis::Vertical, ScrollAxis::Horizontal] {
        let parsed = axis.to_string().parse::<ScrollAxis>().unwrap();
        assert_eq!(parsed, axis);
    }
}

#[test]
fn default_axis_is_vertical() {
    assert_eq!(ScrollAxis::default(), ScrollAxis::Vertical);
}
