//! Assertion utilities for robot testing
//!
//! Helpers for validating what a collection surface shows.

use ethical_list_core::{Rect, ReusableSlot};
use ethical_list_surface::SurfaceStats;

/// Assert that two extents differ by at most `tolerance`.
pub fn assert_approx_eq(actual: f32, expected: f32, tolerance: f32, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tolerance,
        "{msg}: expected {expected} (±{tolerance}), got {actual}"
    );
}

/// Assert that every edge of `actual` is within `tolerance` of `expected`.
pub fn assert_rect_approx_eq(actual: Rect, expected: Rect, tolerance: f32, msg: &str) {
    let edges = [
        ("x", actual.x, expected.x),
        ("y", actual.y, expected.y),
        ("width", actual.width, expected.width),
        ("height", actual.height, expected.height),
    ];
    for (edge, got, want) in edges {
        assert_approx_eq(got, want, tolerance, &format!("{msg} - {edge}"));
    }
}

/// Assert that the on-screen labels include `label`.
pub fn assert_shows(labels: &[String], label: &str, msg: &str) {
    assert!(
        labels.iter().any(|shown| shown == label),
        "{msg}: '{label}' is not on screen; showing {labels:?}"
    );
}

/// Assert that the on-screen labels do not include `label`.
pub fn assert_hides(labels: &[String], label: &str, msg: &str) {
    assert!(
        labels.iter().all(|shown| shown != label),
        "{msg}: '{label}' is unexpectedly on screen"
    );
}

/// Assert how many items are on screen.
pub fn assert_on_screen_count<T>(items: &[T], expected: usize, msg: &str) {
    assert_eq!(
        items.len(),
        expected,
        "{msg}: expected {expected} items on screen"
    );
}

/// Assert that a slot hosts exactly one child bound to `index`.
pub fn assert_slot_bound<C>(slot: &ReusableSlot<C>, index: usize, msg: &str) {
    let id = slot.id().raw();
    assert_eq!(slot.child_count(), 1, "{msg}: slot {id} child count");
    assert_eq!(slot.bound_index(), Some(index), "{msg}: slot {id} bound index");
}

/// Assert that every allocated slot is either in the window or queued.
pub fn assert_slots_accounted(stats: &SurfaceStats, msg: &str) {
    assert_eq!(
        stats.slots_in_use + stats.slots_in_pool,
        stats.slots_created,
        "{msg}: slots leaked ({stats:?})"
    );
}
