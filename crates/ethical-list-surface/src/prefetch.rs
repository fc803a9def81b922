//! Prefetch window for the virtualized surface.
//!
//! Binds a few items past the visible edge in the scroll direction so they
//! are ready before they scroll in. The last item may therefore be bound,
//! and the end-of-list signal raised, slightly before it is on screen.

use std::ops::Range;

/// How many items to bind beyond the visible range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrefetchStrategy {
    /// Number of items bound past the visible edge.
    pub prefetch_count: usize,

    pub enabled: bool,
}

impl Default for PrefetchStrategy {
    fn default() -> Self {
        Self::new(2)
    }
}

impl PrefetchStrategy {
    pub fn new(prefetch_count: usize) -> Self {
        Self {
            prefetch_count,
            enabled: prefetch_count > 0,
        }
    }

    pub fn disabled() -> Self {
        Self {
            prefetch_count: 0,
            enabled: false,
        }
    }

    fn effective_count(&self) -> usize {
        if self.enabled {
            self.prefetch_count
        } else {
            0
        }
    }
}

/// The indices bound ahead of the visible range after the last update.
///
/// Always contiguous and adjacent to the visible range: after it when
/// scrolling forward, before it when scrolling back.
#[derive(Debug, Default)]
pub struct PrefetchScheduler {
    pending: Range<usize>,
}

impl PrefetchScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes the prefetch range for `visible`.
    ///
    /// A non-negative `scroll_direction` looks ahead, a negative one looks
    /// back. Nothing is prefetched while nothing is visible.
    pub fn update(
        &mut self,
        visible: Range<usize>,
        total_items: usize,
        scroll_direction: f32,
        strategy: &PrefetchStrategy,
    ) {
        let count = strategy.effective_count();
        self.pending = if count == 0 || visible.is_empty() {
            0..0
        } else if scroll_direction >= 0.0 {
            let end = visible.end.saturating_add(count).min(total_items);
            visible.end.min(end)..end
        } else {
            visible.start.saturating_sub(count)..visible.start
        };
    }

    pub fn pending(&self) -> Range<usize> {
        self.pending.clone()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}
