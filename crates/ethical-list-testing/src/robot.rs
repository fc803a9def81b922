//! Scroll robot for driving collection surfaces in tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use ethical_list_testing::{numbered_items, text_list, ScrollRobot};
//!
//! let list = text_list(numbered_items(0..=300), Orientation::Vertical, Size::new(100.0, 100.0));
//! let mut robot = ScrollRobot::virtualized(&list, Size::new(100.0, 500.0));
//! robot.scroll_to_end();
//! assert!(robot.visible_texts().contains(&"300".to_string()));
//! ```

use ethical_list_core::{RecyclingList, Size};
use ethical_list_surface::{
    make_surface, CollectionSpec, RecyclingCollectionSurface, SurfaceBackend, SurfaceStats,
};

use crate::testing::TextCell;

/// Upper bound on scroll steps, so a broken surface cannot hang a test.
const MAX_SCROLL_STEPS: usize = 10_000;

pub struct ScrollRobot<T> {
    surface: Box<dyn RecyclingCollectionSurface<T, TextCell>>,
}

impl<T: 'static> ScrollRobot<T> {
    pub fn new(surface: Box<dyn RecyclingCollectionSurface<T, TextCell>>) -> Self {
        Self { surface }
    }

    pub fn virtualized(list: &RecyclingList<T, TextCell>, viewport: Size) -> Self {
        Self::with_spec(list, viewport, CollectionSpec::default())
    }

    pub fn with_spec(
        list: &RecyclingList<T, TextCell>,
        viewport: Size,
        spec: CollectionSpec,
    ) -> Self {
        Self::new(make_surface(SurfaceBackend::Virtualized, list, viewport, spec))
    }

    pub fn surface(&self) -> &dyn RecyclingCollectionSurface<T, TextCell> {
        &*self.surface
    }

    pub fn surface_mut(&mut self) -> &mut dyn RecyclingCollectionSurface<T, TextCell> {
        &mut *self.surface
    }

    /// Scrolls by `delta` and returns the distance moved.
    pub fn scroll_by(&mut self, delta: f32) -> f32 {
        self.surface.scroll_by(delta)
    }

    /// Scrolls forward in `step` increments until the surface stops moving.
    ///
    /// Returns the number of steps that moved.
    pub fn fling_to_end(&mut self, step: f32) -> usize {
        let mut steps = 0;
        while steps < MAX_SCROLL_STEPS && self.surface.scroll_by(step) != 0.0 {
            steps += 1;
        }
        steps
    }

    /// Jumps straight to the end.
    pub fn scroll_to_end(&mut self) {
        self.surface.scroll_to(f32::MAX);
    }

    pub fn scroll_to_start(&mut self) {
        self.surface.scroll_to(0.0);
    }

    pub fn items_changed(&mut self, items: Vec<T>) {
        self.surface.items_changed(items);
    }

    pub fn visible_indices(&self) -> Vec<usize> {
        self.surface
            .presentation()
            .items()
            .iter()
            .map(|placed| placed.index)
            .collect()
    }

    pub fn visible_texts(&self) -> Vec<String> {
        self.surface
            .presentation()
            .items()
            .iter()
            .map(|placed| placed.content.text.clone())
            .collect()
    }

    pub fn bound_indices(&self) -> Vec<usize> {
        self.surface.bound_indices()
    }

    pub fn stats(&self) -> SurfaceStats {
        self.surface.stats()
    }
}
