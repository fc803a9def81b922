use std::marker::PhantomData;

use ethical_list_core::{Orientation, RecyclingList, Size};

use crate::surface::{Presentation, RecyclingCollectionSurface, SurfaceStats};

/// Label shown where no recycling surface is available.
pub const UNSUPPORTED_PLATFORM_LABEL: &str = "Unsupported platform";

/// Placeholder surface for hosts without a recycling capability.
///
/// Accepts every update so host code stays the same on all platforms, but
/// never binds an item and never raises the end-of-list signal.
#[derive(Debug)]
pub struct UnsupportedSurface<T, C> {
    orientation: Orientation,
    item_count: usize,
    viewport: Size,
    _marker: PhantomData<fn(T) -> C>,
}

impl<T, C> UnsupportedSurface<T, C> {
    pub fn new(list: &RecyclingList<T, C>, viewport: Size) -> Self {
        log::warn!("no recycling collection surface on this platform; showing placeholder");
        Self {
            orientation: list.orientation(),
            item_count: list.items().len(),
            viewport,
            _marker: PhantomData,
        }
    }
}

impl<T, C> RecyclingCollectionSurface<T, C> for UnsupportedSurface<T, C> {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn items_changed(&mut self, items: Vec<T>) {
        self.item_count = items.len();
    }

    fn reload_data(&mut self) {}

    fn item_count(&self) -> usize {
        self.item_count
    }

    fn set_viewport_size(&mut self, size: Size) {
        self.viewport = size;
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    fn scroll_by(&mut self, _delta: f32) -> f32 {
        0.0
    }

    fn scroll_to(&mut self, _offset: f32) {}

    fn scroll_offset(&self) -> f32 {
        0.0
    }

    fn bound_indices(&self) -> Vec<usize> {
        Vec::new()
    }

    fn presentation(&self) -> Presentation<'_, C> {
        Presentation::Unsupported {
            label: UNSUPPORTED_PLATFORM_LABEL,
        }
    }

    fn stats(&self) -> SurfaceStats {
        SurfaceStats::default()
    }
}
