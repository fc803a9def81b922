//! The collection surface interface.
//!
//! A surface owns the recycling controller and drives it from scroll and
//! layout events. Hosts talk to any implementation through
//! [`RecyclingCollectionSurface`]; which implementation they get is decided
//! once, at the composition root (see [`make_surface`](crate::make_surface)).

use ethical_list_core::{Orientation, Rect, Size, SlotId};

/// An item currently on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlacedItem<'a, C> {
    pub index: usize,
    pub slot: SlotId,
    /// Frame in content coordinates.
    pub frame: Rect,
    pub content: &'a C,
}

/// What a surface currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Presentation<'a, C> {
    Items(Vec<PlacedItem<'a, C>>),
    Unsupported { label: &'static str },
}

impl<'a, C> Presentation<'a, C> {
    /// On-screen items, empty for the placeholder.
    pub fn items(&self) -> &[PlacedItem<'a, C>] {
        match self {
            Presentation::Items(items) => items,
            Presentation::Unsupported { .. } => &[],
        }
    }

    pub fn is_unsupported(&self) -> bool {
        matches!(self, Presentation::Unsupported { .. })
    }
}

/// Statistics about slot recycling.
///
/// Used for testing and debugging virtualization behavior.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceStats {
    /// Slots currently bound inside the window.
    pub slots_in_use: usize,
    /// Slots waiting in the reuse queue.
    pub slots_in_pool: usize,
    /// Slots ever allocated.
    pub slots_created: usize,
    /// Dequeues served from the reuse queue.
    pub reuse_count: usize,
    pub total_binds: usize,
    pub end_of_list_signals: usize,
    pub reloads: usize,
}

pub trait RecyclingCollectionSurface<T, C> {
    fn orientation(&self) -> Orientation;

    /// Replaces the item snapshot and reloads everything.
    fn items_changed(&mut self, items: Vec<T>);

    /// Re-queries count and content for every slot in the window.
    fn reload_data(&mut self);

    fn item_count(&self) -> usize;

    fn set_viewport_size(&mut self, size: Size);

    fn viewport_size(&self) -> Size;

    /// Scrolls along the main axis and returns the distance actually moved.
    fn scroll_by(&mut self, delta: f32) -> f32;

    fn scroll_to(&mut self, offset: f32);

    fn scroll_offset(&self) -> f32;

    /// Indices currently bound to slots, visible or prefetched, ascending.
    fn bound_indices(&self) -> Vec<usize>;

    fn presentation(&self) -> Presentation<'_, C>;

    fn stats(&self) -> SurfaceStats;
}
