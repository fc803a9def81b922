//! Software recycling surface.
//!
//! Plays the part a native collection view plays on platforms that have
//! one: it owns the flow layout, the viewport and scroll offset, and the
//! reuse queue, and decides which indices are in the window (visible range
//! plus prefetch). On every layout pass it
//!
//! 1. clamps the scroll offset to the current content extent,
//! 2. recycles slots whose index left the window or no longer exists,
//! 3. binds a slot for every index that entered the window, ascending.
//!
//! Slots already bound to an index that stays in the window are left alone,
//! so scrolling back and forth near the end does not refire the end-of-list
//! signal. A reload recycles everything first and therefore rebinds every
//! index in the window.

use std::ops::Range;

use ethical_list_core::{
    CollectionDataSource, IntrinsicSize, Orientation, RecyclingController, RecyclingList,
    ReusableSlot, Size, ITEM_CELL,
};
use web_time::Instant;

use crate::collection_spec::CollectionSpec;
use crate::flow_layout::FlowLayout;
use crate::surface::{PlacedItem, Presentation, RecyclingCollectionSurface, SurfaceStats};
use crate::viewport::ViewportHandler;
use crate::window::{SlotWindow, WindowRequest};

pub struct VirtualizedSurface<T, C> {
    controller: RecyclingController<T, C>,
    spec: CollectionSpec,
    layout: FlowLayout,
    window: SlotWindow<C>,
    viewport: Size,
    viewport_main: f32,
    scroll_offset: f32,
    scroll_direction: f32,
    reloads: usize,
}

impl<T, C> std::fmt::Debug for VirtualizedSurface<T, C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VirtualizedSurface")
            .field("orientation", &self.layout.orientation())
            .field("count", &self.controller.count())
            .field("viewport", &self.viewport)
            .field("scroll_offset", &self.scroll_offset)
            .field("window", &self.window)
            .finish()
    }
}

impl<T, C: IntrinsicSize> VirtualizedSurface<T, C> {
    /// Builds a configured surface and runs the first layout pass.
    ///
    /// The estimated item size comes from `spec` if set, otherwise from
    /// measuring the first item; it is not recomputed afterwards.
    pub fn new(list: &RecyclingList<T, C>, viewport: Size, spec: CollectionSpec) -> Self {
        let estimated = spec
            .estimated_item_size
            .or_else(|| list.renderer().measure(list.items()))
            .unwrap_or(Size::ZERO);
        let layout = FlowLayout::new(list.orientation(), estimated, &spec);

        let mut surface = Self {
            controller: list.controller(),
            spec,
            layout,
            window: SlotWindow::new(),
            viewport: Size::ZERO,
            viewport_main: 0.0,
            scroll_offset: 0.0,
            scroll_direction: 0.0,
            reloads: 0,
        };
        log::debug!(
            "virtualized surface: {:?}, {} items, estimated item size {}x{}",
            list.orientation(),
            list.items().len(),
            estimated.width,
            estimated.height
        );
        surface.apply_viewport(viewport);
        surface.layout_pass();
        surface
    }
}

impl<T, C> VirtualizedSurface<T, C> {
    pub fn controller(&self) -> &RecyclingController<T, C> {
        &self.controller
    }

    fn data_source(&self) -> &dyn CollectionDataSource<Content = C> {
        &self.controller
    }

    pub fn layout(&self) -> &FlowLayout {
        &self.layout
    }

    /// Indices intersecting the viewport after the last layout pass.
    pub fn visible_range(&self) -> Range<usize> {
        self.window.visible()
    }

    /// The slot bound to `index`, if it is in the window.
    pub fn slot_for_index(&self, index: usize) -> Option<&ReusableSlot<C>> {
        self.window.slot(index)
    }

    pub fn max_scroll_offset(&self) -> f32 {
        let extent = self.layout.content_extent(self.data_source().item_count());
        (extent - self.viewport_main).max(0.0)
    }

    fn apply_viewport(&mut self, viewport: Size) {
        let orientation = self.layout.orientation();
        self.viewport = viewport;
        self.layout.set_cross_extent(orientation.cross(viewport));
        self.viewport_main = ViewportHandler::new(
            orientation.main(viewport),
            self.layout.item_main(),
            self.spec.spacing,
        )
        .effective_size();
    }

    fn layout_pass(&mut self) {
        self.scroll_offset = self.scroll_offset.clamp(0.0, self.max_scroll_offset());
        let request = WindowRequest {
            layout: &self.layout,
            offset: self.scroll_offset,
            viewport_main: self.viewport_main,
            scroll_direction: self.scroll_direction,
            prefetch: &self.spec.prefetch,
        };
        let source: &dyn CollectionDataSource<Content = C> = &self.controller;
        self.window.update(source, request);
    }
}

impl<T, C> RecyclingCollectionSurface<T, C> for VirtualizedSurface<T, C> {
    fn orientation(&self) -> Orientation {
        self.layout.orientation()
    }

    fn items_changed(&mut self, items: Vec<T>) {
        self.controller.set_items(items);
        self.reload_data();
    }

    fn reload_data(&mut self) {
        let started = Instant::now();
        let recycled = self.window.recycle_all();
        self.reloads += 1;
        self.layout_pass();
        log::debug!(
            "reload #{}: recycled {recycled} slots, bound {} of {} items in {:?}",
            self.reloads,
            self.window.slots_in_use(),
            self.data_source().item_count(),
            started.elapsed()
        );
    }

    fn item_count(&self) -> usize {
        self.data_source().item_count()
    }

    fn set_viewport_size(&mut self, size: Size) {
        if size == self.viewport {
            return;
        }
        self.apply_viewport(size);
        self.layout_pass();
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }

    /// Non-finite deltas are ignored.
    fn scroll_by(&mut self, delta: f32) -> f32 {
        if !delta.is_finite() {
            log::warn!("ignoring non-finite scroll delta {delta}");
            return 0.0;
        }
        let previous = self.scroll_offset;
        let target = (previous + delta).clamp(0.0, self.max_scroll_offset());
        let applied = target - previous;
        if applied == 0.0 {
            return 0.0;
        }
        self.scroll_offset = target;
        self.scroll_direction = delta;
        self.layout_pass();
        applied
    }

    /// Non-finite offsets are ignored.
    fn scroll_to(&mut self, offset: f32) {
        if !offset.is_finite() {
            log::warn!("ignoring non-finite scroll offset {offset}");
            return;
        }
        let delta = offset - self.scroll_offset;
        self.scroll_by(delta);
    }

    fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    fn bound_indices(&self) -> Vec<usize> {
        self.window.bound_indices()
    }

    fn presentation(&self) -> Presentation<'_, C> {
        let items = self
            .window
            .visible_slots()
            .filter_map(|(index, slot)| {
                Some(PlacedItem {
                    index,
                    slot: slot.id(),
                    frame: slot.bounds(),
                    content: slot.content()?,
                })
            })
            .collect();
        Presentation::Items(items)
    }

    fn stats(&self) -> SurfaceStats {
        let bind_stats = self.controller.stats();
        let pool = self.window.pool();
        SurfaceStats {
            slots_in_use: self.window.slots_in_use(),
            slots_in_pool: pool.queued(ITEM_CELL),
            slots_created: pool.created(),
            reuse_count: pool.reuse_count(),
            total_binds: bind_stats.total_binds,
            end_of_list_signals: bind_stats.end_of_list_signals,
            reloads: self.reloads,
        }
    }
}
