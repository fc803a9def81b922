//! The set of slots bound around the viewport.
//!
//! [`SlotWindow`] owns the reuse pool and the active slots. It only talks to
//! its data through [`CollectionDataSource`], so anything that can report a
//! count and bind an index can be laid out and recycled the same way.

use std::collections::BTreeMap;
use std::ops::Range;

use ethical_list_core::{CollectionDataSource, ReusableSlot, ITEM_CELL};
use smallvec::SmallVec;

use crate::collections::map::HashSet;
use crate::error::SurfaceError;
use crate::flow_layout::FlowLayout;
use crate::prefetch::{PrefetchScheduler, PrefetchStrategy};
use crate::reuse_pool::ReusePool;

type WindowVec = SmallVec<[usize; 32]>;

/// Scroll state a window update is computed from.
#[derive(Clone, Copy, Debug)]
pub struct WindowRequest<'a> {
    pub layout: &'a FlowLayout,
    /// Clamped main-axis scroll offset.
    pub offset: f32,
    pub viewport_main: f32,
    pub scroll_direction: f32,
    pub prefetch: &'a PrefetchStrategy,
}

pub struct SlotWindow<C> {
    pool: ReusePool<C>,
    active: BTreeMap<usize, ReusableSlot<C>>,
    prefetch: PrefetchScheduler,
    visible: Range<usize>,
}

impl<C> Default for SlotWindow<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for SlotWindow<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlotWindow")
            .field("visible", &self.visible)
            .field("active", &self.active.keys().collect::<Vec<_>>())
            .field("pool", &self.pool)
            .finish()
    }
}

impl<C> SlotWindow<C> {
    pub fn new() -> Self {
        let mut pool = ReusePool::new();
        pool.register(ITEM_CELL);
        Self {
            pool,
            active: BTreeMap::new(),
            prefetch: PrefetchScheduler::new(),
            visible: 0..0,
        }
    }

    /// Brings the bound slots in line with `request`.
    ///
    /// Slots whose index left the window go back to the pool. Slots that
    /// stay are re-framed but not rebound. Every index that entered the
    /// window is bound through `source`, in ascending order.
    pub fn update<D>(&mut self, source: &D, request: WindowRequest<'_>)
    where
        D: CollectionDataSource<Content = C> + ?Sized,
    {
        let count = source.item_count();
        let visible = request
            .layout
            .visible_range(request.offset, request.viewport_main, count);
        self.prefetch
            .update(visible.clone(), count, request.scroll_direction, request.prefetch);

        let mut window: WindowVec = visible.clone().collect();
        window.extend(self.prefetch.pending());
        window.sort_unstable();
        window.dedup();
        let wanted: HashSet<usize> = window.iter().copied().collect();

        let leaving: WindowVec = self
            .active
            .keys()
            .copied()
            .filter(|index| !wanted.contains(index))
            .collect();
        for index in leaving {
            if let Some(slot) = self.active.remove(&index) {
                log::trace!("recycling slot {} from index {index}", slot.id().raw());
                self.pool.enqueue(slot);
            }
        }

        for (index, slot) in self.active.iter_mut() {
            slot.set_bounds(request.layout.item_rect(*index));
        }

        for index in window {
            if self.active.contains_key(&index) {
                continue;
            }
            if let Err(err) = self.bind(source, request.layout, index) {
                log::warn!("skipping index {index}: {err}");
            }
        }

        self.visible = visible;
    }

    fn bind<D>(&mut self, source: &D, layout: &FlowLayout, index: usize) -> Result<(), SurfaceError>
    where
        D: CollectionDataSource<Content = C> + ?Sized,
    {
        let mut slot = self.pool.dequeue(ITEM_CELL)?;
        slot.set_bounds(layout.item_rect(index));
        match source.bind(index, &mut slot) {
            Ok(_) => {
                self.active.insert(index, slot);
                Ok(())
            }
            Err(err) => {
                self.pool.enqueue(slot);
                Err(err.into())
            }
        }
    }

    /// Sends every active slot back to the pool. Returns how many went.
    pub fn recycle_all(&mut self) -> usize {
        let recycled = self.active.len();
        while let Some((_, slot)) = self.active.pop_first() {
            self.pool.enqueue(slot);
        }
        recycled
    }

    /// Indices intersecting the viewport after the last update.
    pub fn visible(&self) -> Range<usize> {
        self.visible.clone()
    }

    pub fn slot(&self, index: usize) -> Option<&ReusableSlot<C>> {
        self.active.get(&index)
    }

    /// Bound slots with visible indices, ascending.
    pub fn visible_slots(&self) -> impl Iterator<Item = (usize, &ReusableSlot<C>)> + '_ {
        self.active
            .range(self.visible.clone())
            .map(|(index, slot)| (*index, slot))
    }

    pub fn bound_indices(&self) -> Vec<usize> {
        self.active.keys().copied().collect()
    }

    pub fn slots_in_use(&self) -> usize {
        self.active.len()
    }

    pub fn pool(&self) -> &ReusePool<C> {
        &self.pool
    }
}
