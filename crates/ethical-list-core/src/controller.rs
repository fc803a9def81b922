//! Recycling controller.
//!
//! Owns the current item snapshot and the render function, and binds
//! rendered items into slots on request. The controller never creates or
//! destroys slots; the surface hands them in, one bind at a time.
//!
//! Binding the final index of the current snapshot fires the end-of-list
//! callback once for that bind. Reusing a slot or re-querying the count never
//! fires it.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::error::BindError;
use crate::render::{HostedContent, ItemRenderer};
use crate::slot::{ReusableSlot, SlotBinding, ITEM_CELL};

/// Zero-argument handler invoked when the last item is bound.
pub type EndOfListCallback = Rc<dyn Fn()>;

/// What a collection surface needs from its data source.
pub trait CollectionDataSource {
    type Content;

    /// Number of items in the current snapshot.
    fn item_count(&self) -> usize;

    /// Renders the item at `index` without attaching it anywhere.
    ///
    /// Returns `None` for indices outside the current snapshot.
    fn content_for_index(&self, index: usize) -> Option<HostedContent<Self::Content>>;

    /// Renders the item at `index` into `slot`, replacing what it held.
    fn bind(
        &self,
        index: usize,
        slot: &mut ReusableSlot<Self::Content>,
    ) -> Result<SlotBinding, BindError>;
}

/// Counters kept across binds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BindStats {
    pub total_binds: usize,
    pub end_of_list_signals: usize,
}

pub struct RecyclingController<T, C> {
    items: Rc<[T]>,
    renderer: ItemRenderer<T, C>,
    on_last_item_appear: Option<EndOfListCallback>,
    stats: Cell<BindStats>,
}

impl<T, C> fmt::Debug for RecyclingController<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclingController")
            .field("count", &self.items.len())
            .field("has_end_of_list_handler", &self.on_last_item_appear.is_some())
            .field("stats", &self.stats.get())
            .finish()
    }
}

impl<T, C> RecyclingController<T, C> {
    pub fn new(items: impl Into<Rc<[T]>>, renderer: ItemRenderer<T, C>) -> Self {
        Self {
            items: items.into(),
            renderer,
            on_last_item_appear: None,
            stats: Cell::new(BindStats::default()),
        }
    }

    pub fn with_on_last_item_appear(mut self, callback: Option<EndOfListCallback>) -> Self {
        self.on_last_item_appear = callback;
        self
    }

    /// Replaces the snapshot. Does not re-render; the surface reloads.
    pub fn set_items(&mut self, items: impl Into<Rc<[T]>>) {
        self.items = items.into();
        log::trace!("controller snapshot replaced, {} items", self.items.len());
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn renderer(&self) -> &ItemRenderer<T, C> {
        &self.renderer
    }

    pub fn set_on_last_item_appear(&mut self, callback: Option<EndOfListCallback>) {
        self.on_last_item_appear = callback;
    }

    pub fn has_end_of_list_handler(&self) -> bool {
        self.on_last_item_appear.is_some()
    }

    pub fn stats(&self) -> BindStats {
        self.stats.get()
    }

    /// Renders the item at `index` without binding it.
    pub fn content_for_index(&self, index: usize) -> Option<HostedContent<C>> {
        self.items.get(index).map(|item| self.renderer.render(item))
    }

    /// Binds the item at `index` into `slot`.
    ///
    /// Fails without touching the slot if `index` is outside the current
    /// snapshot or the slot is not an item cell. Binding the last index
    /// fires the end-of-list callback before returning.
    pub fn bind(
        &self,
        index: usize,
        slot: &mut ReusableSlot<C>,
    ) -> Result<SlotBinding, BindError> {
        if slot.reuse_identifier() != ITEM_CELL {
            return Err(BindError::SlotKindMismatch {
                expected: ITEM_CELL,
                found: slot.reuse_identifier(),
            });
        }

        let count = self.items.len();
        let Some(item) = self.items.get(index) else {
            log::warn!("refusing to bind index {index}; snapshot has {count} items");
            return Err(BindError::IndexOutOfRange { index, count });
        };

        let hosted = self.renderer.render(item);
        let host = hosted.id();
        // Dropping the detached render releases it before the signal fires.
        drop(slot.attach(hosted, index));
        log::trace!("bound index {index} into slot {}", slot.id().raw());

        let mut stats = self.stats.get();
        stats.total_binds += 1;
        let is_last = index + 1 == count;
        if is_last && self.on_last_item_appear.is_some() {
            stats.end_of_list_signals += 1;
        }
        self.stats.set(stats);

        if is_last {
            self.signal_end_of_list();
        }

        Ok(SlotBinding { index, host })
    }

    fn signal_end_of_list(&self) {
        if let Some(callback) = self.on_last_item_appear.as_ref().map(Rc::clone) {
            log::debug!("last item bound, signalling end of list");
            callback();
        }
    }
}

impl<T, C> CollectionDataSource for RecyclingController<T, C> {
    type Content = C;

    fn item_count(&self) -> usize {
        self.count()
    }

    fn content_for_index(&self, index: usize) -> Option<HostedContent<C>> {
        RecyclingController::content_for_index(self, index)
    }

    fn bind(&self, index: usize, slot: &mut ReusableSlot<C>) -> Result<SlotBinding, BindError> {
        RecyclingController::bind(self, index, slot)
    }
}
