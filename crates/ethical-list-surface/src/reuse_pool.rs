//! Reuse queue for slots.
//!
//! Slot kinds are registered up front by [`ReuseIdentifier`]. Dequeuing a
//! kind hands back a previously enqueued slot when one is waiting, and only
//! allocates a new slot otherwise, so the number of live slots tracks the
//! size of the window rather than the number of items.

use std::collections::VecDeque;

use ethical_list_core::{ReusableSlot, ReuseIdentifier, SlotId};

use crate::collections::map::IndexMap;
use crate::error::PoolError;

pub struct ReusePool<C> {
    queues: IndexMap<ReuseIdentifier, VecDeque<ReusableSlot<C>>>,
    next_slot_id: u64,
    created: usize,
    reused: usize,
}

impl<C> Default for ReusePool<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> std::fmt::Debug for ReusePool<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let queued: Vec<_> = self
            .queues
            .iter()
            .map(|(kind, queue)| (kind.as_str(), queue.len()))
            .collect();
        f.debug_struct("ReusePool")
            .field("queued", &queued)
            .field("created", &self.created)
            .field("reused", &self.reused)
            .finish()
    }
}

impl<C> ReusePool<C> {
    pub fn new() -> Self {
        Self {
            queues: IndexMap::default(),
            next_slot_id: 0,
            created: 0,
            reused: 0,
        }
    }

    /// Registers a slot kind. Registering twice is harmless.
    pub fn register(&mut self, kind: ReuseIdentifier) {
        self.queues.entry(kind).or_default();
    }

    pub fn is_registered(&self, kind: ReuseIdentifier) -> bool {
        self.queues.contains_key(&kind)
    }

    /// Registered kinds in registration order.
    pub fn registered_kinds(&self) -> impl Iterator<Item = ReuseIdentifier> + '_ {
        self.queues.keys().copied()
    }

    /// Hands out a slot of `kind`, reusing a queued one when available.
    pub fn dequeue(&mut self, kind: ReuseIdentifier) -> Result<ReusableSlot<C>, PoolError> {
        let queue = self
            .queues
            .get_mut(&kind)
            .ok_or(PoolError::UnregisteredKind(kind))?;

        if let Some(slot) = queue.pop_front() {
            self.reused += 1;
            return Ok(slot);
        }

        let id = SlotId::new(self.next_slot_id);
        self.next_slot_id += 1;
        self.created += 1;
        log::trace!("allocated slot {} for {kind}", id.raw());
        Ok(ReusableSlot::new(id, kind))
    }

    /// Returns a slot for later reuse. Its content stays until rebound.
    pub fn enqueue(&mut self, slot: ReusableSlot<C>) {
        match self.queues.get_mut(&slot.reuse_identifier()) {
            Some(queue) => queue.push_back(slot),
            None => log::warn!(
                "dropping slot {} of unregistered kind {}",
                slot.id().raw(),
                slot.reuse_identifier()
            ),
        }
    }

    /// Slots of `kind` waiting for reuse.
    pub fn queued(&self, kind: ReuseIdentifier) -> usize {
        self.queues.get(&kind).map_or(0, VecDeque::len)
    }

    pub fn created(&self) -> usize {
        self.created
    }

    pub fn reuse_count(&self) -> usize {
        self.reused
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ethical_list_core::ITEM_CELL;

    #[test]
    fn dequeue_allocates_then_reuses() {
        let mut pool: ReusePool<()> = ReusePool::new();
        pool.register(ITEM_CELL);

        let first = pool.dequeue(ITEM_CELL).expect("slot");
        let second = pool.dequeue(ITEM_CELL).expect("slot");
        assert_ne!(first.id(), second.id());
        assert_eq!(pool.created(), 2);

        let first_id = first.id();
        pool.enqueue(first);
        assert_eq!(pool.queued(ITEM_CELL), 1);

        let reused = pool.dequeue(ITEM_CELL).expect("slot");
        assert_eq!(reused.id(), first_id);
        assert_eq!(pool.created(), 2);
        assert_eq!(pool.reuse_count(), 1);
        assert_eq!(pool.queued(ITEM_CELL), 0);
    }

    #[test]
    fn unregistered_kind_is_an_error() {
        let mut pool: ReusePool<()> = ReusePool::new();
        let kind = ReuseIdentifier::new("Footer");
        assert_eq!(
            pool.dequeue(kind).map(|slot| slot.id()),
            Err(PoolError::UnregisteredKind(kind))
        );
    }

    #[test]
    fn kinds_keep_registration_order() {
        let mut pool: ReusePool<()> = ReusePool::new();
        let header = ReuseIdentifier::new("Header");
        pool.register(ITEM_CELL);
        pool.register(header);
        pool.register(ITEM_CELL);
        assert_eq!(pool.registered_kinds().collect::<Vec<_>>(), vec![ITEM_CELL, header]);
        assert!(pool.is_registered(header));
    }

    #[test]
    fn enqueued_slot_keeps_stale_content_until_rebound() {
        use ethical_list_core::HostedContent;

        let mut pool: ReusePool<&'static str> = ReusePool::new();
        pool.register(ITEM_CELL);
        let mut slot = pool.dequeue(ITEM_CELL).expect("slot");
        slot.attach(HostedContent::new("old"), 3);
        pool.enqueue(slot);

        let slot = pool.dequeue(ITEM_CELL).expect("slot");
        assert_eq!(slot.content(), Some(&"old"));
    }
}
