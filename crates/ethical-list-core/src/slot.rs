//! Reusable slots.
//!
//! A [`ReusableSlot`] is a container owned by the pooling layer that hosts at
//! most one rendered item at a time. Rebinding always detaches the previous
//! content before the new content goes in, so a recycled slot can never show
//! two items at once.

use std::fmt;

use crate::geometry::Rect;
use crate::render::{HostId, HostedContent};

/// Stable tag identifying a kind of slot to the reuse pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReuseIdentifier(&'static str);

impl ReuseIdentifier {
    pub const fn new(raw: &'static str) -> Self {
        Self(raw)
    }

    pub fn as_str(self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ReuseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// The one slot kind used for item cells.
pub const ITEM_CELL: ReuseIdentifier = ReuseIdentifier::new("CollectionCell");

/// Pool-assigned identifier of a slot instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SlotId(pub u64);

impl SlotId {
    #[inline]
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Which index and which hosted render a slot currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotBinding {
    pub index: usize,
    pub host: HostId,
}

#[derive(Debug)]
pub struct ReusableSlot<C> {
    id: SlotId,
    reuse_identifier: ReuseIdentifier,
    bounds: Rect,
    hosted: Option<HostedContent<C>>,
    binding: Option<SlotBinding>,
    attach_count: usize,
}

impl<C> ReusableSlot<C> {
    pub fn new(id: SlotId, reuse_identifier: ReuseIdentifier) -> Self {
        Self {
            id,
            reuse_identifier,
            bounds: Rect::default(),
            hosted: None,
            binding: None,
            attach_count: 0,
        }
    }

    pub fn id(&self) -> SlotId {
        self.id
    }

    pub fn reuse_identifier(&self) -> ReuseIdentifier {
        self.reuse_identifier
    }

    /// Frame of the slot in content coordinates.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    pub fn binding(&self) -> Option<SlotBinding> {
        self.binding
    }

    pub fn bound_index(&self) -> Option<usize> {
        self.binding.map(|binding| binding.index)
    }

    pub fn content(&self) -> Option<&C> {
        self.hosted.as_ref().map(HostedContent::content)
    }

    /// Number of hosted children. Never more than one.
    pub fn child_count(&self) -> usize {
        usize::from(self.hosted.is_some())
    }

    /// Total number of attaches over the slot's lifetime.
    pub fn attach_count(&self) -> usize {
        self.attach_count
    }

    /// Frame of the hosted content in slot-local coordinates.
    ///
    /// Content is pinned to all four edges, so it always covers the slot.
    pub fn content_frame(&self) -> Option<Rect> {
        self.hosted
            .as_ref()
            .map(|_| Rect::from_size(self.bounds.size()))
    }

    /// Replaces the hosted content.
    ///
    /// The previous content is fully detached first and handed back to the
    /// caller; the new content is then inserted and pinned edge to edge.
    pub fn attach(&mut self, content: HostedContent<C>, index: usize) -> Option<HostedContent<C>> {
        let previous = self.detach();
        let host = content.id();
        self.hosted = Some(content);
        self.binding = Some(SlotBinding { index, host });
        self.attach_count += 1;
        previous
    }

    /// Removes the hosted content, leaving the slot empty.
    pub fn detach(&mut self) -> Option<HostedContent<C>> {
        self.binding = None;
        let previous = self.hosted.take();
        if let Some(hosted) = &previous {
            log::trace!("slot {} detached {}", self.id.raw(), hosted.id());
        }
        previous
    }
}
