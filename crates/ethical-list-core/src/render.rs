//! Item renderer adapter.
//!
//! Wraps the host's opaque `Item -> Content` function so its output can be
//! hosted inside a [`ReusableSlot`](crate::ReusableSlot). Every rendered value
//! is tagged with a fresh [`HostId`], which lets slots and tests tell two
//! renders of the same item apart.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use crate::geometry::Size;

/// Shared render function producing slot content for an item.
pub type RenderFn<T, C> = Rc<dyn Fn(&T) -> C>;

/// Content that can report its natural size when rendered in isolation.
pub trait IntrinsicSize {
    fn intrinsic_size(&self) -> Size;
}

/// Identity of one hosted render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HostId(u64);

impl HostId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "host#{}", self.0)
    }
}

thread_local! {
    static NEXT_HOST_ID: Cell<u64> = const { Cell::new(1) };
}

fn next_host_id() -> HostId {
    NEXT_HOST_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        HostId(id)
    })
}

/// Rendered content ready to be embedded in a slot.
#[derive(Debug)]
pub struct HostedContent<C> {
    id: HostId,
    content: C,
}

impl<C> HostedContent<C> {
    pub fn new(content: C) -> Self {
        Self {
            id: next_host_id(),
            content,
        }
    }

    pub fn id(&self) -> HostId {
        self.id
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn into_inner(self) -> C {
        self.content
    }
}

/// Stateless adapter between items and hosted content.
pub struct ItemRenderer<T, C> {
    content: RenderFn<T, C>,
}

impl<T, C> Clone for ItemRenderer<T, C> {
    fn clone(&self) -> Self {
        Self {
            content: Rc::clone(&self.content),
        }
    }
}

impl<T, C> fmt::Debug for ItemRenderer<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ItemRenderer").finish_non_exhaustive()
    }
}

impl<T, C> ItemRenderer<T, C> {
    pub fn new(content: impl Fn(&T) -> C + 'static) -> Self {
        Self {
            content: Rc::new(content),
        }
    }

    pub fn from_rc(content: RenderFn<T, C>) -> Self {
        Self { content }
    }

    /// Renders `item` into fresh hosted content.
    pub fn render(&self, item: &T) -> HostedContent<C> {
        HostedContent::new((self.content)(item))
    }

    /// Renders the first item in isolation and reports its intrinsic size.
    ///
    /// Only meant as an estimated item size for the initial layout. Returns
    /// `None` for an empty collection.
    pub fn measure(&self, items: &[T]) -> Option<Size>
    where
        C: IntrinsicSize,
    {
        let first = items.first()?;
        let size = (self.content)(first).intrinsic_size();
        log::trace!("measured first item at {}x{}", size.width, size.height);
        Some(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Block(f32);

    impl IntrinsicSize for Block {
        fn intrinsic_size(&self) -> Size {
            Size::new(self.0, self.0 / 2.0)
        }
    }

    #[test]
    fn render_tags_every_call_with_a_new_host() {
        let renderer = ItemRenderer::new(|item: &u32| item * 2);
        let first = renderer.render(&21);
        let second = renderer.render(&21);
        assert_eq!(*first.content(), 42);
        assert_eq!(*second.content(), 42);
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn measure_uses_first_item_only() {
        let renderer = ItemRenderer::new(|item: &f32| Block(*item));
        assert_eq!(
            renderer.measure(&[80.0, 10.0, 500.0]),
            Some(Size::new(80.0, 40.0))
        );
    }

    #[test]
    fn measure_of_empty_collection_is_none() {
        let renderer = ItemRenderer::new(|item: &f32| Block(*item));
        assert_eq!(renderer.measure(&[]), None);
    }
}
