//! Host-facing list configuration.
//!
//! [`RecyclingList`] is the value a host builds to describe a list: the
//! items, the scroll orientation, the per-item content function and the
//! optional end-of-list handler. It is cheap to clone and follows value
//! semantics, so builder-style updates never affect the original.

use std::fmt;
use std::rc::Rc;

use crate::controller::{EndOfListCallback, RecyclingController};
use crate::orientation::Orientation;
use crate::render::{ItemRenderer, RenderFn};

pub struct RecyclingList<T, C> {
    items: Rc<[T]>,
    orientation: Orientation,
    on_last_item_appear: Option<EndOfListCallback>,
    content: RenderFn<T, C>,
}

impl<T, C> Clone for RecyclingList<T, C> {
    fn clone(&self) -> Self {
        Self {
            items: Rc::clone(&self.items),
            orientation: self.orientation,
            on_last_item_appear: self.on_last_item_appear.clone(),
            content: Rc::clone(&self.content),
        }
    }
}

impl<T, C> fmt::Debug for RecyclingList<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclingList")
            .field("items", &self.items.len())
            .field("orientation", &self.orientation)
            .field("on_last_item_appear", &self.on_last_item_appear.is_some())
            .finish_non_exhaustive()
    }
}

impl<T, C> RecyclingList<T, C> {
    pub fn new(
        items: impl Into<Rc<[T]>>,
        orientation: Orientation,
        content: impl Fn(&T) -> C + 'static,
    ) -> Self {
        Self {
            items: items.into(),
            orientation,
            on_last_item_appear: None,
            content: Rc::new(content),
        }
    }

    pub fn vertical(items: impl Into<Rc<[T]>>, content: impl Fn(&T) -> C + 'static) -> Self {
        Self::new(items, Orientation::Vertical, content)
    }

    pub fn horizontal(items: impl Into<Rc<[T]>>, content: impl Fn(&T) -> C + 'static) -> Self {
        Self::new(items, Orientation::Horizontal, content)
    }

    /// Returns a copy whose end-of-list handler is `action`.
    pub fn on_last_item_appear(&self, action: impl Fn() + 'static) -> Self {
        let mut copy = self.clone();
        copy.on_last_item_appear = Some(Rc::new(action));
        copy
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn end_of_list_callback(&self) -> Option<&EndOfListCallback> {
        self.on_last_item_appear.as_ref()
    }

    pub fn renderer(&self) -> ItemRenderer<T, C> {
        ItemRenderer::from_rc(Rc::clone(&self.content))
    }

    /// Builds a controller over this list's snapshot and handler.
    pub fn controller(&self) -> RecyclingController<T, C> {
        RecyclingController::new(Rc::clone(&self.items), self.renderer())
            .with_on_last_item_appear(self.on_last_item_appear.clone())
    }
}
