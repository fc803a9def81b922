//! Core of Ethical List: the recycling controller and its collaborators.
//!
//! This crate knows nothing about scrolling or geometry beyond the slot
//! bounds it is handed. It maps item indices to reusable slots, renders items
//! through an opaque content function, and raises the end-of-list signal when
//! the last item of the current snapshot is bound.

mod controller;
mod error;
mod geometry;
mod list;
mod orientation;
mod render;
mod slot;

pub use controller::*;
pub use error::*;
pub use geometry::*;
pub use list::*;
pub use orientation::*;
pub use render::*;
pub use slot::*;

pub mod prelude {
    pub use crate::controller::{CollectionDataSource, EndOfListCallback, RecyclingController};
    pub use crate::geometry::{Point, Rect, Size};
    pub use crate::list::RecyclingList;
    pub use crate::orientation::Orientation;
    pub use crate::render::{HostedContent, IntrinsicSize, ItemRenderer};
    pub use crate::slot::{ReusableSlot, ReuseIdentifier, SlotBinding, SlotId, ITEM_CELL};
}
