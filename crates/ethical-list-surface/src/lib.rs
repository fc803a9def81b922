//! Collection surfaces for Ethical List.
//!
//! A surface drives the [`RecyclingController`](ethical_list_core::RecyclingController)
//! from scroll and layout events. Two implementations exist:
//! - [`VirtualizedSurface`] - software recycling surface with a flow layout,
//!   prefetch window and reuse queue
//! - [`UnsupportedSurface`] - labeled placeholder for hosts without one
//!
//! Pick one at the composition root with [`make_surface`] and talk to it
//! through [`RecyclingCollectionSurface`].
//!
//! # Example
//!
//! ```rust,ignore
//! use ethical_list_core::{RecyclingList, Size};
//! use ethical_list_surface::surface_for;
//!
//! let list = RecyclingList::vertical(items, |item: &String| Tile::new(item))
//!     .on_last_item_appear(move || needs_more.set(true));
//! let mut surface = surface_for(&list, Size::new(360.0, 640.0));
//! surface.scroll_by(400.0);
//! ```

pub mod collections;

mod collection_spec;
mod error;
mod flow_layout;
mod platform;
mod prefetch;
mod reuse_pool;
mod surface;
mod unsupported;
mod viewport;
mod virtualized;
mod window;

pub use collection_spec::*;
pub use error::*;
pub use flow_layout::*;
pub use platform::*;
pub use prefetch::*;
pub use reuse_pool::*;
pub use surface::*;
pub use unsupported::*;
pub use viewport::*;
pub use virtualized::*;
pub use window::*;

pub mod prelude {
    pub use crate::collection_spec::CollectionSpec;
    pub use crate::platform::{make_surface, surface_for, SurfaceBackend};
    pub use crate::prefetch::PrefetchStrategy;
    pub use crate::surface::{
        PlacedItem, Presentation, RecyclingCollectionSurface, SurfaceStats,
    };
}
