//! Composition-root selection of the collection surface.

use ethical_list_core::{IntrinsicSize, RecyclingList, Size};

use crate::collection_spec::CollectionSpec;
use crate::surface::RecyclingCollectionSurface;
use crate::unsupported::UnsupportedSurface;
use crate::virtualized::VirtualizedSurface;

/// Which surface implementation backs a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceBackend {
    /// Software recycling surface.
    Virtualized,
    /// Placeholder for hosts without recycling support.
    Unsupported,
}

impl SurfaceBackend {
    /// Backend chosen at build time through the `virtualized` feature.
    pub fn detect() -> Self {
        if cfg!(feature = "virtualized") {
            SurfaceBackend::Virtualized
        } else {
            SurfaceBackend::Unsupported
        }
    }

    pub fn supports_recycling(self) -> bool {
        matches!(self, SurfaceBackend::Virtualized)
    }
}

/// Builds the surface for `backend`.
pub fn make_surface<T: 'static, C: IntrinsicSize + 'static>(
    backend: SurfaceBackend,
    list: &RecyclingList<T, C>,
    viewport: Size,
    spec: CollectionSpec,
) -> Box<dyn RecyclingCollectionSurface<T, C>> {
    match backend {
        SurfaceBackend::Virtualized => Box::new(VirtualizedSurface::new(list, viewport, spec)),
        SurfaceBackend::Unsupported => Box::new(UnsupportedSurface::new(list, viewport)),
    }
}

/// Builds the surface for the detected backend with default options.
pub fn surface_for<T: 'static, C: IntrinsicSize + 'static>(
    list: &RecyclingList<T, C>,
    viewport: Size,
) -> Box<dyn RecyclingCollectionSurface<T, C>> {
    make_surface(SurfaceBackend::detect(), list, viewport, CollectionSpec::default())
}
