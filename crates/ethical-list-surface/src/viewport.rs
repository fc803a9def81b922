//! Main-axis viewport extent with a fallback for unbounded parents.

/// Item extent used when the first item cannot be measured.
pub const DEFAULT_ITEM_SIZE_ESTIMATE: f32 = 48.0;

/// Extents beyond this are treated as unbounded.
const MAX_REASONABLE_VIEWPORT: f32 = 100_000.0;

/// Lines of items assumed visible under an unbounded viewport.
const FALLBACK_LINE_COUNT: f32 = 20.0;

/// Main-axis extent the surface lays out against.
///
/// A surface placed in an unconstrained parent gets an infinite (or absurdly
/// large) extent. Binding everything would defeat recycling, so a bounded
/// extent of [`FALLBACK_LINE_COUNT`] lines is used instead.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportHandler {
    effective_size: f32,
    unbounded: bool,
}

impl ViewportHandler {
    pub fn new(raw_extent: f32, item_extent: f32, spacing: f32) -> Self {
        if raw_extent.is_nan() || raw_extent == f32::NEG_INFINITY {
            return Self::bounded(0.0);
        }
        if raw_extent.is_infinite() || raw_extent > MAX_REASONABLE_VIEWPORT {
            let line = item_extent.max(DEFAULT_ITEM_SIZE_ESTIMATE) + spacing;
            let fallback = line * FALLBACK_LINE_COUNT;
            log::warn!(
                "collection surface got an unbounded viewport ({raw_extent}); \
                 laying out {FALLBACK_LINE_COUNT} lines ({fallback}) instead"
            );
            return Self {
                effective_size: fallback,
                unbounded: true,
            };
        }
        Self::bounded(raw_extent.max(0.0))
    }

    fn bounded(extent: f32) -> Self {
        Self {
            effective_size: extent,
            unbounded: false,
        }
    }

    #[inline]
    pub fn effective_size(&self) -> f32 {
        self.effective_size
    }

    #[inline]
    pub fn is_infinite(&self) -> bool {
        self.unbounded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_extent_is_used_as_is() {
        let viewport = ViewportHandler::new(640.0, 127.0, 4.0);
        assert_eq!(viewport.effective_size(), 640.0);
        assert!(!viewport.is_infinite());
    }

    #[test]
    fn unbounded_extent_falls_back_to_twenty_lines() {
        let viewport = ViewportHandler::new(f32::INFINITY, 100.0, 10.0);
        assert!(viewport.is_infinite());
        assert_eq!(viewport.effective_size(), 2_200.0);
    }

    #[test]
    fn tiny_items_use_default_estimate_in_fallback() {
        let viewport = ViewportHandler::new(250_000.0, 12.0, 0.0);
        assert!(viewport.is_infinite());
        assert_eq!(viewport.effective_size(), DEFAULT_ITEM_SIZE_ESTIMATE * 20.0);
    }

    #[test]
    fn negative_and_nan_extents_collapse_to_zero() {
        assert_eq!(ViewportHandler::new(-10.0, 50.0, 0.0).effective_size(), 0.0);
        assert_eq!(ViewportHandler::new(f32::NEG_INFINITY, 50.0, 0.0).effective_size(), 0.0);
        assert_eq!(ViewportHandler::new(f32::NAN, 50.0, 0.0).effective_size(), 0.0);
    }
}
