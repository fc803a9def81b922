use ethical_list_core::Size;

use crate::prefetch::PrefetchStrategy;

/// Layout and recycling options for a collection surface.
#[derive(Clone, Debug, PartialEq)]
pub struct CollectionSpec {
    /// Spacing between lines and between items within a line.
    pub spacing: f32,
    /// Main-axis padding before the first line.
    pub content_padding_before: f32,
    /// Main-axis padding after the last line.
    pub content_padding_after: f32,
    /// Items bound beyond the visible range.
    pub prefetch: PrefetchStrategy,
    /// Overrides the size measured from the first item.
    pub estimated_item_size: Option<Size>,
}

impl Default for CollectionSpec {
    fn default() -> Self {
        Self {
            spacing: 0.0,
            content_padding_before: 0.0,
            content_padding_after: 0.0,
            prefetch: PrefetchStrategy::default(),
            estimated_item_size: None,
        }
    }
}

impl CollectionSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spacing(mut self, spacing: f32) -> Self {
        self.spacing = spacing.max(0.0);
        self
    }

    pub fn content_padding(mut self, before: f32, after: f32) -> Self {
        self.content_padding_before = before.max(0.0);
        self.content_padding_after = after.max(0.0);
        self
    }

    /// Sets the same padding before and after the content.
    pub fn content_padding_all(self, padding: f32) -> Self {
        self.content_padding(padding, padding)
    }

    pub fn prefetch(mut self, strategy: PrefetchStrategy) -> Self {
        self.prefetch = strategy;
        self
    }

    pub fn estimated_item_size(mut self, size: Size) -> Self {
        self.estimated_item_size = Some(size);
        self
    }
}
