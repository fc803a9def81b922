//! Flow layout for the virtualized surface.
//!
//! Items are laid out in lines along the main (scrolling) axis. Each line
//! holds as many items as fit across the cross axis, so a vertical surface
//! wider than two items becomes a grid. Every item uses the same estimated
//! size; an estimate with no cross extent stretches across the whole line.

use std::ops::Range;

use ethical_list_core::{Orientation, Rect, Size};

use crate::collection_spec::CollectionSpec;
use crate::viewport::DEFAULT_ITEM_SIZE_ESTIMATE;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FlowLayout {
    orientation: Orientation,
    item_size: Size,
    spacing: f32,
    padding_before: f32,
    padding_after: f32,
    cross_extent: f32,
}

impl FlowLayout {
    pub fn new(orientation: Orientation, estimated_item_size: Size, spec: &CollectionSpec) -> Self {
        Self {
            orientation,
            item_size: estimated_item_size,
            spacing: spec.spacing,
            padding_before: spec.content_padding_before,
            padding_after: spec.content_padding_after,
            cross_extent: 0.0,
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Sets the cross-axis extent available for wrapping.
    pub fn set_cross_extent(&mut self, cross_extent: f32) {
        self.cross_extent = cross_extent.max(0.0);
    }

    /// Main-axis extent of one item.
    pub fn item_main(&self) -> f32 {
        let main = self.orientation.main(self.item_size);
        if main > 0.0 {
            main
        } else {
            DEFAULT_ITEM_SIZE_ESTIMATE
        }
    }

    /// Cross-axis extent of one item.
    pub fn item_cross(&self) -> f32 {
        let cross = self.orientation.cross(self.item_size);
        if cross <= 0.0 || (self.cross_extent > 0.0 && cross > self.cross_extent) {
            self.cross_extent
        } else {
            cross
        }
    }

    pub fn items_per_line(&self) -> usize {
        let item_cross = self.item_cross();
        if item_cross <= 0.0 || self.cross_extent <= 0.0 {
            return 1;
        }
        let fit = ((self.cross_extent + self.spacing) / (item_cross + self.spacing)).floor();
        (fit as usize).max(1)
    }

    pub fn line_count(&self, count: usize) -> usize {
        count.div_ceil(self.items_per_line())
    }

    fn line_pitch(&self) -> f32 {
        self.item_main() + self.spacing
    }

    /// Total main-axis extent of `count` items including padding.
    pub fn content_extent(&self, count: usize) -> f32 {
        let lines = self.line_count(count);
        let body = if lines == 0 {
            0.0
        } else {
            lines as f32 * self.item_main() + (lines - 1) as f32 * self.spacing
        };
        self.padding_before + body + self.padding_after
    }

    /// Frame of the item at `index` in content coordinates.
    pub fn item_rect(&self, index: usize) -> Rect {
        let per_line = self.items_per_line();
        let line = index / per_line;
        let column = index % per_line;
        let item_cross = self.item_cross();
        let main = self.padding_before + line as f32 * self.line_pitch();
        let cross = column as f32 * (item_cross + self.spacing);
        Rect::from_origin_size(
            self.orientation.point(main, cross),
            self.orientation.size(self.item_main(), item_cross),
        )
    }

    /// Indices of items intersecting `[offset, offset + viewport)`.
    pub fn visible_range(&self, offset: f32, viewport: f32, count: usize) -> Range<usize> {
        if count == 0 || viewport <= 0.0 {
            return 0..0;
        }

        let pitch = self.line_pitch();
        let start = (offset - self.padding_before).max(0.0);
        let end = offset + viewport - self.padding_before;
        if end <= 0.0 {
            return 0..0;
        }

        let lines = self.line_count(count);
        let mut first_line = (start / pitch).floor() as usize;
        // Start falls in the spacing gap after that line.
        if start >= first_line as f32 * pitch + self.item_main() {
            first_line += 1;
        }
        let end_line = ((end / pitch).ceil() as usize).min(lines);
        let first_line = first_line.min(end_line);

        let per_line = self.items_per_line();
        (first_line * per_line).min(count)..(end_line * per_line).min(count)
    }
}
