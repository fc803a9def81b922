use crate::geometry::{Point, Size};

/// Scroll and layout axis of a collection surface.
///
/// Fixed for the lifetime of one surface. The main axis is the scrolling
/// axis; items wrap along the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    /// Scrolls top to bottom.
    /// Main axis: vertical
    /// Cross axis: horizontal
    #[default]
    Vertical,

    /// Scrolls leading to trailing.
    /// Main axis: horizontal
    /// Cross axis: vertical
    Horizontal,
}

impl Orientation {
    /// Extent of `size` along the scrolling axis.
    #[inline]
    pub fn main(self, size: Size) -> f32 {
        match self {
            Orientation::Vertical => size.height,
            Orientation::Horizontal => size.width,
        }
    }

    /// Extent of `size` across the scrolling axis.
    #[inline]
    pub fn cross(self, size: Size) -> f32 {
        match self {
            Orientation::Vertical => size.width,
            Orientation::Horizontal => size.height,
        }
    }

    /// Builds a size from main/cross extents.
    #[inline]
    pub fn size(self, main: f32, cross: f32) -> Size {
        match self {
            Orientation::Vertical => Size::new(cross, main),
            Orientation::Horizontal => Size::new(main, cross),
        }
    }

    /// Builds a point from main/cross offsets.
    #[inline]
    pub fn point(self, main: f32, cross: f32) -> Point {
        match self {
            Orientation::Vertical => Point::new(cross, main),
            Orientation::Horizontal => Point::new(main, cross),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projects_sizes_along_axes() {
        let size = Size::new(100.0, 40.0);
        assert_eq!(Orientation::Vertical.main(size), 40.0);
        assert_eq!(Orientation::Vertical.cross(size), 100.0);
        assert_eq!(Orientation::Horizontal.main(size), 100.0);
        assert_eq!(Orientation::Horizontal.cross(size), 40.0);
    }

    #[test]
    fn rebuilds_size_and_point_from_components() {
        assert_eq!(Orientation::Vertical.size(40.0, 100.0), Size::new(100.0, 40.0));
        assert_eq!(Orientation::Horizontal.point(10.0, 2.0), Point::new(10.0, 2.0));
        assert_eq!(Orientation::Vertical.point(10.0, 2.0), Point::new(2.0, 10.0));
    }
}
