//! Basic geometry types for chrome hit testing.
//!
//! Two coordinate spaces are used throughout the crate:
//!
//! - **Screen coordinates** ([`ScreenPoint`], [`ScreenRect`]): integer physical
//!   pixels in the virtual desktop, as reported by the host window system.
//!   Hit-test queries arrive in this space.
//! - **Window-local coordinates** ([`Point`], [`Rect`], [`Size`]): `f32`
//!   logical-ish coordinates with the origin at the window's top-left corner.
//!   Interactive regions are expressed in this space.

use std::fmt;

/// A point in screen coordinates (physical pixels).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenPoint {
    pub x: i32,
    pub y: i32,
}

impl ScreenPoint {
    /// Create a new screen point.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for ScreenPoint {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A window rectangle in screen coordinates.
///
/// Stored as edges rather than origin/size because hit testing compares a
/// screen point against each edge band independently. The rectangle is
/// half-open: `left..right` horizontally and `top..bottom` vertically.
///
/// The all-zero rectangle is the sentinel for "no geometry available"
/// (invalid or destroyed window handle). See [`ScreenRect::EMPTY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenRect {
    /// X coordinate of the left edge.
    pub left: i32,
    /// Y coordinate of the top edge.
    pub top: i32,
    /// X coordinate one past the right edge.
    pub right: i32,
    /// Y coordinate one past the bottom edge.
    pub bottom: i32,
}

impl ScreenRect {
    /// The empty sentinel rectangle, meaning the geometry query failed.
    pub const EMPTY: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a rectangle from an origin and a size.
    #[inline]
    pub const fn from_origin_size(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            left: x,
            top: y,
            right: x + width,
            bottom: y + height,
        }
    }

    /// Width of the rectangle in pixels.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle in pixels.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Whether this rectangle has no area.
    ///
    /// An empty rectangle is the failure sentinel for geometry queries;
    /// the hit-test classifier maps it to [`HitZone::Transparent`].
    ///
    /// [`HitZone::Transparent`]: crate::hit_test::HitZone::Transparent
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.right <= self.left || self.bottom <= self.top
    }

    /// Check if a screen point lies inside this rectangle.
    #[inline]
    pub const fn contains(&self, point: ScreenPoint) -> bool {
        point.x >= self.left && point.x < self.right && point.y >= self.top && point.y < self.bottom
    }

    /// Convert a screen point to window-local coordinates.
    #[inline]
    pub fn to_local(&self, point: ScreenPoint) -> Point {
        Point::new((point.x - self.left) as f32, (point.y - self.top) as f32)
    }
}

impl fmt::Display for ScreenRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// A point in window-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a new point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// The origin point (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self { x, y }
    }
}

/// A size in window-local coordinates (width and height).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Create a new size.
    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Zero size.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Check if the size has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

/// A rectangle in window-local coordinates, defined by origin and size.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    /// Create a new rectangle from origin and size.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point { x, y },
            size: Size { width, height },
        }
    }

    /// Create a rectangle from two corners (min and max points).
    #[inline]
    pub fn from_corners(min: Point, max: Point) -> Self {
        Self {
            origin: min,
            size: Size::new(max.x - min.x, max.y - min.y),
        }
    }

    /// Check if a point is inside this rectangle (half-open on right/bottom).
    #[inline]
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.origin.x
            && point.x < self.origin.x + self.size.width
            && point.y >= self.origin.y
            && point.y < self.origin.y + self.size.height
    }
}

/// Non-client insets, in physical pixels, on each side of a window.
///
/// This design always uses [`Insets::ZERO`]: the entire window rectangle
/// becomes client area and the application draws its own chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    /// Zero insets on all sides.
    pub const ZERO: Self = Self {
        left: 0,
        top: 0,
        right: 0,
        bottom: 0,
    };

    /// Whether all four insets are zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.left == 0 && self.top == 0 && self.right == 0 && self.bottom == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_rect_dimensions() {
        let rect = ScreenRect::new(100, 50, 600, 450);
        assert_eq!(rect.width(), 500);
        assert_eq!(rect.height(), 400);
        assert!(!rect.is_empty());
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(ScreenRect::EMPTY.is_empty());
        assert!(ScreenRect::new(10, 10, 10, 50).is_empty());
        assert!(ScreenRect::new(10, 10, 50, 10).is_empty());
    }

    #[test]
    fn test_screen_rect_contains_half_open() {
        let rect = ScreenRect::new(0, 0, 500, 400);
        assert!(rect.contains(ScreenPoint::new(0, 0)));
        assert!(rect.contains(ScreenPoint::new(499, 399)));
        assert!(!rect.contains(ScreenPoint::new(500, 399)));
        assert!(!rect.contains(ScreenPoint::new(499, 400)));
    }

    #[test]
    fn test_to_local() {
        let rect = ScreenRect::new(100, 50, 600, 450);
        let local = rect.to_local(ScreenPoint::new(130, 70));
        assert_eq!(local, Point::new(30.0, 20.0));
    }

    #[test]
    fn test_local_rect_contains() {
        let rect = Rect::new(200.0, 180.0, 100.0, 40.0);
        assert!(rect.contains(Point::new(250.0, 200.0)));
        assert!(!rect.contains(Point::new(300.0, 200.0)));
        assert!(!rect.contains(Point::new(199.0, 200.0)));
    }

    #[test]
    fn test_insets_zero() {
        assert!(Insets::ZERO.is_zero());
        assert!(!Insets { left: 1, ..Insets::ZERO }.is_zero());
    }
}
