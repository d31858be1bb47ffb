//! Geometric primitives like points, sizes, and rectangles.
//!
//! All primitives use `f64` coordinates as reported by the host layout system.
//! Equality is rounding-tolerant: every component is rounded to the nearest
//! integer before comparison, so sub-pixel layout noise never counts as a change.

use serde::{Deserialize, Serialize};

/// Rounds a layout value to the nearest device pixel for comparison purposes.
#[inline]
pub fn round_px(value: f64) -> f64 {
    value.round()
}

/// Compares two layout values after rounding both to the nearest device pixel.
#[inline]
pub fn px_eq(a: f64, b: f64) -> bool {
    round_px(a) == round_px(b)
}

// --- Point ---

/// Represents a 2D point.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: f64,
    /// The y-coordinate of the point.
    pub y: f64,
}

impl Point {
    /// A point at the origin (0.0, 0.0).
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Creates a new point with the given coordinates.
    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        px_eq(self.x, other.x) && px_eq(self.y, other.y)
    }
}

// --- Size ---

/// Represents a 2D size (width and height).
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Size {
    /// The width component of the size.
    pub width: f64,
    /// The height component of the size.
    pub height: f64,
}

impl Size {
    /// A size of (0.0, 0.0).
    pub const ZERO: Size = Size::new(0.0, 0.0);

    /// Creates a new size with the given width and height.
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    /// Checks if the area is zero (width or height is zero).
    pub fn is_empty(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// Returns the per-axis minimum of `self` and `bounds`, never below zero.
    pub fn clamped_to(&self, bounds: &Size) -> Size {
        Size::new(
            self.width.min(bounds.width).max(0.0),
            self.height.min(bounds.height).max(0.0),
        )
    }
}

impl PartialEq for Size {
    fn eq(&self, other: &Self) -> bool {
        px_eq(self.width, other.width) && px_eq(self.height, other.height)
    }
}

// --- Rect ---

/// An axis-aligned rectangle. `x`/`y` is the top-left corner and y grows downwards.
///
/// `Rect` is `Copy`; every copy is independent storage, which is what the
/// placement engine relies on when it adjusts a local copy of the anchor.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Rect {
    /// The x-coordinate of the left edge.
    pub x: f64,
    /// The y-coordinate of the top edge.
    pub y: f64,
    /// The width of the rectangle.
    pub width: f64,
    /// The height of the rectangle.
    pub height: f64,
}

impl Rect {
    /// A rectangle at (0.0, 0.0) with size (0.0, 0.0).
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle from individual coordinate and dimension values.
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    /// Creates a new rectangle from an origin point and a size.
    pub const fn from_origin_size(origin: Point, size: Size) -> Self {
        Rect::new(origin.x, origin.y, size.width, size.height)
    }

    /// Returns the top-left corner.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the width and height.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the x-coordinate of the left edge. (Same as `x`)
    pub fn left(&self) -> f64 {
        self.x
    }

    /// Returns the y-coordinate of the top edge. (Same as `y`)
    pub fn top(&self) -> f64 {
        self.y
    }

    /// Calculates the x-coordinate of the right edge. (x + width)
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Calculates the y-coordinate of the bottom edge. (y + height)
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Calculates the center point of the rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Calculates the intersection of this rectangle with another.
    /// Returns `None` if they do not overlap with a positive area.
    pub fn intersection(&self, other: &Rect) -> Option<Rect> {
        let x1 = self.left().max(other.left());
        let y1 = self.top().max(other.top());
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        if x1 < x2 && y1 < y2 {
            Some(Rect::new(x1, y1, x2 - x1, y2 - y1))
        } else {
            None
        }
    }

    /// Shrinks the rectangle by the given amount on each side.
    /// Width and height never go below zero.
    pub fn inset(&self, left: f64, top: f64, right: f64, bottom: f64) -> Rect {
        Rect::new(
            self.x + left,
            self.y + top,
            (self.width - left - right).max(0.0),
            (self.height - top - bottom).max(0.0),
        )
    }

    /// Checks whether `inner` lies inside this rectangle, allowing each edge to
    /// overshoot by at most `tolerance`.
    pub fn contains_rect_within(&self, inner: &Rect, tolerance: f64) -> bool {
        inner.left() >= self.left() - tolerance
            && inner.top() >= self.top() - tolerance
            && inner.right() <= self.right() + tolerance
            && inner.bottom() <= self.bottom() + tolerance
    }
}

impl PartialEq for Rect {
    fn eq(&self, other: &Self) -> bool {
        px_eq(self.x, other.x)
            && px_eq(self.y, other.y)
            && px_eq(self.width, other.width)
            && px_eq(self.height, other.height)
    }
}
