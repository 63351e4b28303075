//! Points and segments in the plane.
//!
//! - `Point`: immutable `(x, y)` pair in `f64`, with closed-interval range tests.
//! - `Segment`: ordered pair of points; never stored by `Shape`, always derived.
//!
//! Comparisons are exact; there is no tolerance anywhere in this crate.

use nalgebra::Vector2;

/// A coordinate in the plane.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// `x ∈ [min(p0.x, p1.x), max(p0.x, p1.x)]`.
    #[inline]
    pub fn in_x_range(&self, seg: &Segment) -> bool {
        let (lo, hi) = seg.x_bounds();
        lo <= self.x && self.x <= hi
    }

    /// `y ∈ [min(p0.y, p1.y), max(p0.y, p1.y)]`.
    #[inline]
    pub fn in_y_range(&self, seg: &Segment) -> bool {
        let (lo, hi) = seg.y_bounds();
        lo <= self.y && self.y <= hi
    }

    /// Inside the axis-aligned box spanned by `seg` (both ranges).
    #[inline]
    pub(crate) fn in_box(&self, seg: &Segment) -> bool {
        self.in_x_range(seg) && self.in_y_range(seg)
    }
}

impl From<Vector2<f64>> for Point {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl From<Point> for Vector2<f64> {
    #[inline]
    fn from(p: Point) -> Self {
        Vector2::new(p.x, p.y)
    }
}

impl From<(f64, f64)> for Point {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Ordered pair of endpoints. `p0 == p1` is representable here but rejected
/// as soon as a line is built from it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p0: Point,
    pub p1: Point,
}

impl Segment {
    #[inline]
    pub fn new(p0: Point, p1: Point) -> Self {
        Self { p0, p1 }
    }

    #[inline]
    pub fn x_bounds(&self) -> (f64, f64) {
        (self.p0.x.min(self.p1.x), self.p0.x.max(self.p1.x))
    }

    #[inline]
    pub fn y_bounds(&self) -> (f64, f64) {
        (self.p0.y.min(self.p1.y), self.p0.y.max(self.p1.y))
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.p0 == self.p1
    }
}
