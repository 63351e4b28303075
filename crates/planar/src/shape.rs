//! Polygons as ordered vertex lists.
//!
//! Edges are derived, never stored: edge `i` joins `points[i]` to
//! `points[(i + 1) % n]`. Winding order is free; nothing here depends on it.
//! Self-intersecting vertex lists are accepted but the predicates make no
//! promise about them.

use crate::error::GeomError;
use crate::intersection::Intersection;
use crate::point::{Point, Segment};

/// Simple polygon given by its vertices in boundary order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Shape {
    points: Vec<Point>,
}

impl Shape {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.points.len()
    }

    /// Closed edge cycle; one edge per vertex.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// Collected form of [`Shape::edges`].
    pub fn segments(&self) -> Vec<Segment> {
        self.edges().collect()
    }

    /// Same vertices, opposite winding.
    pub fn reversed(&self) -> Shape {
        let mut points = self.points.clone();
        points.reverse();
        Shape { points }
    }

    /// True iff some edge of `self` meets some edge of `other` (collinear
    /// overlaps included). Symmetric in its arguments.
    ///
    /// Zero-length edges in either shape fail the call even when another edge
    /// pair would already have answered `true`.
    pub fn intersects(&self, other: &Shape) -> Result<bool, GeomError> {
        self.check_edges()?;
        other.check_edges()?;
        for a in self.edges() {
            for b in other.edges() {
                if Intersection::of(&a, &b)?.did_intersect() {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }

    /// Ray-casting membership; see [`Point::in_shape`].
    #[inline]
    pub fn contains(&self, p: &Point) -> Result<bool, GeomError> {
        p.in_shape(self)
    }

    fn check_edges(&self) -> Result<(), GeomError> {
        match self.edges().find(Segment::is_degenerate) {
            Some(e) => Err(GeomError::DegenerateSegment { at: e.p0 }),
            None => Ok(()),
        }
    }
}

impl FromIterator<Point> for Shape {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Shape::new(iter.into_iter().collect())
    }
}

impl From<Vec<Point>> for Shape {
    fn from(points: Vec<Point>) -> Self {
        Shape::new(points)
    }
}
