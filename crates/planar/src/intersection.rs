//! Segment/segment intersection with explicit degenerate cases.
//!
//! Both segments are lifted to their infinite lines and the pair is
//! classified once:
//!
//! | lines                          | outcome                                          |
//! |--------------------------------|--------------------------------------------------|
//! | both vertical, different `x`   | disjoint                                         |
//! | both vertical, same `x`        | tangent if the y-extents overlap, else disjoint  |
//! | one vertical                   | crossing at the vertical's `x`, if in both boxes |
//! | same slope, same intercept     | tangent if the x-extents overlap, else disjoint  |
//! | same slope, other intercept    | disjoint (parallel)                              |
//! | different slopes               | crossing at the solved point, if in both boxes   |
//!
//! Every comparison is exact `f64` equality or ordering. Inputs that are
//! equal in exact arithmetic but differ after rounding (e.g. derived
//! coordinates) may be classified as parallel or as crossing.

use crate::error::GeomError;
use crate::line::Line;
use crate::point::{Point, Segment};

/// Relationship between two segments.
///
/// A `Tangent` overlap has no single representative point, so only
/// `Crossing` carries coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Intersection {
    Disjoint,
    Crossing(Point),
    Tangent,
}

impl Intersection {
    /// Classify `s1` against `s2`.
    ///
    /// The result does not depend on argument order nor on the direction of
    /// either segment. Fails if either segment has coincident endpoints.
    pub fn of(s1: &Segment, s2: &Segment) -> Result<Intersection, GeomError> {
        let l1 = Line::through(s1)?;
        let l2 = Line::through(s2)?;
        let out = match (l1, l2) {
            (Line::Vertical { x: x1 }, Line::Vertical { x: x2 }) => {
                if x1 != x2 {
                    Intersection::Disjoint
                } else {
                    overlap(s1, s2, Point::in_y_range)
                }
            }
            (Line::Vertical { x }, Line::Sloped { slope, intercept })
            | (Line::Sloped { slope, intercept }, Line::Vertical { x }) => {
                crossing(Point::new(x, slope * x + intercept), s1, s2)
            }
            (
                Line::Sloped {
                    slope: m1,
                    intercept: b1,
                },
                Line::Sloped {
                    slope: m2,
                    intercept: b2,
                },
            ) => {
                if m1 == m2 {
                    if b1 == b2 {
                        overlap(s1, s2, Point::in_x_range)
                    } else {
                        Intersection::Disjoint
                    }
                } else {
                    // Negating both operands of a subtraction negates the rounded
                    // result, so `x` is the same for either argument order. `y` is
                    // read off the shallower line for the same reason.
                    let x = (b2 - b1) / (m1 - m2);
                    let y = if m1 < m2 { m1 * x + b1 } else { m2 * x + b2 };
                    crossing(Point::new(x, y), s1, s2)
                }
            }
        };
        Ok(out)
    }

    #[inline]
    pub fn did_intersect(&self) -> bool {
        !matches!(self, Intersection::Disjoint)
    }

    #[inline]
    pub fn is_tangent(&self) -> bool {
        matches!(self, Intersection::Tangent)
    }

    /// The single intersection point, present only for `Crossing`.
    #[inline]
    pub fn point(&self) -> Option<Point> {
        match *self {
            Intersection::Crossing(p) => Some(p),
            _ => None,
        }
    }

    #[inline]
    pub fn x(&self) -> Option<f64> {
        self.point().map(|p| p.x)
    }

    #[inline]
    pub fn y(&self) -> Option<f64> {
        self.point().map(|p| p.y)
    }
}

/// Candidate point on both lines; it is a crossing only inside both boxes.
#[inline]
fn crossing(p: Point, s1: &Segment, s2: &Segment) -> Intersection {
    if p.in_box(s1) && p.in_box(s2) {
        Intersection::Crossing(p)
    } else {
        Intersection::Disjoint
    }
}

/// Collinear segments overlap iff some endpoint of one lies in the other's extent.
fn overlap(s1: &Segment, s2: &Segment, in_extent: fn(&Point, &Segment) -> bool) -> Intersection {
    let hit = in_extent(&s2.p0, s1)
        || in_extent(&s2.p1, s1)
        || in_extent(&s1.p0, s2)
        || in_extent(&s1.p1, s2);
    if hit {
        Intersection::Tangent
    } else {
        Intersection::Disjoint
    }
}
