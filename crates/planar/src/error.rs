use std::fmt;

use crate::point::Point;

/// Errors surfaced by the planar predicates.
///
/// Raised where the bad input is first seen (segment or shape validation) and
/// passed through `Intersection::of`, `Shape::intersects` and `Point::in_shape`
/// unchanged.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeomError {
    /// Ray casting needs a polygon with at least three vertices.
    InvalidShape { vertices: usize },
    /// Both endpoints of a segment coincide; it has no direction.
    DegenerateSegment { at: Point },
    /// The ray still passed through a vertex after the configured nudge budget.
    RayUnresolved { nudges: u32 },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::InvalidShape { vertices } => write!(
                f,
                "shape has {vertices} vertices (ray casting needs at least 3)"
            ),
            GeomError::DegenerateSegment { at } => write!(
                f,
                "segment endpoints coincide at ({}, {})",
                at.x, at.y
            ),
            GeomError::RayUnresolved { nudges } => {
                write!(f, "ray still touches a vertex after {nudges} nudges")
            }
        }
    }
}

impl std::error::Error for GeomError {}
