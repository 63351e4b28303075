//! Planar geometry predicates over simple polygons.
//!
//! - `Intersection`: segment/segment classification (disjoint, crossing, collinear overlap).
//! - `Point::in_shape`: ray-casting point-in-polygon.
//! - `Shape::intersects`: all-pairs edge test between two polygons.
//! - `Region`: conjunction of `(x, y)` boundary predicates.
//!
//! Numerics
//! - All comparisons are exact `f64` comparisons. There is no tolerance; results
//!   for coordinates carrying rounding error from earlier arithmetic may flip.
//! - Every value is immutable after construction and no function keeps hidden
//!   state, so independent queries can run on any number of threads.

pub mod error;
pub mod intersection;
mod line;
pub mod point;
pub mod ray;
pub mod region;
pub mod sample;
pub mod shape;

pub use error::GeomError;
pub use intersection::Intersection;
pub use point::{Point, Segment};
pub use ray::RayCfg;
pub use region::{Bound, Region};
pub use shape::Shape;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::sample::{draw_star_polygon, DrawKey, Sides, StarCfg};
    pub use crate::{Bound, GeomError, Intersection, Point, RayCfg, Region, Segment, Shape};
}
