//! Ray-casting point-in-polygon test.
//!
//! Model
//! - Cast a finite ray from the query point to `(x + reach·maxDx, y + reach·maxDy)`,
//!   where `maxDx`, `maxDy` are the largest coordinate offsets to any vertex. With
//!   `reach > 1` the far end lies outside the shape's bounding box.
//! - While the ray's infinite line passes exactly through a vertex, raise the far
//!   end by `nudge` and retry. This pivots the ray around the query point.
//! - Count edges the ray meets; odd means inside.
//!
//! Termination
//! - With the default `max_nudges: None` the nudge loop is unbounded. It ends for
//!   any input where finitely many pivots hit a vertex; it does not end if the
//!   far end's `y` is so large that adding `nudge` no longer changes it.
//!   This is the only operation in the crate that may not terminate.
//!
//! Rounding
//! - Vertex hits are exact `==` comparisons. When one vertex supplies both
//!   `maxDx` and `maxDy`, it lies on the first ray in exact arithmetic; if
//!   rounding moves the line's value at that vertex off its `y`, the ray is
//!   not nudged and passes through the vertex with a possibly wrong parity.
//!   Axis-aligned rectangles always aim the first ray at a corner this way.
//! - Points on an edge get no guaranteed answer.

use tracing::{debug, trace};

use crate::error::GeomError;
use crate::intersection::Intersection;
use crate::line::Line;
use crate::point::{Point, Segment};
use crate::shape::Shape;

/// Ray construction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCfg {
    /// Far-end multiplier applied to the max vertex offsets.
    pub reach: f64,
    /// Step added to the far end's `y` when the ray line hits a vertex.
    pub nudge: f64,
    /// Give up with `RayUnresolved` after this many nudges; `None` never gives up.
    pub max_nudges: Option<u32>,
}

impl Default for RayCfg {
    fn default() -> Self {
        Self {
            reach: 2.0,
            nudge: 1.0,
            max_nudges: None,
        }
    }
}

impl Point {
    /// Ray-casting membership with [`RayCfg::default`].
    ///
    /// Fails with `InvalidShape` below three vertices and with
    /// `DegenerateSegment` if the shape repeats a vertex consecutively.
    pub fn in_shape(&self, shape: &Shape) -> Result<bool, GeomError> {
        self.in_shape_with(shape, RayCfg::default())
    }

    pub fn in_shape_with(&self, shape: &Shape, cfg: RayCfg) -> Result<bool, GeomError> {
        let vertices = shape.points();
        if vertices.len() < 3 {
            return Err(GeomError::InvalidShape {
                vertices: vertices.len(),
            });
        }
        // A ray starting on a vertex touches it after every nudge; answer here
        // so the loop ends.
        if vertices.contains(self) {
            return Ok(true);
        }
        let (max_dx, max_dy) = vertices.iter().fold((0.0_f64, 0.0_f64), |(dx, dy), p| {
            (dx.max((p.x - self.x).abs()), dy.max((p.y - self.y).abs()))
        });
        if max_dx == 0.0 {
            // All vertices on the vertical through `self`: zero width, no interior.
            return Ok(false);
        }

        let far_x = self.x + cfg.reach * max_dx;
        let mut far_y = self.y + cfg.reach * max_dy;
        let mut ray = Segment::new(*self, Point::new(far_x, far_y));
        let mut nudges = 0u32;
        while touches_vertex(&ray, vertices)? {
            if cfg.max_nudges.is_some_and(|limit| nudges >= limit) {
                return Err(GeomError::RayUnresolved { nudges });
            }
            far_y += cfg.nudge;
            nudges += 1;
            ray = Segment::new(*self, Point::new(far_x, far_y));
        }
        if nudges > 0 {
            debug!(nudges, far_y, "ray nudged off shape vertices");
        }

        let mut crossings = 0usize;
        for edge in shape.edges() {
            if Intersection::of(&edge, &ray)?.did_intersect() {
                crossings += 1;
            }
        }
        trace!(crossings, x = self.x, y = self.y, "ray cast");
        Ok(crossings % 2 == 1)
    }
}

/// Does the ray's infinite line pass exactly through any vertex?
fn touches_vertex(ray: &Segment, vertices: &[Point]) -> Result<bool, GeomError> {
    let line = Line::through(ray)?;
    Ok(vertices.iter().any(|p| line.eval(p.x) == Some(p.y)))
}
