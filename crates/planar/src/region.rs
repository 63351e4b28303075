//! Conjunctive regions built from boundary predicates.
//!
//! A `Region` is an ordered list of `(x, y) -> bool` bounds. Membership is the
//! AND of all bounds, folded left to right from `true`; an empty region
//! contains every point.

use std::fmt;

use nalgebra::Vector2;

use crate::point::Point;

/// One boundary predicate over `(x, y)`.
pub type Bound = Box<dyn Fn(f64, f64) -> bool + Send + Sync>;

#[derive(Default)]
pub struct Region {
    bounds: Vec<Bound>,
}

impl Region {
    pub fn new(bounds: Vec<Bound>) -> Self {
        Self { bounds }
    }

    /// Append one more bound.
    pub fn with_bound<F>(mut self, bound: F) -> Self
    where
        F: Fn(f64, f64) -> bool + Send + Sync + 'static,
    {
        self.bounds.push(Box::new(bound));
        self
    }

    /// Closed half-plane `n · (x, y) <= c`.
    pub fn halfspace(n: Vector2<f64>, c: f64) -> Bound {
        Box::new(move |x, y| n.dot(&Vector2::new(x, y)) <= c)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bounds.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bounds.is_empty()
    }

    /// Composed predicate; build once and reuse across queries.
    pub fn filter(&self) -> impl Fn(f64, f64) -> bool + '_ {
        move |x, y| self.bounds.iter().fold(true, |acc, bound| acc && bound(x, y))
    }

    #[inline]
    pub fn contains_point(&self, p: &Point) -> bool {
        self.filter()(p.x, p.y)
    }
}

impl fmt::Debug for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Region")
            .field("bounds", &self.bounds.len())
            .finish()
    }
}
