//! Infinite line through a segment (slope/intercept or vertical).
//!
//! Built on demand by `Intersection` and the ray caster; never cached.

use crate::error::GeomError;
use crate::point::Segment;

/// `y = slope·x + intercept`, or `x = x` when vertical.
///
/// Vertical iff the source segment's x-coordinates are exactly equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) enum Line {
    Vertical { x: f64 },
    Sloped { slope: f64, intercept: f64 },
}

impl Line {
    /// Fails on a zero-length segment instead of producing a NaN slope.
    ///
    /// The intercept is taken at the endpoint nearest the y-axis (the left one
    /// on ties). That keeps the rounding in `slope·x` smallest, makes it exact
    /// for segments starting on the axis, and gives `p0→p1` and `p1→p0`
    /// bit-identical lines.
    pub(crate) fn through(seg: &Segment) -> Result<Line, GeomError> {
        if seg.is_degenerate() {
            return Err(GeomError::DegenerateSegment { at: seg.p0 });
        }
        if seg.p0.x == seg.p1.x {
            return Ok(Line::Vertical { x: seg.p0.x });
        }
        let (p0, p1) = if seg.p0.x < seg.p1.x {
            (seg.p0, seg.p1)
        } else {
            (seg.p1, seg.p0)
        };
        let slope = (p1.y - p0.y) / (p1.x - p0.x);
        let anchor = if p1.x.abs() < p0.x.abs() { p1 } else { p0 };
        let intercept = anchor.y - slope * anchor.x;
        Ok(Line::Sloped { slope, intercept })
    }

    /// `y` at `x`; `None` for vertical lines.
    #[inline]
    pub(crate) fn eval(&self, x: f64) -> Option<f64> {
        match *self {
            Line::Vertical { .. } => None,
            Line::Sloped { slope, intercept } => Some(slope * x + intercept),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point;

    #[test]
    fn sloped_line() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(5.0, 2.0));
        match Line::through(&seg).unwrap() {
            Line::Sloped { slope, intercept } => {
                assert_eq!(slope, 2.0 / 5.0);
                assert_eq!(intercept, 0.0);
            }
            other => panic!("expected sloped line, got {other:?}"),
        }
    }

    #[test]
    fn vertical_line() {
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 2.0));
        let line = Line::through(&seg).unwrap();
        assert_eq!(line, Line::Vertical { x: 0.0 });
        assert!(line.eval(0.0).is_none());
    }

    #[test]
    fn degenerate_segment_rejected() {
        let p = Point::new(1.5, -3.0);
        assert_eq!(
            Line::through(&Segment::new(p, p)),
            Err(GeomError::DegenerateSegment { at: p })
        );
    }

    #[test]
    fn direction_does_not_change_line() {
        let a = Point::new(-3.0, 7.0);
        let b = Point::new(11.0, 0.1);
        assert_eq!(
            Line::through(&Segment::new(a, b)).unwrap(),
            Line::through(&Segment::new(b, a)).unwrap()
        );
    }

    #[test]
    fn intercept_exact_for_segments_on_the_axis() {
        // 15 - (15 / -13)·(-13) is not exactly zero in f64.
        let seg = Segment::new(Point::new(0.0, 0.0), Point::new(-13.0, 15.0));
        match Line::through(&seg).unwrap() {
            Line::Sloped { intercept, .. } => assert_eq!(intercept, 0.0),
            other => panic!("expected sloped line, got {other:?}"),
        }
    }

    #[test]
    fn eval_on_sloped_line() {
        let seg = Segment::new(Point::new(1.0, 1.0), Point::new(3.0, 5.0));
        let line = Line::through(&seg).unwrap();
        assert_eq!(line.eval(2.0), Some(3.0));
    }
}
