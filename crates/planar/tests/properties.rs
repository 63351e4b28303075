//! Property tests over small integer coordinates.
//!
//! Integer inputs keep the arithmetic exact enough that the properties below
//! hold bit-for-bit; they are not claims about arbitrary floats.

use planar::prelude::*;
use proptest::prelude::*;

fn pt() -> impl Strategy<Value = Point> {
    (-20i32..=20, -20i32..=20).prop_map(|(x, y)| Point::new(x as f64, y as f64))
}

fn segment() -> impl Strategy<Value = Segment> {
    (pt(), pt())
        .prop_filter("zero-length segment", |(a, b)| a != b)
        .prop_map(|(a, b)| Segment::new(a, b))
}

fn triangle() -> impl Strategy<Value = Shape> {
    (pt(), pt(), pt())
        .prop_filter("repeated vertex", |(a, b, c)| a != b && b != c && c != a)
        .prop_map(|(a, b, c)| Shape::new(vec![a, b, c]))
}

/// Line families whose slope and intercept are exact for integer data.
#[derive(Clone, Copy, Debug)]
enum Family {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

fn family() -> impl Strategy<Value = Family> {
    prop_oneof![
        Just(Family::Horizontal),
        Just(Family::Vertical),
        Just(Family::Diagonal),
        Just(Family::AntiDiagonal),
    ]
}

/// Point at parameter `t` on the family member with offset `c`.
fn on_line(f: Family, c: i32, t: i32) -> Point {
    let (c, t) = (c as f64, t as f64);
    match f {
        Family::Horizontal => Point::new(t, c),
        Family::Vertical => Point::new(c, t),
        Family::Diagonal => Point::new(t, t + c),
        Family::AntiDiagonal => Point::new(t, c - t),
    }
}

proptest! {
    #[test]
    fn intersection_ignores_argument_order(s1 in segment(), s2 in segment()) {
        prop_assert_eq!(
            Intersection::of(&s1, &s2).unwrap(),
            Intersection::of(&s2, &s1).unwrap()
        );
    }

    #[test]
    fn intersection_ignores_segment_direction(s1 in segment(), s2 in segment()) {
        let flipped = Segment::new(s1.p1, s1.p0);
        prop_assert_eq!(
            Intersection::of(&s1, &s2).unwrap(),
            Intersection::of(&flipped, &s2).unwrap()
        );
    }

    #[test]
    fn shared_endpoint_intersects(a in pt(), b in pt()) {
        let o = Point::new(0.0, 0.0);
        prop_assume!(a != o && b != o);
        let i = Intersection::of(&Segment::new(o, a), &Segment::new(o, b)).unwrap();
        prop_assert!(i.did_intersect());
        if let Some(p) = i.point() {
            prop_assert_eq!(p.x, 0.0);
            prop_assert_eq!(p.y, 0.0);
        }
    }

    #[test]
    fn collinear_overlap_is_tangent(
        f in family(),
        c in -10i32..=10,
        a0 in -10i32..=10,
        len_a in 1i32..=10,
        shift in 0i32..=10,
        len_b in 1i32..=10,
    ) {
        let b0 = a0 + shift.min(len_a);
        let s1 = Segment::new(on_line(f, c, a0), on_line(f, c, a0 + len_a));
        let s2 = Segment::new(on_line(f, c, b0), on_line(f, c, b0 + len_b));
        let i = Intersection::of(&s1, &s2).unwrap();
        prop_assert_eq!(i, Intersection::Tangent);
        prop_assert!(i.point().is_none());
    }

    #[test]
    fn collinear_gap_is_disjoint(
        f in family(),
        c in -10i32..=10,
        a0 in -10i32..=10,
        len_a in 1i32..=10,
        gap in 1i32..=5,
        len_b in 1i32..=10,
    ) {
        let b0 = a0 + len_a + gap;
        let s1 = Segment::new(on_line(f, c, a0), on_line(f, c, a0 + len_a));
        let s2 = Segment::new(on_line(f, c, b0), on_line(f, c, b0 + len_b));
        prop_assert_eq!(Intersection::of(&s1, &s2).unwrap(), Intersection::Disjoint);
    }

    #[test]
    fn distinct_parallels_never_intersect(
        f in family(),
        c1 in -10i32..=10,
        dc in 1i32..=10,
        t in (-10i32..=10, 1i32..=10, -10i32..=10, 1i32..=10),
    ) {
        let c2 = c1 + dc;
        let s1 = Segment::new(on_line(f, c1, t.0), on_line(f, c1, t.0 + t.1));
        let s2 = Segment::new(on_line(f, c2, t.2), on_line(f, c2, t.2 + t.3));
        prop_assert!(!Intersection::of(&s1, &s2).unwrap().did_intersect());
    }

    #[test]
    fn crossing_point_lies_in_both_boxes(s1 in segment(), s2 in segment()) {
        if let Intersection::Crossing(p) = Intersection::of(&s1, &s2).unwrap() {
            prop_assert!(p.in_x_range(&s1) && p.in_y_range(&s1));
            prop_assert!(p.in_x_range(&s2) && p.in_y_range(&s2));
        }
    }

    #[test]
    fn shape_intersects_is_symmetric(a in triangle(), b in triangle()) {
        prop_assert_eq!(a.intersects(&b).unwrap(), b.intersects(&a).unwrap());
    }

    #[test]
    fn membership_ignores_winding(s in triangle(), p in pt()) {
        prop_assert_eq!(p.in_shape(&s).unwrap(), p.in_shape(&s.reversed()).unwrap());
    }
}
