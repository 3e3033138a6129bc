// This module contains strategies for:
//  * points
//  * point sets
//  * simple polygons: star-shaped ones and combs
// A Strategy is a way to generate a shrinkable value.
use crate::data::Point;

use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;
use std::cmp::Ordering;
use std::ops::Range;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary> Arbitrary for Point<T>
where
  T::Parameters: Clone,
{
  type Strategy = Mapped<(T, T), Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(T, T)>((params.clone(), params)).prop_map(|(x, y)| Point::new([x, y]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Point sets

// Small coordinates so that duplicates and colinear triples show up often.
pub fn any_points(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec((-50..50, -50..50).prop_map(|(x, y)| Point::new([x, y])), size)
}

///////////////////////////////////////////////////////////////////////////////
// Star-shaped polygons

const ORIGIN: Point<i32> = Point::new([0, 0]);

// Order by angle around the origin, starting at the positive x-axis.
fn angular_cmp(a: &Point<i32>, b: &Point<i32>) -> Ordering {
  let lower = |p: &Point<i32>| *p.y_coord() < 0 || (*p.y_coord() == 0 && *p.x_coord() < 0);
  lower(a).cmp(&lower(b)).then_with(|| match ORIGIN.orientation(a, b) {
    crate::Orientation::CounterClockWise => Ordering::Less,
    crate::Orientation::ClockWise => Ordering::Greater,
    crate::Orientation::CoLinear => Ordering::Equal,
  })
}

fn no_three_colinear(pts: &[Point<i32>]) -> bool {
  let n = pts.len();
  (0..n).all(|i| {
    (i + 1..n).all(|j| (j + 1..n).all(|k| !pts[i].orientation(&pts[j], &pts[k]).is_colinear()))
  })
}

/// Counter-clockwise simple polygon with the origin strictly inside its
/// kernel. No three vertices are colinear.
pub fn star_polygon(size: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec((-1000..1000, -1000..1000).prop_map(|(x, y)| Point::new([x, y])), size)
    .prop_map(|mut pts| {
      pts.retain(|pt| *pt != ORIGIN);
      pts.sort_by(angular_cmp);
      pts.dedup_by(|a, b| angular_cmp(a, b) == Ordering::Equal);
      pts
    })
    .prop_filter("At least three vertices", |pts| pts.len() >= 3)
    .prop_filter("Origin in the kernel", |pts| {
      let n = pts.len();
      (0..n).all(|i| ORIGIN.orientation(&pts[i], &pts[(i + 1) % n]).is_ccw())
    })
    .prop_filter("General position", |pts| no_three_colinear(pts))
}

///////////////////////////////////////////////////////////////////////////////
// Combs

/// Counter-clockwise comb: teeth standing on a flat base, separated by
/// notches. Columns alternate between teeth and notches and start and end
/// with a tooth. Widths and heights are random, so vertices are often
/// colinear across columns.
pub fn comb_polygon(teeth: Range<usize>) -> impl Strategy<Value = Vec<Point<i32>>> {
  teeth
    .prop_flat_map(|k| vec((1..20, 1..100), 2 * k + 1))
    .prop_map(|columns| {
      let mut x = 0;
      let mut top = Vec::with_capacity(2 * columns.len());
      for (i, &(width, height)) in columns.iter().enumerate() {
        let height = if i % 2 == 0 { 100 + height } else { height };
        top.push(Point::new([x, height]));
        x += width;
        top.push(Point::new([x, height]));
      }
      let mut pts = vec![Point::new([0, 0]), Point::new([x, 0])];
      pts.extend(top.into_iter().rev());
      pts
    })
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Contour;

  proptest! {
    #[test]
    fn star_polygons_are_ccw(pts in star_polygon(3..20)) {
      let contour: Contour<i32> = pts.into_iter().collect();
      prop_assert!(contour.orientation().is_ccw());
    }

    #[test]
    fn combs_are_simple_and_ccw(pts in comb_polygon(1..8)) {
      prop_assert!(!crate::is_self_intersecting(&pts));
      let contour: Contour<i32> = pts.into_iter().collect();
      prop_assert!(contour.orientation().is_ccw());
    }
  }
}
