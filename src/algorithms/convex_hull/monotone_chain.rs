use claims::debug_assert_ok;
use log::trace;

use crate::data::{Contour, ContourBuilder, Point};
use crate::{Error, Orientation, PolygonScalar};

// https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain

/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Monotone chain][wiki] construction: the points are sorted by x (then y),
/// a lower chain is built left to right and an upper chain right to left.
/// Colinear boundary points are dropped, so the result is strictly convex
/// and counter-clockwise.
///
/// # Errors
/// Will return an error iff the input set contains less than two distinct points.
///
/// # Properties
/// * No points from the input set will be outside the returned contour.
/// * All vertices in the contour are from the input set.
/// * If every input point lies on one line, the contour holds just the two
///   extreme points and encloses no area.
///
/// # Examples
///
/// ```rust
/// # use plangeom::algorithms::convex_hull;
/// # use plangeom::data::Point;
/// # use plangeom::Error;
/// let empty_set: Vec<Point<i32>> = vec![];
/// assert_eq!(
///   convex_hull(empty_set).err(),
///   Some(Error::InsufficientVertices))
/// ```
///
/// ```rust
/// # use plangeom::algorithms::convex_hull;
/// # use plangeom::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([1, 1]),
///   Point::new([2, 2]),
///   Point::new([0, 2]),
///   Point::new([2, 0]),
/// ];
/// let hull = convex_hull(pts).unwrap();
/// assert_eq!(
///   hull.points(),
///   &[Point::new([0, 0]), Point::new([2, 0]), Point::new([2, 2]), Point::new([0, 2])]
/// );
/// ```
///
/// [wiki]: https://en.wikibooks.org/wiki/Algorithm_Implementation/Geometry/Convex_hull/Monotone_chain
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Result<Contour<T>, Error>
where
  T: PolygonScalar,
{
  pts.sort_unstable();
  pts.dedup();
  let (first, last) = match pts.as_slice() {
    [first, .., last] => (*first, *last),
    _ => return Err(Error::InsufficientVertices),
  };

  let mut builder = ContourBuilder::new();
  builder.add_point(first);
  find_chain(pts.iter(), |pt| builder.add_point(*pt));
  builder.add_point(last);
  find_chain(pts.iter().rev(), |pt| builder.add_point(*pt));
  let hull = builder.build();

  trace!("convex hull: {} distinct points, {} on the hull", pts.len(), hull.len());
  if hull.len() >= 3 {
    debug_assert_ok!(hull.validate_convex());
  }
  Ok(hull)
}

// Walk the points in order, keeping only left turns. Emits the interior of
// the chain; the two extremes are shared with the opposite chain.
fn find_chain<'a, T, I, F>(pts: I, mut emit: F)
where
  T: PolygonScalar + 'a,
  I: Iterator<Item = &'a Point<T>>,
  F: FnMut(&'a Point<T>),
{
  let mut stack: Vec<&'a Point<T>> = Vec::new();
  for pt in pts {
    while let [.., p1, p2] = stack.as_slice() {
      if p1.orientation(p2, pt) == Orientation::CounterClockWise {
        break;
      }
      stack.pop();
    }
    stack.push(pt);
  }
  if let [_, interior @ .., _] = stack.as_slice() {
    for &pt in interior {
      emit(pt);
    }
  }
}
