use std::iter::FromIterator;
use std::ops::Index;

use super::{Point, PointLocation, Segment};
use crate::{Error, Orientation, PolygonScalar};

/// Closed polygon boundary. The last point connects back to the first.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contour<T> {
  points: Vec<Point<T>>,
}

/// Collects points one at a time and hands them over as a [`Contour`].
#[derive(Debug, Clone, Default)]
pub struct ContourBuilder<T> {
  points: Vec<Point<T>>,
}

impl<T> ContourBuilder<T> {
  pub fn new() -> ContourBuilder<T> {
    ContourBuilder { points: Vec::new() }
  }

  pub fn add_point(&mut self, pt: Point<T>) {
    self.points.push(pt);
  }

  pub fn build(self) -> Contour<T> {
    Contour {
      points: self.points,
    }
  }
}

impl<T> Contour<T> {
  pub fn new(points: Vec<Point<T>>) -> Contour<T> {
    Contour { points }
  }

  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }

  pub fn point(&self, idx: usize) -> &Point<T> {
    &self.points[idx]
  }

  pub fn points(&self) -> &[Point<T>] {
    &self.points
  }

  pub fn iter(&self) -> std::slice::Iter<'_, Point<T>> {
    self.points.iter()
  }

  pub fn into_points(self) -> Vec<Point<T>> {
    self.points
  }
}

impl<T: PolygonScalar> Contour<T> {
  /// Boundary edges in order, including the closing edge.
  pub fn edges(&self) -> impl Iterator<Item = Segment<T>> + '_ {
    let n = self.points.len();
    (0..n).map(move |i| Segment::new(self.points[i], self.points[(i + 1) % n]))
  }

  /// Twice the signed area: positive for counter-clockwise contours.
  ///
  /// Warning: May overflow for coordinates close to the limits of `T`.
  pub fn signed_area_2x(&self) -> T::Wide {
    self
      .edges()
      .map(|edge| {
        let [px, py] = edge.src.array;
        let [qx, qy] = edge.dst.array;
        px.widen() * qy.widen() - qx.widen() * py.widen()
      })
      .sum()
  }

  /// $O(n)$ Winding direction of the contour.
  ///
  /// Read off the turn at the lowest vertex (smallest x, then smallest y),
  /// which is always convex. Colinear successors are skipped. `CoLinear`
  /// when every vertex lies on one line. Exact for all coordinates, unlike
  /// the sign of [`Contour::signed_area_2x`].
  pub fn orientation(&self) -> Orientation {
    let n = self.points.len();
    let Some(lowest) = (0..n).min_by_key(|&i| &self.points[i]) else {
      return Orientation::CoLinear;
    };
    let pivot = &self.points[lowest];
    let prev = &self.points[(lowest + n - 1) % n];
    (1..n)
      .map(|k| prev.orientation(pivot, &self.points[(lowest + k) % n]))
      .find(|turn| !turn.is_colinear())
      .unwrap_or(Orientation::CoLinear)
  }

  /// $O(n)$ Exact winding-number point location.
  pub fn locate(&self, pt: &Point<T>) -> PointLocation {
    let mut winding = 0_i64;
    for edge in self.edges() {
      if edge.contains(pt) {
        return PointLocation::OnBoundary;
      }
      let (a, b) = (&edge.src, &edge.dst);
      if a.y_coord() <= pt.y_coord() {
        if b.y_coord() > pt.y_coord() && a.orientation(b, pt).is_ccw() {
          winding += 1;
        }
      } else if b.y_coord() <= pt.y_coord() && a.orientation(b, pt).is_cw() {
        winding -= 1;
      }
    }
    if winding == 0 {
      PointLocation::Outside
    } else {
      PointLocation::Inside
    }
  }

  /// $O(n)$ Check that the contour is strictly convex.
  ///
  /// Every vertex must turn the same way, never colinear, and the boundary
  /// must wind around exactly once.
  pub fn validate_convex(&self) -> Result<(), Error> {
    let n = self.points.len();
    if n < 3 {
      return Err(Error::DegenerateContour);
    }
    let turn_at = |i: usize| {
      self.points[(i + n - 1) % n].orientation(&self.points[i], &self.points[(i + 1) % n])
    };
    let first = turn_at(0);
    if first.is_colinear() || (1..n).any(|i| turn_at(i) != first) {
      return Err(Error::ConvexViolation);
    }
    // A convex contour goes right once and left once.
    let steps: Vec<bool> = self
      .edges()
      .filter(|edge| edge.src.x_coord() != edge.dst.x_coord())
      .map(|edge| edge.src.x_coord() < edge.dst.x_coord())
      .collect();
    let changes = (0..steps.len())
      .filter(|&i| steps[i] != steps[(i + 1) % steps.len()])
      .count();
    if changes > 2 {
      return Err(Error::ConvexViolation);
    }
    Ok(())
  }
}

impl<T> Index<usize> for Contour<T> {
  type Output = Point<T>;
  fn index(&self, idx: usize) -> &Point<T> {
    &self.points[idx]
  }
}

impl<T> FromIterator<Point<T>> for Contour<T> {
  fn from_iter<I: IntoIterator<Item = Point<T>>>(iter: I) -> Self {
    let mut builder = ContourBuilder::new();
    for pt in iter {
      builder.add_point(pt);
    }
    builder.build()
  }
}

impl<'a, T> IntoIterator for &'a Contour<T> {
  type Item = &'a Point<T>;
  type IntoIter = std::slice::Iter<'a, Point<T>>;
  fn into_iter(self) -> Self::IntoIter {
    self.points.iter()
  }
}
