use std::ops::Index;

use crate::data::Point;
use crate::PolygonScalar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: PolygonScalar> Vector<T> {
  /// 2D cross product, `self.x * other.y - self.y * other.x`.
  ///
  /// Computed in the double-width type so the products cannot overflow.
  pub fn cross(&self, other: &Vector<T>) -> T::Wide {
    let [ux, uy] = self.0;
    let [vx, vy] = other.0;
    ux.widen() * vy.widen() - uy.widen() * vx.widen()
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}
