use std::ops::Sub;

use super::Point;
use crate::data::Vector;

// point - point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    Vector([
      self.array[0].clone() - other.array[0].clone(),
      self.array[1].clone() - other.array[1].clone(),
    ])
  }
}

impl<T> Sub<Point<T>> for Point<T>
where
  T: Sub<T, Output = T> + Clone,
{
  type Output = Vector<T>;

  fn sub(self: Point<T>, other: Point<T>) -> Self::Output {
    Sub::sub(&self, &other)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn point_minus_point() {
    let p = Point::new([3, 4]);
    let q = Point::new([1, 7]);
    assert_eq!(&p - &q, Vector([2, -3]));
    assert_eq!(q - p, Vector([-2, 3]));
  }
}
