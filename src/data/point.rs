use std::fmt;
use std::ops::Deref;
use std::ops::Index;
use std::str::FromStr;

use crate::{Orientation, PolygonScalar};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: [f(self.array[0].clone()), f(self.array[1].clone())],
    }
  }
}

impl<T: PolygonScalar> Point<T> {
  /// Turn taken when walking `self -> q -> r`.
  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  pub fn orient(p: &Point<T>, q: &Point<T>, r: &Point<T>) -> Orientation {
    p.orientation(q, r)
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<[T; 2]> for Point<T> {
  fn from(array: [T; 2]) -> Point<T> {
    Point { array }
  }
}

// "x y", the format used by point-list files.
impl<T: fmt::Display> fmt::Display for Point<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{} {}", self.array[0], self.array[1])
  }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected two integer coordinates, found {0:?}")]
pub struct ParsePointError(pub String);

impl<T: FromStr> FromStr for Point<T> {
  type Err = ParsePointError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let mut words = s.split_whitespace();
    let mut coord = || {
      words
        .next()
        .and_then(|word| word.parse::<T>().ok())
        .ok_or_else(|| ParsePointError(s.to_string()))
    };
    let x = coord()?;
    let y = coord()?;
    if words.next().is_some() {
      return Err(ParsePointError(s.to_string()));
    }
    Ok(Point::new([x, y]))
  }
}

mod sub;
