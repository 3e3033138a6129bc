use super::{AxisRange, Point};
use crate::{Intersects, Orientation, PolygonScalar};

///////////////////////////////////////////////////////////////////////////////
// Segment

/// Closed segment between two points.
///
/// The endpoints are kept in the order they were given. Equality is
/// pairwise, so `a..b` and `b..a` are different segments; use
/// [`Segment::same_edge`] for an order-insensitive comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment<T> {
  pub src: Point<T>,
  pub dst: Point<T>,
}

impl<T> Segment<T> {
  pub const fn new(src: Point<T>, dst: Point<T>) -> Segment<T> {
    Segment { src, dst }
  }

  #[must_use]
  pub fn reverse(self) -> Segment<T> {
    Segment {
      src: self.dst,
      dst: self.src,
    }
  }
}

impl<T: PolygonScalar> Segment<T> {
  /// Canonical form: the endpoint with the smaller x comes first, ties broken
  /// by the smaller y.
  ///
  /// After normalization the x-range is always ascending and the y-range is
  /// ascending or descending with the sign of the slope.
  #[must_use]
  pub fn normalize(self) -> Segment<T> {
    if self.dst < self.src {
      self.reverse()
    } else {
      self
    }
  }

  pub fn x_range(&self) -> AxisRange<T> {
    AxisRange::new(*self.src.x_coord(), *self.dst.x_coord())
  }

  pub fn y_range(&self) -> AxisRange<T> {
    AxisRange::new(*self.src.y_coord(), *self.dst.y_coord())
  }

  pub fn is_point(&self) -> bool {
    self.src == self.dst
  }

  /// Same endpoints, in either order.
  pub fn same_edge(&self, other: &Segment<T>) -> bool {
    (self.src == other.src && self.dst == other.dst)
      || (self.src == other.dst && self.dst == other.src)
  }

  pub fn shares_endpoint(&self, other: &Segment<T>) -> bool {
    self.src == other.src || self.src == other.dst || self.dst == other.src || self.dst == other.dst
  }

  pub fn contains(&self, pt: &Point<T>) -> bool {
    Point::orient(&self.src, &self.dst, pt).is_colinear()
      && self.x_range().lo() <= *pt.x_coord()
      && *pt.x_coord() <= self.x_range().hi()
      && self.y_range().lo() <= *pt.y_coord()
      && *pt.y_coord() <= self.y_range().hi()
  }
}

impl<T> From<(Point<T>, Point<T>)> for Segment<T> {
  fn from((src, dst): (Point<T>, Point<T>)) -> Segment<T> {
    Segment::new(src, dst)
  }
}

impl<T> From<std::ops::Range<(T, T)>> for Segment<T> {
  fn from(range: std::ops::Range<(T, T)>) -> Segment<T> {
    Segment::new(range.start.into(), range.end.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// ISegment

/// How two intersecting segments meet.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum ISegment<T> {
  /// Exactly one common point: a crossing or a touch.
  Point,
  /// Collinear overlap of positive length, in canonical form.
  Line(Segment<T>),
}

impl<T> ISegment<T> {
  pub fn is_line(&self) -> bool {
    matches!(self, ISegment::Line(_))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Intersects

impl<'a, T> Intersects for &'a Segment<T>
where
  T: PolygonScalar,
{
  type Result = ISegment<T>;
  fn intersect(self, other: &'a Segment<T>) -> Option<Self::Result> {
    let s1 = self.normalize();
    let s2 = other.normalize();
    let l1_to_b1 = Point::orient(&s1.src, &s1.dst, &s2.src);
    let l1_to_b2 = Point::orient(&s1.src, &s1.dst, &s2.dst);
    let l2_to_a1 = Point::orient(&s2.src, &s2.dst, &s1.src);
    let l2_to_a2 = Point::orient(&s2.src, &s2.dst, &s1.dst);
    let same_side = |a: Orientation, b: Orientation| a == b && !a.is_colinear();
    if [l1_to_b1, l1_to_b2, l2_to_a1, l2_to_a2]
      .iter()
      .all(|o| o.is_colinear())
    {
      let x = s1.x_range().intersect(s2.x_range())?;
      let y = s1.y_range().intersect(s2.y_range())?;
      let overlap = Segment::new(Point::new([x.inf, y.inf]), Point::new([x.sup, y.sup]));
      if overlap.is_point() {
        Some(ISegment::Point)
      } else {
        Some(ISegment::Line(overlap))
      }
    } else if same_side(l1_to_b1, l1_to_b2) || same_side(l2_to_a1, l2_to_a2) {
      None
    } else {
      Some(ISegment::Point)
    }
  }
}

impl<T> Intersects for Segment<T>
where
  T: PolygonScalar,
{
  type Result = ISegment<T>;
  fn intersect(self, other: Segment<T>) -> Option<Self::Result> {
    (&self).intersect(&other)
  }
}

///////////////////////////////////////////////////////////////////////////////
// Tests
