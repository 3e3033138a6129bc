/// Intersection of two values of the same kind.
///
/// `None` means the values are disjoint. Otherwise the result describes how
/// they meet.
pub trait Intersects<T = Self> {
  type Result;
  fn intersect(self, other: T) -> Option<Self::Result>;
}
