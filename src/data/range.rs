use crate::Intersects;

/// Span of a segment along one axis.
///
/// `inf` is not necessarily smaller than `sup`: the pair keeps the direction
/// in which the segment traverses the axis. `inf <= sup` is ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AxisRange<T> {
  pub inf: T,
  pub sup: T,
}

impl<T: Ord + Copy> AxisRange<T> {
  pub fn new(inf: T, sup: T) -> AxisRange<T> {
    AxisRange { inf, sup }
  }

  pub fn is_ascending(&self) -> bool {
    self.inf <= self.sup
  }

  /// Smaller bound, regardless of direction.
  pub fn lo(&self) -> T {
    std::cmp::min(self.inf, self.sup)
  }

  /// Larger bound, regardless of direction.
  pub fn hi(&self) -> T {
    std::cmp::max(self.inf, self.sup)
  }

  pub fn is_point(&self) -> bool {
    self.inf == self.sup
  }
}

/// Overlap of two ranges, or `None` if they are disjoint.
///
/// The overlap is ascending if both inputs are ascending and descending
/// otherwise.
impl<T: Ord + Copy> Intersects for AxisRange<T> {
  type Result = AxisRange<T>;
  fn intersect(self, other: AxisRange<T>) -> Option<AxisRange<T>> {
    let lo = std::cmp::max(self.lo(), other.lo());
    let hi = std::cmp::min(self.hi(), other.hi());
    if lo > hi {
      None
    } else if self.is_ascending() && other.is_ascending() {
      Some(AxisRange::new(lo, hi))
    } else {
      Some(AxisRange::new(hi, lo))
    }
  }
}
