use crate::data::Point;

pub mod convex_hull;
pub mod intersection;
pub mod triangulation;

#[doc(inline)]
pub use convex_hull::monotone_chain::convex_hull;

#[doc(inline)]
pub use triangulation::earclip::triangulate;

#[doc(inline)]
pub use intersection::boundary::{boundary_edges, crosses_boundary, is_self_intersecting};

/// Drop consecutive duplicate points, including a last point that repeats
/// the first.
pub fn dedup_ring<T: PartialEq + Clone>(points: &[Point<T>]) -> Vec<Point<T>> {
  let mut ring = points.to_vec();
  ring.dedup();
  while ring.len() > 1 && ring.first() == ring.last() {
    ring.pop();
  }
  ring
}
