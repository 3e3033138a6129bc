use log::debug;

use crate::algorithms::dedup_ring;
use crate::data::{CircularList, ISegment, Point, Position, Segment};
use crate::{Intersects, PolygonScalar};

/// Boundary edges of a closed ring of points, `points[i]` to `points[i + 1]`
/// and the last point back to the first.
pub fn boundary_edges<T: PolygonScalar>(points: &[Point<T>]) -> CircularList<Segment<T>> {
  let n = points.len();
  (0..n)
    .map(|i| Segment::new(points[i], points[(i + 1) % n]))
    .collect()
}

/// $O(n)$ Does `candidate` cut through the boundary of the polygon?
///
/// Edges that share an endpoint with the candidate only count when they
/// overlap it along a line; touching at the shared vertex is expected. An
/// edge with the same endpoints as the candidate is ignored.
///
/// # Examples
///
/// ```rust
/// # use plangeom::crosses_boundary;
/// # use plangeom::data::{Point, Segment};
/// let square = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
/// ];
/// assert!(!crosses_boundary(&square, &Segment::from((0, 0)..(4, 4))));
/// assert!(crosses_boundary(&square, &Segment::from((2, 2)..(6, 2))));
/// ```
pub fn crosses_boundary<T: PolygonScalar>(points: &[Point<T>], candidate: &Segment<T>) -> bool {
  let edges = boundary_edges(&dedup_ring(points));
  let mut crossing = edges
    .iter()
    .filter(|edge| !edge.same_edge(candidate))
    .filter(|edge| match edge.intersect(candidate) {
      None => false,
      Some(ISegment::Point) => !edge.shares_endpoint(candidate),
      Some(ISegment::Line(_)) => true,
    });
  match crossing.next() {
    Some(edge) => {
      debug!("{:?} crosses boundary edge {:?}", candidate, edge);
      true
    }
    None => false,
  }
}

/// $O(n^2)$ Does the boundary of the polygon touch or cross itself?
///
/// Neighbouring edges always meet at their shared vertex, so they only count
/// when they fold back onto each other. Any contact between two other edges
/// is a self-intersection. Consecutive duplicate points are ignored.
///
/// # Examples
///
/// ```rust
/// # use plangeom::is_self_intersecting;
/// # use plangeom::data::Point;
/// let bowtie = vec![
///   Point::new([0, 0]),
///   Point::new([4, 4]),
///   Point::new([4, 0]),
///   Point::new([0, 4]),
/// ];
/// assert!(is_self_intersecting(&bowtie));
/// ```
pub fn is_self_intersecting<T: PolygonScalar>(points: &[Point<T>]) -> bool {
  let ring = dedup_ring(points);
  if ring.len() < 3 {
    return false;
  }
  let edges = boundary_edges(&ring);
  let positions: Vec<Position> = edges.positions().collect();
  let adjacent = |a: Position, b: Position| edges.next(a) == b || edges.prev(a) == b;
  for (i, &a) in positions.iter().enumerate() {
    for &b in &positions[i + 1..] {
      let hit = match (&edges[a]).intersect(&edges[b]) {
        None => false,
        Some(ISegment::Point) => !adjacent(a, b),
        Some(ISegment::Line(_)) => true,
      };
      if hit {
        debug!("boundary edges {:?} and {:?} intersect", edges[a], edges[b]);
        return true;
      }
    }
  }
  false
}
