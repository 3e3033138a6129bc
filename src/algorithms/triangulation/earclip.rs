use log::{debug, warn};
use std::collections::VecDeque;

use crate::algorithms::dedup_ring;
use crate::data::{CircularList, Contour, Point, Position, Segment};
use crate::{Orientation, PolygonScalar};

// Load the vertices into a circular list. O(n)
// Mark convex vertices against the polygon's winding. O(n)
// Queue every ear, in list order. O(n^2)
// While more than three vertices remain:
//   Pop the most recent ear.
//   Emit the diagonal (ear.prev, ear.next) and delete the ear.
//   Reclassify ear.prev and ear.next. O(n)
//     New ears go to the front of the queue, lost ears leave it.

#[derive(Debug, Clone, Copy)]
struct Vertex<T> {
  point: Point<T>,
  convex: bool,
  ear: bool,
}

/// $O(n^2)$ Ear-clipping triangulation of a simple polygon.
///
/// Returns the diagonals that split the polygon into triangles. Boundary
/// edges are not included, so a simple polygon with `n` distinct vertices
/// yields exactly `n - 3` diagonals. Consecutive duplicate points are
/// ignored and either winding is accepted.
///
/// A convex vertex is an ear when no other vertex lies strictly inside its
/// triangle or on the diagonal it would cut off. A vertex sitting on the
/// diagonal would make it touch the boundary, so such a vertex blocks the
/// ear even though it is not inside the triangle.
///
/// Input that is not a simple polygon never fails: clipping stops as soon
/// as no ear is left and the diagonals found so far are returned.
///
/// # Examples
///
/// ```rust
/// # use plangeom::algorithms::triangulate;
/// # use plangeom::data::{Point, Segment};
/// let square = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
/// ];
/// let diagonals = triangulate(&square);
/// assert_eq!(diagonals, vec![Segment::from((0, 4)..(4, 0))]);
/// ```
pub fn triangulate<T>(points: &[Point<T>]) -> Vec<Segment<T>>
where
  T: PolygonScalar,
{
  let ring = dedup_ring(points);
  let winding = dominant_orientation(&ring);
  let mut vertices: CircularList<Vertex<T>> = ring
    .iter()
    .map(|&point| Vertex {
      point,
      convex: false,
      ear: false,
    })
    .collect();
  debug!(
    "triangulating {} vertices, winding {:?}",
    vertices.len(),
    winding
  );

  let positions: Vec<Position> = vertices.positions().collect();
  for &pos in &positions {
    classify(&mut vertices, pos, winding);
  }
  let mut ears: VecDeque<Position> = positions
    .into_iter()
    .filter(|&pos| vertices[pos].ear)
    .collect();

  let mut diagonals = Vec::with_capacity(ring.len().saturating_sub(3));
  while vertices.len() > 3 {
    let Some(ear) = ears.pop_front() else {
      warn!(
        "no ear left with {} vertices remaining, returning {} diagonals",
        vertices.len(),
        diagonals.len()
      );
      break;
    };
    let prev = vertices.prev(ear);
    let next = vertices.next(ear);
    diagonals.push(Segment::new(vertices[prev].point, vertices[next].point));
    vertices.remove(ear);

    for pos in [prev, next] {
      let was_ear = vertices[pos].ear;
      classify(&mut vertices, pos, winding);
      match (was_ear, vertices[pos].ear) {
        (false, true) => ears.push_front(pos),
        (true, false) => ears.retain(|&other| other != pos),
        _ => {}
      }
    }
  }
  debug!("emitted {} diagonals", diagonals.len());
  diagonals
}

// Winding of the ring, from the turn at its lowest vertex. A ring on a single
// line falls back to a vote over the local turns; a tie counts as clockwise.
fn dominant_orientation<T: PolygonScalar>(ring: &[Point<T>]) -> Orientation {
  let contour = Contour::new(ring.to_vec());
  match contour.orientation() {
    Orientation::CoLinear => {
      let n = ring.len();
      let (mut left, mut right) = (0_usize, 0_usize);
      for i in 0..n {
        match ring[(i + n - 1) % n].orientation(&ring[i], &ring[(i + 1) % n]) {
          Orientation::CounterClockWise => left += 1,
          Orientation::ClockWise => right += 1,
          Orientation::CoLinear => {}
        }
      }
      if left > right {
        Orientation::CounterClockWise
      } else {
        Orientation::ClockWise
      }
    }
    winding => winding,
  }
}

fn classify<T: PolygonScalar>(
  vertices: &mut CircularList<Vertex<T>>,
  pos: Position,
  winding: Orientation,
) {
  let prev = vertices.prev(pos);
  let next = vertices.next(pos);
  let [a, b, c] = [prev, pos, next].map(|p| vertices[p].point);
  vertices[pos].convex = a.orientation(&b, &c) == winding;
  let ear = vertices[pos].convex
    && vertices
      .positions_from(next)
      .skip(1)
      .take_while(|&w| w != prev)
      .all(|w| !blocks_ear(&vertices[w].point, [&a, &b, &c]));
  vertices[pos].ear = ear;
}

fn blocks_ear<T: PolygonScalar>(pt: &Point<T>, [a, b, c]: [&Point<T>; 3]) -> bool {
  strictly_inside(pt, [a, b, c]) || (pt != a && pt != c && Segment::new(*c, *a).contains(pt))
}

// Same non-zero turn against all three edges. Points on an edge are not
// inside.
fn strictly_inside<T: PolygonScalar>(pt: &Point<T>, [a, b, c]: [&Point<T>; 3]) -> bool {
  let turn = a.orientation(b, pt);
  !turn.is_colinear() && b.orientation(c, pt) == turn && c.orientation(a, pt) == turn
}
