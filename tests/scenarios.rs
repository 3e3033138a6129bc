use plangeom::data::*;
use plangeom::*;

use claims::{assert_err, assert_ok};
use proptest::prelude::*;

fn init() {
  let _ = env_logger::builder().is_test(true).try_init();
}

fn pts(coords: &[(i32, i32)]) -> Vec<Point<i32>> {
  coords.iter().map(|&pt| Point::from(pt)).collect()
}

mod hull {
  use super::*;

  #[test]
  fn drops_colinear_midpoint() -> Result<(), Error> {
    init();
    let hull = convex_hull(pts(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]))?;
    assert_eq!(hull.points(), pts(&[(0, 0), (2, 0), (2, 2), (0, 2)]).as_slice());
    assert_ok!(hull.validate_convex());
    Ok(())
  }

  #[test]
  fn insufficient_input() {
    init();
    assert_eq!(convex_hull::<i32>(vec![]), Err(Error::InsufficientVertices));
    assert_eq!(
      convex_hull(pts(&[(7, 7), (7, 7)])),
      Err(Error::InsufficientVertices)
    );
  }

  #[test]
  fn degenerate_hull_is_flagged() -> Result<(), Error> {
    init();
    let hull = convex_hull(pts(&[(0, 0), (5, 5)]))?;
    assert_eq!(hull.len(), 2);
    assert_eq!(hull.validate_convex(), Err(Error::DegenerateContour));
    Ok(())
  }
}

mod triangulation {
  use super::*;

  #[test]
  fn square_has_one_diagonal() {
    init();
    let square = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    let diagonals = triangulate(&square);
    assert_eq!(diagonals.len(), 1);
    assert!(
      diagonals[0].same_edge(&Segment::from((0, 0)..(4, 4)))
        || diagonals[0].same_edge(&Segment::from((4, 0)..(0, 4)))
    );
  }

  #[test]
  fn triangle_has_none() {
    init();
    assert!(triangulate(&pts(&[(0, 0), (4, 0), (0, 4)])).is_empty());
  }

  #[test]
  fn comb() {
    init();
    // Three teeth pointing up.
    let comb = pts(&[
      (0, 0),
      (10, 0),
      (10, 10),
      (8, 10),
      (8, 3),
      (6, 3),
      (6, 10),
      (4, 10),
      (4, 3),
      (2, 3),
      (2, 10),
      (0, 10),
    ]);
    assert!(!is_self_intersecting(&comb));
    let diagonals = triangulate(&comb);
    assert_eq!(diagonals.len(), comb.len() - 3);
    for diagonal in &diagonals {
      assert!(!crosses_boundary(&comb, diagonal), "{:?}", diagonal);
    }
  }

  #[test]
  fn coordinates_near_i32_limits() {
    init();
    let big = 2_000_000_000;
    let square = pts(&[(-big, -big), (big, -big), (big, big), (-big, big)]);
    assert_eq!(Contour::new(square.clone()).orientation(), Orientation::CounterClockWise);
    assert_eq!(triangulate(&square).len(), 1);
  }

  #[test]
  fn self_intersecting_input_is_best_effort() {
    init();
    let bowtie = pts(&[(0, 0), (4, 4), (4, 0), (0, 4)]);
    assert!(is_self_intersecting(&bowtie));
    assert!(triangulate(&bowtie).len() < bowtie.len() - 2);
  }
}

mod boundary {
  use super::*;

  #[test]
  fn square_diagonal_touches_only_neighbours() {
    init();
    let square = pts(&[(0, 0), (4, 0), (4, 4), (0, 4)]);
    assert!(!crosses_boundary(&square, &Segment::from((0, 0)..(4, 4))));
  }

  #[test]
  fn bowtie_is_self_intersecting() {
    init();
    assert!(is_self_intersecting(&pts(&[(0, 0), (4, 4), (4, 0), (0, 4)])));
  }

  #[test]
  fn classify_is_symmetric_on_overlap() {
    let s1 = Segment::from((0, 0)..(4, 0));
    let s2 = Segment::from((4, 0)..(8, 0));
    assert_eq!(s1.intersect(s2), Some(ISegment::Point));
    assert_eq!(s2.intersect(s1), Some(ISegment::Point));
    assert_eq!(s1.intersect(s1), Some(ISegment::Line(s1)));
  }
}

mod files {
  use super::*;
  use plangeom::io::*;

  #[test]
  fn hull_of_saved_points() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.txt");
    let points = pts(&[(0, 0), (1, 1), (2, 2), (0, 2), (2, 0)]);
    assert_ok!(save_points(&path, &points));
    let loaded: Vec<Point<i32>> = load_points(&path).unwrap();
    assert_eq!(loaded, points);
    assert_eq!(convex_hull(loaded).unwrap().len(), 4);
  }

  #[test]
  fn bad_file() {
    init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("points.txt");
    std::fs::write(&path, "0 0\n1\n").unwrap();
    assert_err!(load_points::<i32>(&path));
  }
}

proptest! {
  #[test]
  fn hull_triangulation_prop(coords in prop::collection::vec((-1000..1000, -1000..1000), 3..60)) {
    init();
    let points: Vec<Point<i32>> = coords.into_iter().map(Point::from).collect();
    if let Ok(hull) = convex_hull(points) {
      if hull.len() >= 3 {
        let diagonals = triangulate(hull.points());
        prop_assert_eq!(diagonals.len(), hull.len() - 3);
        prop_assert!(!is_self_intersecting(hull.points()));
        for diagonal in &diagonals {
          prop_assert!(!crosses_boundary(hull.points(), diagonal));
        }
      }
    }
  }
}
