#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Planar geometry over integer coordinates: convex hulls, ear-clipping
//! triangulation of simple polygons, and the segment intersection predicates
//! used to validate polygons before triangulating them.
use num_traits::{PrimInt, Signed};
use std::cmp::Ordering;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::Sum;
use std::ops::BitXor;
use std::str::FromStr;

pub mod algorithms;
pub mod data;
mod intersection;
pub mod io;
mod orientation;

pub use orientation::Orientation;

pub use intersection::Intersects;

#[doc(inline)]
pub use algorithms::{convex_hull, crosses_boundary, is_self_intersecting, triangulate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Fewer distinct points than the operation needs.
  #[error("Insufficient vertices")]
  InsufficientVertices,
  /// Two consecutive edges are either colinear or turn the wrong way.
  #[error("Convex violation")]
  ConvexViolation,
  /// A contour with fewer than three vertices encloses no area.
  #[error("Degenerate contour")]
  DegenerateContour,
}

/// Integer coordinate type.
///
/// `Wide` is a signed type twice as wide as `Self`. Products of two
/// coordinates always fit in it, so it is used for areas and cross products.
pub trait PolygonScalar: PrimInt + Signed + Hash + Debug + Display + FromStr {
  type Wide: PrimInt + Signed + Debug + Display + Sum + From<Self>;

  fn widen(self) -> Self::Wide {
    Self::Wide::from(self)
  }

  /// Compare `(q - p) x (r - p)` against zero without overflowing.
  fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $long:ty, $ulong: ty ) => {
    impl PolygonScalar for $ty {
      type Wide = $long;

      fn cmp_slope(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Return the absolute difference along with its sign.
        // diff(0, 10) => (10, true)
        // diff(10, 0) => (10, false)
        // diff(i8::MIN,i8:MAX) => (255_u16, true)
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }
    }
  };
}

fixed_precision!(i8, u8, i16, u16);
fixed_precision!(i16, u16, i32, u32);
fixed_precision!(i32, u32, i64, u64);
fixed_precision!(i64, u64, i128, u128);

#[cfg(test)]
pub mod testing;
