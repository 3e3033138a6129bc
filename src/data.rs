mod circular_list;
mod contour;
mod line_segment;
mod point;
mod range;
mod vector;

pub use circular_list::*;
pub use contour::*;
pub use line_segment::*;
pub use point::{ParsePointError, Point};
pub use range::AxisRange;
pub use vector::Vector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}
