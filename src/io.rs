//! Plain-text point lists.
//!
//! One point per line, written as two whitespace-separated integers `x y`.
//! There is no header. Blank lines are skipped when reading.
use log::debug;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use crate::data::Point;

#[derive(Debug, thiserror::Error)]
pub enum PointFileError {
  #[error(transparent)]
  Io(#[from] std::io::Error),
  /// `line` is 1-based.
  #[error("line {line}: cannot parse {content:?} as a point")]
  Parse { line: usize, content: String },
}

pub fn read_points<T, R>(reader: R) -> Result<Vec<Point<T>>, PointFileError>
where
  T: FromStr,
  R: BufRead,
{
  let mut points = Vec::new();
  for (idx, line) in reader.lines().enumerate() {
    let line = line?;
    if line.trim().is_empty() {
      continue;
    }
    let pt = line.parse().map_err(|_| PointFileError::Parse {
      line: idx + 1,
      content: line.clone(),
    })?;
    points.push(pt);
  }
  Ok(points)
}

pub fn write_points<T, W>(mut writer: W, points: &[Point<T>]) -> Result<(), PointFileError>
where
  T: std::fmt::Display,
  W: Write,
{
  for pt in points {
    writeln!(writer, "{}", pt)?;
  }
  writer.flush()?;
  Ok(())
}

pub fn load_points<T: FromStr>(path: impl AsRef<Path>) -> Result<Vec<Point<T>>, PointFileError> {
  let path = path.as_ref();
  let points = read_points(BufReader::new(File::open(path)?))?;
  debug!("loaded {} points from {}", points.len(), path.display());
  Ok(points)
}

pub fn save_points<T: std::fmt::Display>(
  path: impl AsRef<Path>,
  points: &[Point<T>],
) -> Result<(), PointFileError> {
  let path = path.as_ref();
  write_points(BufWriter::new(File::create(path)?), points)?;
  debug!("saved {} points to {}", points.len(), path.display());
  Ok(())
}
