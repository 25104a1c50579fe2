//! The routing board: grid bounds plus the point pairs that must be connected.
//!
//! Boards are immutable once built. [`Board::new`] rejects non-positive
//! dimensions and out-of-bounds points, so every later stage can rely on a
//! valid grid. The persisted form is plain text:
//!
//! ```text
//! width;height
//! x1;y1;x2;y2
//! x1;y1;x2;y2
//! ```

use std::fs;
use std::io::ErrorKind;
use std::path::Path as FsPath;
use std::str::FromStr;

use log::debug;

use super::point::{Direction, Point};
use crate::error::{Result, RoutingError};

/// Grid bounds and the ordered list of required point pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBoard"))]
pub struct Board {
    width: i32,
    height: i32,
    point_pairs: Vec<(Point, Point)>,
}

/// Unvalidated wire form; deserialization goes through [`Board::new`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBoard {
    width: i32,
    height: i32,
    point_pairs: Vec<(Point, Point)>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawBoard> for Board {
    type Error = RoutingError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::new(raw.width, raw.height, raw.point_pairs)
    }
}

impl Board {
    /// Creates a validated board.
    ///
    /// # Errors
    /// [`RoutingError::InvalidDimensions`] if either dimension is not positive,
    /// [`RoutingError::PointOutOfBounds`] if a pair endpoint lies outside
    /// `[0, width-1] x [0, height-1]`.
    pub fn new(width: i32, height: i32, point_pairs: Vec<(Point, Point)>) -> Result<Self> {
        if width <= 0 || height <= 0 {
            return Err(RoutingError::InvalidDimensions { width, height });
        }
        let board = Self {
            width,
            height,
            point_pairs,
        };
        for (pair, &(a, b)) in board.point_pairs.iter().enumerate() {
            for point in [a, b] {
                if !board.contains(point) {
                    return Err(RoutingError::PointOutOfBounds { pair, point });
                }
            }
        }
        Ok(board)
    }

    /// Reads and parses a board file.
    ///
    /// # Errors
    /// [`RoutingError::BoardNotFound`] when the file does not exist; other
    /// read failures surface as [`RoutingError::Io`]; malformed content as
    /// [`RoutingError::Parse`] or a validation error.
    pub fn load<P: AsRef<FsPath>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => RoutingError::BoardNotFound {
                path: path.to_path_buf(),
            },
            _ => RoutingError::Io(e),
        })?;
        let board: Board = text.parse()?;
        debug!(
            "loaded {}x{} board with {} pairs from {}",
            board.width,
            board.height,
            board.point_pairs.len(),
            path.display()
        );
        Ok(board)
    }

    /// Number of columns.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Required point pairs, in order.
    pub fn point_pairs(&self) -> &[(Point, Point)] {
        &self.point_pairs
    }

    /// True when `p` lies on the grid.
    pub fn contains(&self, p: Point) -> bool {
        (0..self.width).contains(&p.x) && (0..self.height).contains(&p.y)
    }

    /// Free cells between `p` and the board edge in `direction`.
    pub fn distance_to_edge(&self, p: Point, direction: Direction) -> u32 {
        let d = match direction {
            Direction::Left => p.x,
            Direction::Right => self.width - 1 - p.x,
            Direction::Up => p.y,
            Direction::Down => self.height - 1 - p.y,
        };
        d.max(0).unsigned_abs()
    }
}

impl FromStr for Board {
    type Err = RoutingError;

    fn from_str(s: &str) -> Result<Self> {
        let mut lines = s
            .lines()
            .enumerate()
            .map(|(i, l)| (i + 1, l.trim()))
            .filter(|(_, l)| !l.is_empty());

        let (line, header) = lines.next().ok_or_else(|| RoutingError::Parse {
            line: 1,
            reason: "missing \"width;height\" header".into(),
        })?;
        let dims = parse_fields(header, line, 2)?;

        let mut pairs = Vec::new();
        for (line, text) in lines {
            let c = parse_fields(text, line, 4)?;
            pairs.push((Point::new(c[0], c[1]), Point::new(c[2], c[3])));
        }

        Board::new(dims[0], dims[1], pairs)
    }
}

/// Splits a `;`-separated line into exactly `expected` integers.
fn parse_fields(text: &str, line: usize, expected: usize) -> Result<Vec<i32>> {
    let fields: Vec<&str> = text.split(';').map(str::trim).collect();
    if fields.len() != expected {
        return Err(RoutingError::Parse {
            line,
            reason: format!("expected {expected} fields, found {}", fields.len()),
        });
    }
    fields
        .iter()
        .map(|f| {
            f.parse::<i32>().map_err(|e| RoutingError::Parse {
                line,
                reason: format!("invalid integer {f:?}: {e}"),
            })
        })
        .collect()
}
