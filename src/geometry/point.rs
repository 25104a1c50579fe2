//! Grid points, axis orientations, and unit directions.

use std::fmt;

/// An integer grid coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    /// Column, growing to the right.
    pub x: i32,
    /// Row, growing downwards.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns the point `distance` cells away in `direction`.
    pub fn step(self, direction: Direction, distance: u32) -> Self {
        let d = distance as i32;
        match direction {
            Direction::Left => Self::new(self.x - d, self.y),
            Direction::Right => Self::new(self.x + d, self.y),
            Direction::Up => Self::new(self.x, self.y - d),
            Direction::Down => Self::new(self.x, self.y + d),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// The axis a segment runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    /// Constant y, varying x.
    Horizontal,
    /// Constant x, varying y.
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn perpendicular(self) -> Self {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }

    /// The direction of increasing coordinate along this axis.
    pub fn increasing(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Right,
            Orientation::Vertical => Direction::Down,
        }
    }

    /// The direction of decreasing coordinate along this axis.
    pub fn decreasing(self) -> Direction {
        match self {
            Orientation::Horizontal => Direction::Left,
            Orientation::Vertical => Direction::Up,
        }
    }
}

/// A unit move on the grid. `Up` decreases y.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    /// The axis this direction moves along.
    pub fn orientation(self) -> Orientation {
        match self {
            Direction::Left | Direction::Right => Orientation::Horizontal,
            Direction::Up | Direction::Down => Orientation::Vertical,
        }
    }

    /// The opposite direction.
    pub fn reverse(self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }
}
