//! Grid geometry: points, axis-aligned segments, and the board.
//!
//! # Key Types
//!
//! - [`Point`]: integer grid coordinate
//! - [`Segment`]: straight horizontal or vertical piece of a path
//! - [`Board`]: grid bounds and the point pairs to connect
//!
//! [`intersection_weight`] is the geometric primitive behind the fitness
//! penalty for overlapping and crossing paths.

mod board;
mod point;
mod segment;

pub use board::Board;
pub use point::{Direction, Orientation, Point};
pub use segment::{intersection_weight, Segment};
