//! Paths and their randomized construction.
//!
//! - [`Path`]: contiguous segment chain with cached length
//! - [`PathGenerator`]: random walk from a point (or a kept prefix) to a target
//! - [`remove_and_bridge`]: range deletion that keeps a chain contiguous

mod generator;
mod polyline;
mod splice;

pub use generator::{PathGenerator, DEFAULT_DIRECTION_BIAS, DEFAULT_SEGMENT_CAP};
pub use polyline::Path;
pub use splice::{remove_and_bridge, Bridge};
