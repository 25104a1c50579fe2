//! Renderer-facing snapshot of a routing.

use std::fmt;

use crate::geometry::Point;

/// Board dimensions and the polyline vertices of every path.
///
/// `paths[i]` belongs to the board's `i`-th point pair. A pair whose
/// endpoints coincide has no vertices.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingReport {
    pub width: i32,
    pub height: i32,
    pub paths: Vec<Vec<Point>>,
}

impl fmt::Display for RoutingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}x{}", self.width, self.height)?;
        for (i, points) in self.paths.iter().enumerate() {
            write!(f, "{i}:")?;
            for p in points {
                write!(f, " {p}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
