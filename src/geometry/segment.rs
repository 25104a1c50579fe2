//! Axis-aligned segments and their pairwise intersection weight.

use std::fmt;

use super::point::{Orientation, Point};

/// A straight piece of a path between two grid points.
///
/// Segments produced by the generator are horizontal or vertical. A
/// zero-length (degenerate) segment only exists transiently while a shift
/// mutation repairs a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    /// Creates a segment from `start` to `end`.
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// True when both endpoints share x. Degenerate segments count as vertical.
    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// True when the segment has non-zero extent along x only.
    pub fn is_horizontal(&self) -> bool {
        !self.is_vertical()
    }

    /// The axis this segment runs along.
    pub fn orientation(&self) -> Orientation {
        if self.is_vertical() {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        }
    }

    /// True when start and end coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    /// Manhattan length measured along the segment's own axis.
    pub fn length(&self) -> u32 {
        if self.is_vertical() {
            self.start.y.abs_diff(self.end.y)
        } else {
            self.start.x.abs_diff(self.end.x)
        }
    }

    /// Translates both endpoints by `(dx, dy)`.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.start.x += dx;
        self.start.y += dy;
        self.end.x += dx;
        self.end.y += dy;
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}

/// Number of intersection units contributed by a pair of segments.
///
/// - Both on the same vertical line: inclusive overlap of their y-ranges.
/// - Both on the same horizontal line: inclusive overlap of their x-ranges.
/// - Otherwise 1 if they cross or touch, 0 if not.
pub fn intersection_weight(s1: &Segment, s2: &Segment) -> u64 {
    let (a, b) = (s1.start, s1.end);
    let (c, d) = (s2.start, s2.end);

    if a.x == b.x && b.x == c.x && c.x == d.x {
        return overlap(a.y, b.y, c.y, d.y);
    }
    if a.y == b.y && b.y == c.y && c.y == d.y {
        return overlap(a.x, b.x, c.x, d.x);
    }

    let dx0 = i64::from(b.x) - i64::from(a.x);
    let dy0 = i64::from(b.y) - i64::from(a.y);
    let dx1 = i64::from(d.x) - i64::from(c.x);
    let dy1 = i64::from(d.y) - i64::from(c.y);

    // Side of each endpoint relative to the other segment's supporting line.
    let p0 = dy1 * (i64::from(d.x) - i64::from(a.x)) - dx1 * (i64::from(d.y) - i64::from(a.y));
    let p1 = dy1 * (i64::from(d.x) - i64::from(b.x)) - dx1 * (i64::from(d.y) - i64::from(b.y));
    let p2 = dy0 * (i64::from(b.x) - i64::from(c.x)) - dx0 * (i64::from(b.y) - i64::from(c.y));
    let p3 = dy0 * (i64::from(b.x) - i64::from(d.x)) - dx0 * (i64::from(b.y) - i64::from(d.y));

    let straddles = |u: i64, v: i64| u.signum() * v.signum() <= 0;
    u64::from(straddles(p0, p1) && straddles(p2, p3))
}

/// Inclusive overlap length of `[a1, a2]` and `[b1, b2]`, in grid units.
fn overlap(a1: i32, a2: i32, b1: i32, b2: i32) -> u64 {
    let lo = a1.min(a2).max(b1.min(b2));
    let hi = a1.max(a2).min(b1.max(b2));
    if lo <= hi {
        u64::from(hi.abs_diff(lo)) + 1
    } else {
        0
    }
}
