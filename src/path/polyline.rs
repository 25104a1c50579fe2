//! [`Path`]: an ordered, contiguous chain of segments with a cached length.

use std::fmt;

use rand::Rng;

use super::generator::PathGenerator;
use crate::geometry::{Point, Segment};

/// One routed connection.
///
/// Consecutive segments share endpoints (`segments[i].end ==
/// segments[i + 1].start`). The cached `length` is the sum of per-segment
/// Manhattan lengths and is refreshed whenever the chain is edited.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawPath"))]
pub struct Path {
    segments: Vec<Segment>,
    length: u64,
}

/// Wire form of a path. Any stored length is ignored and recomputed.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawPath {
    segments: Vec<Segment>,
}

#[cfg(feature = "serde")]
impl From<RawPath> for Path {
    fn from(raw: RawPath) -> Self {
        Path::new(raw.segments)
    }
}

impl Path {
    /// Wraps `segments`, computing the length.
    pub fn new(segments: Vec<Segment>) -> Self {
        let length = total_length(&segments);
        Self { segments, length }
    }

    /// Builds a path through consecutive vertices.
    ///
    /// Fewer than two points give an empty path.
    pub fn from_points(points: &[Point]) -> Self {
        Self::new(
            points
                .windows(2)
                .map(|w| Segment::new(w[0], w[1]))
                .collect(),
        )
    }

    /// Generates a random path from `start` to `end`.
    pub fn random<R: Rng>(start: Point, end: Point, generator: &PathGenerator<'_>, rng: &mut R) -> Self {
        let (segments, length) = generator.generate(start, end, rng);
        Self { segments, length }
    }

    /// Wraps segments whose length the caller already accumulated.
    pub(crate) fn from_parts(segments: Vec<Segment>, length: u64) -> Self {
        debug_assert_eq!(length, total_length(&segments));
        Self { segments, length }
    }

    /// The segments, in order.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Cached Manhattan length.
    pub fn length(&self) -> u64 {
        self.length
    }

    /// Number of segments.
    pub fn segment_count(&self) -> usize {
        self.segments.len()
    }

    /// True when the path has no segments (its pair's endpoints coincide).
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over the segments.
    pub fn iter(&self) -> std::slice::Iter<'_, Segment> {
        self.segments.iter()
    }

    /// First vertex, if any.
    pub fn start(&self) -> Option<Point> {
        self.segments.first().map(|s| s.start)
    }

    /// Last vertex, if any.
    pub fn end(&self) -> Option<Point> {
        self.segments.last().map(|s| s.end)
    }

    /// The vertices of the chain: every segment start plus the final end.
    pub fn points(&self) -> Vec<Point> {
        let mut points: Vec<Point> = self.segments.iter().map(|s| s.start).collect();
        points.extend(self.end());
        points
    }

    /// True when every segment starts where the previous one ended.
    pub fn is_contiguous(&self) -> bool {
        self.segments.windows(2).all(|w| w[0].end == w[1].start)
    }

    /// Recomputes the length from the segments without touching the cache.
    pub fn calculate_length(&self) -> u64 {
        total_length(&self.segments)
    }

    /// Mutable access for in-place edits. Call [`Path::refresh_length`] after.
    pub(crate) fn segments_mut(&mut self) -> &mut Vec<Segment> {
        &mut self.segments
    }

    /// Replaces the segment chain and its length in one step.
    pub(crate) fn replace(&mut self, segments: Vec<Segment>, length: u64) {
        *self = Self::from_parts(segments, length);
    }

    pub(crate) fn refresh_length(&mut self) {
        self.length = total_length(&self.segments);
    }
}

fn total_length(segments: &[Segment]) -> u64 {
    segments.iter().map(|s| u64::from(s.length())).sum()
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_from_points() {
        let path = Path::from_points(&[
            Point::new(0, 0),
            Point::new(4, 0),
            Point::new(4, 4),
            Point::new(8, 4),
            Point::new(8, 8),
        ]);
        assert_eq!(path.segment_count(), 4);
        assert_eq!(path.length(), 16);
        assert_eq!(path.length(), path.calculate_length());
        assert!(path.is_contiguous());
        assert_eq!(path.start(), Some(Point::new(0, 0)));
        assert_eq!(path.end(), Some(Point::new(8, 8)));
    }

    #[test]
    fn test_points_round_trip() {
        let pts = [Point::new(1, 1), Point::new(1, 5), Point::new(3, 5)];
        assert_eq!(Path::from_points(&pts).points(), pts.to_vec());
        assert!(Path::from_points(&pts[..1]).points().is_empty());
    }

    #[test]
    fn test_refresh_after_edit() {
        let mut path = Path::from_points(&[Point::new(0, 0), Point::new(3, 0)]);
        path.segments_mut()[0].end.x = 7;
        assert_eq!(path.length(), 3);
        path.refresh_length();
        assert_eq!(path.length(), 7);
    }

    #[test]
    fn test_iteration_order() {
        let path = Path::from_points(&[Point::new(0, 0), Point::new(0, 2), Point::new(5, 2)]);
        let lengths: Vec<u32> = path.iter().map(Segment::length).collect();
        assert_eq!(lengths, vec![2, 5]);
        assert_eq!((&path).into_iter().count(), 2);
    }

    #[test]
    fn test_display() {
        let path = Path::from_points(&[Point::new(0, 0), Point::new(0, 2)]);
        assert_eq!(path.to_string(), "[(0, 0), (0, 2)]");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_recomputes_length() {
        let json = r#"{"segments":[{"start":{"x":0,"y":0},"end":{"x":3,"y":0}},{"start":{"x":3,"y":0},"end":{"x":3,"y":2}}],"length":99}"#;
        let path: Path = serde_json::from_str(json).unwrap();
        assert_eq!(path.length(), 5);
        assert_eq!(path, Path::from_points(&[Point::new(0, 0), Point::new(3, 0), Point::new(3, 2)]));

        let round_trip: Path = serde_json::from_str(&serde_json::to_string(&path).unwrap()).unwrap();
        assert_eq!(round_trip, path);
    }
}
