//! Randomized construction of axis-aligned paths.
//!
//! The generator walks from the current point towards the target one segment
//! at a time. Every step is a stateless decision taken from the current
//! position, the target, the board, and the orientation of the previous
//! segment:
//!
//! 1. Once the segment count reaches the cap, the walk is forced: it closes
//!    the misaligned axis, or, when the axis it would have to move along is
//!    already aligned, stretches the last segment onto the target.
//! 2. Otherwise two draws pick the axis hint and whether to head towards the
//!    target (probability = direction bias) or wander towards a board edge.
//!    After the first segment the axis always alternates.
//!
//! Heading towards the target never overshoots it on the chosen axis;
//! wandering may travel up to the board edge.

use rand::Rng;

use crate::geometry::{Board, Direction, Orientation, Point, Segment};

/// Probability of heading towards the target for freshly generated paths.
pub const DEFAULT_DIRECTION_BIAS: f64 = 0.75;

/// Segment count after which the walk is forced to close on the target.
pub const DEFAULT_SEGMENT_CAP: usize = 13;

/// A chosen direction together with the maximum distance allowed along it.
type Move = (Direction, u32);

/// Random path builder bound to one board.
#[derive(Debug, Clone, Copy)]
pub struct PathGenerator<'a> {
    board: &'a Board,
    direction_bias: f64,
    segment_cap: usize,
}

impl<'a> PathGenerator<'a> {
    /// Creates a generator with the default bias and cap.
    pub fn new(board: &'a Board) -> Self {
        Self {
            board,
            direction_bias: DEFAULT_DIRECTION_BIAS,
            segment_cap: DEFAULT_SEGMENT_CAP,
        }
    }

    /// Sets the probability of stepping towards the target.
    pub fn with_direction_bias(mut self, bias: f64) -> Self {
        self.direction_bias = bias.clamp(0.0, 1.0);
        self
    }

    /// Sets the segment-count cap.
    pub fn with_segment_cap(mut self, cap: usize) -> Self {
        self.segment_cap = cap;
        self
    }

    /// The board this generator routes on.
    pub fn board(&self) -> &'a Board {
        self.board
    }

    /// Generates a fresh path from `start` to `end`.
    ///
    /// Returns the segments and their accumulated Manhattan length. When
    /// `start == end` no segment is needed and the result is empty.
    pub fn generate<R: Rng>(&self, start: Point, end: Point, rng: &mut R) -> (Vec<Segment>, u64) {
        self.complete(Vec::new(), start, end, rng)
    }

    /// Extends `prefix` until it reaches `end`.
    ///
    /// `start` is only used when `prefix` is empty; otherwise the walk
    /// resumes at the prefix's last point. Prefix segments count towards
    /// the cap and towards the returned length.
    pub fn complete<R: Rng>(
        &self,
        prefix: Vec<Segment>,
        start: Point,
        end: Point,
        rng: &mut R,
    ) -> (Vec<Segment>, u64) {
        let mut length: u64 = prefix.iter().map(|s| u64::from(s.length())).sum();
        let mut segments = prefix;

        loop {
            let cur = segments.last().map_or(start, |s| s.end);
            if cur == end {
                break;
            }
            let previous = segments.last().map(Segment::orientation);

            if segments.len() >= self.segment_cap {
                match forced_step(cur, end, previous) {
                    Some(segment) => {
                        length += u64::from(segment.length());
                        segments.push(segment);
                        continue;
                    }
                    None => {
                        // The last segment is stretched in place instead of
                        // appending a parallel one.
                        if let Some(last) = segments.last_mut() {
                            length -= u64::from(last.length());
                            match last.orientation() {
                                Orientation::Horizontal => last.end.x = end.x,
                                Orientation::Vertical => last.end.y = end.y,
                            }
                            length += u64::from(last.length());
                        }
                        break;
                    }
                }
            }

            let axis_draw: f64 = rng.random();
            let toward = rng.random::<f64>() < self.direction_bias;
            let segment = self.next_segment(cur, end, previous, axis_draw, toward, rng);
            length += u64::from(segment.length());
            segments.push(segment);
        }

        (segments, length)
    }

    fn next_segment<R: Rng>(
        &self,
        cur: Point,
        end: Point,
        previous: Option<Orientation>,
        axis_draw: f64,
        toward: bool,
        rng: &mut R,
    ) -> Segment {
        let planned = match previous {
            None if toward => first_toward(cur, end, axis_draw),
            None => self.first_wander(cur, axis_draw),
            Some(prev) => {
                let next = prev.perpendicular();
                if toward {
                    remaining(cur, end, next).or_else(|| self.wander(cur, next, axis_draw))
                } else {
                    self.wander(cur, next, axis_draw)
                }
            }
        };
        // Only a one-cell-wide board leaves no perpendicular room.
        let (direction, limit) = planned.unwrap_or_else(|| direct(cur, end));
        let distance = rng.random_range(1..=limit);
        Segment::new(cur, cur.step(direction, distance))
    }

    /// Picks a direction along `orientation` that has room to move.
    ///
    /// `draw < 0.5` prefers the increasing direction; an edge with no room
    /// forces the other one.
    fn wander(&self, cur: Point, orientation: Orientation, draw: f64) -> Option<Move> {
        let inc = orientation.increasing();
        let dec = orientation.decreasing();
        let room_inc = self.board.distance_to_edge(cur, inc);
        let room_dec = self.board.distance_to_edge(cur, dec);

        let (direction, room) = if (draw < 0.5 && room_inc > 0) || room_dec == 0 {
            (inc, room_inc)
        } else {
            (dec, room_dec)
        };
        (room > 0).then_some((direction, room))
    }

    /// First segment, random branch: the draw splits into four quarters
    /// (right, left, down, up) subject to edge feasibility.
    fn first_wander(&self, cur: Point, axis_draw: f64) -> Option<Move> {
        let (orientation, sub_draw) = if axis_draw < 0.5 {
            (Orientation::Horizontal, axis_draw * 2.0)
        } else {
            (Orientation::Vertical, (axis_draw - 0.5) * 2.0)
        };
        self.wander(cur, orientation, sub_draw)
            .or_else(|| self.wander(cur, orientation.perpendicular(), sub_draw))
    }
}

/// First segment, towards-target branch.
fn first_toward(cur: Point, end: Point, axis_draw: f64) -> Option<Move> {
    if cur.x != end.x && cur.y != end.y {
        let orientation = if axis_draw < 0.5 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        remaining(cur, end, orientation)
    } else {
        remaining(cur, end, Orientation::Horizontal)
            .or_else(|| remaining(cur, end, Orientation::Vertical))
    }
}

/// Direction and exact distance to `end` along `orientation`, if misaligned.
fn remaining(cur: Point, end: Point, orientation: Orientation) -> Option<Move> {
    let delta = match orientation {
        Orientation::Horizontal => end.x - cur.x,
        Orientation::Vertical => end.y - cur.y,
    };
    match delta.signum() {
        1 => Some((orientation.increasing(), delta.unsigned_abs())),
        -1 => Some((orientation.decreasing(), delta.unsigned_abs())),
        _ => None,
    }
}

/// Straight move closing the x gap first, then the y gap.
fn direct(cur: Point, end: Point) -> Move {
    remaining(cur, end, Orientation::Horizontal)
        .or_else(|| remaining(cur, end, Orientation::Vertical))
        .unwrap_or((Direction::Right, 0))
}

/// Cap-forced step. `None` means the last segment must be stretched.
fn forced_step(cur: Point, end: Point, previous: Option<Orientation>) -> Option<Segment> {
    match previous {
        Some(Orientation::Horizontal) if cur.y != end.y => {
            Some(Segment::new(cur, Point::new(cur.x, end.y)))
        }
        Some(Orientation::Horizontal) => None,
        _ if cur.x != end.x => Some(Segment::new(cur, Point::new(end.x, cur.y))),
        Some(Orientation::Vertical) => None,
        None => Some(Segment::new(cur, Point::new(cur.x, end.y))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::Path;
    use crate::random::create_rng;

    fn board(w: i32, h: i32) -> Board {
        Board::new(w, h, vec![]).unwrap()
    }

    fn assert_valid(segments: &[Segment], start: Point, end: Point, length: u64, board: &Board) {
        assert_eq!(segments.first().map(|s| s.start), Some(start));
        assert_eq!(segments.last().map(|s| s.end), Some(end));
        let path = Path::new(segments.to_vec());
        assert!(path.is_contiguous(), "not contiguous: {path}");
        assert_eq!(path.length(), length);
        for s in segments {
            assert!(board.contains(s.start) && board.contains(s.end), "{s} leaves board");
            assert!(s.start.x == s.end.x || s.start.y == s.end.y, "{s} not axis-aligned");
        }
    }

    #[test]
    fn test_generates_valid_paths() {
        let b = board(20, 20);
        let gen = PathGenerator::new(&b);
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let start = Point::new(rng.random_range(0..20), rng.random_range(0..20));
            let end = Point::new(rng.random_range(0..20), rng.random_range(0..20));
            if start == end {
                continue;
            }
            let (segments, length) = gen.generate(start, end, &mut rng);
            assert_valid(&segments, start, end, length, &b);
        }
    }

    #[test]
    fn test_same_start_and_end_needs_no_segments() {
        let b = board(8, 8);
        let mut rng = create_rng(1);
        let (segments, length) = PathGenerator::new(&b).generate(Point::new(3, 3), Point::new(3, 3), &mut rng);
        assert!(segments.is_empty());
        assert_eq!(length, 0);
    }

    #[test]
    fn test_orientation_alternates() {
        let b = board(12, 9);
        let mut rng = create_rng(7);
        for cap in [0, 1, 2, 5, DEFAULT_SEGMENT_CAP] {
            let gen = PathGenerator::new(&b).with_segment_cap(cap);
            for _ in 0..200 {
                let (segments, _) = gen.generate(Point::new(0, 0), Point::new(11, 8), &mut rng);
                for w in segments.windows(2) {
                    assert_ne!(w[0].orientation(), w[1].orientation(), "cap {cap}: {:?}", segments);
                }
            }
        }
    }

    #[test]
    fn test_cap_bounds_segment_count() {
        let b = board(30, 30);
        let mut rng = create_rng(3);
        for cap in [1, 3, 6] {
            let gen = PathGenerator::new(&b).with_segment_cap(cap).with_direction_bias(0.0);
            for _ in 0..200 {
                let (segments, _) = gen.generate(Point::new(2, 27), Point::new(25, 4), &mut rng);
                assert!(segments.len() <= cap + 2, "cap {cap} produced {}", segments.len());
            }
        }
    }

    #[test]
    fn test_zero_cap_routes_l_shape() {
        let b = board(10, 10);
        let mut rng = create_rng(0);
        let gen = PathGenerator::new(&b).with_segment_cap(0);
        let (segments, length) = gen.generate(Point::new(1, 1), Point::new(5, 4), &mut rng);
        assert_eq!(
            segments,
            vec![
                Segment::new(Point::new(1, 1), Point::new(5, 1)),
                Segment::new(Point::new(5, 1), Point::new(5, 4)),
            ]
        );
        assert_eq!(length, 7);
    }

    #[test]
    fn test_forced_stretch_extends_last_segment() {
        let b = board(10, 10);
        let mut rng = create_rng(0);
        let gen = PathGenerator::new(&b).with_segment_cap(1);
        let prefix = vec![Segment::new(Point::new(0, 0), Point::new(3, 0))];
        let (segments, length) = gen.complete(prefix, Point::new(0, 0), Point::new(7, 0), &mut rng);
        assert_eq!(segments, vec![Segment::new(Point::new(0, 0), Point::new(7, 0))]);
        assert_eq!(length, 7);
    }

    #[test]
    fn test_forced_stretch_can_shorten_last_segment() {
        let b = board(10, 10);
        let mut rng = create_rng(0);
        let gen = PathGenerator::new(&b).with_segment_cap(2);
        let prefix = vec![
            Segment::new(Point::new(0, 5), Point::new(0, 0)),
            Segment::new(Point::new(0, 0), Point::new(6, 0)),
        ];
        let (segments, length) = gen.complete(prefix, Point::new(0, 5), Point::new(2, 0), &mut rng);
        assert_eq!(segments[1], Segment::new(Point::new(0, 0), Point::new(2, 0)));
        assert_eq!(length, 7);
        assert_eq!(length, Path::new(segments).length());
    }

    #[test]
    fn test_forced_stretch_onto_segment_start_leaves_degenerate() {
        // The prefix already passed through the target; the stretch collapses
        // the last segment and the bookkeeping stays consistent.
        let b = board(10, 10);
        let mut rng = create_rng(0);
        let gen = PathGenerator::new(&b).with_segment_cap(2);
        let prefix = vec![
            Segment::new(Point::new(0, 5), Point::new(0, 0)),
            Segment::new(Point::new(0, 0), Point::new(4, 0)),
        ];
        let (segments, length) = gen.complete(prefix, Point::new(0, 5), Point::new(0, 0), &mut rng);
        assert!(segments[1].is_degenerate());
        assert_eq!(length, 5);
        assert_eq!(length, Path::new(segments).length());
    }

    #[test]
    fn test_prefix_counts_towards_length() {
        let b = board(15, 15);
        let mut rng = create_rng(11);
        let gen = PathGenerator::new(&b).with_direction_bias(0.65);
        let prefix = vec![
            Segment::new(Point::new(1, 1), Point::new(6, 1)),
            Segment::new(Point::new(6, 1), Point::new(6, 9)),
        ];
        let (segments, length) = gen.complete(prefix.clone(), Point::new(1, 1), Point::new(12, 3), &mut rng);
        assert_eq!(&segments[..2], &prefix[..]);
        assert_valid(&segments, Point::new(1, 1), Point::new(12, 3), length, &b);
        // Resumes on the perpendicular axis.
        if segments.len() > 2 {
            assert_eq!(segments[2].orientation(), Orientation::Horizontal);
        }
    }

    #[test]
    fn test_single_column_board() {
        let b = board(1, 10);
        let mut rng = create_rng(5);
        let gen = PathGenerator::new(&b);
        for _ in 0..50 {
            let (segments, length) = gen.generate(Point::new(0, 0), Point::new(0, 9), &mut rng);
            assert_valid(&segments, Point::new(0, 0), Point::new(0, 9), length, &b);
            assert!(segments.iter().all(Segment::is_vertical));
        }
    }

    #[test]
    fn test_full_bias_first_step_never_overshoots() {
        let b = board(20, 20);
        let mut rng = create_rng(9);
        let gen = PathGenerator::new(&b).with_direction_bias(1.0);
        let start = Point::new(2, 3);
        let end = Point::new(14, 17);
        for _ in 0..100 {
            let (segments, length) = gen.generate(start, end, &mut rng);
            assert_valid(&segments, start, end, length, &b);
            let first = segments[0];
            assert!(first.end.x >= start.x && first.end.x <= end.x);
            assert!(first.end.y >= start.y && first.end.y <= end.y);
        }
    }

    #[test]
    fn test_corner_start_wanders_inward() {
        let b = board(6, 6);
        let mut rng = create_rng(21);
        let gen = PathGenerator::new(&b).with_direction_bias(0.0);
        for _ in 0..100 {
            let (segments, length) = gen.generate(Point::new(5, 5), Point::new(0, 0), &mut rng);
            assert_valid(&segments, Point::new(5, 5), Point::new(0, 0), length, &b);
        }
    }
}
