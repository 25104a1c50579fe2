//! Range removal on a contiguous segment chain.
//!
//! Shift-mutation repair deletes runs of 1–4 segments and then has to close
//! the gap between the survivors. Both halves live in one primitive so the
//! chain is never observable in a broken state.

use std::ops::Range;

use crate::geometry::Segment;

/// Which surviving neighbour is stretched across a removed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bridge {
    /// The segment before the range takes the last removed segment's end.
    Predecessor,
    /// The segment after the range takes the first removed segment's start.
    Successor,
}

/// Removes `range` from `segments` and reconnects the chain across the gap.
///
/// If the neighbour named by `bridge` does not exist nothing is patched;
/// that is only contiguous when the removed run started and ended at the
/// same point, or when it sat at the path's end.
///
/// Returns the number of removed segments. An empty or out-of-range request
/// removes nothing.
pub fn remove_and_bridge(segments: &mut Vec<Segment>, range: Range<usize>, bridge: Bridge) -> usize {
    if range.is_empty() || range.end > segments.len() {
        return 0;
    }

    let first_start = segments[range.start].start;
    let last_end = segments[range.end - 1].end;
    let at = range.start;
    let removed = range.len();
    segments.drain(range);

    match bridge {
        Bridge::Predecessor => {
            if let Some(prev) = at.checked_sub(1).and_then(|i| segments.get_mut(i)) {
                prev.end = last_end;
            }
        }
        Bridge::Successor => {
            if let Some(next) = segments.get_mut(at) {
                next.start = first_start;
            }
        }
    }
    removed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;

    fn chain(points: &[(i32, i32)]) -> Vec<Segment> {
        points
            .windows(2)
            .map(|w| Segment::new(Point::new(w[0].0, w[0].1), Point::new(w[1].0, w[1].1)))
            .collect()
    }

    #[test]
    fn test_predecessor_bridge() {
        // (0,0)->(4,0) stretched to (6,0) after dropping the detour.
        let mut segs = chain(&[(0, 0), (4, 0), (4, 2), (6, 2), (6, 0), (6, 5)]);
        let removed = remove_and_bridge(&mut segs, 1..4, Bridge::Predecessor);
        assert_eq!(removed, 3);
        assert_eq!(segs, chain(&[(0, 0), (6, 0), (6, 5)]));
    }

    #[test]
    fn test_successor_bridge() {
        // A degenerate joint between two colinear runs collapses into one segment.
        let mut segs = chain(&[(0, 5), (0, 2), (4, 2), (4, 2), (9, 2)]);
        let removed = remove_and_bridge(&mut segs, 1..3, Bridge::Successor);
        assert_eq!(removed, 2);
        assert_eq!(segs, chain(&[(0, 5), (0, 2), (9, 2)]));
    }

    #[test]
    fn test_remove_tail_without_neighbour() {
        let mut segs = chain(&[(0, 0), (3, 0), (3, 0)]);
        assert_eq!(remove_and_bridge(&mut segs, 1..2, Bridge::Successor), 1);
        assert_eq!(segs, chain(&[(0, 0), (3, 0)]));
    }

    #[test]
    fn test_remove_head_degenerate() {
        let mut segs = chain(&[(2, 2), (2, 2), (7, 2)]);
        assert_eq!(remove_and_bridge(&mut segs, 0..1, Bridge::Predecessor), 1);
        assert_eq!(segs, chain(&[(2, 2), (7, 2)]));
    }

    #[test]
    fn test_invalid_range_is_noop() {
        let mut segs = chain(&[(0, 0), (1, 0), (1, 1)]);
        let before = segs.clone();
        assert_eq!(remove_and_bridge(&mut segs, 1..1, Bridge::Predecessor), 0);
        assert_eq!(remove_and_bridge(&mut segs, 1..5, Bridge::Predecessor), 0);
        assert_eq!(segs, before);
    }
}
