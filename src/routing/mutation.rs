//! Mutation operators.
//!
//! - **Reroll**: cut a path at a random segment and regenerate the suffix.
//! - **Shift**: move one interior segment sideways, then collapse the
//!   zig-zags the move created.
//!
//! Both refresh the path length and the solution fitness.

use log::debug;
use rand::Rng;

use super::problem::RoutingProblem;
use super::solution::Solution;
use crate::geometry::{Board, Point, Segment};
use crate::path::{remove_and_bridge, Bridge, Path};

/// Side towards which a segment is shifted.
///
/// For a vertical segment `Decrease` moves left and `Increase` right; for a
/// horizontal one `Decrease` moves up and `Increase` down.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftDirection {
    Decrease,
    Increase,
}

/// Overrides for [`RoutingProblem::mutate_shift`]. `None` fields are drawn
/// at random.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftOptions {
    /// Index of the path to mutate.
    pub path: Option<usize>,
    /// Index of the segment to shift. Only interior segments can move; any
    /// other index leaves the path untouched.
    pub segment: Option<usize>,
    /// Shift distance, clamped to the room left before the board edge.
    pub length: Option<u32>,
    /// Shift direction.
    pub direction: Option<ShiftDirection>,
    /// Never fall back to reroll on the reroll draw.
    pub force_shift: bool,
}

/// What a shift mutation ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Shifted,
    Rerolled,
    Unchanged,
}

impl RoutingProblem {
    /// Regenerates the tail of one path.
    ///
    /// `path` selects the path; `None` picks one at random. A cut index is
    /// drawn among the path's segments, the segments before it are kept,
    /// and the rest is rebuilt from the cut point to the path's end with the
    /// reroll generator. Empty paths and out-of-range indices are left as is.
    pub fn mutate_reroll<R: Rng>(&self, solution: &mut Solution, path: Option<usize>, rng: &mut R) {
        let count = solution.path_count();
        if count == 0 {
            return;
        }
        let index = path.unwrap_or_else(|| rng.random_range(0..count));
        let changed = solution
            .path_mut(index)
            .is_some_and(|p| self.reroll_path(p, rng));
        if changed {
            solution.refresh_fitness(&self.config().weights);
        }
    }

    /// Shifts an interior segment of one path sideways.
    ///
    /// A path with fewer than three segments is rerolled instead, and so is
    /// any path when the reroll draw (`reroll_prob`) succeeds and
    /// `force_shift` is off.
    ///
    /// The segment moves perpendicular to itself, dragging the shared
    /// endpoints of its neighbours along. A neighbour that collapses to a
    /// point is removed together with the back-and-forth it leaves behind:
    ///
    /// - predecessor side: when the shifted segment now ends where the
    ///   segment three (or two) places back ends (starts), that whole run up
    ///   to and including the shifted segment goes; otherwise the two
    ///   segments before it go and it starts where they started.
    /// - successor side: the mirror image, applied after the predecessor
    ///   side has been repaired.
    pub fn mutate_shift<R: Rng>(
        &self,
        solution: &mut Solution,
        options: &ShiftOptions,
        rng: &mut R,
    ) -> MutationOutcome {
        let count = solution.path_count();
        if count == 0 {
            return MutationOutcome::Unchanged;
        }
        let index = options.path.unwrap_or_else(|| rng.random_range(0..count));
        let reroll = rng.random::<f64>() < self.config().reroll_prob;

        let Some(path) = solution.path_mut(index) else {
            debug!("shift mutation skipped: no path at index {index}");
            return MutationOutcome::Unchanged;
        };

        let outcome = if path.segment_count() < 3 || (reroll && !options.force_shift) {
            if self.reroll_path(path, rng) {
                MutationOutcome::Rerolled
            } else {
                MutationOutcome::Unchanged
            }
        } else {
            shift_segment(self.board(), path, options, rng)
        };

        if outcome != MutationOutcome::Unchanged {
            solution.refresh_fitness(&self.config().weights);
        }
        outcome
    }

    fn reroll_path<R: Rng>(&self, path: &mut Path, rng: &mut R) -> bool {
        let (Some(start), Some(end)) = (path.start(), path.end()) else {
            return false;
        };
        let cut = rng.random_range(0..path.segment_count());
        let prefix = path.segments()[..cut].to_vec();
        let (segments, length) = self.reroll_generator().complete(prefix, start, end, rng);
        path.replace(segments, length);
        true
    }
}

fn shift_segment<R: Rng>(
    board: &Board,
    path: &mut Path,
    options: &ShiftOptions,
    rng: &mut R,
) -> MutationOutcome {
    let n = path.segment_count();
    let i = match options.segment {
        Some(i) if (1..n - 1).contains(&i) => i,
        Some(i) => {
            debug!("shift mutation skipped: segment {i} is not interior");
            return MutationOutcome::Unchanged;
        }
        None => rng.random_range(1..n - 1),
    };

    let target = path.segments()[i];
    let axis = target.orientation().perpendicular();
    let room_dec = board.distance_to_edge(target.start, axis.decreasing());
    let room_inc = board.distance_to_edge(target.start, axis.increasing());

    let direction = match options.direction {
        Some(direction) => direction,
        None if (rng.random::<f64>() < 0.5 && room_dec != 0) || room_inc == 0 => {
            ShiftDirection::Decrease
        }
        None => ShiftDirection::Increase,
    };
    let (step, room) = match direction {
        ShiftDirection::Decrease => (axis.decreasing(), room_dec),
        ShiftDirection::Increase => (axis.increasing(), room_inc),
    };
    if room == 0 {
        return MutationOutcome::Unchanged;
    }
    let distance = options
        .length
        .map_or_else(|| rng.random_range(1..=room), |l| l.min(room));
    if distance == 0 {
        return MutationOutcome::Unchanged;
    }

    let offset = Point::default().step(step, distance);
    let segments = path.segments_mut();
    segments[i].translate(offset.x, offset.y);
    segments[i - 1].end = segments[i].start;
    segments[i + 1].start = segments[i].end;
    collapse_around(segments, i);

    path.refresh_length();
    MutationOutcome::Shifted
}

/// Removes the degenerate neighbours of `segments[i]` and the detours they
/// close off.
fn collapse_around(segments: &mut Vec<Segment>, i: usize) {
    let mut removed = 0;
    let mut shifted_kept = true;

    if segments[i - 1].is_degenerate() {
        let shifted = segments[i];
        if i >= 3 && shifted.end == segments[i - 3].end {
            removed = remove_and_bridge(segments, i - 3..i + 1, Bridge::Successor);
            shifted_kept = false;
        } else if i >= 2 && shifted.end == segments[i - 2].start {
            removed = remove_and_bridge(segments, i - 2..i + 1, Bridge::Successor);
            shifted_kept = false;
        } else if i >= 2 {
            removed = remove_and_bridge(segments, i - 2..i, Bridge::Successor);
        } else {
            removed = remove_and_bridge(segments, i - 1..i, Bridge::Successor);
        }
    }

    if !shifted_kept {
        // The successor took the place of the first removed segment.
        let next = i + 1 - removed;
        if segments.get(next).is_some_and(Segment::is_degenerate) {
            remove_and_bridge(segments, next..next + 1, Bridge::Predecessor);
        }
        return;
    }

    // At most two segments before the shifted one were removed.
    let j = i - removed;
    if !segments.get(j + 1).is_some_and(Segment::is_degenerate) {
        return;
    }

    let shifted = segments[j];
    let len = segments.len();
    if j >= 1 && j + 3 < len && shifted.start == segments[j + 3].start {
        remove_and_bridge(segments, j..j + 4, Bridge::Predecessor);
    } else if j + 2 < len && shifted.start == segments[j + 2].end {
        remove_and_bridge(segments, j..j + 3, Bridge::Predecessor);
    } else if j + 2 < len {
        remove_and_bridge(segments, j + 1..j + 3, Bridge::Predecessor);
    } else {
        remove_and_bridge(segments, j + 1..j + 2, Bridge::Predecessor);
    }
}
