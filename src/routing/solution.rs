//! A complete routing: one path per point pair, with its fitness.

use rand::Rng;

use super::config::FitnessWeights;
use super::report::RoutingReport;
use crate::ga::Individual;
use crate::geometry::{intersection_weight, Board};
use crate::path::{Path, PathGenerator};

/// One candidate routing.
///
/// `paths[i]` connects `board.point_pairs()[i]`. The cached fitness is
/// recomputed by every operation that edits the paths. Serialized for
/// reporting only; the fitness depends on weights a reader cannot check,
/// so rebuild with [`Solution::new`] instead of deserializing.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Solution {
    paths: Vec<Path>,
    fitness: f64,
}

impl Solution {
    /// Wraps `paths` and evaluates them under `weights`.
    pub fn new(paths: Vec<Path>, weights: &FitnessWeights) -> Self {
        let fitness = evaluate(&paths, weights);
        Self { paths, fitness }
    }

    /// Routes every point pair of the generator's board with a fresh random path.
    pub fn random<R: Rng>(generator: &PathGenerator<'_>, weights: &FitnessWeights, rng: &mut R) -> Self {
        let paths = generator
            .board()
            .point_pairs()
            .iter()
            .map(|&(start, end)| Path::random(start, end, generator, rng))
            .collect();
        Self::new(paths, weights)
    }

    /// The paths, index-aligned with the board's point pairs.
    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    /// Number of paths.
    pub fn path_count(&self) -> usize {
        self.paths.len()
    }

    /// Sum of all path lengths.
    pub fn total_length(&self) -> u64 {
        self.paths.iter().map(Path::length).sum()
    }

    /// Sum of all segment counts.
    pub fn total_segments(&self) -> usize {
        self.paths.iter().map(Path::segment_count).sum()
    }

    /// Total intersection units between and within paths.
    pub fn intersections(&self) -> u64 {
        count_intersections(&self.paths)
    }

    /// Snapshot of the routing for rendering.
    pub fn report(&self, board: &Board) -> RoutingReport {
        RoutingReport {
            width: board.width(),
            height: board.height(),
            paths: self.paths.iter().map(Path::points).collect(),
        }
    }

    pub(crate) fn path_mut(&mut self, index: usize) -> Option<&mut Path> {
        self.paths.get_mut(index)
    }

    pub(crate) fn refresh_fitness(&mut self, weights: &FitnessWeights) {
        self.fitness = evaluate(&self.paths, weights);
    }
}

impl Individual for Solution {
    fn fitness(&self) -> f64 {
        self.fitness
    }
}

/// Weighted sum of segment count, length, and intersection units.
fn evaluate(paths: &[Path], weights: &FitnessWeights) -> f64 {
    let (segments, length) = paths.iter().fold((0u64, 0u64), |(s, l), p| {
        (s + p.segment_count() as u64, l + p.length())
    });
    weights.segment * segments as f64
        + weights.length * length as f64
        + weights.intersection * count_intersections(paths) as f64
}

/// Every segment pair of two distinct paths, plus pairs within one path that
/// are at least three positions apart. Closer pairs share endpoints by
/// construction and are skipped.
fn count_intersections(paths: &[Path]) -> u64 {
    let mut units = 0;
    for (i, a) in paths.iter().enumerate() {
        for b in &paths[i + 1..] {
            for sa in a {
                units += b.iter().map(|sb| intersection_weight(sa, sb)).sum::<u64>();
            }
        }
    }
    for path in paths {
        let segments = path.segments();
        for (j, sa) in segments.iter().enumerate() {
            units += segments
                .iter()
                .skip(j + 3)
                .map(|sb| intersection_weight(sa, sb))
                .sum::<u64>();
        }
    }
    units
}
