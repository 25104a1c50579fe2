//! The routing problem as seen by the generic GA.

use log::info;
use rand::Rng;

use super::config::{CrossoverStrategy, RoutingConfig};
use super::mutation::ShiftOptions;
use super::solution::Solution;
use crate::error::Result;
use crate::ga::{GaConfig, GaProblem, GaResult, GaRunner, Individual};
use crate::geometry::Board;
use crate::path::PathGenerator;

/// A board to route plus the routing configuration.
///
/// # Examples
///
/// ```
/// use manhattan_ga::ga::GaConfig;
/// use manhattan_ga::geometry::Board;
/// use manhattan_ga::routing::{RoutingConfig, RoutingProblem};
///
/// let board: Board = "6;6\n0;0;5;5\n0;5;5;0\n".parse().unwrap();
/// let problem = RoutingProblem::new(board, RoutingConfig::default()).unwrap();
/// let result = problem
///     .solve(&GaConfig::default().with_population_size(20).with_max_generations(5).with_seed(1))
///     .unwrap();
/// assert_eq!(result.best.path_count(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct RoutingProblem {
    board: Board,
    config: RoutingConfig,
}

impl RoutingProblem {
    /// Creates a problem after validating `config`.
    ///
    /// # Errors
    /// [`RoutingError::InvalidConfig`](crate::RoutingError::InvalidConfig)
    /// if the configuration is out of range.
    pub fn new(board: Board, config: RoutingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { board, config })
    }

    /// The board being routed.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The routing configuration.
    pub fn config(&self) -> &RoutingConfig {
        &self.config
    }

    /// Generator for fresh paths.
    pub fn generator(&self) -> PathGenerator<'_> {
        PathGenerator::new(&self.board)
            .with_direction_bias(self.config.direction_bias)
            .with_segment_cap(self.config.segment_cap)
    }

    /// Generator for suffixes regenerated by reroll mutation.
    pub fn reroll_generator(&self) -> PathGenerator<'_> {
        PathGenerator::new(&self.board)
            .with_direction_bias(self.config.reroll_direction_bias)
            .with_segment_cap(self.config.segment_cap)
    }

    /// A random routing of every point pair.
    pub fn random_solution<R: Rng>(&self, rng: &mut R) -> Solution {
        Solution::random(&self.generator(), &self.config.weights, rng)
    }

    /// Baseline: draws `samples` random routings and keeps the best.
    ///
    /// Returns `None` when `samples` is zero.
    pub fn random_search<R: Rng>(&self, samples: usize, rng: &mut R) -> Option<Solution> {
        let best = (0..samples)
            .map(|_| self.random_solution(rng))
            .min_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        if let Some(ref best) = best {
            info!("random search over {samples} samples: best fitness {}", best.fitness());
        }
        best
    }

    /// Runs the GA on this problem.
    ///
    /// # Errors
    /// Propagates configuration and operator errors from [`GaRunner::run`].
    pub fn solve(&self, config: &GaConfig) -> Result<GaResult<Solution>> {
        GaRunner::run(self, config)
    }
}

impl GaProblem for RoutingProblem {
    type Individual = Solution;

    fn create_individual<R: Rng>(&self, rng: &mut R) -> Solution {
        self.random_solution(rng)
    }

    fn crossover<R: Rng>(&self, parent1: &Solution, parent2: &Solution, rng: &mut R) -> Result<Solution> {
        match self.config.crossover {
            CrossoverStrategy::RandomGenes => self.crossover_with_random_genes(parent1, parent2, rng),
            CrossoverStrategy::EvenGenesDistribution => {
                self.crossover_with_even_genes_distribution(parent1, parent2, rng)
            }
        }
    }

    fn mutate<R: Rng>(&self, individual: &mut Solution, rng: &mut R) {
        self.mutate_shift(individual, &ShiftOptions::default(), rng);
    }
}
