//! GA generational loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → selection → crossover → mutation → replacement → repeat.
//! The best individual ever produced is tracked offspring by offspring and
//! survives cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{debug, info};
use rand::Rng;

use super::config::GaConfig;
use super::population::Population;
use super::types::{GaProblem, Individual};
use crate::error::{Result, RoutingError};
use crate::random::create_rng;

/// Result of a GA optimization run.
///
/// Contains the best solution found, along with statistics about the
/// evolutionary process.
#[derive(Debug, Clone)]
pub struct GaResult<I: Individual> {
    /// The best individual found during the entire run.
    pub best: I,

    /// Best fitness value (same as `best.fitness()`).
    pub best_fitness: f64,

    /// Number of generations completed.
    pub generations: usize,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,

    /// Wall-clock time spent in the loop.
    pub elapsed: Duration,

    /// Best-ever fitness after initialization and after each generation.
    pub fitness_history: Vec<f64>,
}

/// Executes the GA generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("Best fitness: {}", result.best_fitness);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    ///
    /// # Errors
    /// Fails if the configuration is invalid or an operator rejects its
    /// inputs.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> Result<GaResult<P::Individual>> {
        Self::run_with_cancel(problem, config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before starting the next generation and returns the best solution
    /// found so far.
    ///
    /// # Errors
    /// Fails if the configuration is invalid or an operator rejects its
    /// inputs.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult<P::Individual>> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let start = Instant::now();

        // 1. Initialize population
        let mut population =
            Population::initialize(config.population_size, || problem.create_individual(&mut rng));

        // 2. Track best
        let mut best = population
            .best()
            .cloned()
            .ok_or_else(|| RoutingError::InvalidConfig("population is empty".into()))?;
        let mut fitness_history = vec![best.fitness()];

        let mut generations = 0usize;
        let mut cancelled = false;
        let mut next_report = config.progress_interval;

        // 3. Generational loop
        for generation in 1..=config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    info!("search interrupted after {generations} generations");
                    break;
                }
            }

            let mut next_gen: Vec<P::Individual> = Vec::with_capacity(config.population_size);
            while next_gen.len() < config.population_size {
                let first = population.select(config.selection, &mut rng);

                let mut offspring = if rng.random::<f64>() < config.crossover_rate {
                    let second = population.select(config.selection, &mut rng);
                    problem.crossover(first, second, &mut rng)?
                } else {
                    first.clone()
                };

                if rng.random::<f64>() < config.mutation_rate {
                    problem.mutate(&mut offspring, &mut rng);
                }

                if offspring.fitness() < best.fitness() {
                    best = offspring.clone();
                    info!("new best fitness {} in generation {generation}", best.fitness());
                }

                next_gen.push(offspring);
            }

            population.replace(next_gen);
            generations = generation;
            fitness_history.push(best.fitness());

            let elapsed = start.elapsed();
            if elapsed >= next_report {
                info!("{}s elapsed, generation {generation}", elapsed.as_secs());
                while next_report <= elapsed {
                    next_report += config.progress_interval;
                }
            }
        }

        let elapsed = start.elapsed();
        info!(
            "search finished: {generations} generations in {:.3}s, best fitness {}",
            elapsed.as_secs_f64(),
            best.fitness()
        );
        debug!(
            "final population fitness: {:?}",
            population.evaluate().iter().map(|i| i.fitness()).collect::<Vec<_>>()
        );

        Ok(GaResult {
            best_fitness: best.fitness(),
            best,
            generations,
            cancelled,
            elapsed,
            fitness_history,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::Selection;
    use crate::geometry::{Board, Point};
    use crate::routing::{RoutingConfig, RoutingProblem, Solution};

    fn problem() -> RoutingProblem {
        let pairs = vec![
            (Point::new(0, 0), Point::new(9, 9)),
            (Point::new(9, 0), Point::new(0, 9)),
            (Point::new(0, 5), Point::new(9, 4)),
            (Point::new(4, 0), Point::new(5, 9)),
        ];
        RoutingProblem::new(Board::new(10, 10, pairs).unwrap(), RoutingConfig::default()).unwrap()
    }

    #[test]
    fn test_routing_improves_over_generations() {
        let problem = problem();
        let config = GaConfig::default()
            .with_population_size(40)
            .with_max_generations(100)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert!(
            result.best_fitness < result.fitness_history[0],
            "no improvement over the initial population: {} vs {}",
            result.best_fitness,
            result.fitness_history[0]
        );
        assert_eq!(result.generations, 100);
        assert!(!result.cancelled);
    }

    #[test]
    fn test_cancellation_returns_best() {
        let problem = problem();
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_generations(10_000)
            .with_seed(42);

        let cancel = Arc::new(AtomicBool::new(true));
        let result = GaRunner::run_with_cancel(&problem, &config, Some(cancel)).unwrap();

        assert!(result.cancelled, "expected cancelled result");
        assert_eq!(result.generations, 0);
        assert_eq!(result.fitness_history.len(), 1);
        assert!((result.best.fitness() - result.best_fitness).abs() < 1e-12);
    }

    #[test]
    fn test_cancellation_from_other_thread() {
        let problem = problem();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(usize::MAX)
            .with_seed(42);

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(std::time::Duration::from_millis(10));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let result = GaRunner::run_with_cancel(&problem, &config, Some(cancel)).unwrap();
        assert!(result.cancelled);
        assert!(result.generations < usize::MAX);
    }

    #[test]
    fn test_history_is_monotone() {
        let problem = problem();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config).unwrap();

        assert_eq!(result.fitness_history.len(), 31);
        for window in result.fitness_history.windows(2) {
            assert!(window[1] <= window[0], "best-ever fitness got worse: {window:?}");
        }
        assert_eq!(result.fitness_history.last().copied(), Some(result.best_fitness));
    }

    #[test]
    fn test_same_seed_same_result() {
        let problem = problem();
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(15)
            .with_seed(9);

        let a = GaRunner::run(&problem, &config).unwrap();
        let b = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(a.best, b.best);
        assert_eq!(a.fitness_history, b.fitness_history);
    }

    #[test]
    fn test_all_selection_strategies() {
        let problem = problem();

        for selection in [Selection::Tournament(3), Selection::Tournament(0), Selection::Roulette] {
            let config = GaConfig::default()
                .with_population_size(30)
                .with_max_generations(50)
                .with_selection(selection)
                .with_seed(42);

            let result = GaRunner::run(&problem, &config).unwrap();

            let recomputed = Solution::new(result.best.paths().to_vec(), &problem.config().weights);
            assert!(
                (recomputed.fitness() - result.best_fitness).abs() < 1e-9,
                "selection {selection:?} reported a stale fitness"
            );
            assert!(result.best_fitness <= result.fitness_history[0]);
        }
    }

    #[test]
    fn test_invalid_config_rejected() {
        let problem = problem();
        let config = GaConfig::default().with_population_size(0);
        assert!(matches!(
            GaRunner::run(&problem, &config),
            Err(RoutingError::InvalidConfig(_))
        ));
    }

    /// Random routings with the default (copy-first-parent, no-op) operators.
    struct RandomRoutings(RoutingProblem);

    impl GaProblem for RandomRoutings {
        type Individual = Solution;

        fn create_individual<R: Rng>(&self, rng: &mut R) -> Solution {
            self.0.random_solution(rng)
        }
    }

    #[test]
    fn test_default_operators() {
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_generations(10)
            .with_seed(42);

        let result = GaRunner::run(&RandomRoutings(problem()), &config).unwrap();

        assert_eq!(result.generations, 10);
        assert_eq!(result.fitness_history.len(), 11);
        assert_eq!(result.best_fitness, result.fitness_history[0]);
    }
}
