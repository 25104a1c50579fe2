//! Selection strategies for the GA.
//!
//! Selection determines which individuals are chosen as parents for
//! crossover. Both strategies assume minimization.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use rand::Rng;

use super::types::Individual;

/// Selection strategy for choosing parents.
///
/// # Examples
///
/// ```
/// use manhattan_ga::ga::Selection;
///
/// // Tournament with size 4
/// let sel = Selection::Tournament(4);
///
/// // Roulette wheel (fitness-proportionate)
/// let sel = Selection::Roulette;
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Tournament selection: draw `k` individuals with replacement, keep the
    /// one with the lowest fitness (first drawn on ties).
    ///
    /// `Tournament(0)` is treated as [`Selection::Roulette`].
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// Each individual weighs `max_fitness - fitness`, so the worst
    /// individual gets no share and the best the largest. When every
    /// fitness is equal all weights are zero and the pick is uniform
    /// rather than always the first individual.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    Roulette,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(4)
    }
}

impl Selection {
    /// Select a parent index from the population.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn select<I: Individual, R: Rng>(&self, population: &[I], rng: &mut R) -> usize {
        assert!(
            !population.is_empty(),
            "cannot select from empty population"
        );

        match *self {
            Selection::Tournament(k) if k > 0 => tournament(population, k, rng),
            _ => roulette(population, rng),
        }
    }
}

/// Tournament selection: pick k random individuals, return best.
pub(crate) fn tournament<I: Individual, R: Rng>(population: &[I], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = population.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if population[idx].fitness() < population[best_idx].fitness() {
            best_idx = idx;
        }
    }
    best_idx
}

/// Roulette wheel selection using inverse fitness transformation.
///
/// For minimization: weight_i = max_fitness - fitness_i. A population of
/// equal fitness has zero total weight and falls back to a uniform pick.
pub(crate) fn roulette<I: Individual, R: Rng>(population: &[I], rng: &mut R) -> usize {
    let n = population.len();
    if n == 1 {
        return 0;
    }

    let max_fitness = population
        .iter()
        .map(Individual::fitness)
        .fold(f64::NEG_INFINITY, f64::max);

    let weights: Vec<f64> = population
        .iter()
        .map(|ind| (max_fitness - ind.fitness()).max(0.0))
        .collect();

    let total: f64 = weights.iter().sum();
    if total <= 0.0 || !total.is_finite() {
        // Uniform fitness: every individual is equally good.
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1 // floating-point fallback
}
