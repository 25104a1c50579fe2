//! Fixed-size population with ranked evaluation and parent selection.

use rand::Rng;

use super::selection::{roulette, tournament, Selection};
use super::types::Individual;

/// The individuals of one generation.
///
/// The population size stays constant: a new generation replaces the old one
/// wholesale through [`Population::replace`].
#[derive(Debug, Clone)]
pub struct Population<I> {
    individuals: Vec<I>,
}

impl<I: Individual> Population<I> {
    /// Wraps an existing set of individuals.
    pub fn new(individuals: Vec<I>) -> Self {
        Self { individuals }
    }

    /// Builds `size` individuals from `create`.
    pub fn initialize<F: FnMut() -> I>(size: usize, create: F) -> Self {
        Self {
            individuals: std::iter::repeat_with(create).take(size).collect(),
        }
    }

    /// Number of individuals.
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// True when the population holds no individuals.
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// The individuals, in insertion order.
    pub fn individuals(&self) -> &[I] {
        &self.individuals
    }

    /// Iterates over the individuals in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.individuals.iter()
    }

    /// Individuals ordered by ascending fitness (best first).
    ///
    /// The population itself is left untouched; ties keep insertion order.
    pub fn evaluate(&self) -> Vec<&I> {
        let mut ranked: Vec<&I> = self.individuals.iter().collect();
        ranked.sort_by(|a, b| a.fitness().total_cmp(&b.fitness()));
        ranked
    }

    /// The individual with the lowest fitness.
    pub fn best(&self) -> Option<&I> {
        self.individuals
            .iter()
            .min_by(|a, b| a.fitness().total_cmp(&b.fitness()))
    }

    /// Fitness-proportionate pick weighted by `max_fitness - fitness`.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn selection_roulette<R: Rng>(&self, rng: &mut R) -> &I {
        assert!(!self.is_empty(), "cannot select from empty population");
        &self.individuals[roulette(&self.individuals, rng)]
    }

    /// Draws `k` individuals with replacement and returns the fittest.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn selection_tournament<R: Rng>(&self, k: usize, rng: &mut R) -> &I {
        assert!(!self.is_empty(), "cannot select from empty population");
        &self.individuals[tournament(&self.individuals, k, rng)]
    }

    /// Picks a parent with the configured strategy.
    ///
    /// # Panics
    /// Panics if the population is empty.
    pub fn select<R: Rng>(&self, selection: Selection, rng: &mut R) -> &I {
        &self.individuals[selection.select(&self.individuals, rng)]
    }

    /// Discards the current generation in favour of `next`.
    pub fn replace(&mut self, next: Vec<I>) {
        self.individuals = next;
    }
}
