//! Core trait definitions for the GA framework.
//!
//! [`Individual`] and [`GaProblem`] define the contract between the
//! generational loop and a problem such as routing.

use rand::Rng;

use crate::error::Result;

/// A candidate solution in the GA population.
///
/// Individuals carry their own fitness, kept current by the operators that
/// modify them. Lower fitness is better (minimization).
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct MySolution {
///     genes: Vec<f64>,
///     fitness: f64,
/// }
///
/// impl Individual for MySolution {
///     fn fitness(&self) -> f64 { self.fitness }
/// }
/// ```
pub trait Individual: Clone {
    /// Returns the current fitness of this individual.
    fn fitness(&self) -> f64;
}

/// Defines a GA optimization problem.
///
/// This is the trait a domain implements to plug into [`GaRunner`]:
///
/// 1. **Initialization**: How to create random individuals
/// 2. **Crossover**: How to recombine two parents into one child
/// 3. **Mutation**: How to perturb an individual
///
/// Operators must return independent values: a child never shares state
/// with its parents, so later in-place mutation cannot leak between
/// individuals.
///
/// [`GaRunner`]: super::GaRunner
pub trait GaProblem {
    /// The individual (solution) type for this problem.
    type Individual: Individual;

    /// Creates a random individual with its fitness already computed.
    fn create_individual<R: Rng>(&self, rng: &mut R) -> Self::Individual;

    /// Produces one offspring by recombining two parents.
    ///
    /// The default implementation clones `parent1` (no crossover).
    ///
    /// # Errors
    /// Implementations reject incompatible parents.
    fn crossover<R: Rng>(
        &self,
        parent1: &Self::Individual,
        _parent2: &Self::Individual,
        _rng: &mut R,
    ) -> Result<Self::Individual> {
        Ok(parent1.clone())
    }

    /// Mutates an individual in place, refreshing its fitness.
    ///
    /// The default implementation is a no-op.
    fn mutate<R: Rng>(&self, _individual: &mut Self::Individual, _rng: &mut R) {}
}
