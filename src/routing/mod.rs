//! Manhattan routing as a GA problem.
//!
//! # Key Types
//!
//! - [`RoutingProblem`]: board + configuration; implements [`GaProblem`](crate::ga::GaProblem)
//! - [`Solution`]: one path per point pair with its weighted fitness
//! - [`RoutingConfig`] / [`FitnessWeights`]: routing parameters
//! - [`RoutingReport`]: what a renderer needs to draw a solution
//!
//! Crossover and mutation operators are methods on [`RoutingProblem`], since
//! they need the board and the configured weights.

mod config;
mod crossover;
mod mutation;
mod problem;
mod report;
mod solution;

pub use config::{CrossoverStrategy, FitnessWeights, RoutingConfig};
pub use mutation::{MutationOutcome, ShiftDirection, ShiftOptions};
pub use problem::RoutingProblem;
pub use report::RoutingReport;
pub use solution::Solution;
