//! Genetic Algorithm framework.
//!
//! A generic GA built on trait-based abstractions. A problem plugs in by
//! implementing [`GaProblem`], which specifies how to create, crossover and
//! mutate individuals. Routing is one such problem.
//!
//! # Core Traits
//!
//! - [`Individual`]: A candidate solution carrying its own fitness
//! - [`GaProblem`]: Problem definition (initialization and operators)
//!
//! # Key Types
//!
//! - [`GaConfig`]: Algorithm parameters (population size, rates, selection)
//! - [`Population`]: One generation, with ranking and parent selection
//! - [`GaRunner`]: Executes the evolutionary loop
//! - [`GaResult`]: Final optimization result with statistics
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod population;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use population::Population;
pub use runner::{GaResult, GaRunner};
pub use selection::Selection;
pub use types::{GaProblem, Individual};
