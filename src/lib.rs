//! Genetic-algorithm search for Manhattan routing.
//!
//! Connects every required point pair on an integer grid with an
//! axis-aligned path, minimizing a weighted sum of total length, segment
//! count, and intersection units between and within paths.
//!
//! - **Geometry**: points, axis-aligned segments, the board and its text
//!   format.
//! - **Paths**: contiguous segment chains and the randomized walk that
//!   builds them.
//! - **Routing**: solutions with intersection-aware fitness, crossover,
//!   reroll and shift mutation, and a random-search baseline.
//! - **Genetic Algorithm (GA)**: a generic generational loop with
//!   tournament or roulette selection, best-ever tracking, and cooperative
//!   cancellation.
//!
//! # Example
//!
//! ```
//! use manhattan_ga::ga::GaConfig;
//! use manhattan_ga::geometry::Board;
//! use manhattan_ga::routing::{RoutingConfig, RoutingProblem};
//!
//! let board: Board = "8;8\n0;0;7;7\n7;0;0;7\n".parse().unwrap();
//! let problem = RoutingProblem::new(board, RoutingConfig::default()).unwrap();
//! let config = GaConfig::default()
//!     .with_population_size(30)
//!     .with_max_generations(10)
//!     .with_seed(7);
//! let result = problem.solve(&config).unwrap();
//! println!("{}", result.best.report(problem.board()));
//! ```
//!
//! Progress is reported through the `log` facade; the host application
//! picks the logger.

pub mod error;
pub mod ga;
pub mod geometry;
pub mod path;
pub mod random;
pub mod routing;

pub use error::{Result, RoutingError};
