//! Recombination of two routings.
//!
//! Both operators take whole paths from the parents. Children own cloned
//! paths and never share segments with either parent.

use rand::Rng;

use super::problem::RoutingProblem;
use super::solution::Solution;
use crate::error::{Result, RoutingError};
use crate::path::Path;

impl RoutingProblem {
    /// Takes each path from either parent with probability 0.5.
    ///
    /// # Errors
    /// [`RoutingError::ParentSizeMismatch`] when the parents hold different
    /// numbers of paths.
    pub fn crossover_with_random_genes<R: Rng>(
        &self,
        first: &Solution,
        second: &Solution,
        rng: &mut R,
    ) -> Result<Solution> {
        check_sizes(first, second)?;
        let paths = first
            .paths()
            .iter()
            .zip(second.paths())
            .map(|(a, b)| if rng.random::<f64>() < 0.5 { a.clone() } else { b.clone() })
            .collect();
        Ok(Solution::new(paths, &self.config().weights))
    }

    /// Joins the first half of one parent's paths with the second half of
    /// the other's. Which parent leads is a fair coin; the split is at
    /// `count / 2`.
    ///
    /// # Errors
    /// [`RoutingError::ParentSizeMismatch`] when the parents hold different
    /// numbers of paths.
    pub fn crossover_with_even_genes_distribution<R: Rng>(
        &self,
        first: &Solution,
        second: &Solution,
        rng: &mut R,
    ) -> Result<Solution> {
        check_sizes(first, second)?;
        let (head, tail) = if rng.random::<f64>() < 0.5 {
            (first, second)
        } else {
            (second, first)
        };
        let split = first.path_count() / 2;
        let paths: Vec<Path> = head.paths()[..split]
            .iter()
            .chain(&tail.paths()[split..])
            .cloned()
            .collect();
        Ok(Solution::new(paths, &self.config().weights))
    }
}

fn check_sizes(first: &Solution, second: &Solution) -> Result<()> {
    if first.path_count() != second.path_count() {
        return Err(RoutingError::ParentSizeMismatch {
            left: first.path_count(),
            right: second.path_count(),
        });
    }
    Ok(())
}
