//! Routing-specific configuration.
//!
//! [`RoutingConfig`] carries everything the routing problem needs beyond the
//! generic GA parameters: fitness weights, mutation probabilities, and the
//! path generator settings.

use crate::error::{Result, RoutingError};
use crate::path::{DEFAULT_DIRECTION_BIAS, DEFAULT_SEGMENT_CAP};

/// Weights of the three fitness terms. Lower weighted sums are better.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FitnessWeights {
    /// Cost per unit of path length.
    pub length: f64,
    /// Cost per segment.
    pub segment: f64,
    /// Cost per intersection unit.
    pub intersection: f64,
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            length: 1.0,
            segment: 20.0,
            intersection: 1000.0,
        }
    }
}

impl FitnessWeights {
    /// Creates a weight set.
    pub fn new(length: f64, segment: f64, intersection: f64) -> Self {
        Self {
            length,
            segment,
            intersection,
        }
    }
}

/// Which recombination the GA applies when crossover fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverStrategy {
    /// Each path comes from either parent with equal probability.
    #[default]
    RandomGenes,
    /// One parent contributes the first half of the paths, the other the rest.
    EvenGenesDistribution,
}

/// Configuration for the routing problem.
///
/// # Examples
///
/// ```
/// use manhattan_ga::routing::{CrossoverStrategy, RoutingConfig};
///
/// let config = RoutingConfig::default()
///     .with_reroll_prob(0.3)
///     .with_crossover(CrossoverStrategy::EvenGenesDistribution);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingConfig {
    /// Fitness term weights.
    pub weights: FitnessWeights,

    /// Probability that a shift mutation rerolls instead (0.0–1.0).
    pub reroll_prob: f64,

    /// Probability of stepping towards the target when generating fresh paths.
    pub direction_bias: f64,

    /// Probability of stepping towards the target when regenerating a suffix.
    pub reroll_direction_bias: f64,

    /// Segment count after which the generator forces the walk to close.
    pub segment_cap: usize,

    /// Recombination used by the GA.
    pub crossover: CrossoverStrategy,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            weights: FitnessWeights::default(),
            reroll_prob: 0.6,
            direction_bias: DEFAULT_DIRECTION_BIAS,
            reroll_direction_bias: 0.65,
            segment_cap: DEFAULT_SEGMENT_CAP,
            crossover: CrossoverStrategy::default(),
        }
    }
}

impl RoutingConfig {
    /// Sets the fitness weights.
    pub fn with_weights(mut self, weights: FitnessWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Sets the reroll probability.
    pub fn with_reroll_prob(mut self, p: f64) -> Self {
        self.reroll_prob = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the towards-target probability for fresh paths.
    pub fn with_direction_bias(mut self, p: f64) -> Self {
        self.direction_bias = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the towards-target probability for regenerated suffixes.
    pub fn with_reroll_direction_bias(mut self, p: f64) -> Self {
        self.reroll_direction_bias = p.clamp(0.0, 1.0);
        self
    }

    /// Sets the generator's segment cap.
    pub fn with_segment_cap(mut self, cap: usize) -> Self {
        self.segment_cap = cap;
        self
    }

    /// Sets the crossover strategy.
    pub fn with_crossover(mut self, strategy: CrossoverStrategy) -> Self {
        self.crossover = strategy;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// [`RoutingError::InvalidConfig`] for probabilities outside `[0, 1]` or
    /// negative / non-finite weights.
    pub fn validate(&self) -> Result<()> {
        for (name, p) in [
            ("reroll_prob", self.reroll_prob),
            ("direction_bias", self.direction_bias),
            ("reroll_direction_bias", self.reroll_direction_bias),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(RoutingError::InvalidConfig(format!(
                    "{name} must be within [0, 1], got {p}"
                )));
            }
        }
        let w = &self.weights;
        for (name, value) in [
            ("length weight", w.length),
            ("segment weight", w.segment),
            ("intersection weight", w.intersection),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(RoutingError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = RoutingConfig::default();
        assert_eq!(config.weights, FitnessWeights::new(1.0, 20.0, 1000.0));
        assert!((config.reroll_prob - 0.6).abs() < 1e-10);
        assert!((config.direction_bias - 0.75).abs() < 1e-10);
        assert!((config.reroll_direction_bias - 0.65).abs() < 1e-10);
        assert_eq!(config.segment_cap, 13);
        assert_eq!(config.crossover, CrossoverStrategy::RandomGenes);
    }

    #[test]
    fn test_builder_clamps() {
        let config = RoutingConfig::default()
            .with_reroll_prob(1.7)
            .with_direction_bias(-1.0)
            .with_reroll_direction_bias(0.2)
            .with_segment_cap(4);
        assert!((config.reroll_prob - 1.0).abs() < 1e-10);
        assert!(config.direction_bias.abs() < 1e-10);
        assert!((config.reroll_direction_bias - 0.2).abs() < 1e-10);
        assert_eq!(config.segment_cap, 4);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_weight() {
        let config = RoutingConfig::default().with_weights(FitnessWeights::new(1.0, -2.0, 0.0));
        assert!(matches!(config.validate(), Err(RoutingError::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_rejects_probability_set_directly() {
        let config = RoutingConfig {
            reroll_prob: f64::NAN,
            ..RoutingConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
