//! Ranking configuration.
//!
//! [`RankingConfig`] gathers every named constant the pipeline consumes:
//! tier thresholds, tier weights, default block weights and the comparator
//! tolerance.

use crate::block::TierWeights;
use crate::category::TierThresholds;
use crate::error::ConfigError;
use crate::weights::BlockWeights;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Tolerance under which two final color scores are considered equal.
pub const EPSILON: f64 = 1e-6;

/// Configuration for the [`Ranker`](super::Ranker).
///
/// # Defaults
///
/// ```
/// use u_blockrank::ranking::RankingConfig;
///
/// let config = RankingConfig::default();
/// assert_eq!(config.thresholds.green, 70);
/// assert!((config.block_weights.total() - 1.4).abs() < 1e-12);
/// assert!(config.validate().is_ok());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_blockrank::category::TierThresholds;
/// use u_blockrank::ranking::RankingConfig;
/// use u_blockrank::weights::BlockWeights;
///
/// let config = RankingConfig::default()
///     .with_thresholds(TierThresholds::default().with_green(80))
///     .with_block_weights(BlockWeights::new(1.0, 0.5, 0.5))
///     .with_epsilon(1e-9);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RankingConfig {
    /// Tier boundaries for the classifier.
    pub thresholds: TierThresholds,

    /// Per-tier contribution weights.
    pub tier_weights: TierWeights,

    /// Base block weights before redistribution.
    pub block_weights: BlockWeights,

    /// Tolerance on the primary (color) sort key.
    pub epsilon: f64,

    /// Whether to score items in parallel using rayon.
    ///
    /// Only honored with the `parallel` feature. The final sort is always a
    /// single sequential pass.
    pub parallel: bool,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            thresholds: TierThresholds::default(),
            tier_weights: TierWeights::default(),
            block_weights: BlockWeights::default(),
            epsilon: EPSILON,
            parallel: false,
        }
    }
}

impl RankingConfig {
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn with_tier_weights(mut self, weights: TierWeights) -> Self {
        self.tier_weights = weights;
        self
    }

    pub fn with_block_weights(mut self, weights: BlockWeights) -> Self {
        self.block_weights = weights;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.thresholds.validate()?;
        self.tier_weights.validate()?;
        self.block_weights.validate()?;
        if !self.epsilon.is_finite() || self.epsilon < 0.0 {
            return Err(ConfigError::InvalidEpsilon(self.epsilon));
        }
        Ok(())
    }
}
