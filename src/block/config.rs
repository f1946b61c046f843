//! Per-tier contribution weights.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Contribution of a High requirement.
pub const GREEN_WEIGHT: f64 = 1.0;

/// Contribution of a Partial requirement.
pub const YELLOW_WEIGHT: f64 = 0.5;

/// Contribution of a Low requirement: negligible but nonzero.
pub const RED_WEIGHT: f64 = 0.01;

/// Weights applied to the tier counts and tier averages of a block.
///
/// `green` defaults to `1.0`, which leaves the High tier as the unit of
/// both phases.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TierWeights {
    pub green: f64,
    pub yellow: f64,
    pub red: f64,
}

impl Default for TierWeights {
    fn default() -> Self {
        Self {
            green: GREEN_WEIGHT,
            yellow: YELLOW_WEIGHT,
            red: RED_WEIGHT,
        }
    }
}

impl TierWeights {
    pub fn with_green(mut self, w: f64) -> Self {
        self.green = w;
        self
    }

    pub fn with_yellow(mut self, w: f64) -> Self {
        self.yellow = w;
        self
    }

    pub fn with_red(mut self, w: f64) -> Self {
        self.red = w;
        self
    }

    /// Validates that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (tier, value) in [
            ("green", self.green),
            ("yellow", self.yellow),
            ("red", self.red),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidTierWeight { tier, value });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let w = TierWeights::default();
        assert!((w.green - 1.0).abs() < 1e-12);
        assert!((w.yellow - 0.5).abs() < 1e-12);
        assert!((w.red - 0.01).abs() < 1e-12);
        assert!(w.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_and_nan() {
        assert_eq!(
            TierWeights::default().with_red(-0.1).validate(),
            Err(ConfigError::InvalidTierWeight {
                tier: "red",
                value: -0.1
            })
        );
        assert!(TierWeights::default()
            .with_yellow(f64::NAN)
            .validate()
            .is_err());
        assert!(TierWeights::default()
            .with_green(f64::INFINITY)
            .validate()
            .is_err());
    }
}
