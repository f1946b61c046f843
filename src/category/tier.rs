//! Tier thresholds and the classifier.

use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the High tier.
pub const GREEN_THRESHOLD: i32 = 70;

/// Lower bound (inclusive) of the Partial tier.
pub const YELLOW_THRESHOLD: i32 = 30;

/// Confidence tier of a single requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ConfidenceTier {
    /// Requirement is satisfied with high confidence (green).
    #[cfg_attr(feature = "serde", serde(rename = "GREEN"))]
    High,

    /// Requirement is partially satisfied (yellow).
    #[cfg_attr(feature = "serde", serde(rename = "YELLOW"))]
    Partial,

    /// Requirement is barely or not satisfied (red).
    #[cfg_attr(feature = "serde", serde(rename = "RED"))]
    Low,
}

impl ConfidenceTier {
    /// Traffic-light label of the tier: `"GREEN"`, `"YELLOW"` or `"RED"`.
    pub fn label(self) -> &'static str {
        match self {
            ConfidenceTier::High => "GREEN",
            ConfidenceTier::Partial => "YELLOW",
            ConfidenceTier::Low => "RED",
        }
    }
}

/// Tier boundaries used by the classifier.
///
/// Must satisfy `0 <= yellow <= green <= 100`.
///
/// # Examples
///
/// ```
/// use u_blockrank::category::{ConfidenceTier, TierThresholds};
///
/// let strict = TierThresholds::default().with_green(85);
/// assert_eq!(strict.classify(80), ConfidenceTier::Partial);
/// assert!(strict.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TierThresholds {
    /// Inclusive lower bound of the High tier.
    pub green: i32,

    /// Inclusive lower bound of the Partial tier.
    pub yellow: i32,
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            green: GREEN_THRESHOLD,
            yellow: YELLOW_THRESHOLD,
        }
    }
}

impl TierThresholds {
    pub fn with_green(mut self, green: i32) -> Self {
        self.green = green;
        self
    }

    pub fn with_yellow(mut self, yellow: i32) -> Self {
        self.yellow = yellow;
        self
    }

    /// Clamps `percent` to `[0, 100]` and maps it onto a tier.
    pub fn classify(&self, percent: i32) -> ConfidenceTier {
        let percent = clamp_percent(percent);
        if percent >= self.green {
            ConfidenceTier::High
        } else if percent >= self.yellow {
            ConfidenceTier::Partial
        } else {
            ConfidenceTier::Low
        }
    }

    /// Validates the threshold ordering.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.yellow < 0 || self.yellow > self.green || self.green > 100 {
            return Err(ConfigError::InvalidThresholds {
                yellow: self.yellow,
                green: self.green,
            });
        }
        Ok(())
    }
}

/// Clamps a raw confidence percentage to `[0, 100]`.
pub fn clamp_percent(percent: i32) -> i32 {
    percent.clamp(0, 100)
}

/// Classifies a percentage with the default thresholds.
///
/// ```
/// use u_blockrank::category::{classify, ConfidenceTier};
///
/// assert_eq!(classify(70), ConfidenceTier::High);
/// assert_eq!(classify(69), ConfidenceTier::Partial);
/// assert_eq!(classify(-15), ConfidenceTier::Low);
/// ```
pub fn classify(percent: i32) -> ConfidenceTier {
    TierThresholds::default().classify(percent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries() {
        assert_eq!(classify(100), ConfidenceTier::High);
        assert_eq!(classify(70), ConfidenceTier::High);
        assert_eq!(classify(69), ConfidenceTier::Partial);
        assert_eq!(classify(30), ConfidenceTier::Partial);
        assert_eq!(classify(29), ConfidenceTier::Low);
        assert_eq!(classify(0), ConfidenceTier::Low);
    }

    #[test]
    fn test_out_of_range_is_clamped() {
        assert_eq!(clamp_percent(-40), 0);
        assert_eq!(clamp_percent(250), 100);
        assert_eq!(classify(i32::MIN), ConfidenceTier::Low);
        assert_eq!(classify(i32::MAX), ConfidenceTier::High);
    }

    #[test]
    fn test_custom_thresholds() {
        let t = TierThresholds::default().with_green(90).with_yellow(50);
        assert_eq!(t.classify(89), ConfidenceTier::Partial);
        assert_eq!(t.classify(90), ConfidenceTier::High);
        assert_eq!(t.classify(49), ConfidenceTier::Low);
    }

    #[test]
    fn test_collapsed_partial_tier() {
        // yellow == green leaves no room for Partial.
        let t = TierThresholds::default().with_green(50).with_yellow(50);
        assert_eq!(t.classify(50), ConfidenceTier::High);
        assert_eq!(t.classify(49), ConfidenceTier::Low);
        assert!(t.validate().is_ok());
    }

    #[test]
    fn test_labels() {
        assert_eq!(ConfidenceTier::High.label(), "GREEN");
        assert_eq!(ConfidenceTier::Partial.label(), "YELLOW");
        assert_eq!(ConfidenceTier::Low.label(), "RED");
    }

    #[test]
    fn test_validate_bad_thresholds() {
        assert!(TierThresholds::default().validate().is_ok());
        assert!(TierThresholds::default().with_yellow(-1).validate().is_err());
        assert!(TierThresholds::default().with_green(101).validate().is_err());
        assert!(TierThresholds::default()
            .with_green(20)
            .with_yellow(40)
            .validate()
            .is_err());
    }
}
