//! Configuration errors.
//!
//! Scoring and ranking are total; only a hand-built configuration can be
//! rejected.

use crate::block::BlockKind;
use thiserror::Error;

/// Reason a configuration failed validation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("tier thresholds must satisfy 0 <= yellow <= green <= 100, got yellow={yellow}, green={green}")]
    InvalidThresholds { yellow: i32, green: i32 },

    #[error("{tier} tier weight must be finite and non-negative, got {value}")]
    InvalidTierWeight { tier: &'static str, value: f64 },

    #[error("{} block weight must be finite and non-negative, got {value}", .kind.as_str())]
    InvalidBlockWeight { kind: BlockKind, value: f64 },

    #[error("epsilon must be finite and non-negative, got {0}")]
    InvalidEpsilon(f64),
}
