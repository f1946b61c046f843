//! Per-block weight mapping.

use std::ops::{Index, IndexMut};

use crate::block::BlockKind;
use crate::error::ConfigError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Default weight of the Mandatory block.
pub const MANDATORY_WEIGHT: f64 = 1.0;

/// Default weight of the Preferred block.
pub const PREFERRED_WEIGHT: f64 = 0.2;

/// Default weight of the Tasks block.
pub const TASKS_WEIGHT: f64 = 0.2;

/// One weight per block kind.
///
/// The weights need not sum to 1.0; the default profile totals 1.4.
///
/// # Examples
///
/// ```
/// use u_blockrank::block::BlockKind;
/// use u_blockrank::weights::BlockWeights;
///
/// let w = BlockWeights::default().with(BlockKind::Tasks, 0.5);
/// assert!((w[BlockKind::Tasks] - 0.5).abs() < 1e-12);
/// assert!((w.total() - 1.7).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockWeights {
    pub mandatory: f64,
    pub preferred: f64,
    pub tasks: f64,
}

impl Default for BlockWeights {
    fn default() -> Self {
        Self {
            mandatory: MANDATORY_WEIGHT,
            preferred: PREFERRED_WEIGHT,
            tasks: TASKS_WEIGHT,
        }
    }
}

impl BlockWeights {
    pub fn new(mandatory: f64, preferred: f64, tasks: f64) -> Self {
        Self {
            mandatory,
            preferred,
            tasks,
        }
    }

    /// Returns a copy with the weight of `kind` replaced.
    pub fn with(mut self, kind: BlockKind, weight: f64) -> Self {
        self[kind] = weight;
        self
    }

    /// Sum of the three weights.
    pub fn total(&self) -> f64 {
        self.mandatory + self.preferred + self.tasks
    }

    /// Iterates `(kind, weight)` pairs in canonical block order.
    pub fn iter(&self) -> impl Iterator<Item = (BlockKind, f64)> + '_ {
        BlockKind::ALL.into_iter().map(move |kind| (kind, self[kind]))
    }

    /// Validates that every weight is finite and non-negative.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (kind, value) in self.iter() {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidBlockWeight { kind, value });
            }
        }
        Ok(())
    }
}

impl Index<BlockKind> for BlockWeights {
    type Output = f64;

    fn index(&self, kind: BlockKind) -> &f64 {
        match kind {
            BlockKind::Mandatory => &self.mandatory,
            BlockKind::Preferred => &self.preferred,
            BlockKind::Tasks => &self.tasks,
        }
    }
}

impl IndexMut<BlockKind> for BlockWeights {
    fn index_mut(&mut self, kind: BlockKind) -> &mut f64 {
        match kind {
            BlockKind::Mandatory => &mut self.mandatory,
            BlockKind::Preferred => &mut self.preferred,
            BlockKind::Tasks => &mut self.tasks,
        }
    }
}
