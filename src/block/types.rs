//! Requirement and block score records.

use crate::category::ConfidenceTier;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The three criteria blocks an item is evaluated against.
///
/// The set is closed: the block formulas and weight redistribution match
/// exhaustively on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BlockKind {
    Mandatory,
    Preferred,
    Tasks,
}

impl BlockKind {
    /// All block kinds in canonical order.
    pub const ALL: [BlockKind; 3] = [BlockKind::Mandatory, BlockKind::Preferred, BlockKind::Tasks];

    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Mandatory => "mandatory",
            BlockKind::Preferred => "preferred",
            BlockKind::Tasks => "tasks",
        }
    }
}

/// A single graded criterion within a block.
///
/// # Examples
///
/// ```
/// use u_blockrank::block::Requirement;
///
/// let req = Requirement::new("5+ years of Rust", 85)
///     .with_evidence("maintains two crates since 2018")
///     .with_comment("no embedded experience");
/// assert_eq!(req.match_percent, 85);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Requirement {
    /// Human-readable description of the requirement.
    pub name: String,

    /// Confidence that the item satisfies the requirement.
    ///
    /// Any integer is accepted; values are clamped to `[0, 100]` when scored.
    pub match_percent: i32,

    /// Free-text evidence supporting the percentage.
    #[cfg_attr(feature = "serde", serde(default))]
    pub evidence: String,

    /// Explanation of gaps or nuances.
    #[cfg_attr(feature = "serde", serde(default))]
    pub difference_comment: String,
}

impl Requirement {
    pub fn new(name: impl Into<String>, match_percent: i32) -> Self {
        Self {
            name: name.into(),
            match_percent,
            evidence: String::new(),
            difference_comment: String::new(),
        }
    }

    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = evidence.into();
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.difference_comment = comment.into();
        self
    }
}

/// Normalized view of a requirement after clamping and classification.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RequirementDetail {
    pub name: String,

    /// Percentage clamped to `[0, 100]`.
    pub percent: i32,

    pub color: ConfidenceTier,
    pub evidence: String,
    pub comment: String,
}

/// Score of one block of requirements.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockScore {
    /// Phase 1: structural coverage by tier counts.
    pub color_score: f64,

    /// Phase 2: color score refined by tier-average percentages.
    pub percent_score: f64,

    /// Number of High requirements.
    pub g: usize,

    /// Number of Partial requirements.
    pub y: usize,

    /// Number of Low requirements.
    pub r: usize,

    /// Mean percentage of the High tier (0 when empty).
    pub g_avg: f64,

    /// Mean percentage of the Partial tier (0 when empty).
    pub y_avg: f64,

    /// Mean percentage of the Low tier (0 when empty).
    pub r_avg: f64,

    /// Per-requirement breakdown, in input order.
    pub details: Vec<RequirementDetail>,
}

impl BlockScore {
    /// Total number of requirements in the block.
    pub fn n(&self) -> usize {
        self.g + self.y + self.r
    }

    pub fn is_empty(&self) -> bool {
        self.n() == 0
    }

    /// Fraction of requirements that are at least partially met: `(g + y) / n`.
    ///
    /// Returns 0 for an empty block.
    pub fn coverage(&self) -> f64 {
        let n = self.n();
        if n == 0 {
            return 0.0;
        }
        (self.g + self.y) as f64 / n as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_kind_order() {
        assert_eq!(
            BlockKind::ALL.map(BlockKind::as_str),
            ["mandatory", "preferred", "tasks"]
        );
    }

    #[test]
    fn test_requirement_builder() {
        let req = Requirement::new("sql", 40).with_evidence("e").with_comment("c");
        assert_eq!(req.name, "sql");
        assert_eq!(req.evidence, "e");
        assert_eq!(req.difference_comment, "c");
    }

    #[test]
    fn test_coverage() {
        let score = BlockScore {
            g: 1,
            y: 2,
            r: 1,
            ..Default::default()
        };
        assert_eq!(score.n(), 4);
        assert!((score.coverage() - 0.75).abs() < 1e-12);
        assert!(!score.is_empty());
    }

    #[test]
    fn test_empty_coverage_is_zero() {
        let score = BlockScore::default();
        assert!(score.is_empty());
        assert_eq!(score.coverage(), 0.0);
    }
}
