//! Block scoring.
//!
//! [`BlockScorer`] turns an ordered list of [`Requirement`]s into a
//! [`BlockScore`]: clamp, classify, count per tier, then run both phases.

use super::config::TierWeights;
use super::types::{BlockKind, BlockScore, Requirement, RequirementDetail};
use crate::category::{clamp_percent, ConfidenceTier, TierThresholds};

/// Scores blocks with a fixed set of thresholds and tier weights.
///
/// # Examples
///
/// ```
/// use u_blockrank::block::{BlockKind, BlockScorer, Requirement};
///
/// let scorer = BlockScorer::default();
/// let reqs = vec![Requirement::new("a", 100), Requirement::new("b", 80)];
/// let score = scorer.score(&reqs, BlockKind::Mandatory);
///
/// assert_eq!(score.g, 2);
/// assert!((score.color_score - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BlockScorer {
    thresholds: TierThresholds,
    weights: TierWeights,
}

/// Per-tier accumulation while walking a block.
#[derive(Default)]
struct TierTally {
    count: usize,
    sum: f64,
}

impl TierTally {
    fn push(&mut self, percent: i32) {
        self.count += 1;
        self.sum += f64::from(percent);
    }

    /// Arithmetic mean, 0 for an empty tier.
    fn mean(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.sum / self.count as f64
        }
    }
}

impl BlockScorer {
    pub fn new(thresholds: TierThresholds, weights: TierWeights) -> Self {
        Self {
            thresholds,
            weights,
        }
    }

    pub fn thresholds(&self) -> &TierThresholds {
        &self.thresholds
    }

    pub fn weights(&self) -> &TierWeights {
        &self.weights
    }

    /// Computes the two-phase score of one block.
    ///
    /// An empty block yields an all-zero score. Requirement details keep the
    /// input order.
    pub fn score(&self, requirements: &[Requirement], kind: BlockKind) -> BlockScore {
        if requirements.is_empty() {
            return BlockScore::default();
        }

        let mut green = TierTally::default();
        let mut yellow = TierTally::default();
        let mut red = TierTally::default();

        let details: Vec<RequirementDetail> = requirements
            .iter()
            .map(|req| {
                let percent = clamp_percent(req.match_percent);
                let color = self.thresholds.classify(percent);
                match color {
                    ConfidenceTier::High => green.push(percent),
                    ConfidenceTier::Partial => yellow.push(percent),
                    ConfidenceTier::Low => red.push(percent),
                }
                RequirementDetail {
                    name: req.name.clone(),
                    percent,
                    color,
                    evidence: req.evidence.clone(),
                    comment: req.difference_comment.clone(),
                }
            })
            .collect();

        let (g, y, r) = (green.count, yellow.count, red.count);
        let color_score = self.color_score(kind, g, y, r);

        let (g_avg, y_avg, r_avg) = (green.mean(), yellow.mean(), red.mean());
        let mut percent_score = (self.weights.green * g_avg / 100.0
            + self.weights.yellow * y_avg / 100.0
            + self.weights.red * r_avg / 100.0)
            * color_score;
        if !percent_score.is_finite() {
            percent_score = 0.0;
        }

        BlockScore {
            color_score,
            percent_score,
            g,
            y,
            r,
            g_avg,
            y_avg,
            r_avg,
            details,
        }
    }

    /// Phase 1 from the tier counts.
    fn color_score(&self, kind: BlockKind, g: usize, y: usize, r: usize) -> f64 {
        // No High and no Partial requirement: the block contributes nothing.
        if g + y == 0 {
            return 0.0;
        }

        let w = &self.weights;
        let n = (g + y + r) as f64;
        let (g, y, r) = (g as f64, y as f64, r as f64);

        match kind {
            BlockKind::Mandatory => ((w.green * g + w.yellow * y) * (g + y) + w.red * r) / (n * n),
            BlockKind::Preferred | BlockKind::Tasks => {
                (w.green * g + w.yellow * y + w.red * r) / n
            }
        }
    }
}

/// Scores a block with the default thresholds and tier weights.
pub fn score_block(requirements: &[Requirement], kind: BlockKind) -> BlockScore {
    BlockScorer::default().score(requirements, kind)
}
