//! Ranking pipeline.
//!
//! [`Ranker`] scores every item independently (three blocks, redistributed
//! weights, weighted sums), then applies one global stable sort and assigns
//! ranks `1..=k`.

use super::comparator::rank_order;
use super::config::RankingConfig;
use super::types::{ItemInput, ItemScore};
use crate::block::{BlockKind, BlockScorer};
use crate::error::ConfigError;

/// Scores and ranks items with a validated configuration.
///
/// # Examples
///
/// ```
/// use u_blockrank::block::Requirement;
/// use u_blockrank::ranking::{ItemInput, Ranker, RankingConfig};
///
/// let ranker = Ranker::new(RankingConfig::default()).unwrap();
/// let items = vec![
///     ItemInput::new("weak").with_mandatory(vec![Requirement::new("rust", 40)]),
///     ItemInput::new("strong").with_mandatory(vec![Requirement::new("rust", 95)]),
/// ];
///
/// let ranked = ranker.rank(&items);
/// assert_eq!(ranked[0].item_id, "strong");
/// assert_eq!(ranked[0].rank, Some(1));
/// ```
#[derive(Debug, Clone)]
pub struct Ranker {
    config: RankingConfig,
    scorer: BlockScorer,
}

impl Ranker {
    /// Creates a ranker after validating `config`.
    pub fn new(config: RankingConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let scorer = BlockScorer::new(config.thresholds, config.tier_weights);
        Ok(Self { config, scorer })
    }

    pub fn config(&self) -> &RankingConfig {
        &self.config
    }

    /// Scores a single item without ranking it (`rank` stays `None`).
    pub fn score_item<M>(&self, item: &ItemInput<M>) -> ItemScore {
        let blocks = BlockKind::ALL.map(|kind| self.scorer.score(item.block(kind), kind));

        let used_weights = self.config.block_weights.redistribute(
            item.mandatory.is_empty(),
            item.preferred.is_empty(),
            item.tasks.is_empty(),
        );

        let final_color_score: f64 = used_weights
            .iter()
            .zip(&blocks)
            .map(|((_, w), block)| w * block.color_score)
            .sum();
        let final_percent_score: f64 = used_weights
            .iter()
            .zip(&blocks)
            .map(|((_, w), block)| w * block.percent_score)
            .sum();

        let [mandatory, preferred, tasks] = blocks;
        ItemScore {
            item_id: item.item_id.clone(),
            mandatory,
            preferred,
            tasks,
            final_color_score,
            final_percent_score,
            used_weights,
            rank: None,
        }
    }

    /// Scores all items, sorts them best first and assigns ranks.
    pub fn rank<M: Sync>(&self, items: &[ItemInput<M>]) -> Vec<ItemScore> {
        let scores = self.score_all(items);
        let order = rank_order(&scores, self.config.epsilon);

        let mut slots: Vec<Option<ItemScore>> = scores.into_iter().map(Some).collect();
        let ranked: Vec<ItemScore> = order
            .into_iter()
            .filter_map(|idx| slots[idx].take())
            .enumerate()
            .map(|(pos, mut score)| {
                score.rank = Some(pos + 1);
                score
            })
            .collect();

        if let Some(best) = ranked.first() {
            tracing::debug!(
                items = ranked.len(),
                best = %best.item_id,
                best_color = best.final_color_score,
                "ranked items"
            );
        }

        ranked
    }

    #[cfg(feature = "parallel")]
    fn score_all<M: Sync>(&self, items: &[ItemInput<M>]) -> Vec<ItemScore> {
        use rayon::prelude::*;

        if self.config.parallel {
            items.par_iter().map(|item| self.score_item(item)).collect()
        } else {
            items.iter().map(|item| self.score_item(item)).collect()
        }
    }

    #[cfg(not(feature = "parallel"))]
    fn score_all<M>(&self, items: &[ItemInput<M>]) -> Vec<ItemScore> {
        items.iter().map(|item| self.score_item(item)).collect()
    }
}

impl Default for Ranker {
    fn default() -> Self {
        let config = RankingConfig::default();
        Self {
            scorer: BlockScorer::new(config.thresholds, config.tier_weights),
            config,
        }
    }
}

/// Ranks items with the default configuration.
pub fn rank_items<M: Sync>(items: &[ItemInput<M>]) -> Vec<ItemScore> {
    Ranker::default().rank(items)
}
