//! Item inputs and ranked item scores.

use crate::block::{BlockKind, BlockScore, Requirement};
use crate::weights::BlockWeights;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An item to be ranked, with its requirement assessments per block.
///
/// `M` is an opaque metadata payload (external IDs, descriptions, ...)
/// carried alongside the item and never interpreted by the ranker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemInput<M = ()> {
    /// Stable identifier of the item.
    pub item_id: String,

    #[cfg_attr(feature = "serde", serde(default))]
    pub mandatory: Vec<Requirement>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub preferred: Vec<Requirement>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub tasks: Vec<Requirement>,

    #[cfg_attr(feature = "serde", serde(default))]
    pub metadata: Option<M>,
}

impl ItemInput {
    /// Creates an item with empty blocks and no metadata.
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            mandatory: Vec::new(),
            preferred: Vec::new(),
            tasks: Vec::new(),
            metadata: None,
        }
    }
}

impl<M> ItemInput<M> {
    pub fn with_mandatory(mut self, requirements: Vec<Requirement>) -> Self {
        self.mandatory = requirements;
        self
    }

    pub fn with_preferred(mut self, requirements: Vec<Requirement>) -> Self {
        self.preferred = requirements;
        self
    }

    pub fn with_tasks(mut self, requirements: Vec<Requirement>) -> Self {
        self.tasks = requirements;
        self
    }

    /// Attaches a metadata payload, replacing the payload type.
    pub fn with_metadata<N>(self, metadata: N) -> ItemInput<N> {
        ItemInput {
            item_id: self.item_id,
            mandatory: self.mandatory,
            preferred: self.preferred,
            tasks: self.tasks,
            metadata: Some(metadata),
        }
    }

    /// Requirements of one block.
    pub fn block(&self, kind: BlockKind) -> &[Requirement] {
        match kind {
            BlockKind::Mandatory => &self.mandatory,
            BlockKind::Preferred => &self.preferred,
            BlockKind::Tasks => &self.tasks,
        }
    }
}

/// Full scoring result for a single item.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ItemScore {
    /// Identifier copied from the input.
    pub item_id: String,

    pub mandatory: BlockScore,
    pub preferred: BlockScore,
    pub tasks: BlockScore,

    /// Weighted sum of the block color scores (primary sort key).
    pub final_color_score: f64,

    /// Weighted sum of the block percent scores (tie-break key).
    pub final_percent_score: f64,

    /// Effective weights after redistribution over empty blocks.
    pub used_weights: BlockWeights,

    /// Position after global sorting, 1 = best. `None` until ranked.
    pub rank: Option<usize>,
}

impl ItemScore {
    /// Score of one block.
    pub fn block(&self, kind: BlockKind) -> &BlockScore {
        match kind {
            BlockKind::Mandatory => &self.mandatory,
            BlockKind::Preferred => &self.preferred,
            BlockKind::Tasks => &self.tasks,
        }
    }

    /// Coverage within the Mandatory block.
    pub fn mandatory_coverage(&self) -> f64 {
        self.mandatory.coverage()
    }

    /// Mean coverage over the non-empty blocks; 0 when all are empty.
    ///
    /// Diagnostic only, not used for ordering.
    pub fn average_coverage(&self) -> f64 {
        let coverages: Vec<f64> = BlockKind::ALL
            .iter()
            .map(|&kind| self.block(kind))
            .filter(|block| !block.is_empty())
            .map(BlockScore::coverage)
            .collect();

        if coverages.is_empty() {
            return 0.0;
        }
        coverages.iter().sum::<f64>() / coverages.len() as f64
    }
}
