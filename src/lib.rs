//! Domain-agnostic two-phase multi-block ranking.
//!
//! Ranks candidate *items* against three weighted blocks of graded
//! requirements (Mandatory, Preferred, Tasks). Each requirement carries a
//! confidence percentage that the item satisfies it.
//!
//! - **Category**: clamps percentages and maps them onto High / Partial /
//!   Low confidence tiers.
//! - **Block**: two-phase block scoring: a structural *color score* from
//!   tier counts, refined into a *percent score* by tier averages.
//! - **Weights**: per-block weights, redistributed away from empty blocks.
//! - **Ranking**: weighted aggregation per item and an epsilon-aware,
//!   stable two-key ordering with rank assignment.
//!
//! # Example
//!
//! ```
//! use u_blockrank::{rank_items, ItemInput, Requirement};
//!
//! let items = vec![
//!     ItemInput::new("alice")
//!         .with_mandatory(vec![Requirement::new("rust", 100), Requirement::new("sql", 80)]),
//!     ItemInput::new("bob")
//!         .with_mandatory(vec![Requirement::new("rust", 60), Requirement::new("sql", 90)])
//!         .with_preferred(vec![Requirement::new("k8s", 75)]),
//! ];
//!
//! let ranked = rank_items(&items);
//! assert_eq!(ranked[0].item_id, "alice");
//! assert!((ranked[0].final_color_score - 1.4).abs() < 1e-12);
//! ```
//!
//! # Architecture
//!
//! Pure and deterministic: no I/O, no shared state. Scoring is per item;
//! only the final sort sees the whole collection. Confidence percentages
//! are taken as given.

pub mod block;
pub mod category;
pub mod error;
pub mod ranking;
pub mod weights;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use block::{
    score_block, BlockKind, BlockScore, Requirement, RequirementDetail, GREEN_WEIGHT, RED_WEIGHT,
    YELLOW_WEIGHT,
};
pub use category::{classify, ConfidenceTier, GREEN_THRESHOLD, YELLOW_THRESHOLD};
pub use error::ConfigError;
pub use ranking::{rank_items, ItemInput, ItemScore, Ranker, RankingConfig, EPSILON};
pub use weights::{redistribute, BlockWeights, MANDATORY_WEIGHT, PREFERRED_WEIGHT, TASKS_WEIGHT};
