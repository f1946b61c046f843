//! Item ranking.
//!
//! Orchestrates the full pipeline for a collection of items:
//!
//! 1. Score the Mandatory, Preferred and Tasks blocks of each item.
//! 2. Redistribute block weights away from empty blocks.
//! 3. Aggregate `final_color_score` and `final_percent_score` as weighted
//!    sums over the blocks.
//! 4. Sort best first: color score with an epsilon tolerance, then the exact
//!    percent score, then input order.
//! 5. Assign ranks `1..=k`.
//!
//! Each item is scored independently. With the `parallel` feature and
//! [`RankingConfig::with_parallel`], scoring runs on rayon's thread pool;
//! the final sort is always one global pass.

mod comparator;
mod config;
mod engine;
mod types;

pub use comparator::{compare_scores, rank_order, tie_clusters};
pub use config::{RankingConfig, EPSILON};
pub use engine::{rank_items, Ranker};
pub use types::{ItemInput, ItemScore};
