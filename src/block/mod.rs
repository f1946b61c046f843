//! Two-phase block scoring.
//!
//! A *block* is an ordered list of requirements sharing one [`BlockKind`].
//! Scoring happens in two phases:
//!
//! - **Phase 1 (color score)**: structural coverage from the tier counts
//!   `g`, `y`, `r`. Mandatory blocks use a super-linear form so that
//!   jointly satisfied requirements are rewarded; Preferred and Tasks blocks
//!   use a plain weighted coverage ratio.
//! - **Phase 2 (percent score)**: refinement by the mean percentage within
//!   each tier, scaled by the color score.
//!
//! Empty blocks and all-Low blocks score exactly zero in both phases.

mod config;
mod scorer;
mod types;

pub use config::{TierWeights, GREEN_WEIGHT, RED_WEIGHT, YELLOW_WEIGHT};
pub use scorer::{score_block, BlockScorer};
pub use types::{BlockKind, BlockScore, Requirement, RequirementDetail};
