//! Confidence tier classification.
//!
//! Every requirement carries a confidence percentage that the item
//! satisfies it. Before any block arithmetic, the percentage is clamped to
//! `[0, 100]` and mapped onto one of three tiers:
//!
//! - **High** (green): `percent >= GREEN_THRESHOLD`
//! - **Partial** (yellow): `YELLOW_THRESHOLD <= percent < GREEN_THRESHOLD`
//! - **Low** (red): `percent < YELLOW_THRESHOLD`
//!
//! Classification is total over all integers; there are no error cases.

mod tier;

pub use tier::{
    clamp_percent, classify, ConfidenceTier, TierThresholds, GREEN_THRESHOLD, YELLOW_THRESHOLD,
};
