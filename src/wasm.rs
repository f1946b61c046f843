//! JavaScript bindings (feature `wasm`).
//!
//! Items and results cross the boundary as plain JS objects shaped like
//! [`ItemInput`] and [`ItemScore`](crate::ranking::ItemScore). Item
//! metadata is accepted and ignored.

use serde::de::IgnoredAny;
use wasm_bindgen::prelude::*;

use crate::ranking::{ItemInput, Ranker, RankingConfig};

/// Ranks items with the default configuration.
#[wasm_bindgen(js_name = "rankItems")]
pub fn rank_items(items: JsValue) -> Result<JsValue, JsError> {
    rank_with(Ranker::default(), items)
}

/// Ranks items with a caller-supplied configuration.
///
/// Missing config fields fall back to their defaults.
#[wasm_bindgen(js_name = "rankItemsWith")]
pub fn rank_items_with(items: JsValue, config: JsValue) -> Result<JsValue, JsError> {
    let config: RankingConfig = serde_wasm_bindgen::from_value(config)?;
    rank_with(Ranker::new(config)?, items)
}

fn rank_with(ranker: Ranker, items: JsValue) -> Result<JsValue, JsError> {
    let items: Vec<ItemInput<IgnoredAny>> = serde_wasm_bindgen::from_value(items)?;
    let ranked = ranker.rank(&items);
    Ok(serde_wasm_bindgen::to_value(&ranked)?)
}
