//! Weight redistribution for empty blocks.

use super::types::BlockWeights;

impl BlockWeights {
    /// Computes effective weights given which blocks are empty.
    ///
    /// Only emptiness matters; requirement contents are irrelevant here.
    /// Weight taken from an empty Mandatory block is dropped, since no block
    /// serves as its fallback.
    pub fn redistribute(
        &self,
        mandatory_empty: bool,
        preferred_empty: bool,
        tasks_empty: bool,
    ) -> BlockWeights {
        let mut w = *self;

        if mandatory_empty {
            tracing::warn!("mandatory block is empty; its weight is dropped");
            w.mandatory = 0.0;
        }

        match (preferred_empty, tasks_empty) {
            (true, true) => {
                w.mandatory += w.preferred + w.tasks;
                w.preferred = 0.0;
                w.tasks = 0.0;
            }
            (true, false) => {
                w.tasks += w.preferred;
                w.preferred = 0.0;
            }
            (false, true) => {
                w.preferred += w.tasks;
                w.tasks = 0.0;
            }
            (false, false) => {}
        }

        w
    }
}

/// Redistributes the default block weights.
///
/// ```
/// use u_blockrank::weights::redistribute;
///
/// let w = redistribute(false, true, false);
/// assert!((w.mandatory - 1.0).abs() < 1e-12);
/// assert_eq!(w.preferred, 0.0);
/// assert!((w.tasks - 0.4).abs() < 1e-12);
/// ```
pub fn redistribute(mandatory_empty: bool, preferred_empty: bool, tasks_empty: bool) -> BlockWeights {
    BlockWeights::default().redistribute(mandatory_empty, preferred_empty, tasks_empty)
}
