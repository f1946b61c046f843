//! Block weights and their redistribution over empty blocks.
//!
//! Each item is aggregated with one weight per [`BlockKind`](crate::block::BlockKind).
//! The configured defaults apply when all three blocks have requirements;
//! otherwise weight is moved away from empty blocks:
//!
//! | Mandatory | Preferred | Tasks | Effect |
//! |---|---|---|---|
//! | empty | * | * | Mandatory weight set to 0 (lost) |
//! | * | empty | empty | Preferred + Tasks added onto Mandatory |
//! | * | empty | present | Preferred moved onto Tasks |
//! | * | present | empty | Tasks moved onto Preferred |
//!
//! The first row applies before, and independently of, the other three.

mod redistribution;
mod types;

pub use redistribution::redistribute;
pub use types::{BlockWeights, MANDATORY_WEIGHT, PREFERRED_WEIGHT, TASKS_WEIGHT};
