//! Quest catalog.
//!
//! Quest definitions are fixed at startup and never mutated. Acceptance copies
//! a definition into an [`ActiveQuest`], which lives inside the lifecycle.

mod data;
mod types;

pub use data::{find_quest, quest_catalog};
pub use types::{ActiveQuest, QuestDefinition, QuestRank};
