//! Built-in quest definitions.

use super::types::{QuestDefinition, QuestRank};

/// Returns every quest on the board, in display order.
pub fn quest_catalog() -> Vec<QuestDefinition> {
    vec![
        QuestDefinition {
            id: 1,
            rank: QuestRank::D,
            title: "Clean Up the Park",
            description: "Make our usual park sparkle! Pick up any litter you spot.",
            reward: "100 G",
            exp: 50,
            location: "the neighborhood park",
            image: Some("assets/quest_park.png"),
        },
        QuestDefinition {
            id: 2,
            rank: QuestRank::C,
            title: "The Errand Mission",
            description: "Infiltrate the evening supermarket! Secure the eggs and the milk.",
            reward: "300 G + a snack",
            exp: 100,
            location: "the supermarket",
            image: None,
        },
        QuestDefinition {
            id: 3,
            rank: QuestRank::B,
            title: "A Letter to Grandpa",
            description: "Report your recent deeds to the faraway sage. A picture diary also counts.",
            reward: "500 G",
            exp: 200,
            location: "home",
            image: None,
        },
    ]
}

/// Looks up a quest by id.
pub fn find_quest(id: u32) -> Option<QuestDefinition> {
    quest_catalog().into_iter().find(|q| q.id == id)
}
