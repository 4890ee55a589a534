use chrono::{DateTime, Local};

/// Difficulty ranking shown on the quest board, lowest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum QuestRank {
    D,
    C,
    B,
    A,
    S,
}

impl QuestRank {
    pub fn label(self) -> &'static str {
        match self {
            QuestRank::D => "D",
            QuestRank::C => "C",
            QuestRank::B => "B",
            QuestRank::A => "A",
            QuestRank::S => "S",
        }
    }
}

/// A chore dressed up as a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestDefinition {
    pub id: u32,
    pub rank: QuestRank,
    pub title: &'static str,
    pub description: &'static str,
    /// Display text only. The gold actually paid is a fixed amount.
    pub reward: &'static str,
    pub exp: u32,
    pub location: &'static str,
    /// Art reference. `None` falls back to the placeholder tile.
    pub image: Option<&'static str>,
}

/// The quest currently being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveQuest {
    pub quest: QuestDefinition,
    pub started_at: DateTime<Local>,
    /// Simulated photos taken during the quest
    pub photos: u32,
    /// Simulated voice memos taken during the quest
    pub memos: u32,
}

impl ActiveQuest {
    pub fn new(quest: QuestDefinition, started_at: DateTime<Local>) -> Self {
        Self {
            quest,
            started_at,
            photos: 0,
            memos: 0,
        }
    }
}
