//! Error types shared across the crate.

use thiserror::Error;

/// Failures from the ambient layers: disk, config, audio device.
#[derive(Debug, Error)]
pub enum LocalQuestError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config parse error: {0}")]
    Config(#[from] toml::de::Error),

    /// No output device, or the device refused the stream.
    #[error("audio unavailable: {0}")]
    Audio(String),

    #[error("could not determine home directory")]
    NoHomeDir,
}

pub type Result<T> = std::result::Result<T, LocalQuestError>;

/// A lifecycle transition that was refused. State is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("a quest is already in progress")]
    QuestInProgress,

    #[error("no quest is selected")]
    NothingSelected,

    #[error("no quest is in progress")]
    NoActiveQuest,

    #[error("abandoning a quest needs confirmation")]
    NotConfirmed,
}
