//! On-disk files under `~/.localquest/`.
//!
//! The only persisted game datum is the onboarding flag. The data directory
//! also holds `config.toml` and the log file.

use crate::constants::{DATA_DIR_NAME, OPENING_FLAG_FILE};
use crate::error::{LocalQuestError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Returns `~/.localquest/`. Does not create it.
pub fn default_data_dir() -> Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or(LocalQuestError::NoHomeDir)?;
    Ok(home_dir.join(DATA_DIR_NAME))
}

/// Load a JSON file, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(path: &Path) -> T {
    match fs::read_to_string(path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

/// Save a value as pretty-printed JSON, creating parent directories.
pub fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json)?;
    Ok(())
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct OpeningRecord {
    opening_seen: bool,
}

/// Whether the opening greeting has been shown on this machine.
#[derive(Debug, Clone)]
pub struct OnboardingFlag {
    path: PathBuf,
}

impl OnboardingFlag {
    pub fn in_dir(data_dir: &Path) -> Self {
        Self {
            path: data_dir.join(OPENING_FLAG_FILE),
        }
    }

    /// Absent or unreadable means not yet shown.
    pub fn is_seen(&self) -> bool {
        load_json_or_default::<OpeningRecord>(&self.path).opening_seen
    }

    pub fn mark_seen(&self) -> Result<()> {
        save_json(&self.path, &OpeningRecord { opening_seen: true })
    }

    /// Forgets the flag so the opening plays again.
    pub fn reset(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
            _ => Ok(()),
        }
    }
}
