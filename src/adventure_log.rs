//! The adventure log: every completed quest, newest first.

use chrono::{DateTime, Local};
use std::collections::VecDeque;

/// Written once when a quest is finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionReport {
    pub quest_id: u32,
    pub title: String,
    pub completed_at: DateTime<Local>,
    pub narrative: String,
}

/// Prepend-only history. Entries are never edited or removed.
#[derive(Debug, Clone, Default)]
pub struct AdventureLog {
    entries: VecDeque<CompletionReport>,
}

impl AdventureLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, report: CompletionReport) {
        self.entries.push_front(report);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn latest(&self) -> Option<&CompletionReport> {
        self.entries.front()
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &CompletionReport> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(id: u32, title: &str) -> CompletionReport {
        CompletionReport {
            quest_id: id,
            title: title.to_string(),
            completed_at: Local::now(),
            narrative: "done".to_string(),
        }
    }

    #[test]
    fn test_new_log_is_empty() {
        let log = AdventureLog::new();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
    }

    #[test]
    fn test_records_newest_first() {
        let mut log = AdventureLog::new();
        log.record(report(1, "first"));
        log.record(report(2, "second"));
        log.record(report(1, "third"));

        let titles: Vec<&str> = log.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["third", "second", "first"]);
        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().map(|r| r.quest_id), Some(1));
    }
}
