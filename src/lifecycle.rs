//! Quest lifecycle state machine.
//!
//! ```text
//! Browsing --view(q)--> Viewing(q) --start--> Active(a) --finish--> (Completed) --> Browsing
//!     ^                     |                    |
//!     +-------back----------+                    |
//!     +---------------abandon(confirmed)---------+
//! ```
//!
//! `Completed` is never stored: finishing returns a [`Completion`] and the
//! machine is back in `Browsing` by the time the caller sees it.

use crate::adventure_log::{AdventureLog, CompletionReport};
use crate::error::TransitionError;
use crate::profile::{PlayerProfile, RewardOutcome};
use crate::quests::{ActiveQuest, QuestDefinition};
use crate::report::generate_report;
use chrono::{DateTime, Local};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum QuestState {
    #[default]
    Browsing,
    Viewing(QuestDefinition),
    Active(ActiveQuest),
}

/// Result of finishing a quest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    pub report: CompletionReport,
    pub reward: RewardOutcome,
}

impl Completion {
    pub fn leveled_up(&self) -> Option<u32> {
        self.reward.level_up
    }
}

/// Owns the single active quest, if any.
#[derive(Debug, Clone, Default)]
pub struct QuestLifecycle {
    state: QuestState,
}

impl QuestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &QuestState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, QuestState::Active(_))
    }

    pub fn active_quest(&self) -> Option<&ActiveQuest> {
        match &self.state {
            QuestState::Active(active) => Some(active),
            _ => None,
        }
    }

    pub fn active_quest_mut(&mut self) -> Option<&mut ActiveQuest> {
        match &mut self.state {
            QuestState::Active(active) => Some(active),
            _ => None,
        }
    }

    /// Opens the detail view for `quest`. Picking a different quest while
    /// already viewing one just switches the selection.
    pub fn view(&mut self, quest: QuestDefinition) -> Result<(), TransitionError> {
        if self.is_active() {
            return Err(TransitionError::QuestInProgress);
        }
        self.state = QuestState::Viewing(quest);
        Ok(())
    }

    /// Leaves the detail view.
    pub fn back(&mut self) -> Result<(), TransitionError> {
        match self.state {
            QuestState::Viewing(_) => {
                self.state = QuestState::Browsing;
                Ok(())
            }
            QuestState::Active(_) => Err(TransitionError::QuestInProgress),
            QuestState::Browsing => Err(TransitionError::NothingSelected),
        }
    }

    /// Accepts the quest being viewed.
    pub fn start(&mut self, now: DateTime<Local>) -> Result<&ActiveQuest, TransitionError> {
        let quest = match &self.state {
            QuestState::Viewing(quest) => quest.clone(),
            QuestState::Active(_) => return Err(TransitionError::QuestInProgress),
            QuestState::Browsing => return Err(TransitionError::NothingSelected),
        };
        log::info!("Quest {} started: {}", quest.id, quest.title);
        self.state = QuestState::Active(ActiveQuest::new(quest, now));
        self.active_quest().ok_or(TransitionError::NoActiveQuest)
    }

    /// Drops the active quest without reward. Refused unless `confirmed`.
    pub fn abandon(&mut self, confirmed: bool) -> Result<ActiveQuest, TransitionError> {
        if !self.is_active() {
            return Err(TransitionError::NoActiveQuest);
        }
        if !confirmed {
            return Err(TransitionError::NotConfirmed);
        }
        let active = self.take_active()?;
        log::info!("Quest {} abandoned", active.quest.id);
        Ok(active)
    }

    /// Finishes the active quest. Report, reward and clearing the active
    /// quest happen together; nothing changes if there is no active quest.
    pub fn finish(
        &mut self,
        profile: &mut PlayerProfile,
        log: &mut AdventureLog,
        now: DateTime<Local>,
    ) -> Result<Completion, TransitionError> {
        let active = self.take_active()?;
        let report = generate_report(&active, now);
        log.record(report.clone());
        let reward = profile.apply_quest_reward(active.quest.exp);

        log::info!(
            "Quest {} finished: +{} exp, +{} gold",
            active.quest.id,
            reward.exp_gained,
            reward.gold_gained
        );
        if let Some(level) = reward.level_up {
            log::info!("Level up! Now level {}", level);
        }

        Ok(Completion { report, reward })
    }

    /// Drops a detail-view selection. An active quest is kept.
    pub fn clear_selection(&mut self) {
        if matches!(self.state, QuestState::Viewing(_)) {
            self.state = QuestState::Browsing;
        }
    }

    fn take_active(&mut self) -> Result<ActiveQuest, TransitionError> {
        match std::mem::take(&mut self.state) {
            QuestState::Active(active) => Ok(active),
            other => {
                self.state = other;
                Err(TransitionError::NoActiveQuest)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quests::quest_catalog;

    fn quest(index: usize) -> QuestDefinition {
        quest_catalog()[index].clone()
    }

    #[test]
    fn test_initial_state_is_browsing() {
        let lifecycle = QuestLifecycle::new();
        assert_eq!(lifecycle.state(), &QuestState::Browsing);
        assert!(lifecycle.active_quest().is_none());
    }

    #[test]
    fn test_view_then_start() {
        let mut lifecycle = QuestLifecycle::new();
        lifecycle.view(quest(0)).unwrap();
        assert_eq!(lifecycle.state(), &QuestState::Viewing(quest(0)));

        let now = Local::now();
        let active = lifecycle.start(now).unwrap();
        assert_eq!(active.quest, quest(0));
        assert_eq!(active.started_at, now);
        assert!(lifecycle.is_active());
    }

    #[test]
    fn test_start_requires_selection() {
        let mut lifecycle = QuestLifecycle::new();
        assert_eq!(
            lifecycle.start(Local::now()).err(),
            Some(TransitionError::NothingSelected)
        );
        assert_eq!(lifecycle.state(), &QuestState::Browsing);
    }

    #[test]
    fn test_cannot_view_or_start_while_active() {
        let mut lifecycle = QuestLifecycle::new();
        lifecycle.view(quest(0)).unwrap();
        lifecycle.start(Local::now()).unwrap();

        assert_eq!(lifecycle.view(quest(1)), Err(TransitionError::QuestInProgress));
        assert_eq!(
            lifecycle.start(Local::now()).err(),
            Some(TransitionError::QuestInProgress)
        );
        assert_eq!(lifecycle.active_quest().map(|a| a.quest.id), Some(1));
    }

    #[test]
    fn test_back_from_viewing() {
        let mut lifecycle = QuestLifecycle::new();
        lifecycle.view(quest(2)).unwrap();
        lifecycle.back().unwrap();
        assert_eq!(lifecycle.state(), &QuestState::Browsing);
        assert_eq!(lifecycle.back(), Err(TransitionError::NothingSelected));
    }

    #[test]
    fn test_abandon_without_confirmation_is_refused() {
        let mut lifecycle = QuestLifecycle::new();
        lifecycle.view(quest(0)).unwrap();
        lifecycle.start(Local::now()).unwrap();

        assert_eq!(
            lifecycle.abandon(false).err(),
            Some(TransitionError::NotConfirmed)
        );
        assert!(lifecycle.is_active());

        let abandoned = lifecycle.abandon(true).unwrap();
        assert_eq!(abandoned.quest, quest(0));
        assert_eq!(lifecycle.state(), &QuestState::Browsing);
    }

    #[test]
    fn test_finish_applies_report_and_reward() {
        let mut lifecycle = QuestLifecycle::new();
        let mut profile = PlayerProfile::new();
        let mut log = AdventureLog::new();

        lifecycle.view(quest(0)).unwrap();
        lifecycle.start(Local::now()).unwrap();
        let completion = lifecycle
            .finish(&mut profile, &mut log, Local::now())
            .unwrap();

        assert_eq!(lifecycle.state(), &QuestState::Browsing);
        assert_eq!(log.len(), 1);
        assert_eq!(log.latest(), Some(&completion.report));
        assert_eq!(profile.exp, 50);
        assert_eq!(profile.gold, 100);
        assert_eq!(completion.leveled_up(), None);
    }

    #[test]
    fn test_finish_without_active_quest_changes_nothing() {
        let mut lifecycle = QuestLifecycle::new();
        let mut profile = PlayerProfile::new();
        let mut log = AdventureLog::new();
        lifecycle.view(quest(1)).unwrap();

        let result = lifecycle.finish(&mut profile, &mut log, Local::now());
        assert_eq!(result, Err(TransitionError::NoActiveQuest));
        assert_eq!(lifecycle.state(), &QuestState::Viewing(quest(1)));
        assert!(log.is_empty());
        assert_eq!(profile, PlayerProfile::new());
    }

    #[test]
    fn test_clear_selection_keeps_active_quest() {
        let mut lifecycle = QuestLifecycle::new();
        lifecycle.view(quest(0)).unwrap();
        lifecycle.clear_selection();
        assert_eq!(lifecycle.state(), &QuestState::Browsing);

        lifecycle.view(quest(0)).unwrap();
        lifecycle.start(Local::now()).unwrap();
        lifecycle.clear_selection();
        assert!(lifecycle.is_active());
    }
}
