//! Session state and the named transitions that mutate it.
//!
//! Everything the screens show lives in [`AppState`]. Rendering only reads
//! it; every write goes through a method here or in the navigator.

use crate::adventure_log::AdventureLog;
use crate::error::TransitionError;
use crate::lifecycle::{Completion, QuestLifecycle, QuestState};
use crate::navigator::Screen;
use crate::opening::OpeningScene;
use crate::profile::PlayerProfile;
use crate::quests::{quest_catalog, QuestDefinition};
use chrono::{DateTime, Local};

/// Simulated field-note actions on the active quest screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldNoteKind {
    Photo,
    Memo,
}

/// Modal message waiting to be dismissed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    QuestCleared { title: String },
    LevelUp { level: u32 },
    FieldNote(FieldNoteKind),
}

#[derive(Debug, Clone)]
pub struct AppState {
    pub(crate) catalog: Vec<QuestDefinition>,
    pub(crate) profile: PlayerProfile,
    pub(crate) log: AdventureLog,
    pub(crate) lifecycle: QuestLifecycle,
    pub(crate) screen: Screen,
    pub(crate) board_cursor: usize,
    /// Index of the newest-first log entry shown at the top of the report
    pub(crate) log_scroll: usize,
    /// Navigation parked behind the abandon-quest confirmation
    pub(crate) pending_navigation: Option<Screen>,
    pub(crate) notice: Option<Notice>,
    pub(crate) opening: Option<OpeningScene>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh session on the quest board.
    pub fn new() -> Self {
        Self::with_catalog(quest_catalog())
    }

    pub fn with_catalog(catalog: Vec<QuestDefinition>) -> Self {
        Self {
            catalog,
            profile: PlayerProfile::new(),
            log: AdventureLog::new(),
            lifecycle: QuestLifecycle::new(),
            screen: Screen::Home,
            board_cursor: 0,
            log_scroll: 0,
            pending_navigation: None,
            notice: None,
            opening: None,
        }
    }

    /// Fresh session that starts on the opening greeting.
    pub fn with_opening(opening: OpeningScene) -> Self {
        let mut state = Self::new();
        state.screen = Screen::Opening;
        state.opening = Some(opening);
        state
    }

    pub fn catalog(&self) -> &[QuestDefinition] {
        &self.catalog
    }

    pub fn profile(&self) -> &PlayerProfile {
        &self.profile
    }

    pub fn adventure_log(&self) -> &AdventureLog {
        &self.log
    }

    pub fn lifecycle(&self) -> &QuestLifecycle {
        &self.lifecycle
    }

    pub fn quest_state(&self) -> &QuestState {
        self.lifecycle.state()
    }

    pub fn current_screen(&self) -> Screen {
        self.screen
    }

    pub fn board_cursor(&self) -> usize {
        self.board_cursor
    }

    pub fn log_scroll(&self) -> usize {
        self.log_scroll
    }

    pub fn pending_navigation(&self) -> Option<Screen> {
        self.pending_navigation
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn opening(&self) -> Option<&OpeningScene> {
        self.opening.as_ref()
    }

    pub fn opening_mut(&mut self) -> Option<&mut OpeningScene> {
        self.opening.as_mut()
    }

    pub fn cursor_up(&mut self) {
        self.board_cursor = self.board_cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.board_cursor + 1 < self.catalog.len() {
            self.board_cursor += 1;
        }
    }

    /// Scrolls the adventure log toward newer entries.
    pub fn scroll_log_up(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    /// Scrolls the adventure log toward older entries. The oldest entry can
    /// reach the top but not scroll past it.
    pub fn scroll_log_down(&mut self) {
        if self.log_scroll + 1 < self.log.len() {
            self.log_scroll += 1;
        }
    }

    /// Opens the detail view for the quest under the board cursor.
    pub fn open_selected_quest(&mut self) -> Result<(), TransitionError> {
        let quest = self
            .catalog
            .get(self.board_cursor)
            .cloned()
            .ok_or(TransitionError::NothingSelected)?;
        self.lifecycle.view(quest)
    }

    pub fn close_quest_detail(&mut self) -> Result<(), TransitionError> {
        self.lifecycle.back()
    }

    /// Accepts the quest on the detail view. Home then shows it in progress.
    pub fn start_quest(&mut self, now: DateTime<Local>) -> Result<(), TransitionError> {
        self.lifecycle.start(now)?;
        self.screen = Screen::Home;
        Ok(())
    }

    /// Finishes the active quest and queues the matching notice. Dismissing
    /// the notice moves on to the report screen.
    pub fn finish_quest(&mut self, now: DateTime<Local>) -> Result<Completion, TransitionError> {
        let completion = self
            .lifecycle
            .finish(&mut self.profile, &mut self.log, now)?;
        self.notice = Some(match completion.leveled_up() {
            Some(level) => Notice::LevelUp { level },
            None => Notice::QuestCleared {
                title: completion.report.title.clone(),
            },
        });
        Ok(completion)
    }

    /// Simulated camera or microphone use during a quest.
    pub fn record_field_note(&mut self, kind: FieldNoteKind) -> Result<(), TransitionError> {
        let active = self
            .lifecycle
            .active_quest_mut()
            .ok_or(TransitionError::NoActiveQuest)?;
        match kind {
            FieldNoteKind::Photo => active.photos += 1,
            FieldNoteKind::Memo => active.memos += 1,
        }
        self.notice = Some(Notice::FieldNote(kind));
        Ok(())
    }

    pub fn dismiss_notice(&mut self) {
        match self.notice.take() {
            Some(Notice::QuestCleared { .. }) | Some(Notice::LevelUp { .. }) => {
                self.go(Screen::Report);
            }
            Some(Notice::FieldNote(_)) | None => {}
        }
    }

    /// Leaves the opening greeting for the quest board.
    pub fn finish_opening(&mut self) {
        self.opening = None;
        self.go(Screen::Home);
    }
}
