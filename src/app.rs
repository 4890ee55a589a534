//! App controller: routes actions to state transitions and owns the music.

use crate::audio::Sequencer;
use crate::config::Config;
use crate::input::Action;
use crate::lifecycle::QuestState;
use crate::navigator::Screen;
use crate::opening::OpeningScene;
use crate::persistence::OnboardingFlag;
use crate::state::{AppState, FieldNoteKind};
use crate::view::{project, View};
use chrono::Local;
use std::time::Instant;

pub struct App {
    state: AppState,
    sequencer: Sequencer,
    onboarding: OnboardingFlag,
    config: Config,
    should_quit: bool,
}

impl App {
    /// Starts on the opening greeting unless the flag says it was shown.
    pub fn new(
        sequencer: Sequencer,
        onboarding: OnboardingFlag,
        config: Config,
        now: Instant,
    ) -> Self {
        let state = if onboarding.is_seen() {
            AppState::new()
        } else {
            AppState::with_opening(OpeningScene::new(now, &config.opening))
        };
        Self {
            state,
            sequencer,
            onboarding,
            config,
            should_quit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn music_playing(&self) -> bool {
        self.sequencer.is_playing()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn view(&self) -> View {
        project(&self.state, self.sequencer.is_playing())
    }

    /// Drives the typewriter and the music loop.
    pub fn tick(&mut self, now: Instant) {
        if let Some(opening) = self.state.opening_mut() {
            opening.tick(now);
        }
        self.sequencer.tick(now);
    }

    pub fn handle(&mut self, action: Action, now: Instant) {
        if action == Action::Quit {
            self.should_quit = true;
            self.sequencer.stop();
            return;
        }

        // The abandon prompt captures all input until answered
        if self.state.pending_navigation().is_some() {
            match action {
                Action::Confirm => {
                    self.state.confirm_navigation();
                }
                Action::Decline | Action::Back => self.state.decline_navigation(),
                _ => {}
            }
            return;
        }

        if self.state.notice().is_some() {
            if matches!(action, Action::Select | Action::Back | Action::Confirm) {
                self.state.dismiss_notice();
            }
            return;
        }

        if action == Action::ToggleMusic {
            if self.config.audio.muted {
                log::debug!("Music toggle ignored: audio is muted");
            } else {
                self.sequencer.toggle(now);
            }
            return;
        }

        match self.state.current_screen() {
            Screen::Opening => self.handle_opening(action, now),
            Screen::Home => self.handle_home(action),
            Screen::Report => match action {
                Action::Navigate(target) => {
                    self.state.request_navigation(target);
                }
                Action::Up => self.state.scroll_log_up(),
                Action::Down => self.state.scroll_log_down(),
                _ => {}
            },
            Screen::Profile => {
                if let Action::Navigate(target) = action {
                    self.state.request_navigation(target);
                }
            }
        }
    }

    fn handle_opening(&mut self, action: Action, now: Instant) {
        if action != Action::Select {
            return;
        }
        let finished = self.state.opening().map_or(true, |o| o.is_finished());
        if !finished {
            if let Some(opening) = self.state.opening_mut() {
                opening.skip();
            }
            return;
        }

        // First playback must come from a key press; this is one
        if self.config.audio.autoplay_after_opening && !self.config.audio.muted {
            self.sequencer.play(now);
        }
        if let Err(e) = self.onboarding.mark_seen() {
            log::warn!("Could not save opening flag: {}", e);
        }
        self.state.finish_opening();
    }

    fn handle_home(&mut self, action: Action) {
        let quest_state = self.state.quest_state().clone();
        let result = match (&quest_state, action) {
            (_, Action::Navigate(target)) => {
                self.state.request_navigation(target);
                Ok(())
            }
            (QuestState::Browsing, Action::Up) => {
                self.state.cursor_up();
                Ok(())
            }
            (QuestState::Browsing, Action::Down) => {
                self.state.cursor_down();
                Ok(())
            }
            (QuestState::Browsing, Action::Select) => self.state.open_selected_quest(),
            (QuestState::Viewing(_), Action::Select) => self.state.start_quest(Local::now()),
            (QuestState::Viewing(_), Action::Back) => self.state.close_quest_detail(),
            (QuestState::Active(_), Action::Select) => {
                self.state.finish_quest(Local::now()).map(|_| ())
            }
            (QuestState::Active(_), Action::Photo) => {
                self.state.record_field_note(FieldNoteKind::Photo)
            }
            (QuestState::Active(_), Action::Memo) => {
                self.state.record_field_note(FieldNoteKind::Memo)
            }
            _ => Ok(()),
        };
        if let Err(e) = result {
            log::debug!("Ignored {:?}: {}", action, e);
        }
    }
}
