//! Screen navigation.
//!
//! Leaving an active quest for anything but Home needs a yes/no answer first.
//! The request is parked in the state until it is confirmed or declined.

use crate::state::AppState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    /// First-launch greeting. Not reachable from the nav bar.
    Opening,
    /// Quest board, quest detail or active quest, depending on the lifecycle
    Home,
    Report,
    Profile,
}

impl Screen {
    /// Nav bar order.
    pub const NAV_TABS: [Screen; 3] = [Screen::Home, Screen::Report, Screen::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Screen::Opening => "Opening",
            Screen::Home => "Quests",
            Screen::Report => "Adventure Log",
            Screen::Profile => "Status",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Navigated(Screen),
    /// Parked until the player answers the abandon prompt
    NeedsConfirmation(Screen),
}

impl AppState {
    /// Asks to show `target`.
    pub fn request_navigation(&mut self, target: Screen) -> NavOutcome {
        if self.lifecycle.is_active() && target != Screen::Home {
            log::debug!("Navigation to {:?} waits for confirmation", target);
            self.pending_navigation = Some(target);
            return NavOutcome::NeedsConfirmation(target);
        }
        self.go(target);
        NavOutcome::Navigated(target)
    }

    /// Yes: abandon the quest and complete the parked navigation.
    pub fn confirm_navigation(&mut self) -> Option<Screen> {
        let target = self.pending_navigation.take()?;
        if let Err(e) = self.lifecycle.abandon(true) {
            log::debug!("Nothing to abandon: {}", e);
        }
        self.go(target);
        Some(target)
    }

    /// No: drop the parked navigation. Nothing else changes.
    pub fn decline_navigation(&mut self) {
        if let Some(target) = self.pending_navigation.take() {
            log::debug!("Navigation to {:?} cancelled", target);
        }
    }

    pub(crate) fn go(&mut self, target: Screen) {
        self.lifecycle.clear_selection();
        self.log_scroll = 0;
        self.screen = target;
        log::debug!("Showing {:?}", target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lifecycle::QuestState;
    use chrono::Local;

    fn state_with_active_quest() -> AppState {
        let mut state = AppState::new();
        state.open_selected_quest().unwrap();
        state.start_quest(Local::now()).unwrap();
        state
    }

    #[test]
    fn test_free_navigation_while_browsing() {
        let mut state = AppState::new();
        assert_eq!(
            state.request_navigation(Screen::Profile),
            NavOutcome::Navigated(Screen::Profile)
        );
        assert_eq!(state.current_screen(), Screen::Profile);
        assert_eq!(
            state.request_navigation(Screen::Report),
            NavOutcome::Navigated(Screen::Report)
        );
        assert_eq!(state.current_screen(), Screen::Report);
    }

    #[test]
    fn test_navigation_clears_detail_view() {
        let mut state = AppState::new();
        state.open_selected_quest().unwrap();
        state.request_navigation(Screen::Home);
        assert_eq!(state.quest_state(), &QuestState::Browsing);
    }

    #[test]
    fn test_home_allowed_while_active() {
        let mut state = state_with_active_quest();
        assert_eq!(
            state.request_navigation(Screen::Home),
            NavOutcome::Navigated(Screen::Home)
        );
        assert!(state.lifecycle().is_active());
        assert!(state.pending_navigation().is_none());
    }

    #[test]
    fn test_leaving_active_quest_needs_confirmation() {
        let mut state = state_with_active_quest();
        assert_eq!(
            state.request_navigation(Screen::Report),
            NavOutcome::NeedsConfirmation(Screen::Report)
        );
        assert_eq!(state.current_screen(), Screen::Home);
        assert!(state.lifecycle().is_active());
        assert_eq!(state.pending_navigation(), Some(Screen::Report));
    }

    #[test]
    fn test_decline_keeps_everything() {
        let mut state = state_with_active_quest();
        let before = state.lifecycle().active_quest().cloned();
        state.request_navigation(Screen::Profile);
        state.decline_navigation();

        assert_eq!(state.current_screen(), Screen::Home);
        assert_eq!(state.lifecycle().active_quest().cloned(), before);
        assert!(state.pending_navigation().is_none());
    }

    #[test]
    fn test_confirm_abandons_and_navigates() {
        let mut state = state_with_active_quest();
        state.request_navigation(Screen::Profile);
        assert_eq!(state.confirm_navigation(), Some(Screen::Profile));

        assert_eq!(state.current_screen(), Screen::Profile);
        assert_eq!(state.quest_state(), &QuestState::Browsing);
        assert!(state.adventure_log().is_empty());
        assert_eq!(state.profile().gold, 0);
    }

    #[test]
    fn test_confirm_without_pending_request_does_nothing() {
        let mut state = state_with_active_quest();
        assert_eq!(state.confirm_navigation(), None);
        assert!(state.lifecycle().is_active());
    }
}
