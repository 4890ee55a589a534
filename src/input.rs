//! Key bindings.
//!
//! Keys become UI-agnostic [`Action`]s; what an action means depends on the
//! screen and is decided by the app controller.

use crate::navigator::Screen;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Navigate(Screen),
    Up,
    Down,
    /// Enter: the primary button of the current screen
    Select,
    /// Esc/Backspace: leave a detail view, decline a prompt
    Back,
    Photo,
    Memo,
    ToggleMusic,
    Confirm,
    Decline,
    Quit,
    Other,
}

pub fn map_key(key: KeyEvent) -> Action {
    // Windows terminals report releases too
    if key.kind == KeyEventKind::Release {
        return Action::Other;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Action::Quit;
    }

    match key.code {
        KeyCode::Char('1') | KeyCode::Char('h') | KeyCode::Char('H') => {
            Action::Navigate(Screen::Home)
        }
        KeyCode::Char('2') | KeyCode::Char('r') | KeyCode::Char('R') => {
            Action::Navigate(Screen::Report)
        }
        KeyCode::Char('3') | KeyCode::Char('p') | KeyCode::Char('P') => {
            Action::Navigate(Screen::Profile)
        }
        KeyCode::Up | KeyCode::Char('k') => Action::Up,
        KeyCode::Down | KeyCode::Char('j') => Action::Down,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Select,
        KeyCode::Esc | KeyCode::Backspace => Action::Back,
        KeyCode::Char('c') | KeyCode::Char('C') => Action::Photo,
        KeyCode::Char('v') | KeyCode::Char('V') => Action::Memo,
        KeyCode::Char('m') | KeyCode::Char('M') => Action::ToggleMusic,
        KeyCode::Char('y') | KeyCode::Char('Y') => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') => Action::Decline,
        KeyCode::Char('q') | KeyCode::Char('Q') => Action::Quit,
        _ => Action::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(
            map_key(key(KeyCode::Char('1'))),
            Action::Navigate(Screen::Home)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('r'))),
            Action::Navigate(Screen::Report)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('P'))),
            Action::Navigate(Screen::Profile)
        );
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), Action::Select);
        assert_eq!(map_key(key(KeyCode::Esc)), Action::Back);
        assert_eq!(map_key(key(KeyCode::Char('y'))), Action::Confirm);
        assert_eq!(map_key(key(KeyCode::Char('n'))), Action::Decline);
        assert_eq!(map_key(key(KeyCode::Char('m'))), Action::ToggleMusic);
        assert_eq!(map_key(key(KeyCode::Char('x'))), Action::Other);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(event), Action::Quit);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut event = key(KeyCode::Enter);
        event.kind = KeyEventKind::Release;
        assert_eq!(map_key(event), Action::Other);
    }
}
