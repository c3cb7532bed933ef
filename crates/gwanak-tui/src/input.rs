use crossterm::event::{KeyCode, KeyEvent};

use crate::app::{App, Focus, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ShowHelp,
    ExitMode,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    NextSection,
    PrevSection,
    FocusNext,
    FocusPrev,
    ItemLeft,
    ItemRight,
    /// Direct slide selection (zero-based), Campus only
    GoToSlide(usize),
    None,
}

/// Translate a key event into an action for the current app state
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    if app.mode == Mode::Help {
        // Any key closes the help overlay
        return Action::ExitMode;
    }

    let binding = KeyBinding::from_event(&key);

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    // Digits pick a slide when the carousel has focus
    if app.focus == Focus::Campus {
        if let KeyCode::Char(c @ '1'..='9') = binding.code {
            let index = c as usize - '1' as usize;
            if index < app.campus.len() {
                return Action::GoToSlide(index);
            }
        }
    }

    keymap.get(&binding).cloned().unwrap_or(Action::None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_default_bindings() {
        let app = App::for_tests();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app, &keymap), Action::Quit);
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app, &keymap), Action::ScrollDown);
        assert_eq!(handle_key_event(key(KeyCode::Char(']')), &app, &keymap), Action::NextSection);
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app, &keymap), Action::FocusNext);
        assert_eq!(
            handle_key_event(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT), &app, &keymap),
            Action::FocusPrev
        );
    }

    #[tokio::test]
    async fn test_gg_sequence() {
        let mut app = App::for_tests();
        let keymap = Keymap::default();
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app, &keymap), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(key(KeyCode::Char('g')), &app, &keymap), Action::JumpToTop);
    }

    #[tokio::test]
    async fn test_shifted_chars() {
        let app = App::for_tests();
        let keymap = Keymap::default();
        let shifted = |c| KeyEvent::new(KeyCode::Char(c), KeyModifiers::SHIFT);
        assert_eq!(handle_key_event(shifted('G'), &app, &keymap), Action::JumpToBottom);
        assert_eq!(handle_key_event(shifted('?'), &app, &keymap), Action::ShowHelp);
    }

    #[tokio::test]
    async fn test_digits_only_on_campus() {
        let mut app = App::for_tests();
        let keymap = Keymap::default();
        app.focus = Focus::News;
        assert_eq!(handle_key_event(key(KeyCode::Char('2')), &app, &keymap), Action::None);

        app.focus = Focus::Campus;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('2')), &app, &keymap),
            Action::GoToSlide(1)
        );
        // Only four slides
        assert_eq!(handle_key_event(key(KeyCode::Char('9')), &app, &keymap), Action::None);
    }

    #[tokio::test]
    async fn test_help_swallows_keys() {
        let mut app = App::for_tests();
        let keymap = Keymap::default();
        app.mode = Mode::Help;
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app, &keymap), Action::ExitMode);
    }
}
