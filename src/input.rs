use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Focus;

/// Logical actions, decoupled from physical key names. Save and Quit
/// each answer to two conventional bindings.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    NavigateUp,
    NavigateDown,
    Confirm,
    Save,
    Quit,
    FocusToggle,
    FocusToList,
    Help,
}

/// Map a key event to an action given the current focus. Keys that map
/// to nothing fall through to the editor's text input when the editor
/// is focused.
pub fn action_for(key: &KeyEvent, focus: Focus) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    // Focus-independent bindings
    match key.code {
        KeyCode::Char('s') | KeyCode::Char('o') if ctrl => return Some(Action::Save),
        KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return Some(Action::Quit),
        KeyCode::Tab => return Some(Action::FocusToggle),
        KeyCode::BackTab => return Some(Action::FocusToList),
        KeyCode::F(1) => return Some(Action::Help),
        _ => {}
    }

    match focus {
        Focus::List => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(Action::NavigateUp),
            KeyCode::Down | KeyCode::Char('j') => Some(Action::NavigateDown),
            KeyCode::Enter => Some(Action::Confirm),
            KeyCode::Char('?') => Some(Action::Help),
            _ => None,
        },
        Focus::Editor => match key.code {
            KeyCode::Esc => Some(Action::FocusToList),
            _ => None,
        },
    }
}
