//! src/controller/event_processor.rs
//! ============================================================================
//! # Terminal Event Processing
//!
//! Maps raw crossterm events to [`Action`]s, sensitive to the active overlay:
//! the search overlay captures text input, the help overlay swallows
//! everything except its close keys.

use crossterm::event::{Event as TerminalEvent, KeyCode, KeyEvent, KeyModifiers};

use crate::controller::actions::Action;
use crate::model::ui_state::{UIOverlay, UIState};

/// Translate one terminal event into a viewer action.
#[must_use]
pub fn process_event(event: &TerminalEvent, ui: &UIState) -> Option<Action> {
    match event {
        TerminalEvent::Key(key) => process_key(key, ui),
        TerminalEvent::Resize(width, height) => Some(Action::Resize(*width, *height)),
        _ => None,
    }
}

fn process_key(key: &KeyEvent, ui: &UIState) -> Option<Action> {
    // Ctrl+C quits from any overlay.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Action::Quit);
    }

    match ui.overlay {
        UIOverlay::Search => process_search_key(key),
        UIOverlay::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::ToggleHelp),
            _ => Some(Action::NoOp),
        },
        UIOverlay::None => process_grid_key(key),
    }
}

/// Search overlay: live-editing the global search term.
fn process_search_key(key: &KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc => Some(Action::CloseSearch { clear: true }),
        KeyCode::Enter => Some(Action::CloseSearch { clear: false }),
        KeyCode::Backspace => Some(Action::SearchBackspace),
        KeyCode::Char(c) => Some(Action::SearchInput(c)),
        _ => None,
    }
}

fn process_grid_key(key: &KeyEvent) -> Option<Action> {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Some(Action::Quit),

        // Cursor
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => Some(Action::CursorUp),
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => Some(Action::CursorDown),
        (KeyCode::Enter, _) => Some(Action::Activate),

        // Pagination
        (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) | (KeyCode::PageUp, _) => {
            Some(Action::PrevPage)
        }
        (KeyCode::Right, _)
        | (KeyCode::Char('l'), KeyModifiers::NONE)
        | (KeyCode::PageDown, _) => Some(Action::NextPage),
        (KeyCode::Char('z'), KeyModifiers::NONE) => Some(Action::CyclePageSize),

        // Sorting: number keys address columns 1..=9.
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Some(Action::SortColumn(c as usize - '1' as usize))
        }

        // Filters and search
        (KeyCode::Tab, _) => Some(Action::NextFilter),
        (KeyCode::Char('f'), KeyModifiers::NONE) => Some(Action::CycleFilterValue),
        (KeyCode::Char('/'), KeyModifiers::NONE) => Some(Action::OpenSearch),

        // Selection and bulk delete
        (KeyCode::Char(' '), KeyModifiers::NONE) => Some(Action::ToggleSelect),
        (KeyCode::Char('a'), KeyModifiers::NONE) => Some(Action::ToggleSelectAll),
        (KeyCode::Char('d'), KeyModifiers::NONE) | (KeyCode::Delete, _) => {
            Some(Action::BulkDelete)
        }

        // Mode and help
        (KeyCode::Char('m'), KeyModifiers::NONE) => Some(Action::ToggleMode),
        (KeyCode::Char('?'), _) => Some(Action::ToggleHelp),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn key(code: KeyCode) -> TerminalEvent {
        TerminalEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn grid_keys_map_to_table_actions() {
        let ui = UIState::default();
        assert_eq!(process_event(&key(KeyCode::Char('q')), &ui), Some(Action::Quit));
        assert_eq!(
            process_event(&key(KeyCode::Char('2')), &ui),
            Some(Action::SortColumn(1))
        );
        assert_eq!(
            process_event(&key(KeyCode::Char('/')), &ui),
            Some(Action::OpenSearch)
        );
        assert_eq!(process_event(&key(KeyCode::Char('x')), &ui), None);
    }

    #[test]
    fn search_overlay_captures_text_input() {
        let ui = UIState {
            overlay: UIOverlay::Search,
            ..UIState::default()
        };

        assert_eq!(
            process_event(&key(KeyCode::Char('q')), &ui),
            Some(Action::SearchInput('q'))
        );
        assert_eq!(
            process_event(&key(KeyCode::Esc), &ui),
            Some(Action::CloseSearch { clear: true })
        );
        assert_eq!(
            process_event(&key(KeyCode::Enter), &ui),
            Some(Action::CloseSearch { clear: false })
        );
    }

    #[test]
    fn help_overlay_swallows_unrelated_keys() {
        let ui = UIState {
            overlay: UIOverlay::Help,
            ..UIState::default()
        };

        assert_eq!(
            process_event(&key(KeyCode::Char('d')), &ui),
            Some(Action::NoOp)
        );
        assert_eq!(
            process_event(&key(KeyCode::Esc), &ui),
            Some(Action::ToggleHelp)
        );
    }
}
