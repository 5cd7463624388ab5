//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-command mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use client_directory_core::MutationKind;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::state::AppMode;

/// High-level outcome of processing a keyboard event.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Exit the application.
    Quit,
    /// Move the cursor of the focused panel by `(rows, cols)`.
    MoveCursor(isize, isize),
    /// Click the board cell under the cursor.
    Click,
    ToggleFocus,
    /// Start editing the search term.
    BeginSearch,
    /// Run a mutation against the highlighted user. Ban opens a reason prompt.
    Mutate(MutationKind),
    /// Force a directory refetch.
    Refresh,
    /// Prompt editing.
    Input(char),
    Backspace,
    Submit,
    Cancel,
    /// No meaningful command was produced.
    None,
}

/// Translates `KeyEvent`s into UI commands.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a higher-level command.
    pub fn handle_key(&self, key: KeyEvent, mode: &AppMode) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        if mode.is_prompt() {
            return self.handle_prompt(key);
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => KeyAction::MoveCursor(0, -1),
            KeyCode::Right => KeyAction::MoveCursor(0, 1),
            KeyCode::Up => KeyAction::MoveCursor(-1, 0),
            KeyCode::Down => KeyAction::MoveCursor(1, 0),
            KeyCode::Enter => KeyAction::Click,
            KeyCode::Tab | KeyCode::BackTab => KeyAction::ToggleFocus,
            KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn handle_char(&self, raw: char) -> KeyAction {
        match raw.to_ascii_lowercase() {
            'q' => KeyAction::Quit,
            'h' => KeyAction::MoveCursor(0, -1),
            'j' => KeyAction::MoveCursor(1, 0),
            'k' => KeyAction::MoveCursor(-1, 0),
            'l' => KeyAction::MoveCursor(0, 1),
            ' ' => KeyAction::Click,
            '/' => KeyAction::BeginSearch,
            'r' => KeyAction::Refresh,
            'p' => KeyAction::Mutate(MutationKind::PromoteToAdmin),
            'd' => KeyAction::Mutate(MutationKind::DemoteFromAdmin),
            'b' => KeyAction::Mutate(MutationKind::Ban),
            'u' => KeyAction::Mutate(MutationKind::Unban),
            _ => KeyAction::None,
        }
    }

    fn handle_prompt(&self, key: KeyEvent) -> KeyAction {
        match key.code {
            KeyCode::Enter => KeyAction::Submit,
            KeyCode::Esc => KeyAction::Cancel,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(ch) => KeyAction::Input(ch),
            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_cursor_and_click_keys() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(handler.handle_key(key(KeyCode::Left), &mode), KeyAction::MoveCursor(0, -1));
        assert_eq!(handler.handle_key(key(KeyCode::Char('J')), &mode), KeyAction::MoveCursor(1, 0));
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &mode), KeyAction::Click);
        assert_eq!(handler.handle_key(key(KeyCode::Tab), &mode), KeyAction::ToggleFocus);
    }

    #[test]
    fn maps_directory_commands() {
        let handler = InputHandler::new();
        let mode = AppMode::Normal;
        assert_eq!(handler.handle_key(key(KeyCode::Char('/')), &mode), KeyAction::BeginSearch);
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('p')), &mode),
            KeyAction::Mutate(MutationKind::PromoteToAdmin)
        );
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('b')), &mode),
            KeyAction::Mutate(MutationKind::Ban)
        );
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &mode), KeyAction::Quit);
    }

    #[test]
    fn prompt_captures_text() {
        let handler = InputHandler::new();
        let mode = AppMode::Search {
            buffer: String::new(),
        };
        assert_eq!(handler.handle_key(key(KeyCode::Char('q')), &mode), KeyAction::Input('q'));
        assert_eq!(handler.handle_key(key(KeyCode::Enter), &mode), KeyAction::Submit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc), &mode), KeyAction::Cancel);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key(KeyCode::Char('x')), &AppMode::Normal),
            KeyAction::None
        );
    }
}
