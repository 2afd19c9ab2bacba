use crate::keymap::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single-line text field: its text plus a cursor measured in chars.
///
/// # Example
/// ```
/// use my_alarm::utils::TextInput;
///
/// let mut input = TextInput::new();
/// input.insert_char('h');
/// input.insert_char('i');
/// assert_eq!(input.text(), "hi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text input with initial text, cursor at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn text_trimmed(&self) -> &str {
        self.text.trim()
    }

    /// Check if the text is empty (ignoring whitespace).
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    /// Insert a character at the cursor. Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_index(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor.
    pub fn delete(&mut self) {
        if self.cursor < self.text.chars().count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.chars().count();
    }

    /// Handle a keymap action. Returns true if it was an editing action.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Handle a raw key. Returns true if the key edited or moved the cursor.
    pub fn handle_key(&mut self, key_code: KeyCode) -> bool {
        match key_code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Whether `action` should still fire while a text field has focus.
    ///
    /// Everything else (e.g. `Quit` on `q`) is typed as text instead.
    pub fn is_action_allowed_when_focused(action: &Action) -> bool {
        matches!(
            action,
            Action::Cancel
                | Action::Confirm
                | Action::NextTab
                | Action::PrevTab
                | Action::Save
                | Action::MoveLeft
                | Action::MoveRight
                | Action::Home
                | Action::End
                | Action::Backspace
                | Action::DeleteChar
        )
    }

    /// A printable key without Ctrl/Alt. Always typed into a focused field,
    /// even when a preset maps it (vim `h`, `l`, `0`, `x`).
    pub fn is_plain_char(key: &KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char(_))
            && !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER)
    }

    /// The action a key triggers while a text field has focus, if any.
    pub fn focused_action(key: &KeyEvent, action: Option<Action>) -> Option<Action> {
        if Self::is_plain_char(key) {
            return None;
        }
        action.filter(Self::is_action_allowed_when_focused)
    }

    /// Edit with a key that [`focused_action`](Self::focused_action) left
    /// unmapped. Modified characters are dropped.
    pub fn handle_unmapped_key(&mut self, key: &KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Char(_)) && !Self::is_plain_char(key) {
            return false;
        }
        self.handle_key(key.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_in_middle() {
        let mut input = TextInput::with_text("helo");
        input.move_left();
        input.insert_char('l');
        assert_eq!(input.text(), "hello");
        assert_eq!(input.cursor(), 4);
    }

    #[test]
    fn test_non_ascii_text() {
        let mut input = TextInput::with_text("Théorie");
        input.move_home();
        input.move_right();
        input.move_right();
        input.backspace();
        assert_eq!(input.text(), "Téorie");
        input.delete();
        assert_eq!(input.text(), "Torie");
    }

    #[test]
    fn test_vim_letters_are_typed_when_focused() {
        let key = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE);
        assert_eq!(TextInput::focused_action(&key, Some(Action::MoveRight)), None);

        let mut input = TextInput::new();
        assert!(input.handle_unmapped_key(&key));
        assert_eq!(input.text(), "l");
    }

    #[test]
    fn test_focused_action_filters_global_actions() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(
            TextInput::focused_action(&enter, Some(Action::Confirm)),
            Some(Action::Confirm)
        );
        let ctrl_l = KeyEvent::new(KeyCode::Char('l'), KeyModifiers::CONTROL);
        assert_eq!(TextInput::focused_action(&ctrl_l, Some(Action::Logout)), None);
        let ctrl_s = KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(
            TextInput::focused_action(&ctrl_s, Some(Action::Save)),
            Some(Action::Save)
        );
    }

    #[test]
    fn test_modified_chars_are_not_typed() {
        let mut input = TextInput::new();
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(!input.handle_unmapped_key(&ctrl_x));
        assert!(input.is_empty());
        let shifted = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert!(input.handle_unmapped_key(&shifted));
        assert_eq!(input.text(), "A");
    }

    #[test]
    fn test_backspace_at_start_is_noop() {
        let mut input = TextInput::with_text("abc");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "abc");
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::with_text("abc");
        input.delete();
        assert_eq!(input.text(), "abc");
    }

    #[test]
    fn test_control_chars_ignored() {
        let mut input = TextInput::new();
        input.insert_char('\n');
        assert!(input.is_empty());
    }

    #[test]
    fn test_unmapped_key_types_plain_chars_only() {
        let mut input = TextInput::with_text("ab");
        assert!(input.handle_action(Action::MoveLeft));
        assert_eq!(input.cursor(), 1);
        assert!(input.handle_unmapped_key(&KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE)));
        assert_eq!(input.text(), "axb");
        assert!(!input.handle_unmapped_key(&KeyEvent::new(KeyCode::Char('y'), KeyModifiers::CONTROL)));
        assert_eq!(input.text(), "axb");
    }

    #[test]
    fn test_is_action_allowed_when_focused() {
        assert!(TextInput::is_action_allowed_when_focused(&Action::Cancel));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Confirm));
        assert!(TextInput::is_action_allowed_when_focused(&Action::Backspace));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Quit));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Help));
        assert!(!TextInput::is_action_allowed_when_focused(&Action::Delete));
    }
}
