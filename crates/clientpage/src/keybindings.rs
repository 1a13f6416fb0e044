//! Keybindings matching utilities.
//!
//! Converts key events to their string representation and resolves them to
//! [`AppAction`]s using the configured bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::data::keybindings_data::KeybindingsConfig;

/// User intent resolved from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    Quit,
    ToggleEdit,
    CancelEdit,
    Submit,
    Refresh,
    NextRecord,
    PrevRecord,
    NextField,
    PrevField,
}

impl KeybindingsConfig {
    /// Convert a KeyEvent to our string format.
    ///
    /// Examples:
    /// - KeyCode::Char('a') with no modifiers -> "a"
    /// - KeyCode::Char('s') with ctrl -> "ctrl+s"
    /// - KeyCode::BackTab -> "shift+tab"
    /// - KeyCode::Enter -> "enter"
    pub fn key_to_string(key: &KeyEvent) -> String {
        let mut parts = Vec::new();
        let shift = key.modifiers.contains(KeyModifiers::SHIFT);

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("ctrl");
        }
        if key.modifiers.contains(KeyModifiers::ALT) {
            parts.push("alt");
        }

        let key_str = match key.code {
            KeyCode::Char(c) => {
                if shift && c.is_alphabetic() {
                    parts.push("shift");
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Enter => "enter".to_string(),
            KeyCode::Tab => "tab".to_string(),
            KeyCode::BackTab => {
                parts.push("shift");
                "tab".to_string()
            }
            KeyCode::Backspace => "backspace".to_string(),
            KeyCode::Delete => "delete".to_string(),
            KeyCode::Esc => "esc".to_string(),
            KeyCode::Up => "up".to_string(),
            KeyCode::Down => "down".to_string(),
            KeyCode::Left => "left".to_string(),
            KeyCode::Right => "right".to_string(),
            KeyCode::Home => "home".to_string(),
            KeyCode::End => "end".to_string(),
            _ => return String::new(),
        };
        parts.push(&key_str);

        parts.join("+")
    }

    /// Check if a key event matches any of the configured bindings.
    pub fn matches(key: &KeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::key_to_string(key);
        if key_str.is_empty() {
            return false;
        }
        bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    /// Resolve a key press to an action.
    ///
    /// While `editing`, only the form and global bindings apply so plain
    /// characters stay available for typing.
    pub fn action_for(&self, key: &KeyEvent, editing: bool) -> Option<AppAction> {
        if Self::matches(key, &self.global.quit) {
            return Some(AppAction::Quit);
        }
        if Self::matches(key, &self.global.cancel) {
            return Some(AppAction::CancelEdit);
        }

        if editing {
            let form = &self.form;
            if Self::matches(key, &form.submit) {
                Some(AppAction::Submit)
            } else if Self::matches(key, &form.toggle_edit) {
                Some(AppAction::ToggleEdit)
            } else if Self::matches(key, &form.next_field) {
                Some(AppAction::NextField)
            } else if Self::matches(key, &form.prev_field) {
                Some(AppAction::PrevField)
            } else {
                None
            }
        } else {
            let record = &self.record;
            if Self::matches(key, &record.quit) {
                Some(AppAction::Quit)
            } else if Self::matches(key, &record.toggle_edit) {
                Some(AppAction::ToggleEdit)
            } else if Self::matches(key, &record.refresh) {
                Some(AppAction::Refresh)
            } else if Self::matches(key, &record.next_record) {
                Some(AppAction::NextRecord)
            } else if Self::matches(key, &record.prev_record) {
                Some(AppAction::PrevRecord)
            } else {
                None
            }
        }
    }
}

/// Append `"<keys>: <what>"`, skipping actions with no binding
fn push_hint(hints: &mut Vec<String>, bindings: &[String], what: &str) {
    if !bindings.is_empty() {
        hints.push(format!("{}: {}", bindings.join("/"), what));
    }
}

impl KeybindingsConfig {
    /// Status bar help for the current page mode, built from the configured bindings.
    pub fn help_text(&self, has_access: bool, editing: bool, can_edit: bool) -> String {
        let mut hints = Vec::new();
        if editing {
            push_hint(&mut hints, &self.form.next_field, "next field");
            push_hint(&mut hints, &self.form.prev_field, "prev field");
            hints.push("type to edit".to_string());
            push_hint(&mut hints, &self.form.submit, "save");
            push_hint(&mut hints, &self.global.cancel, "cancel");
            push_hint(&mut hints, &self.global.quit, "quit");
        } else {
            if has_access {
                if can_edit {
                    push_hint(&mut hints, &self.record.toggle_edit, "edit");
                }
                push_hint(&mut hints, &self.record.refresh, "refresh");
            }
            push_hint(&mut hints, &self.record.next_record, "next record");
            push_hint(&mut hints, &self.record.prev_record, "prev record");
            push_hint(&mut hints, &self.record.quit, "quit");
        }
        hints.join(" | ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_key_to_string_basic() {
        let key = make_key(KeyCode::Char('e'), KeyModifiers::NONE);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "e");
    }

    #[test]
    fn test_key_to_string_ctrl() {
        let key = make_key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "ctrl+s");
    }

    #[test]
    fn test_key_to_string_special() {
        let key = make_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "enter");

        let key = make_key(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "shift+tab");

        let key = make_key(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(KeybindingsConfig::key_to_string(&key), "");
    }

    #[test]
    fn test_plain_characters_are_typed_while_editing() {
        let bindings = KeybindingsConfig::default();
        let key = make_key(KeyCode::Char('e'), KeyModifiers::NONE);

        assert_eq!(bindings.action_for(&key, false), Some(AppAction::ToggleEdit));
        assert_eq!(bindings.action_for(&key, true), None);

        let q = make_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert_eq!(bindings.action_for(&q, true), None);
    }

    #[test]
    fn test_form_bindings() {
        let bindings = KeybindingsConfig::default();
        let save = make_key(KeyCode::Char('s'), KeyModifiers::CONTROL);
        let esc = make_key(KeyCode::Esc, KeyModifiers::NONE);
        let tab = make_key(KeyCode::Tab, KeyModifiers::NONE);

        assert_eq!(bindings.action_for(&save, true), Some(AppAction::Submit));
        assert_eq!(bindings.action_for(&esc, true), Some(AppAction::CancelEdit));
        assert_eq!(bindings.action_for(&tab, true), Some(AppAction::NextField));
    }

    #[test]
    fn test_ctrl_c_quits_in_every_mode() {
        let bindings = KeybindingsConfig::default();
        let key = make_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(bindings.action_for(&key, true), Some(AppAction::Quit));
        assert_eq!(bindings.action_for(&key, false), Some(AppAction::Quit));
    }

    #[test]
    fn test_help_text_follows_bindings() {
        let mut bindings = KeybindingsConfig::default();
        assert_eq!(
            bindings.help_text(true, false, true),
            "e: edit | r: refresh | n/right: next record | p/left: prev record | q: quit"
        );

        bindings.record.toggle_edit = vec!["i".into()];
        bindings.record.refresh = Vec::new();
        let help = bindings.help_text(true, false, true);
        assert!(help.starts_with("i: edit | n/right: next record"));
        assert!(!help.contains("refresh"));
    }

    #[test]
    fn test_help_text_per_mode() {
        let mut bindings = KeybindingsConfig::default();
        bindings.form.submit = vec!["ctrl+w".into()];

        let editing = bindings.help_text(true, true, true);
        assert!(editing.contains("ctrl+w: save"));
        assert!(editing.contains("esc: cancel"));

        let locked = bindings.help_text(true, false, false);
        assert!(!locked.contains("edit"));
        assert!(locked.starts_with("r: refresh"));

        let denied = bindings.help_text(false, false, false);
        assert!(denied.starts_with("n/right: next record"));
        assert!(!denied.contains("refresh"));
    }
}
