//! Keybindings configuration data structures.
//!
//! Defines the customizable keyboard shortcuts read from the `keybindings`
//! section of `config.yaml`.

use serde::{Deserialize, Serialize};

/// Root keybindings configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Global keybindings (work in every mode)
    pub global: GlobalBindings,
    /// Record view keybindings (read-only mode)
    pub record: RecordBindings,
    /// Edit form keybindings (inline edit mode)
    pub form: FormBindings,
}

/// Global keybindings that work everywhere in the app.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub cancel: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["ctrl+c".into()],
            cancel: vec!["esc".into()],
        }
    }
}

/// Keybindings for the record view while not editing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RecordBindings {
    pub quit: Vec<String>,
    pub toggle_edit: Vec<String>,
    pub refresh: Vec<String>,
    pub next_record: Vec<String>,
    pub prev_record: Vec<String>,
}

impl Default for RecordBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into()],
            toggle_edit: vec!["e".into()],
            refresh: vec!["r".into()],
            next_record: vec!["n".into(), "right".into()],
            prev_record: vec!["p".into(), "left".into()],
        }
    }
}

/// Keybindings for the inline edit form. Plain characters are typed into fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormBindings {
    pub submit: Vec<String>,
    pub toggle_edit: Vec<String>,
    pub next_field: Vec<String>,
    pub prev_field: Vec<String>,
}

impl Default for FormBindings {
    fn default() -> Self {
        Self {
            submit: vec!["ctrl+s".into(), "enter".into()],
            toggle_edit: vec!["ctrl+e".into()],
            next_field: vec!["tab".into(), "down".into()],
            prev_field: vec!["shift+tab".into(), "up".into()],
        }
    }
}
