//! Keybindings configuration data structures.
//!
//! Serialized to/from `~/.goldenmile/keybindings.yaml`. Every field is
//! optional in the file; missing entries fall back to the defaults below.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeybindingsConfig {
    /// Work everywhere, including inside text fields
    pub global: GlobalBindings,
    /// Moving around the form and the output panel
    pub navigation: NavigationBindings,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalBindings {
    pub quit: Vec<String>,
    pub generate: Vec<String>,
    pub download: Vec<String>,
    pub cancel: Vec<String>,
}

impl Default for GlobalBindings {
    fn default() -> Self {
        Self {
            quit: vec!["ctrl+c".into(), "ctrl+q".into()],
            generate: vec!["ctrl+g".into(), "f5".into()],
            download: vec!["ctrl+d".into()],
            cancel: vec!["esc".into()],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationBindings {
    pub next_field: Vec<String>,
    pub prev_field: Vec<String>,
    pub scroll_up: Vec<String>,
    pub scroll_down: Vec<String>,
}

impl Default for NavigationBindings {
    fn default() -> Self {
        Self {
            next_field: vec!["tab".into(), "down".into()],
            prev_field: vec!["shift+tab".into(), "up".into()],
            scroll_up: vec!["pageup".into()],
            scroll_down: vec!["pagedown".into()],
        }
    }
}
