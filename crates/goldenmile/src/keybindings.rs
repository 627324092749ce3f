//! Keybindings matching utilities.
//!
//! Converts key events to the string form used in `keybindings.yaml`
//! (`"ctrl+g"`, `"shift+tab"`, `"f5"`) and checks them against bindings.

#[cfg(feature = "native")]
use std::path::{Path, PathBuf};

use crate::data::keybindings_data::KeybindingsConfig;
use crate::event::{AppKeyEvent, KeyCode};

impl KeybindingsConfig {
    /// String form of a key event, or an empty string for keys that cannot
    /// be bound.
    pub fn key_to_string(key: &AppKeyEvent) -> String {
        let mut parts: Vec<String> = Vec::new();
        if key.ctrl {
            parts.push("ctrl".into());
        }
        if key.alt {
            parts.push("alt".into());
        }

        let name = match &key.code {
            KeyCode::Char(c) => {
                if key.shift && (c.is_uppercase() || !c.is_alphabetic()) {
                    parts.push("shift".into());
                }
                c.to_lowercase().to_string()
            }
            KeyCode::Tab if key.shift => {
                parts.push("shift".into());
                "tab".into()
            }
            KeyCode::Tab => "tab".into(),
            #[cfg(feature = "native")]
            KeyCode::BackTab => {
                parts.push("shift".into());
                "tab".into()
            }
            KeyCode::Enter => "enter".into(),
            KeyCode::Backspace => "backspace".into(),
            KeyCode::Delete => "delete".into(),
            KeyCode::Esc => "esc".into(),
            KeyCode::Up => "up".into(),
            KeyCode::Down => "down".into(),
            KeyCode::Left => "left".into(),
            KeyCode::Right => "right".into(),
            KeyCode::Home => "home".into(),
            KeyCode::End => "end".into(),
            KeyCode::PageUp => "pageup".into(),
            KeyCode::PageDown => "pagedown".into(),
            KeyCode::F(n) => format!("f{n}"),
            _ => return String::new(),
        };

        parts.push(name);
        parts.join("+")
    }

    /// Check if a key event matches any of the configured bindings.
    pub fn matches(key: &AppKeyEvent, bindings: &[String]) -> bool {
        let key_str = Self::key_to_string(key);
        !key_str.is_empty() && bindings.iter().any(|b| b.eq_ignore_ascii_case(&key_str))
    }

    #[cfg(feature = "native")]
    pub fn path(data_dir: &Path) -> PathBuf {
        data_dir.join("keybindings.yaml")
    }

    /// Load keybindings, falling back to defaults when the file is missing
    /// or unreadable.
    #[cfg(feature = "native")]
    pub fn load_or_default(data_dir: &Path) -> Self {
        let path = Self::path(data_dir);
        let Ok(content) = std::fs::read_to_string(&path) else {
            return Self::default();
        };

        serde_saphyr::from_str(&content).unwrap_or_else(|e| {
            tracing::warn!(path = %path.display(), error = %e, "Ignoring invalid keybindings file");
            Self::default()
        })
    }
}
