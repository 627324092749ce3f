//! Keyboard events shared by the terminal and browser front-ends.
//!
//! - Native: converted from `crossterm::event::KeyEvent`
//! - Web: converted from `ratzilla::event::KeyEvent`

#[cfg(feature = "native")]
pub use crossterm::event::KeyCode;

#[cfg(all(feature = "web", not(feature = "native")))]
pub use ratzilla::event::KeyCode;

#[derive(Debug, Clone)]
pub struct AppKeyEvent {
    pub code: KeyCode,
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
}

impl AppKeyEvent {
    /// Plain key with no modifiers.
    pub fn plain(code: KeyCode) -> Self {
        Self {
            code,
            ctrl: false,
            alt: false,
            shift: false,
        }
    }

    pub fn ctrl(&self) -> bool {
        self.ctrl
    }

    pub fn no_modifiers(&self) -> bool {
        !self.ctrl && !self.alt && !self.shift
    }

    /// Printable character typed without ctrl/alt, if any.
    pub fn typed_char(&self) -> Option<char> {
        match self.code {
            KeyCode::Char(c) if !self.ctrl && !self.alt => Some(c),
            _ => None,
        }
    }

    /// Shift+Tab. Native terminals report it as `BackTab`; browsers send Tab
    /// with the shift flag.
    #[cfg(feature = "native")]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::BackTab) || (matches!(self.code, KeyCode::Tab) && self.shift)
    }

    #[cfg(all(feature = "web", not(feature = "native")))]
    pub fn is_back_tab(&self) -> bool {
        matches!(self.code, KeyCode::Tab) && self.shift
    }
}

#[cfg(feature = "native")]
impl From<crossterm::event::KeyEvent> for AppKeyEvent {
    fn from(event: crossterm::event::KeyEvent) -> Self {
        use crossterm::event::KeyModifiers;
        Self {
            code: event.code,
            ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
            alt: event.modifiers.contains(KeyModifiers::ALT),
            shift: event.modifiers.contains(KeyModifiers::SHIFT),
        }
    }
}

#[cfg(all(feature = "web", not(feature = "native")))]
impl From<&ratzilla::event::KeyEvent> for AppKeyEvent {
    fn from(event: &ratzilla::event::KeyEvent) -> Self {
        Self {
            code: event.code.clone(),
            ctrl: event.ctrl,
            alt: event.alt,
            shift: event.shift,
        }
    }
}
