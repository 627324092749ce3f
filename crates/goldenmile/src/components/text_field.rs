use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::event::{AppKeyEvent, KeyCode};
use crate::modals::helpers::{calculate_scroll, render_cursor_line};
use crate::state::TextInput;
use crate::util::styles::HELP_COLOR;

/// Apply an editing key to `input`. Returns `false` for keys that are not
/// editing keys so the caller can try them elsewhere.
pub fn handle_text_key(key: &AppKeyEvent, input: &mut TextInput) -> bool {
    if let Some(c) = key.typed_char() {
        input.insert_char(c);
        return true;
    }
    if key.ctrl || key.alt {
        return false;
    }

    match key.code {
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_cursor_left(),
        KeyCode::Right => input.move_cursor_right(),
        KeyCode::Home => input.move_cursor_home(),
        KeyCode::End => input.move_cursor_end(),
        _ => return false,
    }
    true
}

/// The value part of a field, `width` cells wide. A focused field shows its
/// cursor; an empty unfocused field shows `placeholder`.
pub fn field_line(input: &TextInput, focused: bool, width: usize, placeholder: &str) -> Line<'static> {
    if focused {
        let scrolled = calculate_scroll(&input.value, input.cursor_pos, width);
        return render_cursor_line(&scrolled.display_value, scrolled.cursor_pos, "");
    }

    if input.value.is_empty() {
        return Line::from(Span::styled(
            placeholder.to_string(),
            Style::default().fg(HELP_COLOR),
        ));
    }

    let visible: String = input.value.chars().take(width).collect();
    Line::from(Span::raw(visible))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_and_editing() {
        let mut input = TextInput::default();
        for c in "2.5x".chars() {
            assert!(handle_text_key(&AppKeyEvent::plain(KeyCode::Char(c)), &mut input));
        }
        assert!(handle_text_key(&AppKeyEvent::plain(KeyCode::Backspace), &mut input));
        assert_eq!(input.value, "2.5");
    }

    #[test]
    fn test_non_editing_keys_pass_through() {
        let mut input = TextInput::new("1");
        assert!(!handle_text_key(&AppKeyEvent::plain(KeyCode::Tab), &mut input));
        assert!(!handle_text_key(&AppKeyEvent::plain(KeyCode::Enter), &mut input));

        let ctrl_g = AppKeyEvent {
            ctrl: true,
            ..AppKeyEvent::plain(KeyCode::Char('g'))
        };
        assert!(!handle_text_key(&ctrl_g, &mut input));
        assert_eq!(input.value, "1");
    }

    #[test]
    fn test_placeholder_when_empty() {
        let line = field_line(&TextInput::default(), false, 20, "e.g. 1.5");
        assert_eq!(line.spans[0].content, "e.g. 1.5");
    }
}
