pub mod helpers;
mod message;

use ratatui::{Frame, layout::Rect};

use crate::event::AppKeyEvent;
use crate::state::ModalState;

pub use message::render_message_modal;

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Modal was dismissed
    Dismissed,
    /// Key was handled, modal still active
    Continue,
}

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, modal: &ModalState) {
    match modal {
        ModalState::None => {}
        ModalState::Message(modal) => render_message_modal(frame, modal),
    }
}

/// Handle key events for the active modal
pub fn handle_modal_key(key: &AppKeyEvent, modal: &ModalState) -> ModalResult {
    match modal {
        ModalState::None => ModalResult::Continue,
        ModalState::Message(_) => message::handle_message_key(key),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(50, 10, area), Rect::new(15, 7, 50, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(2, 1, 30, 8);
        let rect = centered_rect(50, 10, area);
        assert_eq!(rect.width, 30);
        assert_eq!(rect.height, 8);
        assert_eq!((rect.x, rect.y), (2, 1));
    }
}
