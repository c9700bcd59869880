//! UI module for rendering the TUI

mod components;
mod contact_form;
mod field_renderer;
mod status_bar;

use crate::state::AppState;
use ratatui::{layout::Rect, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    // Everything above the status bar row
    let main_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };

    contact_form::draw(frame, main_area, state);
    status_bar::draw(frame, area, state);

    // Toast goes last so it overlays the form
    if let Some(toast) = &state.toast {
        components::render_toast(frame, main_area, toast);
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::buffer_to_string;
    use super::*;
    use crate::state::{FieldKind, Toast, ToastSeverity};
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_full_screen_with_toast() {
        let mut state = AppState::default();
        state.form.set_field(FieldKind::Name, "Ana");
        state.toast = Some(Toast::new(
            "Failed to send message",
            "Please try again later or contact us directly.",
            ToastSeverity::Destructive,
        ));

        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, &state)).unwrap();
        let output = buffer_to_string(terminal.backend().buffer());

        assert!(output.contains("Get In Touch"));
        assert!(output.contains("Ana"));
        assert!(output.contains("Please try again later or contact us directly."));
        assert!(output.lines().last().unwrap().contains("Esc:quit"));
    }
}
