//! Status bar with keyboard hints

use crate::platform::SEND_SHORTCUT;
use crate::state::AppState;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw the status bar on the last row of `area`
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let status_area = Rect {
        x: area.x,
        y: area.bottom().saturating_sub(1),
        width: area.width,
        height: 1u16.min(area.height),
    };

    let mut spans = vec![Span::styled(
        format!(" Tab:next  Shift+Tab:prev  {SEND_SHORTCUT}:send  Esc:quit "),
        Style::default().fg(Color::White),
    )];

    if state.is_submitting {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled("Sending...", Style::default().fg(Color::Yellow)));
    } else if !state.form.is_ready() {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(
            "All fields are required",
            Style::default().fg(Color::Gray),
        ));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, status_area);
}
