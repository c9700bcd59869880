//! Toast notification overlay
//!
//! Renders in the bottom-right corner on top of all other content.

use crate::state::{Toast, ToastSeverity};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the toast above the status bar, anchored bottom-right of `area`
pub fn render_toast(frame: &mut Frame, area: Rect, toast: &Toast) {
    let accent = match toast.severity {
        ToastSeverity::Default => Color::Green,
        ToastSeverity::Destructive => Color::Red,
    };

    // Longest line plus 2 chars padding each side and the border
    let text_width = toast
        .title
        .chars()
        .count()
        .max(toast.description.chars().count()) as u16;
    let width = (text_width + 4).min(area.width.saturating_sub(4));
    let height: u16 = 4; // title + description + 2 for borders

    let x = area.right().saturating_sub(width + 2);
    let y = area.bottom().saturating_sub(height + 1);
    let toast_area = Rect::new(x, y, width, height.min(area.height));

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent))
        .style(Style::default().bg(Color::Black));

    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {}", toast.title),
            Style::default().fg(accent).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!(" {}", toast.description),
            Style::default().fg(Color::Gray),
        )),
    ])
    .block(block);

    // Clear the area first so toast appears on top
    frame.render_widget(Clear, toast_area);
    frame.render_widget(text, toast_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_toast_shows_title_and_description() {
        let toast = Toast::new("Failed to send message", "Try later", ToastSeverity::Destructive);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), &toast))
            .unwrap();
        let output = buffer_to_string(terminal.backend().buffer());
        assert!(output.contains("Failed to send message"));
        assert!(output.contains("Try later"));
    }

    #[test]
    fn test_toast_border_uses_severity_color() {
        let toast = Toast::new("Sent", "Thanks", ToastSeverity::Default);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal
            .draw(|frame| render_toast(frame, frame.area(), &toast))
            .unwrap();
        let buffer = terminal.backend().buffer();
        // Top-left corner of the toast box
        let width = "Sent".len().max("Thanks".len()) as u16 + 4;
        let x = 60 - (width + 2);
        let y = 12 - (4 + 1);
        assert_eq!(buffer[(x, y)].fg, Color::Green);
    }
}
