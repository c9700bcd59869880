//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, is_active: bool) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let placeholder_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::ITALIC);

    let cursor = if is_active { "▌" } else { "" };
    let cursor_style = Style::default().fg(Color::Cyan);

    let mut scroll = 0;
    let content = if field.is_empty() && !is_active {
        Paragraph::new(Line::from(Span::styled(field.placeholder, placeholder_style)))
    } else if field.is_multiline {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let inner_height = usize::from(area.height.saturating_sub(2));

        let mut rows = wrap_rows(field.as_text(), inner_width);
        // The cursor needs a free column on the last row
        if is_active && rows.last().is_some_and(|r| r.chars().count() >= inner_width) {
            rows.push(String::new());
        }

        // Keep the last row, and with it the cursor, in view
        scroll = u16::try_from(rows.len().saturating_sub(inner_height)).unwrap_or(u16::MAX);

        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|r| Line::from(Span::styled(r, style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(field.as_text(), style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let block = Block::default()
        .title(format!(" {} ", field.label))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(
        content
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

/// Break `text` into display rows at newlines and every `width` characters
fn wrap_rows(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in text.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldKind;
    use crate::ui::test_support::buffer_to_string;
    use ratatui::{backend::TestBackend, Terminal};

    fn render(field: &FormField, is_active: bool) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();
        terminal
            .draw(|frame| draw_field(frame, frame.area(), field, is_active))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_empty_inactive_shows_placeholder() {
        let field = FormField::new(FieldKind::Name);
        let output = render(&field, false);
        assert!(output.contains("Full Name *"));
        assert!(output.contains("Your full name"));
    }

    #[test]
    fn test_empty_active_hides_placeholder() {
        let field = FormField::new(FieldKind::Name);
        let output = render(&field, true);
        assert!(!output.contains("Your full name"));
        assert!(output.contains('▌'));
    }

    #[test]
    fn test_value_rendered() {
        let mut field = FormField::new(FieldKind::Email);
        field.set_text("ana@x.com".to_string());
        let output = render(&field, false);
        assert!(output.contains("ana@x.com"));
        assert!(!output.contains("your.email@example.com"));
    }

    #[test]
    fn test_wrap_rows_splits_long_lines() {
        assert_eq!(wrap_rows("abcdefg\nhi", 3), vec!["abc", "def", "g", "hi"]);
        assert_eq!(wrap_rows("", 3), vec![""]);
        assert_eq!(wrap_rows("a\n\nb", 3), vec!["a", "", "b"]);
    }

    #[test]
    fn test_message_scrolls_to_keep_last_line_visible() {
        let mut field = FormField::new(FieldKind::Message);
        field.set_text("one\ntwo\nthree\nfour\nfive".to_string());
        // 40x5 leaves three inner rows
        let output = render(&field, true);
        assert!(!output.contains("one"));
        assert!(!output.contains("two"));
        assert!(output.contains("three"));
        assert!(output.contains("five▌"));
    }

    #[test]
    fn test_message_scrolls_past_wrapped_rows() {
        let mut field = FormField::new(FieldKind::Message);
        // 38 inner columns; 120 chars wrap onto four rows
        field.set_text(format!("{}END", "x".repeat(117)));
        let output = render(&field, true);
        assert!(output.contains("END▌"));
    }

    #[test]
    fn test_multiline_renders_each_line() {
        let mut field = FormField::new(FieldKind::Message);
        field.set_text("first\nsecond".to_string());
        let output = render(&field, true);
        let lines: Vec<&str> = output.lines().collect();
        assert!(lines[1].contains("first"));
        assert!(lines[2].contains("second"));
    }
}
