//! Contact form card: header, fields, submit button and outcome banner

use super::components::{render_button, BUTTON_HEIGHT};
use super::field_renderer::draw_field;
use crate::state::{AppState, FieldKind, Form, SubmitStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Maximum card width in columns
const CARD_MAX_WIDTH: u16 = 80;
/// Rows reserved for the outcome banner (2 lines + borders)
const BANNER_HEIGHT: u16 = 4;

const HEADER_TITLE: &str = "Get In Touch";
const HEADER_DESCRIPTION: &str =
    "Have a question or want to work together? Send us a message and we'll get back to you shortly.";

/// Draw the contact form card centered in `area`
pub fn draw(frame: &mut Frame, area: Rect, state: &AppState) {
    let card_width = area.width.min(CARD_MAX_WIDTH);
    let card_area = Rect {
        x: area.x + (area.width - card_width) / 2,
        y: area.y,
        width: card_width,
        height: area.height,
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, card_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Header
            Constraint::Length(3),             // Name + Email
            Constraint::Length(3),             // Subject
            Constraint::Min(5),                // Message
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(BANNER_HEIGHT), // Banner
        ])
        .margin(1)
        .split(card_area);

    draw_header(frame, chunks[0]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    let form = &state.form;
    let active = form.active_field();
    let field_areas = [row[0], row[1], chunks[2], chunks[3]];
    for (index, (kind, field_area)) in FieldKind::ALL.iter().zip(field_areas).enumerate() {
        draw_field(frame, field_area, form.field(*kind), active == index);
    }

    let label = if state.is_submitting {
        "Sending..."
    } else {
        "➤ Send Message"
    };
    render_button(
        frame,
        chunks[4],
        label,
        form.is_submit_active(),
        state.can_submit(),
    );

    draw_banner(frame, chunks[5], state.status);
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from(Span::styled(
            HEADER_TITLE,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            HEADER_DESCRIPTION,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });

    frame.render_widget(header, area);
}

/// Inline outcome banner; nothing is drawn while idle
fn draw_banner(frame: &mut Frame, area: Rect, status: SubmitStatus) {
    let (icon, title, detail, color) = match status {
        SubmitStatus::Idle => return,
        SubmitStatus::Success => (
            "✔",
            "Message sent successfully!",
            "We'll get back to you within 24 hours.",
            Color::Green,
        ),
        SubmitStatus::Error => (
            "✖",
            "Failed to send message",
            "Please try again or contact us directly.",
            Color::Red,
        ),
    };

    let banner = Paragraph::new(vec![
        Line::from(vec![
            Span::styled(format!("{icon} "), Style::default().fg(color)),
            Span::styled(
                title,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {detail}"),
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(color)),
    );

    frame.render_widget(banner, area);
}
