//! Field rendering utilities for forms

use crate::state::FieldStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows taken by one field: bordered input plus the error line
pub const FIELD_HEIGHT: u16 = 4;

/// What to draw for one input
pub struct FieldView<'a> {
    pub label: &'a str,
    /// Text to show, already masked if needed
    pub display_value: String,
    pub placeholder: Option<&'a str>,
    pub is_active: bool,
    pub status: FieldStatus,
    /// Inline error, already gated on the touched flag
    pub error: Option<&'a str>,
}

/// Replace every character with `mask`
pub fn mask(value: &str, mask: char) -> String {
    std::iter::repeat(mask).take(value.chars().count()).collect()
}

fn border_style(status: FieldStatus, is_active: bool) -> Style {
    match status {
        FieldStatus::Error => Style::default().fg(Color::Red),
        FieldStatus::Success => Style::default().fg(Color::Green),
        FieldStatus::Neutral if is_active => Style::default().fg(Color::Cyan),
        FieldStatus::Neutral => Style::default().fg(Color::DarkGray),
    }
}

/// Draw a labelled input box with its error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, view: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(area);

    let cursor = if view.is_active { "▌" } else { "" };
    let cursor_span = Span::styled(cursor, Style::default().fg(Color::Cyan));

    let line = match view.placeholder {
        Some(placeholder) if view.display_value.is_empty() => Line::from(vec![
            cursor_span,
            Span::styled(
                placeholder,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ]),
        _ => {
            let text_style = if view.is_active {
                Style::default().fg(Color::White)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(vec![
                Span::styled(view.display_value.as_str(), text_style),
                cursor_span,
            ])
        }
    };

    let block = Block::default()
        .title(format!(" {} ", view.label))
        .borders(Borders::ALL)
        .border_style(border_style(view.status, view.is_active));

    frame.render_widget(Paragraph::new(line).block(block), chunks[0]);

    if let Some(error) = view.error {
        let error_line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(error_line, chunks[1]);
    }
}
