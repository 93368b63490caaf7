//! Button component for TUI

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Width needed for a label: one space of padding each side plus borders
pub fn button_width(label: &str) -> u16 {
    label.chars().count() as u16 + 4
}

/// Render a bordered button centered horizontally within `area`
pub fn render_button(frame: &mut Frame, area: Rect, label: &str, is_selected: bool) {
    let width = button_width(label).min(area.width);
    let button_area = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: BUTTON_HEIGHT.min(area.height),
    };

    let (border_style, text_style) = if is_selected {
        (
            Style::default().fg(Color::Cyan),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().add_modifier(Modifier::BOLD),
        )
    };

    let paragraph = Paragraph::new(format!(" {label} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), button_area);
}
