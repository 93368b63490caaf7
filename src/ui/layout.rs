//! Layout components (centered form area, status bar)

use crate::app::App;
use crate::platform::{CLEAR_FIELD_SHORTCUT, QUIT_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Widest the form is allowed to grow
pub const MAX_FORM_WIDTH: u16 = 60;

/// Split the screen into a centered form area and the bottom status line
pub fn create_layout(area: Rect, form_height: u16) -> (Rect, Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let [form_row] = Layout::vertical([Constraint::Length(form_height)])
        .flex(Flex::Center)
        .areas(rows[0]);
    let [form_area] = Layout::horizontal([Constraint::Length(MAX_FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(form_row);

    (form_area, rows[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let key_style = Style::default().fg(Color::Cyan);
    let hint_style = Style::default().fg(Color::Gray);

    let hints: Vec<(&str, &str)> = if app.state.notice.is_some() {
        vec![("Enter/Esc", "dismiss")]
    } else {
        let enter = match app.state.focus {
            Focus::SubmitButton => "submit",
            Focus::Field(_) => "next",
        };
        vec![
            ("Tab", "next field"),
            ("Enter", enter),
            (SUBMIT_SHORTCUT, "submit"),
            (CLEAR_FIELD_SHORTCUT, "clear"),
            (QUIT_SHORTCUT, "quit"),
        ]
    };

    let mut spans = vec![Span::raw(" ")];
    for (key, action) in hints {
        spans.push(Span::styled(key, key_style));
        spans.push(Span::styled(format!(":{action}  "), hint_style));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_is_centered() {
        let (form, status) = create_layout(Rect::new(0, 0, 100, 30), 19);
        assert_eq!(form.width, MAX_FORM_WIDTH);
        assert_eq!(form.height, 19);
        assert_eq!(form.x, 20);
        assert_eq!(form.y, 5);
        assert_eq!(status, Rect::new(0, 29, 100, 1));
    }

    #[test]
    fn test_small_terminal_shrinks_form() {
        let (form, status) = create_layout(Rect::new(0, 0, 40, 10), 19);
        assert!(form.width <= 40);
        assert!(form.height <= 9);
        assert_eq!(status.y, 9);
    }
}
