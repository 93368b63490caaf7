//! Sign-up form rendering

use super::field_renderer::{draw_field, mask, FieldView, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{Field, FieldStatus, Focus};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows needed to draw the whole form including its border
pub const FORM_HEIGHT: u16 = 2 + 1 + 1 + 3 * FIELD_HEIGHT + BUTTON_HEIGHT;

const SUBMIT_LABEL: &str = "Sign Up";

/// Build the view for one field from the form state and config
fn field_view(app: &App, field: Field) -> FieldView<'static> {
    let form = &app.state.form;
    let value = form.value(field);

    let display_value = if field.is_secret() && app.config.mask_passwords() {
        mask(value, app.config.mask_char())
    } else {
        value.to_string()
    };

    // The email border is the only one that shows success/error colouring
    let status = match field {
        Field::Email => form.display_status(field),
        Field::Password | Field::ConfirmPassword => FieldStatus::Neutral,
    };

    FieldView {
        label: field.label(),
        display_value,
        placeholder: app.config.show_placeholders().then_some(field.placeholder()),
        is_active: app.state.focus.is_field(field),
        status,
        error: form.visible_error(field).map(|err| err.message()),
    }
}

/// Draw the sign-up form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Sign Up ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Subtitle
            Constraint::Length(1),             // Spacer
            Constraint::Length(FIELD_HEIGHT),  // Email
            Constraint::Length(FIELD_HEIGHT),  // Password
            Constraint::Length(FIELD_HEIGHT),  // Confirm password
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Min(0),
        ])
        .vertical_margin(1)
        .horizontal_margin(2)
        .split(area);

    let subtitle = Paragraph::new(Line::from("Create your account"))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(subtitle, chunks[0]);

    for field in Field::ALL {
        draw_field(frame, chunks[2 + field.index()], &field_view(app, field));
    }

    render_button(
        frame,
        chunks[5],
        SUBMIT_LABEL,
        matches!(app.state.focus, Focus::SubmitButton),
    );
}
