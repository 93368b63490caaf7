//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod terminal;

pub use components::notice_message;
pub use terminal::TerminalGuard;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (form_area, status_area) = layout::create_layout(frame.area(), forms::FORM_HEIGHT);

    forms::draw(frame, form_area, app);
    layout::draw_status_bar(frame, status_area, app);

    // Notice overlays everything else
    if let Some(outcome) = app.state.notice {
        components::render_notice_dialog(frame, outcome);
    }
}
