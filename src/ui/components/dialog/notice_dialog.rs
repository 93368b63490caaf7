//! Submission notice dialog

use super::base::{render_dialog, DialogConfig};
use crate::state::SubmissionOutcome;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Text shown to the user for a submission outcome
pub fn notice_message(outcome: SubmissionOutcome) -> &'static str {
    match outcome {
        SubmissionOutcome::Accepted => "Form submitted successfully",
        SubmissionOutcome::Rejected => "Can't submit the form",
    }
}

/// Render the outcome of a submit as a centered overlay
pub fn render_notice_dialog(frame: &mut Frame, outcome: SubmissionOutcome) {
    let (title, accent) = match outcome {
        SubmissionOutcome::Accepted => ("Success", Color::Green),
        SubmissionOutcome::Rejected => ("Error", Color::Red),
    };
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let hint = vec![
        Span::raw("Press "),
        Span::styled("Enter", key_style),
        Span::raw(" or "),
        Span::styled("Esc", key_style),
        Span::raw(" to dismiss"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title,
            accent,
            message: notice_message(outcome),
            hint: Some(hint),
            max_width: 50,
        },
    );
}
