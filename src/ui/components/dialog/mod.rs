//! Dialog components for TUI

mod base;
mod notice_dialog;

pub use notice_dialog::{notice_message, render_notice_dialog};
