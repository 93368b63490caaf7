//! State management for the TUI

mod app_state;
pub mod forms;

pub use app_state::{AppState, Focus};
pub use forms::{Field, FieldMap, FieldStatus, FormEvent, FormState, SubmissionOutcome};
