//! Sign-up form with real-time field validation
//!
//! The core ([`validation`] and [`state::forms`]) is pure: a [`FormState`]
//! snapshot goes in with an event and the next snapshot comes out. The
//! [`app`] and [`ui`] modules are a Ratatui front end driving it.

pub mod app;
pub mod config;
pub mod platform;
pub mod state;
pub mod ui;
pub mod validation;

pub use state::forms::{
    Field, FieldError, FieldMap, FieldStatus, FormEvent, FormState, SubmissionOutcome,
};
pub use validation::{is_confirm_match, is_valid_email, is_valid_password, ValidationError};
