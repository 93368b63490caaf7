//! Form domain layer
//!
//! The sign-up form's fields, its state snapshot, and the transitions the
//! presentation layer drives it with.

mod field;
mod form_state;

pub use field::{Field, FieldError, FieldMap, FieldStatus};
pub use form_state::{FormEvent, FormState, SubmissionOutcome};
