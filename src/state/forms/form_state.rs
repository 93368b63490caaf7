//! Sign-up form state and its transitions
//!
//! [`FormState`] is an owned snapshot. Each transition consumes the current
//! snapshot and returns the next one, so the caller holds the only copy.

use super::field::{Field, FieldMap, FieldStatus};
use crate::validation::{self, ValidationError};

/// Result of pressing submit
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// Every field passed; the form has been reset
    Accepted,
    /// At least one field failed; errors are now flagged on the form
    Rejected,
}

impl SubmissionOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted)
    }
}

/// Inbound events from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    FieldChange { field: Field, value: String },
    Submit,
}

/// Values, errors and touched flags for every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    values: FieldMap<String>,
    errors: FieldMap<Option<ValidationError>>,
    touched: FieldMap<bool>,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self, field: Field) -> &str {
        &self.values[field]
    }

    /// Error computed the last time this field was validated
    pub fn error(&self, field: Field) -> Option<ValidationError> {
        self.errors[field]
    }

    /// Error text, empty when the field has no error
    pub fn error_message(&self, field: Field) -> &'static str {
        self.errors[field].map_or("", |err| err.message())
    }

    pub fn is_touched(&self, field: Field) -> bool {
        self.touched[field]
    }

    /// Error to display under the field: only once the field is touched
    pub fn visible_error(&self, field: Field) -> Option<ValidationError> {
        if self.touched[field] {
            self.errors[field]
        } else {
            None
        }
    }

    /// Run the field's check against the current values
    pub fn check(&self, field: Field) -> Result<(), ValidationError> {
        check_value(field, &self.values[field], &self.values.password)
    }

    /// Record an edit and revalidate the edited field only.
    ///
    /// Editing the password does not revalidate the confirmation; a stale
    /// "no error" on the confirmation survives until it is edited again or
    /// the form is submitted.
    pub fn on_field_change(mut self, field: Field, value: impl Into<String>) -> Self {
        let value = value.into();
        self.errors[field] = check_value(field, &value, &self.values.password).err();
        self.values[field] = value;
        self.touched[field] = true;

        tracing::debug!(
            field = field.id(),
            len = self.values[field].chars().count(),
            error = ?self.errors[field],
            "field changed"
        );
        self
    }

    /// Validate every field. On success the form resets to its defaults.
    pub fn on_submit(mut self) -> (Self, SubmissionOutcome) {
        self.touched = FieldMap::from_fn(|_| true);

        let results = FieldMap::from_fn(|field| self.check(field));
        if results.iter().all(|(_, result)| result.is_ok()) {
            tracing::info!("sign-up accepted");
            return (Self::default(), SubmissionOutcome::Accepted);
        }

        self.errors = FieldMap::from_fn(|field| results[field].err());
        tracing::info!(
            email = ?self.errors.email,
            password = ?self.errors.password,
            confirm_password = ?self.errors.confirm_password,
            "sign-up rejected"
        );
        (self, SubmissionOutcome::Rejected)
    }

    /// Apply one inbound event. Only submit yields an outcome.
    pub fn apply(self, event: FormEvent) -> (Self, Option<SubmissionOutcome>) {
        match event {
            FormEvent::FieldChange { field, value } => (self.on_field_change(field, value), None),
            FormEvent::Submit => {
                let (state, outcome) = self.on_submit();
                (state, Some(outcome))
            }
        }
    }

    /// Decoration for a field. Pure; calling it has no effect on the state.
    pub fn display_status(&self, field: Field) -> FieldStatus {
        if !self.touched[field] {
            return FieldStatus::Neutral;
        }
        if self.errors[field].is_some() {
            return FieldStatus::Error;
        }
        if self.check(field).is_ok() {
            FieldStatus::Success
        } else {
            // Touched, no stored error, but failing now (stale confirmation)
            FieldStatus::Neutral
        }
    }
}

fn check_value(field: Field, value: &str, password: &str) -> Result<(), ValidationError> {
    match field {
        Field::Email => validation::validate_email(value),
        Field::Password => validation::validate_password(value),
        Field::ConfirmPassword => validation::validate_confirm(password, value),
    }
}
