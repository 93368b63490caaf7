//! Application state definitions

use super::forms::{Field, FormEvent, FormState, SubmissionOutcome};

/// Which element of the sign-up screen has keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Field(Field),
    SubmitButton,
}

impl Default for Focus {
    fn default() -> Self {
        Self::Field(Field::Email)
    }
}

impl Focus {
    /// Tab order: email, password, confirm, button, then wrap
    pub fn next(&self) -> Self {
        match self {
            Self::Field(Field::Email) => Self::Field(Field::Password),
            Self::Field(Field::Password) => Self::Field(Field::ConfirmPassword),
            Self::Field(Field::ConfirmPassword) => Self::SubmitButton,
            Self::SubmitButton => Self::Field(Field::Email),
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Field(Field::Email) => Self::SubmitButton,
            Self::Field(Field::Password) => Self::Field(Field::Email),
            Self::Field(Field::ConfirmPassword) => Self::Field(Field::Password),
            Self::SubmitButton => Self::Field(Field::ConfirmPassword),
        }
    }

    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Field(field) => Some(*field),
            Self::SubmitButton => None,
        }
    }

    pub fn is_field(&self, field: Field) -> bool {
        self.field() == Some(field)
    }
}

/// Everything the sign-up screen renders from
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The single owned form snapshot
    pub form: FormState,
    pub focus: Focus,
    /// Outcome of the last submit, shown until dismissed
    pub notice: Option<SubmissionOutcome>,
}

impl AppState {
    /// Feed one event to the form and keep the returned snapshot
    pub fn dispatch(&mut self, event: FormEvent) -> Option<SubmissionOutcome> {
        let (form, outcome) = std::mem::take(&mut self.form).apply(event);
        self.form = form;
        if let Some(outcome) = outcome {
            self.notice = Some(outcome);
            if outcome.is_accepted() {
                self.focus = Focus::default();
            }
        }
        outcome
    }

    /// Replace the focused field's value with the result of `edit`.
    /// An edit that leaves the value as it was is not a change.
    pub fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let mut value = self.form.value(field).to_string();
        edit(&mut value);
        if value == self.form.value(field) {
            return;
        }
        self.dispatch(FormEvent::FieldChange { field, value });
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
