//! Form field identifiers and per-field storage

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Index, IndexMut};
use std::str::FromStr;
use thiserror::Error;

/// The closed set of sign-up form fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Email,
    Password,
    ConfirmPassword,
}

impl Field {
    /// All fields in display order
    pub const ALL: [Field; 3] = [Field::Email, Field::Password, Field::ConfirmPassword];

    /// Stable identifier used by the presentation layer
    pub fn id(&self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirm_password",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Email => "Enter your email",
            Self::Password => "Enter your password",
            Self::ConfirmPassword => "Confirm your password",
        }
    }

    /// Whether the field holds a secret that should not be echoed
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }

    /// Position in [`Field::ALL`]
    pub fn index(&self) -> usize {
        match self {
            Self::Email => 0,
            Self::Password => 1,
            Self::ConfirmPassword => 2,
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Raised when the presentation layer names a field the form does not have
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown form field: {0:?}")]
    UnknownField(String),
}

impl FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "password" => Ok(Self::Password),
            "confirm_password" => Ok(Self::ConfirmPassword),
            other => Err(FieldError::UnknownField(other.to_string())),
        }
    }
}

/// One value per [`Field`]. Every field always has an entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMap<T> {
    pub email: T,
    pub password: T,
    pub confirm_password: T,
}

impl<T> FieldMap<T> {
    /// Build a map by evaluating `f` for each field
    pub fn from_fn(mut f: impl FnMut(Field) -> T) -> Self {
        Self {
            email: f(Field::Email),
            password: f(Field::Password),
            confirm_password: f(Field::ConfirmPassword),
        }
    }

    /// Iterate `(field, value)` pairs in display order
    pub fn iter(&self) -> impl Iterator<Item = (Field, &T)> {
        Field::ALL.into_iter().map(move |field| (field, &self[field]))
    }
}

impl<T> Index<Field> for FieldMap<T> {
    type Output = T;

    fn index(&self, field: Field) -> &T {
        match field {
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
        }
    }
}

impl<T> IndexMut<Field> for FieldMap<T> {
    fn index_mut(&mut self, field: Field) -> &mut T {
        match field {
            Field::Email => &mut self.email,
            Field::Password => &mut self.password,
            Field::ConfirmPassword => &mut self.confirm_password,
        }
    }
}

/// How a field should be decorated by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldStatus {
    #[default]
    Neutral,
    Error,
    Success,
}
