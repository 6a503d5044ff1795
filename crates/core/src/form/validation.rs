//! Validation pass over the order form.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::field::Field;
use super::state::OrderFormState;
use crate::types::Email;

/// Required zip code length, in characters.
pub const ZIP_LENGTH: usize = 6;

/// A single field-level validation failure.
///
/// The `Display` output is the message shown next to the field.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// A required field was left empty.
    #[error("{} is required", .field.label())]
    MissingRequiredField { field: Field },
    /// The email is missing or does not look like an address.
    #[error("Please enter a valid email address")]
    InvalidFormat { field: Field },
    /// The value does not have the required length.
    #[error("{} must be {expected} digits", .field.label())]
    InvalidLength { field: Field, expected: usize },
}

impl ValidationError {
    /// The field this error belongs to.
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::MissingRequiredField { field }
            | Self::InvalidFormat { field }
            | Self::InvalidLength { field, .. } => *field,
        }
    }
}

/// Field-level errors from the latest validation pass.
///
/// Always rebuilt from scratch, never merged with a previous pass. Iterates
/// in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<Field, ValidationError>);

impl ValidationErrors {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    #[must_use]
    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    /// Message to display for `field`, if it failed.
    #[must_use]
    pub fn message(&self, field: Field) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    fn insert(&mut self, error: ValidationError) {
        self.0.insert(error.field(), error);
    }
}

/// Run every field rule against `state`.
///
/// Pure: the same state always yields the same errors.
#[must_use]
pub fn validate(state: &OrderFormState) -> ValidationErrors {
    let mut errors = ValidationErrors::default();

    if !Email::is_valid(state.value(Field::Email)) {
        errors.insert(ValidationError::InvalidFormat {
            field: Field::Email,
        });
    }

    for field in [
        Field::FirstName,
        Field::LastName,
        Field::Address,
        Field::City,
        Field::State,
        Field::County,
    ] {
        if state.value(field).is_empty() {
            errors.insert(ValidationError::MissingRequiredField { field });
        }
    }

    // Length only; digit filtering happens at the input
    if state.value(Field::Zip).chars().count() != ZIP_LENGTH {
        errors.insert(ValidationError::InvalidLength {
            field: Field::Zip,
            expected: ZIP_LENGTH,
        });
    }

    errors
}
