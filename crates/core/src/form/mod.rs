//! Order billing form controller.
//!
//! [`FormController`] owns the form's field values, keeps the derived full
//! name in sync, validates on submit and remembers the latest errors for the
//! view to display.
//!
//! ```text
//! Editing --submit, valid--> Submitted (terminal)
//! Editing --submit, invalid--> Editing (errors shown, values kept)
//! ```
//!
//! # Example
//!
//! ```
//! use order_billing_core::{Field, FormController};
//!
//! let mut form = FormController::new();
//! form.update_field(Field::FirstName, "Jane").unwrap();
//! form.update_field(Field::LastName, "Doe").unwrap();
//! assert_eq!(form.state().full_name(), "Jane Doe");
//!
//! let (valid, errors) = form.validate();
//! assert!(!valid);
//! assert!(errors.contains(Field::Email));
//! ```

pub mod field;
pub mod state;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use field::{Field, FieldError};
pub use state::OrderFormState;
pub use validation::{ValidationError, ValidationErrors, ZIP_LENGTH};

use crate::types::{Email, TrackingNumber};

/// Acknowledgment shown after a successful submission.
pub const SUCCESS_MESSAGE: &str = "Form submitted successfully!";

/// Where the form is in its two-state lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    #[default]
    Editing,
    Submitted,
}

/// Why a submission did not go through.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    /// Validation failed; the errors are available from [`FormController::errors`].
    #[error("form has {count} invalid field(s)")]
    Invalid { count: usize },
    /// The form was already submitted.
    #[error("form has already been submitted")]
    AlreadySubmitted,
}

/// Summary of an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub tracking: TrackingNumber,
    pub full_name: String,
    pub email: Email,
}

impl Receipt {
    #[must_use]
    pub const fn message(&self) -> &'static str {
        SUCCESS_MESSAGE
    }
}

/// Owner of the order form's state and its latest validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormController {
    state: OrderFormState,
    #[serde(default)]
    errors: ValidationErrors,
    #[serde(default)]
    phase: FormPhase,
}

impl FormController {
    /// New form in the Editing phase with a freshly generated tracking number.
    #[must_use]
    pub fn new() -> Self {
        Self::from_state(OrderFormState::new())
    }

    /// New form in the Editing phase around an existing state.
    #[must_use]
    pub fn from_state(state: OrderFormState) -> Self {
        Self {
            state,
            errors: ValidationErrors::default(),
            phase: FormPhase::Editing,
        }
    }

    #[must_use]
    pub const fn state(&self) -> &OrderFormState {
        &self.state
    }

    /// Errors from the latest validation pass.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    #[must_use]
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    /// Set one field. Updating the first or last name also recomputes the
    /// full name from the values after this update. Does not validate.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::ReadOnly`] for `fullName`, `status` and
    /// `tracking`, and [`FieldError::AlreadySubmitted`] once submitted. State
    /// is left untouched in both cases.
    pub fn update_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), FieldError> {
        if self.phase == FormPhase::Submitted {
            return Err(FieldError::AlreadySubmitted);
        }

        let slot = self
            .state
            .slot_mut(field)
            .ok_or(FieldError::ReadOnly(field))?;
        *slot = value.into();

        if field.feeds_full_name() {
            self.state.refresh_full_name();
        }

        Ok(())
    }

    /// [`update_field`](Self::update_field) by wire name.
    ///
    /// # Errors
    ///
    /// Returns [`FieldError::UnknownField`] if `name` is not a form field,
    /// otherwise the same errors as [`update_field`](Self::update_field).
    pub fn update_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<String>,
    ) -> Result<Field, FieldError> {
        let field = name.parse::<Field>()?;
        self.update_field(field, value)?;
        Ok(field)
    }

    /// Recompute every field error from scratch and store the result.
    ///
    /// Returns whether the form is valid together with the new errors.
    pub fn validate(&mut self) -> (bool, &ValidationErrors) {
        self.errors = validation::validate(&self.state);
        (self.errors.is_empty(), &self.errors)
    }

    /// Validate and, if everything passes, move to the Submitted phase.
    ///
    /// Nothing leaves the process: the receipt only feeds the acknowledgment.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::Invalid`] when validation fails (the form stays
    /// editable with its values intact) and [`SubmitError::AlreadySubmitted`]
    /// when called after a successful submission.
    pub fn submit(&mut self) -> Result<Receipt, SubmitError> {
        if self.phase == FormPhase::Submitted {
            return Err(SubmitError::AlreadySubmitted);
        }

        let (valid, count) = {
            let (valid, errors) = self.validate();
            (valid, errors.len())
        };
        let email = match Email::parse(self.state.email()) {
            Ok(email) if valid => email,
            _ => return Err(SubmitError::Invalid { count }),
        };

        self.phase = FormPhase::Submitted;
        Ok(Receipt {
            tracking: self.state.tracking().clone(),
            full_name: self.state.full_name().to_string(),
            email,
        })
    }
}

impl Default for FormController {
    fn default() -> Self {
        Self::new()
    }
}
