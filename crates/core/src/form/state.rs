//! Order form field values.

use serde::{Deserialize, Serialize};

use super::field::Field;
use crate::types::{OrderStatus, TrackingNumber};

/// Current values of every field on the order billing form.
///
/// `full_name` is derived from `first_name` and `last_name` by
/// [`FormController`](super::FormController); `status` and `tracking` are
/// fixed when the state is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderFormState {
    pub(crate) email: String,
    pub(crate) first_name: String,
    pub(crate) last_name: String,
    pub(crate) full_name: String,
    pub(crate) status: OrderStatus,
    pub(crate) tracking: TrackingNumber,
    pub(crate) address: String,
    pub(crate) address2: String,
    pub(crate) city: String,
    pub(crate) state: String,
    pub(crate) zip: String,
    pub(crate) county: String,
}

impl OrderFormState {
    /// Fresh state with empty inputs, `Pending` status and a new tracking number.
    #[must_use]
    pub fn new() -> Self {
        Self::with_tracking(TrackingNumber::generate())
    }

    /// Fresh state with an explicit tracking number.
    #[must_use]
    pub fn with_tracking(tracking: TrackingNumber) -> Self {
        Self {
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            full_name: String::new(),
            status: OrderStatus::default(),
            tracking,
            address: String::new(),
            address2: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            county: String::new(),
        }
    }

    /// Current value of `field` as displayed on the form.
    #[must_use]
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Email => &self.email,
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::FullName => &self.full_name,
            Field::Status => self.status.as_str(),
            Field::Tracking => self.tracking.as_str(),
            Field::Address => &self.address,
            Field::Address2 => &self.address2,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Zip => &self.zip,
            Field::County => &self.county,
        }
    }

    /// Mutable slot for an editable text field, `None` for read-only ones.
    pub(crate) fn slot_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Email => Some(&mut self.email),
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Address => Some(&mut self.address),
            Field::Address2 => Some(&mut self.address2),
            Field::City => Some(&mut self.city),
            Field::State => Some(&mut self.state),
            Field::Zip => Some(&mut self.zip),
            Field::County => Some(&mut self.county),
            Field::FullName | Field::Status | Field::Tracking => None,
        }
    }

    /// Recompute `full_name` from the current first and last name.
    pub(crate) fn refresh_full_name(&mut self) {
        self.full_name = format!("{} {}", self.first_name, self.last_name);
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    #[must_use]
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    #[must_use]
    pub const fn status(&self) -> OrderStatus {
        self.status
    }

    #[must_use]
    pub const fn tracking(&self) -> &TrackingNumber {
        &self.tracking
    }

    #[must_use]
    pub fn zip(&self) -> &str {
        &self.zip
    }
}

impl Default for OrderFormState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = OrderFormState::with_tracking(TrackingNumber::from_millis(42));
        assert_eq!(state.status(), OrderStatus::Pending);
        assert_eq!(state.tracking().as_str(), "TRACK-42");
        assert_eq!(state.full_name(), "");
        for field in Field::ALL.into_iter().filter(|f| f.is_editable()) {
            assert_eq!(state.value(field), "", "{field} should start empty");
        }
    }

    #[test]
    fn test_value_of_read_only_fields() {
        let state = OrderFormState::with_tracking(TrackingNumber::from_millis(7));
        assert_eq!(state.value(Field::Status), "Pending");
        assert_eq!(state.value(Field::Tracking), "TRACK-7");
    }

    #[test]
    fn test_slot_mut_rejects_read_only_fields() {
        let mut state = OrderFormState::new();
        assert!(state.slot_mut(Field::FullName).is_none());
        assert!(state.slot_mut(Field::Status).is_none());
        assert!(state.slot_mut(Field::Tracking).is_none());
        assert!(state.slot_mut(Field::County).is_some());
    }
}
