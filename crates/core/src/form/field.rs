//! Field names of the order billing form.

use serde::{Deserialize, Serialize};

/// Errors raised when a field update cannot be applied.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FieldError {
    /// The name does not belong to the form.
    #[error("unknown field: {0}")]
    UnknownField(String),
    /// The field is computed or fixed at creation and cannot be edited.
    #[error("field is read-only: {0}")]
    ReadOnly(Field),
    /// The form was already submitted.
    #[error("form has already been submitted")]
    AlreadySubmitted,
}

/// A field of the order billing form.
///
/// Variants are declared in form order; the derived `Ord` is what keeps
/// validation errors listed top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    Email,
    FirstName,
    LastName,
    FullName,
    Status,
    Tracking,
    Address,
    Address2,
    City,
    State,
    Zip,
    County,
}

impl Field {
    /// Every field, in form order.
    pub const ALL: [Self; 12] = [
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::FullName,
        Self::Status,
        Self::Tracking,
        Self::Address,
        Self::Address2,
        Self::City,
        Self::State,
        Self::Zip,
        Self::County,
    ];

    /// Fields in the basic information section.
    pub const BASIC: [Self; 6] = [
        Self::Email,
        Self::FirstName,
        Self::LastName,
        Self::FullName,
        Self::Status,
        Self::Tracking,
    ];

    /// Fields in the address section.
    pub const ADDRESS: [Self; 6] = [
        Self::Address,
        Self::Address2,
        Self::City,
        Self::State,
        Self::Zip,
        Self::County,
    ];

    /// Wire name used in form posts and error maps.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::FullName => "fullName",
            Self::Status => "status",
            Self::Tracking => "tracking",
            Self::Address => "address",
            Self::Address2 => "address2",
            Self::City => "city",
            Self::State => "state",
            Self::Zip => "zip",
            Self::County => "county",
        }
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Email => "Email",
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::FullName => "Full Name",
            Self::Status => "Status",
            Self::Tracking => "Tracking Number",
            Self::Address => "Address",
            Self::Address2 => "Address 2",
            Self::City => "City",
            Self::State => "State",
            Self::Zip => "Zip Code",
            Self::County => "County",
        }
    }

    /// Whether the user may type into this field.
    #[must_use]
    pub const fn is_editable(self) -> bool {
        !matches!(self, Self::FullName | Self::Status | Self::Tracking)
    }

    /// Whether validation requires a value.
    #[must_use]
    pub const fn is_required(self) -> bool {
        self.is_editable() && !matches!(self, Self::Address2)
    }

    /// Whether a change to this field feeds the derived full name.
    #[must_use]
    pub const fn feeds_full_name(self) -> bool {
        matches!(self, Self::FirstName | Self::LastName)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Field {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}
