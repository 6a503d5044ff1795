//! Email address type.

use core::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Accepted shape: word characters, hyphens and dots before the `@`, one or
/// more dot-terminated labels, then a 2-4 character top-level label.
///
/// Word characters are ASCII only.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_\-.]+@([A-Za-z0-9_-]+\.)+[A-Za-z0-9_-]{2,4}$")
        .expect("email pattern must compile")
});

/// Errors that can occur when parsing an [`Email`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailError {
    /// The input string is empty.
    #[error("email cannot be empty")]
    Empty,
    /// The input does not match the accepted address shape.
    #[error("email is not a valid address")]
    InvalidFormat,
}

/// An email address.
///
/// ## Constraints
///
/// - Must not be empty
/// - Local part: ASCII letters, digits, `_`, `-` and `.`
/// - Domain: at least one label followed by a dot, then a top-level label
///   of 2-4 ASCII letters, digits, `_` or `-`
///
/// This is deliberately narrower than RFC 5322: `user+tag@example.com` and
/// `user@example.museum` are rejected.
///
/// ## Examples
///
/// ```
/// use order_billing_core::Email;
///
/// // Valid emails
/// assert!(Email::parse("a@b.co").is_ok());
/// assert!(Email::parse("user.name@domain.co.uk").is_ok());
///
/// // Invalid emails
/// assert!(Email::parse("").is_err());              // empty
/// assert!(Email::parse("not-an-email").is_err());  // missing @
/// assert!(Email::parse("user@localhost").is_err()); // no top-level label
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Parse an `Email` from a string.
    ///
    /// The input is matched as-is; surrounding whitespace makes it invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty or does not match the accepted
    /// address shape.
    pub fn parse(s: &str) -> Result<Self, EmailError> {
        if s.is_empty() {
            return Err(EmailError::Empty);
        }

        if !EMAIL_PATTERN.is_match(s) {
            return Err(EmailError::InvalidFormat);
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns `true` if `s` would parse as an [`Email`].
    #[must_use]
    pub fn is_valid(s: &str) -> bool {
        Self::parse(s).is_ok()
    }

}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_emails() {
        assert!(Email::parse("a@b.co").is_ok());
        assert!(Email::parse("user@example.com").is_ok());
        assert!(Email::parse("user.name@example.com").is_ok());
        assert!(Email::parse("first-last@sub.example.com").is_ok());
        assert!(Email::parse("user@example.co.uk").is_ok());
        assert!(Email::parse("user_1@my-host.info").is_ok());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Email::parse(""), Err(EmailError::Empty));
    }

    #[test]
    fn test_parse_missing_at() {
        assert_eq!(
            Email::parse("not-an-email"),
            Err(EmailError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_requires_dotted_domain() {
        assert_eq!(
            Email::parse("user@localhost"),
            Err(EmailError::InvalidFormat)
        );
        assert_eq!(Email::parse("user@"), Err(EmailError::InvalidFormat));
        assert_eq!(
            Email::parse("@example.com"),
            Err(EmailError::InvalidFormat)
        );
    }

    #[test]
    fn test_parse_top_level_label_length() {
        assert!(Email::parse("user@example.c").is_err());
        assert!(Email::parse("user@example.info").is_ok());
        assert!(Email::parse("user@example.museum").is_err());
    }

    #[test]
    fn test_parse_rejects_characters_outside_pattern() {
        assert!(Email::parse("user+tag@example.com").is_err());
        assert!(Email::parse("us er@example.com").is_err());
        assert!(Email::parse(" user@example.com").is_err());
        assert!(Email::parse("jürgen@example.com").is_err());
    }

    #[test]
    fn test_is_valid() {
        assert!(Email::is_valid("a@b.co"));
        assert!(!Email::is_valid("a@b"));
    }

    #[test]
    fn test_display() {
        let email = Email::parse("user@example.com").unwrap();
        assert_eq!(format!("{email}"), "user@example.com");
    }

    #[test]
    fn test_serde_is_transparent() {
        let email = Email::parse("user@example.com").unwrap();
        let json = serde_json::to_string(&email).unwrap();
        assert_eq!(json, "\"user@example.com\"");
    }
}
