//! Email address value object.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
        .expect("email pattern is valid")
});

/// A syntactically valid email address, stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Parses and validates an email address.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.is_empty() {
            return Err(ValidationError::new("Email cannot be empty"));
        }
        if !EMAIL_PATTERN.is_match(&value) {
            return Err(ValidationError::new(format!(
                "Invalid email format: {value}"
            )));
        }
        Ok(Self(value))
    }

    /// Returns the full address.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the part after `@`.
    pub fn domain(&self) -> &str {
        self.split().1
    }

    /// Returns the part before `@`.
    pub fn local_part(&self) -> &str {
        self.split().0
    }

    fn split(&self) -> (&str, &str) {
        // Validation guarantees exactly one '@'.
        self.0.split_once('@').unwrap_or((&self.0, ""))
    }
}

impl TryFrom<String> for Email {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_parts() {
        let email = Email::new("a@b.co").unwrap();
        assert_eq!(email.domain(), "b.co");
        assert_eq!(email.local_part(), "a");
        assert_eq!(email.to_string(), "a@b.co");
    }

    #[test]
    fn test_accepts_common_shapes() {
        for value in [
            "john.doe@example.com",
            "first+tag@mail.example.org",
            "under_score%x@sub-domain.example.io",
        ] {
            assert!(Email::new(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_rejects_invalid() {
        for value in [
            "bad",
            "@example.com",
            "user@",
            "user@example",
            "user@example.c",
            "user@.com",
            "user@exa mple.com",
            "us er@example.com",
            "user@example.c0m",
            "a@b@c.com",
            "user@example.com.",
        ] {
            assert!(Email::new(value).is_err(), "{value} should be invalid");
        }
    }

    #[test]
    fn test_keeps_case_as_given() {
        let email = Email::new("Alice.Smith@Example.COM").unwrap();
        assert_eq!(email.as_str(), "Alice.Smith@Example.COM");
    }

    #[test]
    fn test_empty_message() {
        let err = Email::new("").unwrap_err();
        assert_eq!(err.message(), "Email cannot be empty");
    }

    #[test]
    fn test_deserialize_validates() {
        let email: Email = serde_json::from_str("\"x@y.dev\"").unwrap();
        assert_eq!(email.domain(), "y.dev");
        assert!(serde_json::from_str::<Email>("\"nope\"").is_err());
    }
}
