//! Phone number value object.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Country code used when none is given.
pub const DEFAULT_COUNTRY_CODE: &str = "+1";

/// A phone number with its international dialling prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "PhoneParts")]
pub struct PhoneNumber {
    value: String,
    country_code: String,
}

#[derive(Deserialize)]
struct PhoneParts {
    value: String,
    #[serde(default = "default_country_code")]
    country_code: String,
}

fn default_country_code() -> String {
    DEFAULT_COUNTRY_CODE.to_string()
}

impl PhoneNumber {
    /// Creates a phone number.
    ///
    /// The value may contain separators; only its digits are counted and there
    /// must be between 10 and 15 of them.
    pub fn new(
        value: impl Into<String>,
        country_code: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let value = value.into();
        let country_code = country_code.into();

        if value.is_empty() {
            return Err(ValidationError::new("Phone number cannot be empty"));
        }
        if country_code.is_empty() {
            return Err(ValidationError::new("Country code cannot be empty"));
        }

        let digits = digits_of(&value).len();
        if digits < 10 {
            return Err(ValidationError::new(
                "Phone number must have at least 10 digits",
            ));
        }
        if digits > 15 {
            return Err(ValidationError::new(
                "Phone number cannot have more than 15 digits",
            ));
        }

        if !country_code.starts_with('+') {
            return Err(ValidationError::new("Country code must start with +"));
        }
        if digits_of(&country_code).is_empty() {
            return Err(ValidationError::new("Country code must contain digits"));
        }

        Ok(Self {
            value,
            country_code,
        })
    }

    /// Creates a phone number with the default `+1` country code.
    pub fn with_default_country(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::new(value, DEFAULT_COUNTRY_CODE)
    }

    /// Returns the number as entered.
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn country_code(&self) -> &str {
        &self.country_code
    }

    /// Returns only the digits of the number.
    pub fn digits_only(&self) -> String {
        digits_of(&self.value)
    }

    /// Returns `(xxx) xxx-xxxx` for ten-digit North American numbers, and
    /// `"{country_code} {value}"` otherwise.
    pub fn formatted(&self) -> String {
        let digits = self.digits_only();
        if digits.len() == 10 && self.country_code == DEFAULT_COUNTRY_CODE {
            format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..])
        } else {
            format!("{} {}", self.country_code, self.value)
        }
    }
}

fn digits_of(s: &str) -> String {
    s.chars().filter(char::is_ascii_digit).collect()
}

impl TryFrom<PhoneParts> for PhoneNumber {
    type Error = ValidationError;

    fn try_from(parts: PhoneParts) -> Result<Self, Self::Error> {
        PhoneNumber::new(parts.value, parts.country_code)
    }
}

impl std::fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.formatted())
    }
}
