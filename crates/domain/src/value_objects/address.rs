//! Postal address value object.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A physical address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "AddressParts")]
pub struct Address {
    street: String,
    city: String,
    state: String,
    postal_code: String,
    country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    apartment: Option<String>,
}

/// Unvalidated address fields, as received from callers.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AddressParts {
    pub street: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub country: String,
    #[serde(default)]
    pub apartment: Option<String>,
}

impl Address {
    /// Validates the parts and builds an address.
    pub fn new(parts: AddressParts) -> Result<Self, ValidationError> {
        let required = [
            (&parts.street, "Street"),
            (&parts.city, "City"),
            (&parts.state, "State"),
            (&parts.postal_code, "Postal code"),
            (&parts.country, "Country"),
        ];
        for (value, field) in required {
            if value.trim().is_empty() {
                return Err(ValidationError::new(format!("{field} cannot be empty")));
            }
        }

        if parts.postal_code.chars().count() < 3 {
            return Err(ValidationError::new("Postal code too short"));
        }

        Ok(Self {
            street: parts.street,
            city: parts.city,
            state: parts.state,
            postal_code: parts.postal_code,
            country: parts.country,
            apartment: parts.apartment,
        })
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn apartment(&self) -> Option<&str> {
        self.apartment.as_deref()
    }

    /// Renders the address on multiple lines.
    pub fn full_address(&self) -> String {
        let mut lines = vec![self.street.clone()];
        if let Some(apartment) = self.apartment.as_deref().filter(|a| !a.is_empty()) {
            lines.push(format!("Apt {apartment}"));
        }
        lines.push(format!(
            "{}, {} {}",
            self.city, self.state, self.postal_code
        ));
        lines.push(self.country.clone());
        lines.join("\n")
    }
}

impl TryFrom<AddressParts> for Address {
    type Error = ValidationError;

    fn try_from(parts: AddressParts) -> Result<Self, Self::Error> {
        Address::new(parts)
    }
}

impl std::fmt::Display for Address {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.full_address())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts() -> AddressParts {
        AddressParts {
            street: "123 Main St".to_string(),
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            postal_code: "62701".to_string(),
            country: "USA".to_string(),
            apartment: None,
        }
    }

    #[test]
    fn test_valid_address() {
        let address = Address::new(parts()).unwrap();
        assert_eq!(address.city(), "Springfield");
        assert_eq!(
            address.full_address(),
            "123 Main St\nSpringfield, IL 62701\nUSA"
        );
    }

    #[test]
    fn test_apartment_line() {
        let address = Address::new(AddressParts {
            apartment: Some("4B".to_string()),
            ..parts()
        })
        .unwrap();
        assert_eq!(
            address.to_string(),
            "123 Main St\nApt 4B\nSpringfield, IL 62701\nUSA"
        );
    }

    #[test]
    fn test_blank_fields_rejected() {
        let err = Address::new(AddressParts {
            street: "   ".to_string(),
            ..parts()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Street cannot be empty");

        let err = Address::new(AddressParts {
            country: String::new(),
            ..parts()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Country cannot be empty");
    }

    #[test]
    fn test_short_postal_code() {
        let err = Address::new(AddressParts {
            postal_code: "12".to_string(),
            ..parts()
        })
        .unwrap_err();
        assert_eq!(err.message(), "Postal code too short");

        assert!(
            Address::new(AddressParts {
                postal_code: "123".to_string(),
                ..parts()
            })
            .is_ok()
        );
    }

    #[test]
    fn test_every_valid_combination_constructs() {
        let streets = ["1 A St", "742 Evergreen Terrace"];
        let codes = ["abc", "10115", "SW1A 1AA"];
        let countries = ["DE", "United Kingdom"];
        for street in streets {
            for code in codes {
                for country in countries {
                    let result = Address::new(AddressParts {
                        street: street.to_string(),
                        postal_code: code.to_string(),
                        country: country.to_string(),
                        ..parts()
                    });
                    assert!(result.is_ok());
                }
            }
        }
    }
}
