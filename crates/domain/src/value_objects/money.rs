//! Money value object.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A non-negative decimal amount in a given ISO-4217 style currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "MoneyParts")]
pub struct Money {
    amount: Decimal,
    currency: String,
}

#[derive(Deserialize)]
struct MoneyParts {
    amount: Decimal,
    currency: String,
}

impl Money {
    /// Creates a money amount, validating amount and currency code.
    pub fn new(amount: Decimal, currency: impl Into<String>) -> Result<Self, ValidationError> {
        let currency = currency.into();

        if amount < Decimal::ZERO {
            return Err(ValidationError::new("Amount cannot be negative"));
        }
        if currency.is_empty() {
            return Err(ValidationError::new("Currency cannot be empty"));
        }
        if currency.len() != 3 || !currency.chars().all(|c| c.is_ascii_uppercase()) {
            return Err(ValidationError::new(format!(
                "Invalid currency code: {currency}"
            )));
        }

        Ok(Self { amount, currency })
    }

    /// Returns the amount.
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the three-letter currency code.
    pub fn currency(&self) -> &str {
        &self.currency
    }

    /// Returns true if the amount is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    /// Adds another amount of the same currency.
    pub fn add(&self, other: &Money) -> Result<Money, ValidationError> {
        if self.currency != other.currency {
            return Err(ValidationError::new(format!(
                "Cannot add different currencies: {} and {}",
                self.currency, other.currency
            )));
        }
        let sum = self.amount.checked_add(other.amount).ok_or_else(overflow)?;
        Money::new(sum, self.currency.clone())
    }

    /// Subtracts another amount of the same currency.
    ///
    /// The result must not be negative.
    pub fn subtract(&self, other: &Money) -> Result<Money, ValidationError> {
        if self.currency != other.currency {
            return Err(ValidationError::new(format!(
                "Cannot subtract different currencies: {} and {}",
                self.currency, other.currency
            )));
        }
        let result = self.amount.checked_sub(other.amount).ok_or_else(overflow)?;
        if result < Decimal::ZERO {
            return Err(ValidationError::new(
                "Subtraction would result in negative amount",
            ));
        }
        Money::new(result, self.currency.clone())
    }

    /// Multiplies the amount by a non-negative factor.
    pub fn multiply(&self, factor: impl Into<Decimal>) -> Result<Money, ValidationError> {
        let factor = factor.into();
        if factor < Decimal::ZERO {
            return Err(ValidationError::new("Factor cannot be negative"));
        }
        let product = self.amount.checked_mul(factor).ok_or_else(overflow)?;
        Money::new(product, self.currency.clone())
    }
}

fn overflow() -> ValidationError {
    ValidationError::new("Amount overflow")
}

impl TryFrom<MoneyParts> for Money {
    type Error = ValidationError;

    fn try_from(parts: MoneyParts) -> Result<Self, Self::Error> {
        Money::new(parts.amount, parts.currency)
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn usd(s: &str) -> Money {
        Money::new(dec(s), "USD").unwrap()
    }

    #[test]
    fn test_add_same_currency() {
        let total = usd("100.00").add(&usd("50.00")).unwrap();
        assert_eq!(total, usd("150.00"));
        assert_eq!(total.to_string(), "150.00 USD");
    }

    #[test]
    fn test_add_different_currency_fails() {
        let eur = Money::new(Decimal::from(5), "EUR").unwrap();
        let err = usd("10").add(&eur).unwrap_err();
        assert_eq!(err.message(), "Cannot add different currencies: USD and EUR");
    }

    #[test]
    fn test_subtract() {
        assert_eq!(usd("10.50").subtract(&usd("0.50")).unwrap(), usd("10"));
        assert!(usd("1").subtract(&usd("2")).is_err());
    }

    #[test]
    fn test_multiply() {
        assert_eq!(usd("2.50").multiply(4).unwrap(), usd("10.00"));
        assert_eq!(usd("3").multiply(dec("0.5")).unwrap(), usd("1.5"));
        assert!(usd("3").multiply(-1).is_err());
    }

    #[test]
    fn test_arithmetic_overflow_is_an_error() {
        let max = Money::new(Decimal::MAX, "USD").unwrap();
        let one = Money::new(Decimal::ONE, "USD").unwrap();

        assert_eq!(max.add(&one).unwrap_err().message(), "Amount overflow");
        assert_eq!(max.multiply(2).unwrap_err().message(), "Amount overflow");
        assert_eq!(max.subtract(&one).unwrap().amount(), Decimal::MAX - Decimal::ONE);
    }

    #[test]
    fn test_zero_is_allowed() {
        let zero = usd("0");
        assert!(!zero.is_positive());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let err = Money::new(dec("-0.01"), "USD").unwrap_err();
        assert_eq!(err.message(), "Amount cannot be negative");
    }

    #[test]
    fn test_currency_code_rules() {
        assert!(Money::new(Decimal::ONE, "").is_err());
        assert!(Money::new(Decimal::ONE, "usd").is_err());
        assert!(Money::new(Decimal::ONE, "US").is_err());
        assert!(Money::new(Decimal::ONE, "USDT").is_err());
        assert!(Money::new(Decimal::ONE, "GBP").is_ok());
    }

    #[test]
    fn test_deserialize_validates() {
        let money: Money =
            serde_json::from_str(r#"{"amount":"12.34","currency":"EUR"}"#).unwrap();
        assert_eq!(money.amount(), dec("12.34"));
        assert!(serde_json::from_str::<Money>(r#"{"amount":"1","currency":"eu"}"#).is_err());
    }
}
