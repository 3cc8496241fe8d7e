//! Domain error types.

use thiserror::Error;

/// Names of the business rules enforced by the aggregates.
pub mod rules {
    /// An order total must be strictly positive.
    pub const MINIMUM_ORDER_AMOUNT: &str = "MinimumOrderAmount";
    /// Only pending orders can be confirmed.
    pub const ORDER_CONFIRMATION: &str = "OrderConfirmationRule";
    /// Only confirmed orders can be shipped.
    pub const ORDER_SHIPPING: &str = "OrderShippingRule";
    /// Only shipped orders can be delivered.
    pub const ORDER_DELIVERY: &str = "OrderDeliveryRule";
    /// Only pending or confirmed orders can be cancelled.
    pub const ORDER_CANCELLATION: &str = "OrderCancellationRule";
    /// A customer can be deactivated once.
    pub const CUSTOMER_DEACTIVATION: &str = "CustomerDeactivationRule";
}

/// A value failed its own validation at construction time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An aggregate operation was refused because a business rule did not hold.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct BusinessRuleViolation {
    rule_name: &'static str,
    message: String,
}

impl BusinessRuleViolation {
    /// Creates a violation of the named rule.
    pub fn new(rule_name: &'static str, message: impl Into<String>) -> Self {
        Self {
            rule_name,
            message: message.into(),
        }
    }

    /// Returns the name of the violated rule (see [`rules`]).
    pub fn rule_name(&self) -> &'static str {
        self.rule_name
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Errors that can occur during domain operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A value object or entity field was invalid.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A business rule or state-machine guard refused the operation.
    #[error(transparent)]
    BusinessRule(#[from] BusinessRuleViolation),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn violation_displays_message_and_keeps_rule() {
        let err = BusinessRuleViolation::new(rules::ORDER_SHIPPING, "cannot ship");
        assert_eq!(err.to_string(), "cannot ship");
        assert_eq!(err.rule_name(), "OrderShippingRule");
    }

    #[test]
    fn domain_error_is_transparent() {
        let err: DomainError = ValidationError::new("Street cannot be empty").into();
        assert_eq!(err.to_string(), "Street cannot be empty");
        assert!(matches!(err, DomainError::Validation(_)));
    }
}
