//! Commands accepted by the use cases.

use std::collections::HashMap;

use common::{CustomerId, OrderId};
use domain::{AddressParts, OrderTransition};
use rust_decimal::Decimal;
use serde::Deserialize;

/// Currency used when an order does not name one.
pub const DEFAULT_CURRENCY: &str = "USD";

/// Command to register a customer.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateCustomer {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub address: Option<AddressParts>,
    #[serde(default)]
    pub phone: Option<PhoneParts>,
    #[serde(default)]
    pub preferences: Option<HashMap<String, serde_json::Value>>,
}

impl CreateCustomer {
    /// Creates a command with name and email only.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }

    /// Sets the preferences.
    pub fn with_preferences(mut self, preferences: HashMap<String, serde_json::Value>) -> Self {
        self.preferences = Some(preferences);
        self
    }
}

/// Unvalidated phone fields.
#[derive(Debug, Clone, Deserialize)]
pub struct PhoneParts {
    pub value: String,
    #[serde(default)]
    pub country_code: Option<String>,
}

/// Command to place an order.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrder {
    pub customer_id: CustomerId,
    pub total_amount: Decimal,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub details: Option<HashMap<String, serde_json::Value>>,
}

impl CreateOrder {
    /// Creates a command in the default currency with no details.
    pub fn new(customer_id: CustomerId, total_amount: Decimal) -> Self {
        Self {
            customer_id,
            total_amount,
            currency: None,
            details: None,
        }
    }

    /// Sets the currency code.
    pub fn currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = Some(currency.into());
        self
    }

    /// Sets the order details.
    pub fn details(mut self, details: HashMap<String, serde_json::Value>) -> Self {
        self.details = Some(details);
        self
    }
}

/// Command to deactivate a customer.
#[derive(Debug, Clone)]
pub struct DeactivateCustomer {
    pub customer_id: CustomerId,
    pub reason: Option<String>,
}

impl DeactivateCustomer {
    pub fn new(customer_id: CustomerId, reason: Option<String>) -> Self {
        Self {
            customer_id,
            reason,
        }
    }
}

/// A change to a customer's contact details.
#[derive(Debug, Clone)]
pub enum ContactChange {
    Address(AddressParts),
    Phone(PhoneParts),
}

/// Command to update a customer's address or phone.
#[derive(Debug, Clone)]
pub struct UpdateCustomerContact {
    pub customer_id: CustomerId,
    pub change: ContactChange,
}

impl UpdateCustomerContact {
    /// Replaces the address.
    pub fn address(customer_id: CustomerId, address: AddressParts) -> Self {
        Self {
            customer_id,
            change: ContactChange::Address(address),
        }
    }

    /// Replaces the phone number.
    pub fn phone(customer_id: CustomerId, value: impl Into<String>, country_code: Option<String>) -> Self {
        Self {
            customer_id,
            change: ContactChange::Phone(PhoneParts {
                value: value.into(),
                country_code,
            }),
        }
    }
}

/// Command to move an order through its lifecycle.
#[derive(Debug, Clone)]
pub struct ChangeOrderStatus {
    pub order_id: OrderId,
    pub transition: OrderTransition,
}

impl ChangeOrderStatus {
    pub fn new(order_id: OrderId, transition: OrderTransition) -> Self {
        Self {
            order_id,
            transition,
        }
    }

    pub fn confirm(order_id: OrderId) -> Self {
        Self::new(order_id, OrderTransition::Confirm)
    }

    pub fn ship(order_id: OrderId) -> Self {
        Self::new(order_id, OrderTransition::Ship)
    }

    pub fn deliver(order_id: OrderId) -> Self {
        Self::new(order_id, OrderTransition::Deliver)
    }

    pub fn cancel(order_id: OrderId, reason: Option<&str>) -> Self {
        Self::new(order_id, OrderTransition::cancel(reason))
    }
}
