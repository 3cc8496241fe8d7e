//! Customer aggregate.

use std::collections::HashMap;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use common::CustomerId;
use serde::Serialize;

use crate::aggregate::{AggregateRoot, Entity, Rejected};
use crate::error::{BusinessRuleViolation, ValidationError, rules};
use crate::value_objects::{Address, Email, PhoneNumber};

use super::CustomerEvent;

/// Reason recorded when a deactivation does not give one.
pub const DEFAULT_DEACTIVATION_REASON: &str = "Manual deactivation";

/// Arbitrary customer settings.
pub type Preferences = HashMap<String, serde_json::Value>;

/// Customer aggregate root.
#[derive(Debug, Clone, Serialize)]
pub struct Customer {
    customer_id: CustomerId,
    name: String,
    email: Email,
    address: Option<Address>,
    phone: Option<PhoneNumber>,
    is_active: bool,
    preferences: Preferences,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    #[serde(skip)]
    events: Vec<CustomerEvent>,
}

impl Entity for Customer {
    type Id = CustomerId;

    fn id(&self) -> CustomerId {
        self.customer_id
    }
}

impl AggregateRoot for Customer {
    type Event = CustomerEvent;

    fn aggregate_type() -> &'static str {
        "Customer"
    }

    fn pending_events(&self) -> &[CustomerEvent] {
        &self.events
    }

    fn pending_events_mut(&mut self) -> &mut Vec<CustomerEvent> {
        &mut self.events
    }
}

impl PartialEq for Customer {
    fn eq(&self, other: &Self) -> bool {
        self.customer_id == other.customer_id
    }
}

impl Eq for Customer {}

impl Hash for Customer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.customer_id.hash(state);
    }
}

impl Customer {
    /// Registers a new active customer and raises `CustomerCreated`.
    pub fn create(
        name: impl Into<String>,
        email: Email,
        address: Option<Address>,
        phone: Option<PhoneNumber>,
        preferences: Option<Preferences>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::new("Customer name cannot be empty"));
        }

        let customer_id = CustomerId::new();
        let now = Utc::now();
        let event = CustomerEvent::customer_created(customer_id, name.clone(), email.as_str());
        let mut customer = Self {
            customer_id,
            name,
            email,
            address,
            phone,
            is_active: true,
            preferences: preferences.unwrap_or_default(),
            created_at: now,
            updated_at: now,
            events: Vec::new(),
        };
        customer.add_domain_event(event);
        Ok(customer)
    }

    /// Deactivates the customer and raises `CustomerDeactivated`.
    ///
    /// An inactive customer is handed back unchanged inside [`Rejected`].
    pub fn deactivate(self, reason: Option<&str>) -> Result<Self, Rejected<Self>> {
        if !self.is_active {
            let violation = BusinessRuleViolation::new(
                rules::CUSTOMER_DEACTIVATION,
                "Customer is already deactivated",
            );
            return Err(Rejected::new(self, violation));
        }

        let event = CustomerEvent::customer_deactivated(
            self.customer_id,
            reason.unwrap_or(DEFAULT_DEACTIVATION_REASON),
        );
        let mut customer = Self {
            is_active: false,
            updated_at: Utc::now(),
            ..self
        };
        customer.add_domain_event(event);
        Ok(customer)
    }

    /// Replaces the address. No event is raised.
    pub fn update_address(self, address: Address) -> Self {
        Self {
            address: Some(address),
            updated_at: Utc::now(),
            ..self
        }
    }

    /// Replaces the phone number. No event is raised.
    pub fn update_phone(self, phone: PhoneNumber) -> Self {
        Self {
            phone: Some(phone),
            updated_at: Utc::now(),
            ..self
        }
    }

    pub fn customer_id(&self) -> CustomerId {
        self.customer_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    pub fn phone(&self) -> Option<&PhoneNumber> {
        self.phone.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
