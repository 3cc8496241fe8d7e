//! Customer use cases.

use common::CustomerId;
use domain::{Address, AggregateRoot, Customer, Email, Entity, PhoneNumber};
use store::CustomerRepository;

use crate::commands::{ContactChange, CreateCustomer, DeactivateCustomer, PhoneParts, UpdateCustomerContact};
use crate::events;
use crate::{ApplicationError, Result, SearchCustomers};

/// Service for managing customers.
pub struct CustomerService<R: CustomerRepository> {
    customers: R,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service over the given repository.
    pub fn new(customers: R) -> Self {
        Self { customers }
    }

    /// Returns the underlying repository.
    pub fn repository(&self) -> &R {
        &self.customers
    }

    /// Registers a customer. Emails are unique.
    #[tracing::instrument(skip(self, cmd), fields(email = %cmd.email))]
    pub async fn create_customer(&self, cmd: CreateCustomer) -> Result<Customer> {
        let email = Email::new(cmd.email)?;
        if self.customers.find_by_email(&email).await?.is_some() {
            return Err(ApplicationError::AlreadyExists {
                email: email.to_string(),
            });
        }

        let address = cmd.address.map(Address::new).transpose()?;
        let phone = cmd.phone.map(parse_phone).transpose()?;
        let customer = Customer::create(cmd.name, email, address, phone, cmd.preferences)?;

        let customer = self.persist(customer).await?;
        metrics::counter!("customers_created_total").increment(1);
        tracing::info!(customer_id = %customer.id(), "Customer created");
        Ok(customer)
    }

    /// Loads a customer.
    #[tracing::instrument(skip(self))]
    pub async fn get_customer(&self, customer_id: CustomerId) -> Result<Customer> {
        self.customers
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer", customer_id))
    }

    /// Returns every customer.
    pub async fn list_customers(&self) -> Result<Vec<Customer>> {
        Ok(self.customers.list_all().await?)
    }

    /// Searches customers by name, email and active flag.
    #[tracing::instrument(skip(self))]
    pub async fn search_customers(&self, search: SearchCustomers) -> Result<Vec<Customer>> {
        let query = search.to_query()?;
        Ok(self.customers.search(&query).await?)
    }

    /// Deactivates a customer. Fails if already inactive.
    #[tracing::instrument(skip(self))]
    pub async fn deactivate_customer(&self, cmd: DeactivateCustomer) -> Result<Customer> {
        let customer = self.get_customer(cmd.customer_id).await?;
        let customer = customer.deactivate(cmd.reason.as_deref())?;

        let customer = self.persist(customer).await?;
        metrics::counter!("customers_deactivated_total").increment(1);
        tracing::info!(customer_id = %customer.id(), "Customer deactivated");
        Ok(customer)
    }

    /// Replaces a customer's address or phone number.
    #[tracing::instrument(skip(self))]
    pub async fn update_contact(&self, cmd: UpdateCustomerContact) -> Result<Customer> {
        let customer = self.get_customer(cmd.customer_id).await?;
        let customer = match cmd.change {
            ContactChange::Address(parts) => customer.update_address(Address::new(parts)?),
            ContactChange::Phone(parts) => customer.update_phone(parse_phone(parts)?),
        };
        self.persist(customer).await
    }

    /// Drains events, saves, then publishes the drained events.
    async fn persist(&self, mut customer: Customer) -> Result<Customer> {
        let events = customer.collect_domain_events();
        let customer = self.customers.save(customer).await?;
        events::publish(Customer::aggregate_type(), customer.id(), events);
        Ok(customer)
    }
}

fn parse_phone(parts: PhoneParts) -> std::result::Result<PhoneNumber, domain::ValidationError> {
    match parts.country_code {
        Some(code) => PhoneNumber::new(parts.value, code),
        None => PhoneNumber::with_default_country(parts.value),
    }
}
