//! Specifications over customers, used by repository search.

use crate::specification::Specification;

use super::Customer;

/// Name contains the needle, ignoring case.
#[derive(Debug, Clone)]
pub struct NameContains(String);

impl NameContains {
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self(needle.as_ref().to_lowercase())
    }
}

impl Specification<Customer> for NameContains {
    fn is_satisfied_by(&self, customer: &Customer) -> bool {
        customer.name().to_lowercase().contains(&self.0)
    }
}

/// Email contains the needle, ignoring case.
#[derive(Debug, Clone)]
pub struct EmailContains(String);

impl EmailContains {
    pub fn new(needle: impl AsRef<str>) -> Self {
        Self(needle.as_ref().to_lowercase())
    }
}

impl Specification<Customer> for EmailContains {
    fn is_satisfied_by(&self, customer: &Customer) -> bool {
        customer.email().as_str().to_lowercase().contains(&self.0)
    }
}

/// Active flag equals the expected value.
#[derive(Debug, Clone, Copy)]
pub struct IsActive(pub bool);

impl Specification<Customer> for IsActive {
    fn is_satisfied_by(&self, customer: &Customer) -> bool {
        customer.is_active() == self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::Email;

    fn customer(name: &str, email: &str) -> Customer {
        Customer::create(name, Email::new(email).unwrap(), None, None, None).unwrap()
    }

    #[test]
    fn test_name_and_email_ignore_case() {
        let alice = customer("Alice Johnson", "Alice.J@Example.com");
        assert!(NameContains::new("alice").is_satisfied_by(&alice));
        assert!(NameContains::new("JOHN").is_satisfied_by(&alice));
        assert!(!NameContains::new("bob").is_satisfied_by(&alice));
        assert!(EmailContains::new("example.COM").is_satisfied_by(&alice));
    }

    #[test]
    fn test_composed_with_active_flag() {
        let bob = customer("Bob Smith", "bob@example.com");
        let inactive_bob = bob.clone().deactivate(None).unwrap();

        let spec = NameContains::new("bob").and(IsActive(true));
        assert!(spec.is_satisfied_by(&bob));
        assert!(!spec.is_satisfied_by(&inactive_bob));

        let spec = IsActive(true).not();
        assert!(spec.is_satisfied_by(&inactive_bob));
    }
}
