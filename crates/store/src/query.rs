use domain::customer::specifications::{EmailContains, IsActive, NameContains};
use domain::specification::{Always, BoxedSpecification, Specification};
use domain::Customer;

/// Page size used when a query does not set one.
pub const DEFAULT_LIMIT: usize = 50;

/// Builder for customer searches.
///
/// Text filters match case-insensitive substrings. Matches are returned in
/// storage order, skipping `offset` and taking at most `limit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerQuery {
    /// Filter by a substring of the name.
    pub name_contains: Option<String>,

    /// Filter by a substring of the email.
    pub email_contains: Option<String>,

    /// Filter by active flag.
    pub is_active: Option<bool>,

    /// Maximum number of customers to return.
    pub limit: usize,

    /// Number of matches to skip.
    pub offset: usize,
}

impl Default for CustomerQuery {
    fn default() -> Self {
        Self {
            name_contains: None,
            email_contains: None,
            is_active: None,
            limit: DEFAULT_LIMIT,
            offset: 0,
        }
    }
}

impl CustomerQuery {
    /// Creates a query matching every customer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by a name substring.
    pub fn name_contains(mut self, needle: impl Into<String>) -> Self {
        self.name_contains = Some(needle.into());
        self
    }

    /// Filters by an email substring.
    pub fn email_contains(mut self, needle: impl Into<String>) -> Self {
        self.email_contains = Some(needle.into());
        self
    }

    /// Filters by active flag.
    pub fn is_active(mut self, active: bool) -> Self {
        self.is_active = Some(active);
        self
    }

    /// Limits the number of customers returned.
    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Skips this many matches before returning results.
    pub fn offset(mut self, offset: usize) -> Self {
        self.offset = offset;
        self
    }

    /// Combines the filters into one specification. No filters matches all.
    pub fn to_specification(&self) -> BoxedSpecification<Customer> {
        let mut spec: BoxedSpecification<Customer> = Box::new(Always);
        if let Some(needle) = &self.name_contains {
            spec = Box::new(spec.and(NameContains::new(needle)));
        }
        if let Some(needle) = &self.email_contains {
            spec = Box::new(spec.and(EmailContains::new(needle)));
        }
        if let Some(active) = self.is_active {
            spec = Box::new(spec.and(IsActive(active)));
        }
        spec
    }

    /// Applies filters and paging to customers in storage order.
    pub fn apply<'a, I>(&self, customers: I) -> Vec<Customer>
    where
        I: IntoIterator<Item = &'a Customer>,
    {
        let spec = self.to_specification();
        customers
            .into_iter()
            .filter(|customer| spec.is_satisfied_by(customer))
            .skip(self.offset)
            .take(self.limit)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::Email;

    fn customer(name: &str, email: &str) -> Customer {
        Customer::create(name, Email::new(email).unwrap(), None, None, None).unwrap()
    }

    #[test]
    fn query_defaults() {
        let query = CustomerQuery::new();
        assert_eq!(query.limit, 50);
        assert_eq!(query.offset, 0);
        assert!(query.name_contains.is_none());
    }

    #[test]
    fn query_builder_chain() {
        let query = CustomerQuery::new()
            .name_contains("ali")
            .email_contains("example")
            .is_active(true)
            .limit(10)
            .offset(5);

        assert_eq!(query.name_contains.as_deref(), Some("ali"));
        assert_eq!(query.email_contains.as_deref(), Some("example"));
        assert_eq!(query.is_active, Some(true));
        assert_eq!(query.limit, 10);
        assert_eq!(query.offset, 5);
    }

    #[test]
    fn empty_query_matches_everyone() {
        let spec = CustomerQuery::new().to_specification();
        assert!(spec.is_satisfied_by(&customer("Anyone", "any@example.com")));
    }

    #[test]
    fn apply_filters_then_pages() {
        let customers = vec![
            customer("Ann One", "ann1@example.com"),
            customer("Bob", "bob@example.com"),
            customer("Ann Two", "ann2@example.com"),
            customer("Ann Three", "ann3@example.com"),
        ];

        let page = CustomerQuery::new()
            .name_contains("ANN")
            .offset(1)
            .limit(1)
            .apply(&customers);
        let names: Vec<_> = page.iter().map(|c| c.name()).collect();
        assert_eq!(names, ["Ann Two"]);
    }
}
