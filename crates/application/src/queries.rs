//! Read-side queries.

use common::CustomerId;
use serde::Deserialize;
use store::{CustomerQuery, DEFAULT_LIMIT};

use crate::{ApplicationError, Result};

/// Largest page a search may request.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Query for all orders of one customer.
#[derive(Debug, Clone, Copy)]
pub struct GetCustomerOrders {
    pub customer_id: CustomerId,
}

impl GetCustomerOrders {
    pub fn new(customer_id: CustomerId) -> Self {
        Self { customer_id }
    }
}

/// Customer search parameters as received from callers.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchCustomers {
    #[serde(default)]
    pub name_contains: Option<String>,
    #[serde(default)]
    pub email_contains: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default = "default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
}

fn default_limit() -> i64 {
    DEFAULT_LIMIT as i64
}

impl Default for SearchCustomers {
    fn default() -> Self {
        Self {
            name_contains: None,
            email_contains: None,
            is_active: None,
            limit: default_limit(),
            offset: 0,
        }
    }
}

impl SearchCustomers {
    /// Validates paging and builds the repository query.
    ///
    /// The limit must be in `1..=100` and the offset must not be negative.
    pub fn to_query(&self) -> Result<CustomerQuery> {
        if self.limit <= 0 {
            return Err(ApplicationError::InvalidQuery(
                "Limit must be positive".to_string(),
            ));
        }
        if self.limit > MAX_SEARCH_LIMIT {
            return Err(ApplicationError::InvalidQuery(
                "Limit cannot exceed 100".to_string(),
            ));
        }
        let offset = usize::try_from(self.offset).map_err(|_| {
            ApplicationError::InvalidQuery("Offset cannot be negative".to_string())
        })?;

        let mut query = CustomerQuery::new()
            .limit(self.limit as usize)
            .offset(offset);
        if let Some(needle) = &self.name_contains {
            query = query.name_contains(needle.clone());
        }
        if let Some(needle) = &self.email_contains {
            query = query.email_contains(needle.clone());
        }
        if let Some(active) = self.is_active {
            query = query.is_active(active);
        }
        Ok(query)
    }
}
