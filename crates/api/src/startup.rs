//! Demo data loaded when the server starts with an empty store.

use application::{CreateCustomer, CustomerService, DeactivateCustomer, Result};
use domain::{Entity, Preferences};
use serde_json::json;
use store::CustomerRepository;

/// Reason recorded on the seeded inactive customer.
pub const DEMO_INACTIVE_REASON: &str = "Demo inactive customer";

/// (name, email, theme, notifications, newsletter, active)
const SAMPLE_CUSTOMERS: [(&str, &str, &str, bool, bool, bool); 5] = [
    ("Alice Johnson", "alice@example.com", "light", true, true, true),
    ("Bob Smith", "bob@example.com", "dark", false, false, true),
    ("Carol Davis", "carol@example.com", "light", true, true, false),
    ("David Wilson", "david@example.com", "auto", true, false, true),
    ("Emma Brown", "emma@example.com", "light", false, true, true),
];

/// Seeds five sample customers, one of them inactive.
///
/// Does nothing when the repository already holds customers. Returns the
/// number of customers created.
#[tracing::instrument(skip(customers))]
pub async fn seed_sample_data<R: CustomerRepository>(customers: &CustomerService<R>) -> Result<usize> {
    let existing = customers.repository().count().await?;
    if existing > 0 {
        tracing::info!(existing, "Customers already present, skipping sample data");
        return Ok(0);
    }

    for (name, email, theme, notifications, newsletter, active) in SAMPLE_CUSTOMERS {
        let preferences: Preferences = [
            ("theme".to_string(), json!(theme)),
            ("notifications".to_string(), json!(notifications)),
            ("newsletter".to_string(), json!(newsletter)),
        ]
        .into_iter()
        .collect();

        let customer = customers
            .create_customer(CreateCustomer::new(name, email).with_preferences(preferences))
            .await?;

        if !active {
            customers
                .deactivate_customer(DeactivateCustomer::new(
                    customer.id(),
                    Some(DEMO_INACTIVE_REASON.to_string()),
                ))
                .await?;
        }
    }

    tracing::info!(count = SAMPLE_CUSTOMERS.len(), "Sample data loaded");
    Ok(SAMPLE_CUSTOMERS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use application::SearchCustomers;
    use store::InMemoryCustomerRepository;

    #[tokio::test]
    async fn test_seeds_once() {
        let customers = CustomerService::new(InMemoryCustomerRepository::new());

        assert_eq!(seed_sample_data(&customers).await.unwrap(), 5);
        assert_eq!(seed_sample_data(&customers).await.unwrap(), 0);
        assert_eq!(customers.list_customers().await.unwrap().len(), 5);

        let inactive = customers
            .search_customers(SearchCustomers {
                is_active: Some(false),
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(inactive.len(), 1);
        assert_eq!(inactive[0].name(), "Carol Davis");
        assert_eq!(inactive[0].preferences()["theme"], json!("light"));
    }
}
