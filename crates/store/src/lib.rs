pub mod error;
pub mod memory;
pub mod query;
pub mod repository;

pub use error::{RepositoryError, Result};
pub use memory::{InMemoryCustomerRepository, InMemoryOrderRepository};
pub use query::{CustomerQuery, DEFAULT_LIMIT};
pub use repository::{CustomerRepository, OrderRepository};
