//! Application error types.

use domain::{BusinessRuleViolation, DomainError, Rejected, ValidationError};
use store::RepositoryError;
use thiserror::Error;

/// Errors returned by the use cases.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApplicationError {
    /// A value object, field or business rule check failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// The repository failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The requested aggregate does not exist.
    #[error("{resource_type} with ID {resource_id} not found")]
    NotFound {
        resource_type: &'static str,
        resource_id: String,
    },

    /// A customer with this email is already registered.
    #[error("Customer with email {email} already exists")]
    AlreadyExists { email: String },

    /// Orders can only be placed by active customers.
    #[error("Cannot create order for inactive customer")]
    InactiveCustomer,

    /// Search parameters were out of range.
    #[error("{0}")]
    InvalidQuery(String),
}

impl ApplicationError {
    /// Creates a not-found error for an aggregate.
    pub fn not_found(resource_type: &'static str, resource_id: impl ToString) -> Self {
        ApplicationError::NotFound {
            resource_type,
            resource_id: resource_id.to_string(),
        }
    }
}

impl From<ValidationError> for ApplicationError {
    fn from(err: ValidationError) -> Self {
        ApplicationError::Domain(err.into())
    }
}

impl From<BusinessRuleViolation> for ApplicationError {
    fn from(err: BusinessRuleViolation) -> Self {
        ApplicationError::Domain(err.into())
    }
}

impl<A> From<Rejected<A>> for ApplicationError {
    fn from(rejected: Rejected<A>) -> Self {
        ApplicationError::Domain(rejected.into())
    }
}

/// Result type for use cases.
pub type Result<T> = std::result::Result<T, ApplicationError>;
