use thiserror::Error;

/// Errors that can occur when interacting with a repository.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// Another aggregate already holds this unique value.
    #[error("{field} {value} is already taken")]
    UniqueViolation { field: &'static str, value: String },

    /// The storage backend failed.
    #[error("Storage error: {0}")]
    Backend(String),
}

/// Result type for repository operations.
pub type Result<T> = std::result::Result<T, RepositoryError>;
