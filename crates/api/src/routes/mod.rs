//! HTTP handlers grouped by resource.

pub mod customers;
pub mod health;
pub mod metrics;
pub mod orders;

use std::str::FromStr;

use crate::error::ApiError;

/// Parses a path identifier, rejecting malformed UUIDs with 400.
fn parse_id<T: FromStr>(id: &str) -> Result<T, ApiError>
where
    T::Err: std::fmt::Display,
{
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid ID format: {e}")))
}

/// Parses an optional JSON body. An empty body yields the default.
fn optional_json<T: serde::de::DeserializeOwned + Default>(body: &[u8]) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::BadRequest(format!("Invalid JSON body: {e}")))
}

/// Request body carrying an optional reason.
#[derive(Debug, Default, serde::Deserialize)]
pub struct ReasonRequest {
    #[serde(default)]
    pub reason: Option<String>,
}
