//! Customer endpoints.

use std::sync::Arc;

use application::{
    ContactChange, CreateCustomer, DeactivateCustomer, PhoneParts, SearchCustomers,
    UpdateCustomerContact,
};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::CustomerId;
use domain::{Address, AddressParts, Customer, Entity, PhoneNumber, Preferences};
use serde::Serialize;

use super::{ReasonRequest, optional_json, parse_id};
use crate::AppState;
use crate::error::ApiError;

// -- Response types --

#[derive(Serialize)]
pub struct CustomerResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub is_active: bool,
    pub preferences: Preferences,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<Address>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<PhoneNumber>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        Self {
            id: customer.id().to_string(),
            name: customer.name().to_string(),
            email: customer.email().to_string(),
            is_active: customer.is_active(),
            preferences: customer.preferences().clone(),
            address: customer.address().cloned(),
            phone: customer.phone().cloned(),
            created_at: customer.created_at(),
            updated_at: customer.updated_at(),
        }
    }
}

fn responses(customers: Vec<Customer>) -> Vec<CustomerResponse> {
    customers.into_iter().map(CustomerResponse::from).collect()
}

// -- Handlers --

/// POST /api/v1/customers: register a customer.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateCustomer>,
) -> Result<(StatusCode, Json<CustomerResponse>), ApiError> {
    let customer = state.customers.create_customer(req).await?;
    Ok((StatusCode::CREATED, Json(customer.into())))
}

/// GET /api/v1/customers: list every customer.
#[tracing::instrument(skip(state))]
pub async fn list(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.customers.list_customers().await?;
    Ok(Json(responses(customers)))
}

/// GET /api/v1/customers/search: filter by name, email and active flag.
#[tracing::instrument(skip(state))]
pub async fn search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchCustomers>,
) -> Result<Json<Vec<CustomerResponse>>, ApiError> {
    let customers = state.customers.search_customers(params).await?;
    Ok(Json(responses(customers)))
}

/// GET /api/v1/customers/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer_id: CustomerId = parse_id(&id)?;
    let customer = state.customers.get_customer(customer_id).await?;
    Ok(Json(customer.into()))
}

/// POST /api/v1/customers/{id}/deactivate: body `{reason?}` is optional.
#[tracing::instrument(skip(state, body))]
pub async fn deactivate(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer_id: CustomerId = parse_id(&id)?;
    let req: ReasonRequest = optional_json(&body)?;
    let customer = state
        .customers
        .deactivate_customer(DeactivateCustomer::new(customer_id, req.reason))
        .await?;
    Ok(Json(customer.into()))
}

/// PUT /api/v1/customers/{id}/address
#[tracing::instrument(skip(state, req))]
pub async fn update_address(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<AddressParts>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer_id: CustomerId = parse_id(&id)?;
    let customer = state
        .customers
        .update_contact(UpdateCustomerContact::address(customer_id, req))
        .await?;
    Ok(Json(customer.into()))
}

/// PUT /api/v1/customers/{id}/phone
#[tracing::instrument(skip(state, req))]
pub async fn update_phone(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(req): Json<PhoneParts>,
) -> Result<Json<CustomerResponse>, ApiError> {
    let customer_id: CustomerId = parse_id(&id)?;
    let cmd = UpdateCustomerContact {
        customer_id,
        change: ContactChange::Phone(req),
    };
    let customer = state.customers.update_contact(cmd).await?;
    Ok(Json(customer.into()))
}
