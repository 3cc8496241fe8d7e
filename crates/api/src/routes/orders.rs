//! Order placement and lifecycle endpoints.

use std::sync::Arc;

use application::{ChangeOrderStatus, CreateOrder, GetCustomerOrders};
use axum::Json;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use chrono::{DateTime, Utc};
use common::{CustomerId, OrderId};
use domain::{Entity, Order, OrderDetails, OrderStatus};
use serde::Serialize;

use super::{ReasonRequest, optional_json, parse_id};
use crate::AppState;
use crate::error::ApiError;

// -- Response types --

#[derive(Serialize)]
pub struct OrderResponse {
    pub id: String,
    pub customer_id: String,
    pub total_amount: String,
    pub currency: String,
    pub status: OrderStatus,
    pub details: OrderDetails,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id().to_string(),
            customer_id: order.customer_id().to_string(),
            total_amount: order.total_amount().amount().to_string(),
            currency: order.total_amount().currency().to_string(),
            status: order.status(),
            details: order.details().clone(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
        }
    }
}

fn responses(orders: Vec<Order>) -> Vec<OrderResponse> {
    orders.into_iter().map(OrderResponse::from).collect()
}

// -- Handlers --

/// POST /api/v1/orders: place an order for an active customer.
#[tracing::instrument(skip(state, req))]
pub async fn create(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateOrder>,
) -> Result<(StatusCode, Json<OrderResponse>), ApiError> {
    let order = state.orders.create_order(req).await?;
    Ok((StatusCode::CREATED, Json(order.into())))
}

/// GET /api/v1/orders: list every order.
#[tracing::instrument(skip(state))]
pub async fn list(State(state): State<Arc<AppState>>) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let orders = state.orders.list_orders().await?;
    Ok(Json(responses(orders)))
}

/// GET /api/v1/orders/{id}
#[tracing::instrument(skip(state))]
pub async fn get(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id: OrderId = parse_id(&id)?;
    let order = state.orders.get_order(order_id).await?;
    Ok(Json(order.into()))
}

/// GET /api/v1/orders/customer/{customer_id}
#[tracing::instrument(skip(state))]
pub async fn for_customer(
    State(state): State<Arc<AppState>>,
    Path(customer_id): Path<String>,
) -> Result<Json<Vec<OrderResponse>>, ApiError> {
    let customer_id: CustomerId = parse_id(&customer_id)?;
    let orders = state
        .orders
        .get_customer_orders(GetCustomerOrders::new(customer_id))
        .await?;
    Ok(Json(responses(orders)))
}

/// POST /api/v1/orders/{id}/confirm
pub async fn confirm(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = parse_id(&id)?;
    change_status(&state, ChangeOrderStatus::confirm(order_id)).await
}

/// POST /api/v1/orders/{id}/ship
pub async fn ship(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = parse_id(&id)?;
    change_status(&state, ChangeOrderStatus::ship(order_id)).await
}

/// POST /api/v1/orders/{id}/deliver
pub async fn deliver(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = parse_id(&id)?;
    change_status(&state, ChangeOrderStatus::deliver(order_id)).await
}

/// POST /api/v1/orders/{id}/cancel: body `{reason?}` is optional.
pub async fn cancel(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<OrderResponse>, ApiError> {
    let order_id = parse_id(&id)?;
    let req: ReasonRequest = optional_json(&body)?;
    change_status(
        &state,
        ChangeOrderStatus::cancel(order_id, req.reason.as_deref()),
    )
    .await
}

async fn change_status(
    state: &AppState,
    cmd: ChangeOrderStatus,
) -> Result<Json<OrderResponse>, ApiError> {
    let order = state.orders.change_status(cmd).await?;
    Ok(Json(order.into()))
}
