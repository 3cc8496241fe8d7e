//! HTTP API server with observability for the customer and order service.
//!
//! Provides REST endpoints for customer management and the order lifecycle,
//! with structured logging (tracing), correlation ids and Prometheus metrics.

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod startup;

use std::sync::Arc;

use application::{CustomerService, OrderService};
use axum::Router;
use axum::body::Body;
use axum::http::{HeaderName, Request};
use axum::routing::{get, post, put};
use metrics_exporter_prometheus::PrometheusHandle;
use store::{InMemoryCustomerRepository, InMemoryOrderRepository};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

/// Header carrying the per-request correlation id.
pub const CORRELATION_ID_HEADER: &str = "x-correlation-id";

pub type Customers = CustomerService<InMemoryCustomerRepository>;
pub type Orders = OrderService<InMemoryOrderRepository, InMemoryCustomerRepository>;

/// Name and version reported by the health endpoint.
#[derive(Debug, Clone)]
pub struct ServiceInfo {
    pub name: String,
    pub version: String,
}

/// Shared application state accessible from all handlers.
pub struct AppState {
    pub customers: Customers,
    pub orders: Orders,
    pub service: ServiceInfo,
}

/// Creates the Axum application router with all routes and shared state.
pub fn create_app(state: Arc<AppState>, metrics_handle: PrometheusHandle) -> Router {
    let correlation_header = HeaderName::from_static(CORRELATION_ID_HEADER);

    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/v1/customers",
            post(routes::customers::create).get(routes::customers::list),
        )
        .route("/api/v1/customers/search", get(routes::customers::search))
        .route("/api/v1/customers/{id}", get(routes::customers::get))
        .route(
            "/api/v1/customers/{id}/deactivate",
            post(routes::customers::deactivate),
        )
        .route(
            "/api/v1/customers/{id}/address",
            put(routes::customers::update_address),
        )
        .route(
            "/api/v1/customers/{id}/phone",
            put(routes::customers::update_phone),
        )
        .route(
            "/api/v1/orders",
            post(routes::orders::create).get(routes::orders::list),
        )
        .route("/api/v1/orders/{id}", get(routes::orders::get))
        .route(
            "/api/v1/orders/customer/{customer_id}",
            get(routes::orders::for_customer),
        )
        .route("/api/v1/orders/{id}/confirm", post(routes::orders::confirm))
        .route("/api/v1/orders/{id}/ship", post(routes::orders::ship))
        .route("/api/v1/orders/{id}/deliver", post(routes::orders::deliver))
        .route("/api/v1/orders/{id}/cancel", post(routes::orders::cancel))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::new(
                    correlation_header.clone(),
                    MakeRequestUuid,
                ))
                .layer(TraceLayer::new_for_http().make_span_with(request_span))
                .layer(PropagateRequestIdLayer::new(correlation_header)),
        )
}

fn request_span(request: &Request<Body>) -> tracing::Span {
    let correlation_id = request
        .headers()
        .get(CORRELATION_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    tracing::info_span!(
        "http_request",
        method = %request.method(),
        uri = %request.uri(),
        correlation_id
    )
}

/// Creates the default application state over fresh in-memory repositories.
pub fn create_default_state(service: ServiceInfo) -> Arc<AppState> {
    let customer_repository = InMemoryCustomerRepository::new();
    let order_repository = InMemoryOrderRepository::new();

    Arc::new(AppState {
        customers: CustomerService::new(customer_repository.clone()),
        orders: OrderService::new(order_repository, customer_repository),
        service,
    })
}
