use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use custodia_core::health::healthz;
use custodia_core::middleware::request_id_layer;

use crate::handlers::customer::{create_customer, get_customer};
use crate::handlers::health::readyz;
use crate::state::AppState;

/// Base path for the customer resource. `Location` headers on create are
/// derived from it.
pub const CUSTOMERS_BASE: &str = "/customers";

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Customers
        .route(CUSTOMERS_BASE, post(create_customer))
        .route("/customers/{id}", get(get_customer))
        .layer(
            ServiceBuilder::new()
                .layer(request_id_layer())
                .layer(TraceLayer::new_for_http()),
        )
        .with_state(state)
}
