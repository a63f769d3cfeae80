//! HTTP API application wiring (axum router + engine wiring).
//!
//! Layout:
//! - `routes/`: HTTP routes + handlers
//! - `dto.rs`: request DTOs and their field validation
//! - `errors.rs`: consistent JSON error responses

use std::sync::Arc;

use axum::{Extension, Router, routing::get};
use tower::ServiceBuilder;

use stockroom_engine::InventoryEngine;
use stockroom_store::InventoryStore;

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router over the given store (public entrypoint used
/// by `main.rs` and the black-box tests).
pub fn build_app(store: Arc<dyn InventoryStore>) -> Router {
    let engine = Arc::new(InventoryEngine::new(store));

    Router::new()
        .route("/", get(routes::system::index))
        .route("/health", get(routes::system::health))
        .nest("/api/inventory", routes::inventory::router())
        .layer(ServiceBuilder::new().layer(Extension(engine)))
}
