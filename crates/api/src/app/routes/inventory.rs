use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post, put},
};

use stockroom_engine::InventoryEngine;

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/update", put(update_stock))
        .route("/update-multiple", put(update_stock_batch))
        .route("/check-fulfillment", post(check_fulfillment))
        .route("/calculate-cost", post(calculate_cost))
        .route("/", get(get_all))
        .route("/:code", get(get_by_code))
}

pub async fn update_stock(
    Extension(engine): Extension<Arc<InventoryEngine>>,
    Json(body): Json<dto::UpdateStockRequest>,
) -> axum::response::Response {
    let update = match body.into_update() {
        Ok(update) => update,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    };

    match engine.update_stock(update).await {
        Ok(apparel) => (StatusCode::OK, Json(apparel)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn update_stock_batch(
    Extension(engine): Extension<Arc<InventoryEngine>>,
    Json(body): Json<Vec<dto::UpdateStockRequest>>,
) -> axum::response::Response {
    if body.is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "request body must be a non-empty array of stock updates",
        );
    }

    let mut updates = Vec::with_capacity(body.len());
    for request in body {
        match request.into_update() {
            Ok(update) => updates.push(update),
            Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
        }
    }

    match engine.update_stock_batch(updates).await {
        Ok(apparels) => (StatusCode::OK, Json(apparels)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn check_fulfillment(
    Extension(engine): Extension<Arc<InventoryEngine>>,
    Json(body): Json<dto::OrderRequest>,
) -> axum::response::Response {
    let order = match body.into_order() {
        Ok(order) => order,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    };

    match engine.check_fulfillment(&order).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn calculate_cost(
    Extension(engine): Extension<Arc<InventoryEngine>>,
    Json(body): Json<dto::OrderRequest>,
) -> axum::response::Response {
    let order = match body.into_order() {
        Ok(order) => order,
        Err(msg) => return errors::json_error(StatusCode::BAD_REQUEST, "validation_error", msg),
    };

    match engine.calculate_cost(&order).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_all(
    Extension(engine): Extension<Arc<InventoryEngine>>,
) -> axum::response::Response {
    match engine.get_all().await {
        Ok(catalog) => (StatusCode::OK, Json(catalog)).into_response(),
        Err(e) => errors::engine_error_to_response(e),
    }
}

pub async fn get_by_code(
    Extension(engine): Extension<Arc<InventoryEngine>>,
    Path(code): Path<String>,
) -> axum::response::Response {
    match engine.get_by_code(&code).await {
        Ok(Some(apparel)) => (StatusCode::OK, Json(apparel)).into_response(),
        Ok(None) => errors::json_error(
            StatusCode::NOT_FOUND,
            "not_found",
            format!("apparel with code {code} not found"),
        ),
        Err(e) => errors::engine_error_to_response(e),
    }
}
