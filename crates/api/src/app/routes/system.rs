use axum::Json;
use serde_json::json;

pub async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

/// Endpoint index served at the root, mirroring the deployed surface.
pub async fn index() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Apparel Inventory API",
        "endpoints": {
            "updateSingleStock": "PUT /api/inventory/update",
            "updateMultipleStock": "PUT /api/inventory/update-multiple",
            "checkOrderFulfillment": "POST /api/inventory/check-fulfillment",
            "calculateOrderCost": "POST /api/inventory/calculate-cost",
            "getAllInventory": "GET /api/inventory",
            "getApparelByCode": "GET /api/inventory/:code"
        }
    }))
}
