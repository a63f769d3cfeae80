use std::sync::Arc;

use reqwest::StatusCode;
use serde_json::json;

use stockroom_store::InMemoryStore;

struct TestServer {
    base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Build the same router as prod, backed by an in-memory store,
        // bound to an ephemeral port.
        let store = Arc::new(InMemoryStore::new());
        let app = stockroom_api::app::build_app(store);
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { base_url, handle }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn put_stock(
    client: &reqwest::Client,
    base_url: &str,
    code: &str,
    size: &str,
    quantity: i64,
    price: f64,
) -> reqwest::Response {
    client
        .put(format!("{}/api/inventory/update", base_url))
        .json(&json!({ "code": code, "size": size, "quantity": quantity, "price": price }))
        .send()
        .await
        .unwrap()
}

#[tokio::test]
async fn health_endpoint_is_open() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/health", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn update_stock_creates_and_returns_the_apparel() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = put_stock(&client, &srv.base_url, "HOODIE001", "L", 12, 30.0).await;
    assert_eq!(res.status(), StatusCode::OK);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["code"], "HOODIE001");
    assert_eq!(body["sizes"][0]["size"], "L");
    assert_eq!(body["sizes"][0]["quantity"], 12);
    assert_eq!(body["sizes"][0]["price"].as_f64(), Some(30.0));
}

#[tokio::test]
async fn update_stock_rejects_negative_values() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = put_stock(&client, &srv.base_url, "HOODIE001", "L", -3, 30.0).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "validation_error");
}

#[tokio::test]
async fn update_multiple_rejects_an_empty_array() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/api/inventory/update-multiple", srv.base_url))
        .json(&json!([]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn update_multiple_returns_one_entry_per_distinct_code() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("{}/api/inventory/update-multiple", srv.base_url))
        .json(&json!([
            { "code": "TSHIRT001", "size": "S", "quantity": 10, "price": 15 },
            { "code": "JEANS001", "size": "32", "quantity": 12, "price": 45 },
            { "code": "TSHIRT001", "size": "M", "quantity": 15, "price": 15 }
        ]))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["code"], "TSHIRT001");
    assert_eq!(entries[0]["sizes"].as_array().unwrap().len(), 2);
    assert_eq!(entries[1]["code"], "JEANS001");
}

#[tokio::test]
async fn get_by_code_maps_absence_to_not_found() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/api/inventory/NOPE001", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn fulfillment_reports_shortfalls_for_missing_codes() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    put_stock(&client, &srv.base_url, "TSHIRT001", "M", 15, 15.0).await;

    let res = client
        .post(format!("{}/api/inventory/check-fulfillment", srv.base_url))
        .json(&json!({
            "id": "ORD-1",
            "items": [
                { "code": "TSHIRT001", "size": "M", "quantity": 5 },
                { "code": "JEANS001", "size": "32", "quantity": 3 }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["canFulfill"], false);
    let missing = body["missingItems"].as_array().unwrap();
    assert_eq!(missing.len(), 1);
    assert_eq!(missing[0]["code"], "JEANS001");
    assert_eq!(missing[0]["requestedQuantity"], 3);
    assert_eq!(missing[0]["availableQuantity"], 0);
    assert!(body.get("totalCost").is_none());
}

#[tokio::test]
async fn cost_is_returned_only_when_fulfillable() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    put_stock(&client, &srv.base_url, "TSHIRT001", "M", 15, 15.0).await;
    put_stock(&client, &srv.base_url, "JEANS001", "32", 12, 45.0).await;

    let res = client
        .post(format!("{}/api/inventory/calculate-cost", srv.base_url))
        .json(&json!({
            "id": "ORD-2",
            "items": [
                { "code": "TSHIRT001", "size": "M", "quantity": 2 },
                { "code": "JEANS001", "size": "32", "quantity": 1 }
            ]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    assert_eq!(body["canFulfill"], true);
    assert_eq!(body["totalCost"].as_f64(), Some(75.0));
}

#[tokio::test]
async fn order_with_non_positive_quantity_is_rejected() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    let res = client
        .post(format!("{}/api/inventory/check-fulfillment", srv.base_url))
        .json(&json!({
            "id": "ORD-3",
            "items": [{ "code": "TSHIRT001", "size": "M", "quantity": 0 }]
        }))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn get_all_lists_the_catalog_in_storage_order() {
    let srv = TestServer::spawn().await;
    let client = reqwest::Client::new();

    put_stock(&client, &srv.base_url, "TSHIRT001", "S", 10, 15.0).await;
    put_stock(&client, &srv.base_url, "JEANS001", "32", 12, 45.0).await;

    let res = client
        .get(format!("{}/api/inventory", srv.base_url))
        .send()
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body: serde_json::Value = res.json().await.unwrap();
    let entries = body.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["code"], "TSHIRT001");
    assert_eq!(entries[1]["code"], "JEANS001");
}
