use std::sync::Arc;

use stockroom_store::JsonFileStore;

#[tokio::main]
async fn main() {
    stockroom_observability::init();

    let data_path = std::env::var("STOCKROOM_DATA_PATH").unwrap_or_else(|_| {
        tracing::warn!("STOCKROOM_DATA_PATH not set; using ./apparel.json");
        "apparel.json".to_string()
    });
    let addr = std::env::var("STOCKROOM_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    let store = Arc::new(JsonFileStore::new(data_path));
    let app = stockroom_api::app::build_app(store);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
