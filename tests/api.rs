//! End-to-end tests for the HTTP surface.
//!
//! Each test spawns the full router on an ephemeral port backed by its
//! own in-memory SQLite database, then drives it with `reqwest`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use sqlx::sqlite::SqlitePoolOptions;

use items_api::api;
use items_api::app_state::AppState;
use items_api::persistence::SqliteItemStore;
use items_api::service::ItemService;

/// Spawns the service on an ephemeral port and returns its base URL.
async fn spawn_server() -> String {
    // One connection keeps the whole test on the same in-memory database.
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .expect("in-memory database should open");
    let store = SqliteItemStore::from_pool(pool);
    store.init_schema().await.expect("schema init");

    let state = AppState {
        item_service: Arc::new(ItemService::new(store)),
    };
    let app: Router = api::build_router().with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    format!("http://{addr}")
}

#[tokio::test]
async fn root_returns_exact_message() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"message": "Items CRUD API"}));
}

#[tokio::test]
async fn health_returns_exact_status() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/health")).await.unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, serde_json::json!({"status": "healthy"}));
}

#[tokio::test]
async fn create_item_returns_201_with_id() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let response = client
        .post(format!("{base}/items/"))
        .json(&serde_json::json!({"nom": "Test Item", "prix": 99.99}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 201);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["nom"], "Test Item");
    assert_eq!(body["prix"], 99.99);
    assert!(body.get("id").is_some());
}

#[tokio::test]
async fn list_contains_at_least_created_items() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    for (nom, prix) in [("Item 1", 10.0), ("Item 2", 20.0)] {
        client
            .post(format!("{base}/items/"))
            .json(&serde_json::json!({"nom": nom, "prix": prix}))
            .send()
            .await
            .unwrap();
    }

    let response = client.get(format!("{base}/items/")).send().await.unwrap();
    assert_eq!(response.status(), 200);
    let body: Vec<serde_json::Value> = response.json().await.unwrap();
    assert!(body.len() >= 2);
}

#[tokio::test]
async fn read_item_returns_stored_fields() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{base}/items/"))
        .json(&serde_json::json!({"nom": "Specific Item", "prix": 50.0}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .get(format!("{base}/items/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["nom"], "Specific Item");
    assert_eq!(body["prix"], 50.0);
}

#[tokio::test]
async fn read_missing_item_returns_404() {
    let base = spawn_server().await;
    let response = reqwest::get(format!("{base}/items/9999")).await.unwrap();
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn update_item_returns_new_values() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{base}/items/"))
        .json(&serde_json::json!({"nom": "Original", "prix": 100.0}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(format!("{base}/items/{id}"))
        .json(&serde_json::json!({"nom": "Updated", "prix": 150.0}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body["nom"], "Updated");
    assert_eq!(body["prix"], 150.0);
    assert_eq!(body["id"], id);
}

#[tokio::test]
async fn update_with_missing_field_returns_422() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{base}/items/"))
        .json(&serde_json::json!({"nom": "Complete", "prix": 1.0}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .put(format!("{base}/items/{id}"))
        .json(&serde_json::json!({"nom": "Partial"}))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 422);
}

#[tokio::test]
async fn delete_item_returns_204_then_404() {
    let base = spawn_server().await;
    let client = reqwest::Client::new();

    let created: serde_json::Value = client
        .post(format!("{base}/items/"))
        .json(&serde_json::json!({"nom": "To Delete", "prix": 25.0}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    let id = created["id"].as_i64().unwrap();

    let response = client
        .delete(format!("{base}/items/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 204);

    let response = client
        .get(format!("{base}/items/{id}"))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), 404);
}
