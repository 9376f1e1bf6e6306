mod common;

use axum::http::StatusCode;
use rust_decimal::Decimal;
use serde_json::{Value, json};
use std::sync::Arc;

fn setup() -> (Arc<common::InMemoryStore>, axum_test::TestServer) {
    let store = common::InMemoryStore::new();
    let (state, _rx) = common::create_test_state(store.clone(), 16);
    (store, common::make_server(state))
}

#[tokio::test]
async fn test_create_and_get_product() {
    let (_store, server) = setup();

    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "Keyboard",
            "description": "Mechanical",
            "available_quantity": 10,
            "price": "29.99",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    let id = response.json::<Value>()["id"].as_i64().unwrap();

    let response = server.get(&format!("/api/products/{id}")).await;
    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json["name"], "Keyboard");
    assert_eq!(json["price"], "29.99");
    assert_eq!(json["available_quantity"], 10);
}

#[tokio::test]
async fn test_create_product_rejects_non_positive_price() {
    let (_store, server) = setup();

    let response = server
        .post("/api/products")
        .json(&json!({
            "name": "Freebie",
            "available_quantity": 1,
            "price": "0",
        }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(json["error"]["details"]["errors"]["price"].is_string());
}

#[tokio::test]
async fn test_get_missing_product_not_found() {
    let (_store, server) = setup();
    server.get("/api/products/404").await.assert_status_not_found();
}

#[tokio::test]
async fn test_purchase_decrements_stock_in_request_order() {
    let (store, server) = setup();
    let mouse = store.insert_product("Mouse", 5, Decimal::new(1999, 2));
    let keyboard = store.insert_product("Keyboard", 3, Decimal::new(3999, 2));

    let response = server
        .post("/api/products/purchase")
        .json(&json!({
            "products": [
                { "product_id": keyboard, "quantity": 2 },
                { "product_id": mouse, "quantity": 1 },
            ]
        }))
        .await;

    response.assert_status_ok();
    let json = response.json::<Value>();
    assert_eq!(json[0]["product_id"], keyboard);
    assert_eq!(json[0]["quantity"], 2);
    assert_eq!(json[0]["price"], "39.99");
    assert_eq!(json[1]["product_id"], mouse);

    assert_eq!(store.stock_of(keyboard), Some(1));
    assert_eq!(store.stock_of(mouse), Some(4));
}

#[tokio::test]
async fn test_purchase_insufficient_stock_changes_nothing() {
    let (store, server) = setup();
    let mouse = store.insert_product("Mouse", 5, Decimal::new(1999, 2));
    let keyboard = store.insert_product("Keyboard", 1, Decimal::new(3999, 2));

    let response = server
        .post("/api/products/purchase")
        .json(&json!({
            "products": [
                { "product_id": mouse, "quantity": 1 },
                { "product_id": keyboard, "quantity": 2 },
            ]
        }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert_eq!(json["error"]["details"]["product_id"], keyboard);
    assert_eq!(json["error"]["details"]["available"], 1);

    assert_eq!(store.stock_of(mouse), Some(5));
    assert_eq!(store.stock_of(keyboard), Some(1));
}

#[tokio::test]
async fn test_purchase_unknown_product_not_found() {
    let (_store, server) = setup();

    let response = server
        .post("/api/products/purchase")
        .json(&json!({ "products": [{ "product_id": 77, "quantity": 1 }] }))
        .await;

    response.assert_status_not_found();
    assert_eq!(
        response.json::<Value>()["error"]["details"]["product_ids"],
        json!([77])
    );
}

#[tokio::test]
async fn test_purchase_validation_reports_item_paths() {
    let (_store, server) = setup();

    let response = server
        .post("/api/products/purchase")
        .json(&json!({
            "products": [
                { "product_id": 1, "quantity": 1 },
                { "product_id": 2, "quantity": 0 },
            ]
        }))
        .await;

    response.assert_status_bad_request();
    let json = response.json::<Value>();
    assert!(json["error"]["details"]["errors"]["products[1].quantity"].is_string());
}
