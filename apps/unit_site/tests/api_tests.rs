// apps/unit_site/tests/api_tests.rs

use std::collections::HashSet;
use std::sync::Arc;

use actix_web::{http::StatusCode, test, web, App};
use serde_json::{json, Value};

use unit_site::state::AppState;
use unit_site::storage::{MemoryStorage, Storage};
use unit_site::web::configure_app_routes;

fn memory_state() -> (AppState, Arc<MemoryStorage>) {
  let storage = Arc::new(MemoryStorage::new());
  let state = AppState::new(storage.clone());
  (state, storage)
}

macro_rules! init_app {
  ($state:expr) => {
    test::init_service(App::new().app_data(web::Data::new($state)).configure(configure_app_routes)).await
  };
}

fn order_body() -> Value {
  json!({
    "fullName": "Noa Levi",
    "phone": "054-1112233",
    "items": [
      { "name": "קפוצ'ון פלוגתי", "quantity": 1, "size": "M" },
      { "name": "כובע טקטי", "quantity": 2 },
      { "name": "פאצ' פלוגתי", "quantity": 3 }
    ],
    "totalAmount": 260,
    "paymentMethod": "paybox"
  })
}

#[actix_web::test]
async fn test_health_check() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::get().uri("/api/health").to_request();
  let body: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn test_create_order_returns_persisted_row() {
  let (state, storage) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::post().uri("/api/orders").set_json(order_body()).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);

  let row: Value = test::read_body_json(resp).await;
  assert_eq!(row["items"].as_array().map(Vec::len), Some(3));
  assert_eq!(row["fullName"], "Noa Levi");
  assert_eq!(row["paymentMethod"], "paybox");
  assert_eq!(row["isPaid"], false);
  assert!(row["id"].is_i64());
  assert!(row["createdAt"].is_string());

  assert_eq!(storage.list_orders().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn test_each_order_gets_a_new_id() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  let mut ids = HashSet::new();
  for _ in 0..3 {
    let req = test::TestRequest::post().uri("/api/orders").set_json(order_body()).to_request();
    let row: Value = test::call_and_read_body_json(&app, req).await;
    assert!(ids.insert(row["id"].as_i64().unwrap()), "order id reused");
  }
  assert_eq!(ids.len(), 3);
}

#[actix_web::test]
async fn test_invalid_order_is_rejected_without_insert() {
  let (state, storage) = memory_state();
  let app = init_app!(state);

  let cases = [
    ("fullName", "Required"),
    ("phone", "Required"),
    ("paymentMethod", "Required"),
  ];
  for (field, message) in cases {
    let mut body = order_body();
    body.as_object_mut().unwrap().remove(field);

    let req = test::TestRequest::post().uri("/api/orders").set_json(body).to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let err: Value = test::read_body_json(resp).await;
    assert_eq!(err["field"], field);
    assert_eq!(err["message"], message);
  }

  let mut body = order_body();
  body["items"] = json!([]);
  let req = test::TestRequest::post().uri("/api/orders").set_json(body).to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
  let err: Value = test::read_body_json(resp).await;
  assert_eq!(err["field"], "items");

  assert!(storage.list_orders().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_malformed_json_is_a_bad_request() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/orders")
    .insert_header(("content-type", "application/json"))
    .set_payload("{\"fullName\": ")
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let err: Value = test::read_body_json(resp).await;
  assert!(err["message"].is_string());
  assert!(err["field"].is_null());
}

#[actix_web::test]
async fn test_empty_order_list_is_an_empty_array() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::get().uri("/api/orders").to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::OK);
  let body: Value = test::read_body_json(resp).await;
  assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn test_songs_create_and_list() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/songs")
    .set_json(json!({ "title": "Anthem", "lyrics": "la la", "category": "general" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::CREATED);
  let song: Value = test::read_body_json(resp).await;
  assert!(song["videoUrl"].is_null());

  let req = test::TestRequest::get().uri("/api/songs").to_request();
  let songs: Value = test::call_and_read_body_json(&app, req).await;
  assert_eq!(songs.as_array().map(Vec::len), Some(1));
  assert_eq!(songs[0]["title"], "Anthem");
}

#[actix_web::test]
async fn test_song_missing_title_is_a_bad_request() {
  let (state, storage) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::post()
    .uri("/api/songs")
    .set_json(json!({ "lyrics": "la la", "category": "general" }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

  let err: Value = test::read_body_json(resp).await;
  assert!(err["message"].as_str().is_some_and(|m| m.contains("title")));
  assert!(err["field"].is_null());
  assert!(storage.list_songs().await.unwrap().is_empty());
}

#[actix_web::test]
async fn test_content_upsert_keeps_one_row_per_key() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  for (key, value) in [("site_title", "first"), ("site_title", "second"), ("site_subtitle", "sub")] {
    let req = test::TestRequest::post()
      .uri("/api/content")
      .set_json(json!({ "key": key, "value": value }))
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let row: Value = test::read_body_json(resp).await;
    assert_eq!(row["value"], value);
    assert!(row["updatedAt"].is_string());
  }

  let req = test::TestRequest::get().uri("/api/content").to_request();
  let rows: Value = test::call_and_read_body_json(&app, req).await;
  let rows = rows.as_array().unwrap();
  assert_eq!(rows.len(), 2);
  let title = rows.iter().find(|r| r["key"] == "site_title").unwrap();
  assert_eq!(title["value"], "second");
}

#[actix_web::test]
async fn test_products_serve_the_catalog() {
  let (state, _) = memory_state();
  let app = init_app!(state);

  let req = test::TestRequest::get().uri("/api/products").to_request();
  let products: Value = test::call_and_read_body_json(&app, req).await;
  let products = products.as_array().unwrap();
  assert_eq!(products.len(), 5);
  assert_eq!(products[0]["requiresSize"], true);
  assert_eq!(products[3]["requiresSize"], false);
}
