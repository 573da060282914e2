//! Router-level tests driving the full API against an in-memory store.

use std::sync::Arc;

use axum::{
  Router,
  body::{Body, to_bytes},
  http::{Request, StatusCode, header},
};
use retroboard_core::store::RetroStore as _;
use retroboard_store_sqlite::SqliteStore;
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::api_router;

async fn app() -> Router {
  let store = SqliteStore::open_in_memory().await.expect("in-memory store");
  api_router(Arc::new(store))
}

async fn send(
  app: &Router,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, Value) {
  let request = match body {
    Some(v) => Request::builder()
      .method(method)
      .uri(uri)
      .header(header::CONTENT_TYPE, "application/json")
      .body(Body::from(v.to_string()))
      .unwrap(),
    None => Request::builder()
      .method(method)
      .uri(uri)
      .body(Body::empty())
      .unwrap(),
  };

  let response = app.clone().oneshot(request).await.unwrap();
  let status = response.status();
  let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let value = if bytes.is_empty() {
    Value::Null
  } else {
    serde_json::from_slice(&bytes).unwrap_or_else(|_| {
      Value::String(String::from_utf8_lossy(&bytes).into_owned())
    })
  };
  (status, value)
}

// ─── End to end ──────────────────────────────────────────────────────────────

#[tokio::test]
async fn full_board_lifecycle() {
  let app = app().await;

  // Create a board.
  let (status, body) =
    send(&app, "POST", "/boards/", Some(json!({ "name": "Sprint 1" }))).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "status": "Success", "board_id": 1 }));

  // Attach a category.
  let (status, body) = send(
    &app,
    "POST",
    "/categories/",
    Some(json!({ "name": "Went well", "board_id": 1 })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let category_id = body["category_id"].as_i64().unwrap();

  // Post a note tagged with the category.
  let (status, body) = send(
    &app,
    "POST",
    "/notes/",
    Some(json!({
      "description": "Shipped feature X",
      "category": category_id,
      "tags": ["win"],
      "board_id": 1
    })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({ "status": "Success" }));

  let (status, body) = send(&app, "GET", "/notes/?board_id=1", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(
    body,
    json!([{
      "id": 1,
      "description": "Shipped feature X",
      "category": category_id,
      "tags": ["win"]
    }])
  );

  // Deleting the category is blocked while the note references it.
  let (status, body) = send(
    &app,
    "DELETE",
    &format!("/categories/?category_id={category_id}"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
  assert_eq!(
    body,
    json!({ "status": "Cannot delete: notes still associated with this category" })
  );

  // Remove the note, then the category goes through.
  let (status, _) = send(&app, "DELETE", "/notes/?note_id=1", None).await;
  assert_eq!(status, StatusCode::OK);
  let (status, _) = send(
    &app,
    "DELETE",
    &format!("/categories/?category_id={category_id}"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
}

// ─── Boards ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn list_boards_reports_zero_counts() {
  let app = app().await;
  send(&app, "POST", "/boards/", Some(json!({ "name": "empty" }))).await;

  let (status, body) = send(&app, "GET", "/boards/", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!([{ "id": 1, "name": "empty", "note_count": 0 }]));
}

#[tokio::test]
async fn remove_missing_board_is_404() {
  let app = app().await;
  let (status, body) = send(&app, "DELETE", "/boards/?board_id=99", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({ "status": "Board not found" }));
}

#[tokio::test]
async fn routes_resolve_without_trailing_slash() {
  let app = app().await;
  let (status, _) =
    send(&app, "POST", "/boards", Some(json!({ "name": "b" }))).await;
  assert_eq!(status, StatusCode::OK);
  let (status, _) = send(&app, "GET", "/boards", None).await;
  assert_eq!(status, StatusCode::OK);
}

// ─── Notes ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn note_tags_default_to_empty() {
  let app = app().await;
  send(&app, "POST", "/boards/", Some(json!({ "name": "b" }))).await;
  let (status, _) = send(
    &app,
    "POST",
    "/notes/",
    Some(json!({ "description": "untagged", "category": 1, "board_id": 1 })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (_, body) = send(&app, "GET", "/notes/?board_id=1", None).await;
  assert_eq!(body[0]["tags"], json!([]));
}

#[tokio::test]
async fn put_tags_replaces_the_list() {
  let app = app().await;
  send(&app, "POST", "/boards/", Some(json!({ "name": "b" }))).await;
  send(
    &app,
    "POST",
    "/notes/",
    Some(json!({
      "description": "n", "category": 1, "tags": ["a", "b"], "board_id": 1
    })),
  )
  .await;

  let (status, _) = send(
    &app,
    "PUT",
    "/notes/1/tags",
    Some(json!({ "tags": ["c"] })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (_, body) = send(&app, "GET", "/notes/?board_id=1", None).await;
  assert_eq!(body[0]["tags"], json!(["c"]));
}

#[tokio::test]
async fn put_category_on_missing_note_is_500() {
  let app = app().await;
  let (status, body) = send(
    &app,
    "PUT",
    "/notes/77/category",
    Some(json!({ "category": 2 })),
  )
  .await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body["status"].as_str().unwrap().starts_with("DB Error"));
}

// ─── Export ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn export_is_an_attachment_with_resolved_categories() {
  let app = app().await;
  send(&app, "POST", "/boards/", Some(json!({ "name": "Sprint 1" }))).await;
  send(
    &app,
    "POST",
    "/categories/",
    Some(json!({ "name": "Went well", "board_id": 1 })),
  )
  .await;
  send(
    &app,
    "POST",
    "/notes/",
    Some(json!({ "description": "n", "category": 1, "board_id": 1 })),
  )
  .await;

  let request = Request::builder()
    .method("GET")
    .uri("/boards/export?board_id=1")
    .body(Body::empty())
    .unwrap();
  let response = app.clone().oneshot(request).await.unwrap();
  assert_eq!(response.status(), StatusCode::OK);

  let disposition = response
    .headers()
    .get(header::CONTENT_DISPOSITION)
    .unwrap()
    .to_str()
    .unwrap()
    .to_string();
  assert!(disposition.starts_with("attachment; filename=export_"));
  assert!(disposition.ends_with("_Sprint 1.json"));

  let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
  let text = String::from_utf8(bytes.to_vec()).unwrap();
  // Pretty-printed with 2-space indentation.
  assert!(text.starts_with("{\n  \"board_name\": \"Sprint 1\""));

  let body: Value = serde_json::from_str(&text).unwrap();
  assert_eq!(
    body,
    json!({
      "board_name": "Sprint 1",
      "notes": [
        { "description": "n", "category": "Went well", "category_id": 1 }
      ]
    })
  );
}

#[tokio::test]
async fn export_of_missing_board_is_an_empty_object() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/boards/export?board_id=9", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body, json!({}));
}

// ─── Settings ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn settings_list_and_update() {
  let store = SqliteStore::open_in_memory().await.unwrap();
  store
    .sync_settings(&[retroboard_core::setting::SettingDefault {
      setting_name:         "board_title".into(),
      default_value:        "Retro".into(),
      setting_type:         "string".into(),
      setting_display_name: "Board title".into(),
      setting_description:  "Title shown in the client header".into(),
    }])
    .await
    .unwrap();
  let app = api_router(Arc::new(store));

  let (status, body) = send(&app, "GET", "/settings/", None).await;
  assert_eq!(status, StatusCode::OK);
  assert_eq!(body[0]["setting_name"], "board_title");
  assert_eq!(body[0]["setting_value"], "Retro");

  let (status, _) = send(
    &app,
    "PUT",
    "/settings/board_title",
    Some(json!({ "new_value": "Team Retro" })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);

  let (_, body) = send(&app, "GET", "/settings/", None).await;
  assert_eq!(body[0]["setting_value"], "Team Retro");
}

#[tokio::test]
async fn update_missing_setting_is_500() {
  let app = app().await;
  let (status, _) = send(
    &app,
    "PUT",
    "/settings/nope",
    Some(json!({ "new_value": "1" })),
  )
  .await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

// ─── Boundary ────────────────────────────────────────────────────────────────

#[tokio::test]
async fn unmatched_api_path_is_a_json_404() {
  let app = app().await;
  let (status, body) = send(&app, "GET", "/no/such/thing", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert_eq!(body, json!({ "status": "Not found" }));
}

#[tokio::test]
async fn non_numeric_id_is_rejected_before_the_store() {
  let app = app().await;
  let (status, _) = send(&app, "GET", "/notes/?board_id=abc", None).await;
  assert_eq!(status, StatusCode::BAD_REQUEST);
}
