//! Handlers for `/boards` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/boards/` | All boards with their note counts |
//! | `POST`   | `/boards/` | Body: `{"name":"..."}` |
//! | `DELETE` | `/boards/?board_id=` | Cascades to notes and categories |
//! | `GET`    | `/boards/export?board_id=` | JSON attachment download |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  http::{StatusCode, header},
  response::Response,
  routing::{MethodRouter, get},
};
use chrono::Local;
use retroboard_core::{Error, board::BoardSummary, store::RetroStore};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

/// The GET/POST/DELETE method router for the boards collection.
pub fn routes<S>() -> MethodRouter<Arc<S>>
where
  S: RetroStore + 'static,
{
  get(list::<S>).post(create::<S>).delete(remove::<S>)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /boards/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<BoardSummary>>, ApiError>
where
  S: RetroStore,
{
  let boards = store.list_boards().await?;
  Ok(Json(boards))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name: String,
}

/// `POST /boards/` — body: `{"name":"Sprint 1"}`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  let board_id = store.add_board(body.name).await?;
  Ok(Json(json!({ "status": "Success", "board_id": board_id })))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RemoveParams {
  pub board_id: i64,
}

/// `DELETE /boards/?board_id=<id>`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<RemoveParams>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store.remove_board(params.board_id).await?;
  Ok(Json(json!({ "status": "Success" })))
}

// ─── Export ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ExportParams {
  pub board_id: i64,
}

/// `GET /boards/export?board_id=<id>`
///
/// Serves the export document as a downloadable attachment named
/// `export_<YYYY_MM_DD_HH_MM_SS>_<board_name>.json`. A missing board yields
/// an empty object body (and an empty name in the filename) rather than a
/// 404 — "nothing to export" and "no such board" are indistinguishable here.
pub async fn export<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ExportParams>,
) -> Result<Response, ApiError>
where
  S: RetroStore,
{
  let document = store.export_notes(params.board_id).await?;
  let body = match &document {
    Some(doc) => serde_json::to_string_pretty(doc).map_err(Error::storage)?,
    None => "{}".to_string(),
  };

  let board_name = store
    .board_name(params.board_id)
    .await?
    .unwrap_or_default();
  let timestamp = Local::now().format("%Y_%m_%d_%H_%M_%S");
  let filename = format!("export_{timestamp}_{board_name}.json");

  Response::builder()
    .status(StatusCode::OK)
    .header(header::CONTENT_TYPE, "application/json")
    .header(
      header::CONTENT_DISPOSITION,
      format!("attachment; filename={filename}"),
    )
    .body(body.into())
    .map_err(|e| ApiError(Error::storage(e)))
}
