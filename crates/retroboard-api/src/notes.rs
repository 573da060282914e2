//! Handlers for `/notes` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/notes/?board_id=` | All notes on a board |
//! | `POST`   | `/notes/` | Body: `{description, category, tags?, board_id}` |
//! | `DELETE` | `/notes/?note_id=` | 404 if missing |
//! | `PUT`    | `/notes/:note_id/category` | Body: `{"category": <id>}` |
//! | `PUT`    | `/notes/:note_id/tags` | Body: `{"tags": [...]}`, full replace |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State},
  routing::{MethodRouter, get},
};
use retroboard_core::{
  note::{NewNote, Note},
  store::RetroStore,
};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

/// The GET/POST/DELETE method router for the notes collection.
pub fn routes<S>() -> MethodRouter<Arc<S>>
where
  S: RetroStore + 'static,
{
  get(list::<S>).post(create::<S>).delete(remove::<S>)
}

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  pub board_id: i64,
}

/// `GET /notes/?board_id=<id>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Note>>, ApiError>
where
  S: RetroStore,
{
  let notes = store.list_notes(params.board_id).await?;
  Ok(Json(notes))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub description: String,
  pub category:    i64,
  #[serde(default)]
  pub tags:        Vec<String>,
  pub board_id:    i64,
}

/// `POST /notes/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store
    .add_note(NewNote {
      description: body.description,
      category:    body.category,
      tags:        body.tags,
      board_id:    body.board_id,
    })
    .await?;
  Ok(Json(json!({ "status": "Success" })))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RemoveParams {
  pub note_id: i64,
}

/// `DELETE /notes/?note_id=<id>`
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<RemoveParams>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store.remove_note(params.note_id).await?;
  Ok(Json(json!({ "status": "Success" })))
}

// ─── Modify category ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CategoryBody {
  pub category: i64,
}

/// `PUT /notes/:note_id/category`
pub async fn put_category<S>(
  State(store): State<Arc<S>>,
  Path(note_id): Path<i64>,
  Json(body): Json<CategoryBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store.set_note_category(note_id, body.category).await?;
  Ok(Json(json!({ "status": "Success" })))
}

// ─── Modify tags ──────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct TagsBody {
  pub tags: Vec<String>,
}

/// `PUT /notes/:note_id/tags` — replaces the whole tag list.
pub async fn put_tags<S>(
  State(store): State<Arc<S>>,
  Path(note_id): Path<i64>,
  Json(body): Json<TagsBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store.set_note_tags(note_id, body.tags).await?;
  Ok(Json(json!({ "status": "Success" })))
}
