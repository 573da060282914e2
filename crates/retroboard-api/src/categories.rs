//! Handlers for `/categories` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/categories/?board_id=` | All categories on a board |
//! | `POST`   | `/categories/` | Body: `{"name":"...","board_id":<id>}` |
//! | `DELETE` | `/categories/?category_id=` | 400 while notes reference it |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Query, State},
  routing::{MethodRouter, get},
};
use retroboard_core::{category::Category, store::RetroStore};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

/// The GET/POST/DELETE method router for the categories collection.
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

/// `GET /categories/?board_id=<id>`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<Category>>, ApiError>
where
  S: RetroStore,
{
  let categories = store.list_categories(params.board_id).await?;
  Ok(Json(categories))
}

// ─── Create ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct CreateBody {
  pub name:     String,
  pub board_id: i64,
}

/// `POST /categories/`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<CreateBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  let category_id = store.add_category(body.name, body.board_id).await?;
  Ok(Json(json!({ "status": "Success", "category_id": category_id })))
}

// ─── Remove ───────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct RemoveParams {
  pub category_id: i64,
}

/// `DELETE /categories/?category_id=<id>`
///
/// Rejected with 400 while any note's `category` field still carries this
/// id; the category must be orphan-free before it can go.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<RemoveParams>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store.remove_category(params.category_id).await?;
  Ok(Json(json!({ "status": "Success" })))
}
