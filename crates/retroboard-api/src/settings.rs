//! Handlers for `/settings` endpoints.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use retroboard_core::{setting::Setting, store::RetroStore};
use serde::Deserialize;
use serde_json::json;

use crate::error::ApiError;

/// `GET /settings/`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<Setting>>, ApiError>
where
  S: RetroStore,
{
  let settings = store.list_settings().await?;
  Ok(Json(settings))
}

#[derive(Debug, Deserialize)]
pub struct PutBody {
  pub new_value: String,
}

/// `PUT /settings/:setting_name` — body: `{"new_value":"..."}`
pub async fn put_value<S>(
  State(store): State<Arc<S>>,
  Path(setting_name): Path<String>,
  Json(body): Json<PutBody>,
) -> Result<Json<serde_json::Value>, ApiError>
where
  S: RetroStore,
{
  store.update_setting(setting_name, body.new_value).await?;
  Ok(Json(json!({ "status": "Success" })))
}
