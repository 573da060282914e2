//! JSON REST API for RetroBoard.
//!
//! Exposes an axum [`Router`] backed by any [`retroboard_core::store::RetroStore`].
//! Static assets, TLS, and transport concerns are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", retroboard_api::api_router(store.clone()))
//! ```

pub mod boards;
pub mod categories;
pub mod error;
pub mod notes;
pub mod settings;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::StatusCode,
  routing::{get, put},
};
use retroboard_core::store::RetroStore;
use serde_json::json;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type. Collection routes are registered both with and
/// without a trailing slash. Anything unmatched gets a JSON 404 — the
/// caller's SPA fallback must never see `/api` paths.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: RetroStore + 'static,
{
  Router::new()
    // Boards
    .route("/boards", boards::routes::<S>())
    .route("/boards/", boards::routes::<S>())
    .route("/boards/export", get(boards::export::<S>))
    // Notes
    .route("/notes", notes::routes::<S>())
    .route("/notes/", notes::routes::<S>())
    .route("/notes/{note_id}/category", put(notes::put_category::<S>))
    .route("/notes/{note_id}/tags", put(notes::put_tags::<S>))
    // Categories
    .route("/categories", categories::routes::<S>())
    .route("/categories/", categories::routes::<S>())
    // Settings
    .route("/settings", get(settings::list::<S>))
    .route("/settings/", get(settings::list::<S>))
    .route("/settings/{setting_name}", put(settings::put_value::<S>))
    .fallback(not_found)
    .with_state(store)
}

async fn not_found() -> (StatusCode, Json<serde_json::Value>) {
  (StatusCode::NOT_FOUND, Json(json!({ "status": "Not found" })))
}

#[cfg(test)]
mod tests;
