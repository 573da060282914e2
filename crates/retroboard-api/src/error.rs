//! API error type and [`axum::response::IntoResponse`] implementation.
//!
//! Handlers forward [`retroboard_core::Error`] unchanged; the status code is
//! derived from the variant and the body is always `{"status": <message>}`.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use retroboard_core::Error;
use serde_json::json;

/// An error returned by an API handler.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl From<Error> for ApiError {
  fn from(e: Error) -> Self {
    Self(e)
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self.0 {
      Error::BoardNotFound | Error::NoteNotFound | Error::CategoryNotFound => {
        StatusCode::NOT_FOUND
      }
      Error::CategoryInUse => StatusCode::BAD_REQUEST,
      Error::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "status": self.0.to_string() }))).into_response()
  }
}
