//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

/// An error returned by an API handler.
///
/// The body key differs between variants (`error` vs `message`); the
/// external interface predates this implementation and each endpoint's body
/// shape is preserved as-is.
#[derive(Debug, Error)]
pub enum ApiError {
  /// The path parameter failed the admission-control gate.
  #[error("invalid state abbreviation parameter")]
  InvalidStateCode,

  /// A required record or list index was missing; `message`-keyed 404.
  #[error("{0}")]
  NotFound(String),

  /// Malformed or missing request fields; `message`-keyed 400.
  #[error("{0}")]
  BadRequest(String),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  /// Box a backend error into the opaque 500 variant.
  pub fn store<E>(err: E) -> Self
  where
    E: std::error::Error + Send + Sync + 'static,
  {
    Self::Store(Box::new(err))
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    match self {
      ApiError::InvalidStateCode => (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Invalid state abbreviation parameter" })),
      )
        .into_response(),
      ApiError::NotFound(message) => {
        (StatusCode::NOT_FOUND, Json(json!({ "message": message })))
          .into_response()
      }
      ApiError::BadRequest(message) => {
        (StatusCode::BAD_REQUEST, Json(json!({ "message": message })))
          .into_response()
      }
      ApiError::Store(err) => {
        // Log the detail; the caller only sees the generic message.
        tracing::error!(error = %err, "fact store failure");
        (
          StatusCode::INTERNAL_SERVER_ERROR,
          Json(json!({ "error": "Server Error" })),
        )
          .into_response()
      }
    }
  }
}
