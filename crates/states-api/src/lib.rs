//! JSON REST API for the US States reference data.
//!
//! Exposes an axum [`Router`] backed by any [`states_core::store::FactStore`].
//! Transport concerns (TLS, timeouts) are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let app = states_api::app_router(store.clone());
//! ```

pub mod error;
pub mod funfacts;
pub mod states;

use std::sync::Arc;

use axum::{
  Json, Router,
  http::{HeaderMap, StatusCode, header},
  response::{Html, IntoResponse, Response},
  routing::get,
};
use states_core::{StateCode, store::FactStore};
use tower_http::cors::CorsLayer;

pub use error::ApiError;

/// Build the full application router: greeting, `/states` routes, and the
/// content-negotiated 404 fallback. CORS is wide open: any origin may call
/// the API.
pub fn app_router<S>(store: Arc<S>) -> Router<()>
where
  S: FactStore + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(root))
    .nest("/states", states_router(store))
    .fallback(not_found)
    .layer(CorsLayer::permissive())
}

/// Build the `/states` router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn states_router<S>(store: Arc<S>) -> Router<()>
where
  S: FactStore + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(states::list::<S>))
    .route("/test", get(states::test_route))
    .route("/{state}", get(states::get_one::<S>))
    .route(
      "/{state}/funfact",
      get(funfacts::random::<S>)
        .post(funfacts::add::<S>)
        .patch(funfacts::update::<S>)
        .delete(funfacts::remove::<S>),
    )
    .with_state(store)
}

/// The admission-control gate: normalise and validate a path-supplied state
/// abbreviation before any handler logic runs. Handlers receive the
/// validated [`StateCode`] as a plain value; no storage is touched on
/// failure.
pub(crate) fn gate(state: &str) -> Result<StateCode, ApiError> {
  StateCode::parse(state).map_err(|_| ApiError::InvalidStateCode)
}

async fn root() -> Html<&'static str> { Html("<h1>US States API</h1>") }

/// Fallback for unmatched paths. The body format follows the request's
/// `Accept` header: HTML, then JSON, then plain text.
async fn not_found(headers: HeaderMap) -> Response {
  let accept = headers
    .get(header::ACCEPT)
    .and_then(|value| value.to_str().ok())
    .unwrap_or("*/*");

  if accepts(accept, "text/html") {
    (StatusCode::NOT_FOUND, Html("<h1>404 Not Found</h1>")).into_response()
  } else if accepts(accept, "application/json") {
    (
      StatusCode::NOT_FOUND,
      Json(serde_json::json!({ "error": "404 Not Found" })),
    )
      .into_response()
  } else {
    (StatusCode::NOT_FOUND, "404 Not Found").into_response()
  }
}

/// A literal match, a type wildcard, or `*/*` all accept.
fn accepts(header: &str, mime: &str) -> bool {
  let main = mime.split('/').next().unwrap_or(mime);
  header
    .split(',')
    .filter_map(|part| part.split(';').next())
    .map(str::trim)
    .any(|candidate| {
      candidate == mime
        || candidate == "*/*"
        || candidate.strip_suffix("/*").is_some_and(|m| m == main)
    })
}
