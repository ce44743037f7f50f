//! Handlers for `/states/:state/funfact`.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/states/:state/funfact` | One fact drawn uniformly at random |
//! | `POST`   | `/states/:state/funfact` | Body: `{"funfacts":[...]}`; 201 + full record |
//! | `PATCH`  | `/states/:state/funfact` | Body: `{"index","funfact"}`; 1-based index |
//! | `DELETE` | `/states/:state/funfact` | Body: `{"index"}`; 1-based index |
//!
//! Bodies are validated field by field rather than through serde rejections:
//! each missing or malformed field has its own verbatim message. The body is
//! optional at the extractor level, so a request with no body (or no JSON
//! content type) takes the same missing-field path instead of an extractor
//! rejection.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use rand::Rng as _;
use serde_json::{Value, json};
use states_core::{FactRecord, StateCode, store::FactStore};

use crate::{error::ApiError, gate};

// ─── Random ──────────────────────────────────────────────────────────────────

/// `GET /states/:state/funfact`
///
/// With no record or an empty list this is not an error: a 200 with an
/// informational message naming the state.
pub async fn random<S>(
  State(store): State<Arc<S>>,
  Path(state): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: FactStore,
{
  let code = gate(&state)?;
  let record = store.get(code).await.map_err(ApiError::store)?;

  let body = match record {
    Some(record) if !record.funfacts.is_empty() => {
      let index = rand::thread_rng().gen_range(0..record.funfacts.len());
      json!({ "funfact": record.funfacts[index] })
    }
    _ => json!({ "message": format!("No Fun Facts found for {}", code.name()) }),
  };
  Ok(Json(body))
}

// ─── Add ─────────────────────────────────────────────────────────────────────

/// `POST /states/:state/funfact` — body: `{"funfacts": ["...", ...]}`.
///
/// Creates the record on first use; otherwise appends to the end of the
/// existing list. Order preserved, duplicates allowed. Returns 201 with the
/// full stored record.
pub async fn add<S>(
  State(store): State<Arc<S>>,
  Path(state): Path<String>,
  body: Option<Json<Value>>,
) -> Result<impl IntoResponse, ApiError>
where
  S: FactStore,
{
  let code = gate(&state)?;
  let body = unwrap_body(body);

  let Some(supplied) = present(body.get("funfacts")) else {
    return Err(ApiError::BadRequest(
      "State fun facts value required".to_owned(),
    ));
  };
  let supplied: Vec<String> = serde_json::from_value(supplied.clone())
    .map_err(|_| {
      ApiError::BadRequest("Fun facts must be a non-empty array.".to_owned())
    })?;
  if supplied.is_empty() {
    return Err(ApiError::BadRequest(
      "Fun facts must be a non-empty array.".to_owned(),
    ));
  }

  let record = match store.get(code).await.map_err(ApiError::store)? {
    Some(mut record) => {
      record.funfacts.extend(supplied);
      record
    }
    None => FactRecord::new(code, supplied),
  };

  store.save(&record).await.map_err(ApiError::store)?;
  Ok((StatusCode::CREATED, Json(record)))
}

// ─── Update ──────────────────────────────────────────────────────────────────

/// `PATCH /states/:state/funfact` — body: `{"index": n, "funfact": "..."}`.
///
/// Replaces the entry at 1-based `index`. Returns the full updated record.
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(state): Path<String>,
  body: Option<Json<Value>>,
) -> Result<Json<FactRecord>, ApiError>
where
  S: FactStore,
{
  let code = gate(&state)?;
  let body = unwrap_body(body);

  let (Some(index), Some(funfact)) =
    (present(body.get("index")), present(body.get("funfact")))
  else {
    return Err(ApiError::BadRequest(
      "State fun fact index and value required".to_owned(),
    ));
  };
  let index = one_based_index(index)?;
  let funfact = funfact.as_str().ok_or_else(|| {
    ApiError::BadRequest("State fun fact value must be a string".to_owned())
  })?;

  let mut record = fetch_non_empty(store.as_ref(), code).await?;
  let slot = bounds_checked(index, record.funfacts.len(), code)?;

  record.funfacts[slot] = funfact.to_owned();
  store.save(&record).await.map_err(ApiError::store)?;
  Ok(Json(record))
}

// ─── Delete ──────────────────────────────────────────────────────────────────

/// `DELETE /states/:state/funfact` — body: `{"index": n}`.
///
/// Removes exactly one entry at 1-based `index`; subsequent entries shift
/// left. Returns the full updated record.
pub async fn remove<S>(
  State(store): State<Arc<S>>,
  Path(state): Path<String>,
  body: Option<Json<Value>>,
) -> Result<Json<FactRecord>, ApiError>
where
  S: FactStore,
{
  let code = gate(&state)?;
  let body = unwrap_body(body);

  let Some(index) = present(body.get("index")) else {
    return Err(ApiError::BadRequest(
      "State fun fact index value required".to_owned(),
    ));
  };
  let index = one_based_index(index)?;

  let mut record = fetch_non_empty(store.as_ref(), code).await?;
  let slot = bounds_checked(index, record.funfacts.len(), code)?;

  record.funfacts.remove(slot);
  store.save(&record).await.map_err(ApiError::store)?;
  Ok(Json(record))
}

// ─── Validation helpers ──────────────────────────────────────────────────────

/// Treat an absent body as `null`; the field checks below then report the
/// appropriate missing-field message.
fn unwrap_body(body: Option<Json<Value>>) -> Value {
  body.map(|Json(value)| value).unwrap_or(Value::Null)
}

/// Treat an absent field and an explicit `null` the same way.
fn present(value: Option<&Value>) -> Option<&Value> {
  value.filter(|v| !v.is_null())
}

/// The external interface is 1-based. Zero, negative, fractional, and
/// non-numeric values are all rejected with the same message.
fn one_based_index(value: &Value) -> Result<usize, ApiError> {
  match value.as_u64() {
    Some(n) if n >= 1 => Ok(n as usize),
    _ => Err(ApiError::BadRequest(
      "Index must be a number starting from 1".to_owned(),
    )),
  }
}

/// Translate the 1-based external index to a 0-based slot, rejecting
/// anything past the current list length.
fn bounds_checked(
  index: usize,
  len: usize,
  code: StateCode,
) -> Result<usize, ApiError> {
  let slot = index - 1;
  if slot >= len {
    return Err(ApiError::NotFound(format!(
      "No Fun Fact found at that index for {}",
      code.name()
    )));
  }
  Ok(slot)
}

/// Fetch the record for `code`, requiring a non-empty fact list.
async fn fetch_non_empty<S>(
  store: &S,
  code: StateCode,
) -> Result<FactRecord, ApiError>
where
  S: FactStore,
{
  match store.get(code).await.map_err(ApiError::store)? {
    Some(record) if !record.funfacts.is_empty() => Ok(record),
    _ => Err(ApiError::NotFound(format!(
      "No Fun Facts found for {}",
      code.name()
    ))),
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::{one_based_index, present};

  #[test]
  fn present_treats_null_as_absent() {
    let body = json!({ "index": null, "funfact": "x" });
    assert!(present(body.get("index")).is_none());
    assert!(present(body.get("funfact")).is_some());
    assert!(present(body.get("missing")).is_none());
  }

  #[test]
  fn index_must_be_a_positive_integer() {
    assert_eq!(one_based_index(&json!(1)).unwrap(), 1);
    assert_eq!(one_based_index(&json!(42)).unwrap(), 42);
    for bad in [json!(0), json!(-1), json!(1.5), json!("1"), json!([1])] {
      assert!(one_based_index(&bad).is_err(), "accepted {bad}");
    }
  }
}
