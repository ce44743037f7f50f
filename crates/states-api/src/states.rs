//! Handlers for the state read endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/states` | Optional `?contig=true\|false` |
//! | `GET`  | `/states/test` | Liveness probe |
//! | `GET`  | `/states/:state` | 404 on unknown abbreviation |

use std::{collections::HashMap, sync::Arc};

use axum::{
  Json,
  extract::{Path, Query, State},
};
use serde::Deserialize;
use states_core::{FactRecord, MergedStateView, dataset, store::FactStore};

use crate::{error::ApiError, gate};

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// `true` restricts to the contiguous 48; `false` to the two states
  /// outside them. Absent means no filter.
  pub contig: Option<bool>,
}

/// `GET /states[?contig=true|false]`
///
/// Loads the full static set, fetches every fact record in one query, and
/// merges before filtering. Output order equals dataset order; the filter
/// preserves relative order.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  Query(params): Query<ListParams>,
) -> Result<Json<Vec<MergedStateView>>, ApiError>
where
  S: FactStore,
{
  let records = store.get_all().await.map_err(ApiError::store)?;
  let by_code: HashMap<&str, FactRecord> = records
    .into_iter()
    .map(|record| (record.state_code.as_str(), record))
    .collect();

  let states = dataset::all()
    .iter()
    .filter(|record| match params.contig {
      Some(true) => record.is_contiguous(),
      Some(false) => !record.is_contiguous(),
      None => true,
    })
    .map(|record| record.merged(by_code.get(record.code)))
    .collect();

  Ok(Json(states))
}

/// `GET /states/:state`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(state): Path<String>,
) -> Result<Json<MergedStateView>, ApiError>
where
  S: FactStore,
{
  let code = gate(&state)?;
  let facts = store.get(code).await.map_err(ApiError::store)?;
  Ok(Json(code.record().merged(facts.as_ref())))
}

/// `GET /states/test` — simple liveness probe.
pub async fn test_route() -> Json<serde_json::Value> {
  Json(serde_json::json!({ "message": "Test route working!" }))
}
