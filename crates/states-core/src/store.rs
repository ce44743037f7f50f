//! The `FactStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `states-store-sqlite`).
//! The API layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::{code::StateCode, facts::FactRecord};

/// Abstraction over the persistent fun-fact store.
///
/// One record per state code. Reads are point lookups (plus one
/// fetch-everything query for the list endpoint); the only write is a
/// whole-record upsert, issued as the final step of every mutating handler.
///
/// There is deliberately no per-key locking or conditional update: two
/// concurrent read-modify-write sequences on the same code race, last
/// writer wins.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait FactStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Fetch the record for one state code. Returns `None` if no facts have
  /// ever been added for it.
  fn get(
    &self,
    code: StateCode,
  ) -> impl Future<Output = Result<Option<FactRecord>, Self::Error>> + Send + '_;

  /// Fetch every record in one query.
  fn get_all(
    &self,
  ) -> impl Future<Output = Result<Vec<FactRecord>, Self::Error>> + Send + '_;

  /// Insert or replace the record for `record.state_code`.
  fn save<'a>(
    &'a self,
    record: &'a FactRecord,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;
}
