//! Static state records and the merged response view.

use chrono::NaiveDate;
use serde::Serialize;

use crate::facts::FactRecord;

/// A single entry of the static reference dataset. Immutable for the process
/// lifetime; all instances live in [`crate::dataset`].
#[derive(Debug, Clone, Serialize)]
pub struct StateRecord {
  pub code:       &'static str,
  pub name:       &'static str,
  pub capital:    &'static str,
  pub population: u64,
  /// Total area in square miles.
  pub area:       f64,
  pub admitted:   NaiveDate,
}

impl StateRecord {
  /// `false` only for the two states outside the contiguous 48.
  pub fn is_contiguous(&self) -> bool {
    !matches!(self.code, "AK" | "HI")
  }

  /// Merge this record with an optional fact record into the response view.
  ///
  /// The fact list overrides the static default only when it is non-empty;
  /// an absent record and an empty list both yield the empty default.
  pub fn merged(&self, facts: Option<&FactRecord>) -> MergedStateView {
    let funfacts = facts
      .filter(|f| !f.funfacts.is_empty())
      .map(|f| f.funfacts.clone())
      .unwrap_or_default();

    MergedStateView {
      code: self.code,
      name: self.name,
      capital: self.capital,
      population: self.population,
      area: self.area,
      admitted: self.admitted,
      funfacts,
    }
  }
}

/// The computed, response-only combination of static attributes and live
/// fact data. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct MergedStateView {
  pub code:       &'static str,
  pub name:       &'static str,
  pub capital:    &'static str,
  pub population: u64,
  pub area:       f64,
  pub admitted:   NaiveDate,
  pub funfacts:   Vec<String>,
}
