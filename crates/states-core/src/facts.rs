//! [`FactRecord`] — the one persistent document per state code.

use serde::{Deserialize, Serialize};

use crate::code::StateCode;

/// The mutable, ordered fun-fact list for one state.
///
/// Created lazily on the first fact addition for a code; one record per
/// code, keyed by `state_code`. List order is insertion order. The external
/// interface addresses entries with 1-based indices; all internal indexing
/// is 0-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactRecord {
  #[serde(rename = "stateCode")]
  pub state_code: StateCode,
  pub funfacts:   Vec<String>,
}

impl FactRecord {
  pub fn new(state_code: StateCode, funfacts: Vec<String>) -> Self {
    Self { state_code, funfacts }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn serialises_with_camel_case_key() {
    let record = FactRecord::new(
      StateCode::parse("KS").unwrap(),
      vec!["flat".into()],
    );
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(
      json,
      serde_json::json!({ "stateCode": "KS", "funfacts": ["flat"] })
    );
  }

  #[test]
  fn round_trips_through_json() {
    let record = FactRecord::new(
      StateCode::parse("hi").unwrap(),
      vec!["a".into(), "b".into()],
    );
    let json = serde_json::to_string(&record).unwrap();
    let back: FactRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
  }
}
