//! [`StateCode`] — a validated state abbreviation.
//!
//! A `StateCode` can only be obtained by parsing user input against the
//! static dataset, so holding one proves the code is valid. It carries a
//! reference to its [`StateRecord`], making every post-validation dataset
//! lookup total.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};

use crate::{
  Error, Result,
  dataset,
  state::StateRecord,
};

/// A validated, uppercase two-letter state abbreviation.
#[derive(Clone, Copy)]
pub struct StateCode(&'static StateRecord);

impl StateCode {
  /// Normalise `input` to uppercase and check membership in the dataset.
  ///
  /// This is the admission-control gate: handlers only ever see codes that
  /// passed it.
  pub fn parse(input: &str) -> Result<Self> {
    let normalized = input.to_ascii_uppercase();
    dataset::find(&normalized)
      .map(Self)
      .ok_or_else(|| Error::InvalidStateCode(input.to_owned()))
  }

  pub fn as_str(self) -> &'static str { self.0.code }

  /// The static record this code was validated against.
  pub fn record(self) -> &'static StateRecord { self.0 }

  /// Human-readable state name, used in response messages.
  pub fn name(self) -> &'static str { self.0.name }
}

impl fmt::Debug for StateCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "StateCode({})", self.0.code)
  }
}

impl fmt::Display for StateCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.0.code)
  }
}

impl PartialEq for StateCode {
  fn eq(&self, other: &Self) -> bool { self.0.code == other.0.code }
}

impl Eq for StateCode {}

impl std::hash::Hash for StateCode {
  fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
    self.0.code.hash(state);
  }
}

impl FromStr for StateCode {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> { Self::parse(s) }
}

impl Serialize for StateCode {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.0.code)
  }
}

impl<'de> Deserialize<'de> for StateCode {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    Self::parse(&raw).map_err(de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_is_case_insensitive() {
    for input in ["KS", "ks", "Ks", "kS"] {
      let code = StateCode::parse(input).unwrap();
      assert_eq!(code.as_str(), "KS");
      assert_eq!(code.name(), "Kansas");
    }
  }

  #[test]
  fn parse_rejects_unknown_codes() {
    for input in ["ZZ", "zz", "XX", "K", "KAN", ""] {
      assert!(matches!(
        StateCode::parse(input),
        Err(Error::InvalidStateCode(_))
      ));
    }
  }

  #[test]
  fn record_matches_dataset_entry() {
    let code = StateCode::parse("hi").unwrap();
    assert_eq!(code.record().capital, "Honolulu");
    assert!(!code.record().is_contiguous());
  }

  #[test]
  fn serialises_as_uppercase_string() {
    let code = StateCode::parse("de").unwrap();
    assert_eq!(serde_json::to_value(code).unwrap(), "DE");

    let back: StateCode = serde_json::from_str("\"md\"").unwrap();
    assert_eq!(back.as_str(), "MD");
    assert!(serde_json::from_str::<StateCode>("\"ZZ\"").is_err());
  }
}
