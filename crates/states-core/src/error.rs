//! Error types for `states-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  /// The supplied identifier is not a known state abbreviation.
  #[error("invalid state abbreviation: {0:?}")]
  InvalidStateCode(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
