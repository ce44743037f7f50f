//! Encoding and decoding between the fact list and its JSON column.
//!
//! Kept outside the `conn.call` closures so JSON errors stay distinct from
//! database errors.

use crate::Result;

pub fn encode_funfacts(funfacts: &[String]) -> Result<String> {
  Ok(serde_json::to_string(funfacts)?)
}

pub fn decode_funfacts(raw: &str) -> Result<Vec<String>> {
  Ok(serde_json::from_str(raw)?)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn encodes_in_order() {
    let encoded =
      encode_funfacts(&["a".to_owned(), "b".to_owned()]).unwrap();
    assert_eq!(encoded, r#"["a","b"]"#);
    assert_eq!(decode_funfacts(&encoded).unwrap(), ["a", "b"]);
  }

  #[test]
  fn rejects_malformed_column_data() {
    assert!(decode_funfacts("not json").is_err());
    assert!(decode_funfacts(r#"{"k":1}"#).is_err());
  }
}
