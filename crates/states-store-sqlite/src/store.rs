//! [`SqliteFactStore`] — the SQLite implementation of [`FactStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use states_core::{
  code::StateCode,
  facts::FactRecord,
  store::FactStore,
};

use crate::{
  Error, Result,
  encode::{decode_funfacts, encode_funfacts},
  schema::SCHEMA,
};

/// A fun-fact store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. One
/// instance is opened at startup and shared by all requests.
#[derive(Clone)]
pub struct SqliteFactStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteFactStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

impl FactStore for SqliteFactStore {
  type Error = Error;

  async fn get(&self, code: StateCode) -> Result<Option<FactRecord>> {
    let code_str = code.as_str();

    let raw: Option<String> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT funfacts FROM state_funfacts WHERE state_code = ?1",
              rusqlite::params![code_str],
              |row| row.get(0),
            )
            .optional()?,
        )
      })
      .await?;

    raw
      .map(|json| Ok(FactRecord::new(code, decode_funfacts(&json)?)))
      .transpose()
  }

  async fn get_all(&self) -> Result<Vec<FactRecord>> {
    let raws: Vec<(String, String)> = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT state_code, funfacts FROM state_funfacts
           ORDER BY state_code",
        )?;
        let rows = stmt
          .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    raws
      .into_iter()
      .map(|(code, json)| {
        let code = StateCode::parse(&code).map_err(Error::Core)?;
        Ok(FactRecord::new(code, decode_funfacts(&json)?))
      })
      .collect()
  }

  async fn save(&self, record: &FactRecord) -> Result<()> {
    let code_str = record.state_code.as_str();
    let json = encode_funfacts(&record.funfacts)?;

    self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO state_funfacts (state_code, funfacts)
           VALUES (?1, ?2)
           ON CONFLICT(state_code) DO UPDATE SET funfacts = excluded.funfacts",
          rusqlite::params![code_str, json],
        )?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}
