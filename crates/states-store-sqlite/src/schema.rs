//! SQL schema for the fun-fact store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

-- One row per state code. The fact list is stored whole, as a JSON array of
-- strings in insertion order; every write replaces the full list.
CREATE TABLE IF NOT EXISTS state_funfacts (
    state_code TEXT PRIMARY KEY,  -- two-letter uppercase abbreviation
    funfacts   TEXT NOT NULL      -- JSON array of strings
);

PRAGMA user_version = 1;
";
