//! Integration tests for `SqliteFactStore` against an in-memory database.

use states_core::{FactRecord, StateCode, store::FactStore};

use crate::SqliteFactStore;

async fn store() -> SqliteFactStore {
  SqliteFactStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn code(s: &str) -> StateCode {
  StateCode::parse(s).expect("valid test code")
}

#[tokio::test]
async fn get_missing_returns_none() {
  let s = store().await;
  assert!(s.get(code("KS")).await.unwrap().is_none());
}

#[tokio::test]
async fn save_and_get_round_trip() {
  let s = store().await;
  let record = FactRecord::new(code("KS"), vec!["a".into(), "b".into()]);

  s.save(&record).await.unwrap();

  let fetched = s.get(code("KS")).await.unwrap().unwrap();
  assert_eq!(fetched, record);
}

#[tokio::test]
async fn save_is_an_upsert() {
  let s = store().await;
  s.save(&FactRecord::new(code("HI"), vec!["first".into()]))
    .await
    .unwrap();
  s.save(&FactRecord::new(
    code("HI"),
    vec!["first".into(), "second".into()],
  ))
  .await
  .unwrap();

  let fetched = s.get(code("HI")).await.unwrap().unwrap();
  assert_eq!(fetched.funfacts, ["first", "second"]);

  // Still one row per code.
  assert_eq!(s.get_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn get_all_returns_every_record() {
  let s = store().await;
  s.save(&FactRecord::new(code("AK"), vec!["cold".into()]))
    .await
    .unwrap();
  s.save(&FactRecord::new(code("KS"), vec!["flat".into()]))
    .await
    .unwrap();
  s.save(&FactRecord::new(code("HI"), vec![])).await.unwrap();

  let all = s.get_all().await.unwrap();
  assert_eq!(all.len(), 3);

  let codes: Vec<_> = all.iter().map(|r| r.state_code.as_str()).collect();
  assert_eq!(codes, ["AK", "HI", "KS"]);
}

#[tokio::test]
async fn preserves_insertion_order() {
  let s = store().await;
  let facts: Vec<String> =
    (0..10).map(|i| format!("fact {i}")).collect();
  s.save(&FactRecord::new(code("TX"), facts.clone()))
    .await
    .unwrap();

  let fetched = s.get(code("TX")).await.unwrap().unwrap();
  assert_eq!(fetched.funfacts, facts);
}
