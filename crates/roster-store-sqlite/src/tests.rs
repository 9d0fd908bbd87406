//! Integration tests for `SqliteStore` against an in-memory database.

use roster_core::{Person, PersonService, store::PersonStore};
use std::sync::Arc;

use crate::{Error, SqliteStore};

async fn store() -> SqliteStore {
  SqliteStore::open_in_memory()
    .await
    .expect("in-memory store")
}

fn fulano() -> Person {
  Person::new(
    "Fulano",
    "da Silva",
    "Patos - Paraiba - Brasil",
    "Male",
    "fulano@gmail.com",
  )
}

fn ciclano() -> Person {
  Person::new(
    "Ciclano",
    "Pereira",
    "João Pessoa - Paraiba - Brasil",
    "Male",
    "ciclano@gmail.com",
  )
}

// ─── Save ────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn save_new_person_assigns_positive_id() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  assert!(saved.id.unwrap() > 0);
  assert_eq!(saved.first_name, "Fulano");
}

#[tokio::test]
async fn save_assigns_distinct_ids() {
  let s = store().await;
  let a = s.save(fulano()).await.unwrap();
  let b = s.save(ciclano()).await.unwrap();
  assert_ne!(a.id, b.id);
}

#[tokio::test]
async fn save_existing_person_updates_row() {
  let s = store().await;
  let mut saved = s.save(fulano()).await.unwrap();

  saved.last_name = "Souza".into();
  saved.email = "fulano.souza@gmail.com".into();
  let updated = s.save(saved.clone()).await.unwrap();
  assert_eq!(updated.last_name, "Souza");
  assert_eq!(updated.email, "fulano.souza@gmail.com");

  let fetched = s.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
  assert_eq!(fetched, updated);
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn save_with_unknown_id_is_not_found() {
  let s = store().await;
  let err = s.save(fulano().with_id(404)).await.unwrap_err();
  assert!(matches!(err, Error::PersonNotFound(404)));
}

#[tokio::test]
async fn insert_with_duplicate_email_is_rejected() {
  let s = store().await;
  s.save(fulano()).await.unwrap();

  let mut dup = ciclano();
  dup.email = "fulano@gmail.com".into();
  let err = s.save(dup).await.unwrap_err();
  assert!(
    matches!(&err, Error::DuplicateEmail(e) if e == "fulano@gmail.com"),
    "unexpected error: {err}"
  );
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn update_onto_taken_email_is_rejected() {
  let s = store().await;
  s.save(fulano()).await.unwrap();
  let mut other = s.save(ciclano()).await.unwrap();

  other.email = "fulano@gmail.com".into();
  let err = s.save(other).await.unwrap_err();
  assert!(matches!(err, Error::DuplicateEmail(_)));
}

#[tokio::test]
async fn duplicate_email_converts_to_domain_error() {
  let s = store().await;
  s.save(fulano()).await.unwrap();
  let err: roster_core::Error = s.save(fulano()).await.unwrap_err().into();
  assert!(matches!(err, roster_core::Error::DuplicateEmail(_)));
}

// ─── Reads ───────────────────────────────────────────────────────────────────

#[tokio::test]
async fn find_by_id_returns_saved_person() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  let found = s.find_by_id(saved.id.unwrap()).await.unwrap();
  assert_eq!(found, Some(saved));
}

#[tokio::test]
async fn find_by_id_missing_returns_none() {
  let s = store().await;
  assert!(s.find_by_id(1).await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_email_returns_saved_person() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  let found = s.find_by_email("fulano@gmail.com").await.unwrap().unwrap();
  assert_eq!(found.id, saved.id);
  assert_eq!(found.email, saved.email);
}

#[tokio::test]
async fn find_by_email_is_exact() {
  let s = store().await;
  s.save(fulano()).await.unwrap();
  assert!(s.find_by_email("FULANO@gmail.com").await.unwrap().is_none());
  assert!(s.find_by_email("fulano@gmail").await.unwrap().is_none());
}

#[tokio::test]
async fn find_by_name_matches_first_and_last() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  s.save(ciclano()).await.unwrap();

  let found = s.find_by_name("Fulano", "da Silva").await.unwrap().unwrap();
  assert_eq!(found.id, saved.id);
  assert!(s.find_by_name("Fulano", "Pereira").await.unwrap().is_none());
}

#[tokio::test]
async fn find_all_on_empty_store_is_empty() {
  let s = store().await;
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn find_all_returns_persons_in_id_order() {
  let s = store().await;
  let a = s.save(fulano()).await.unwrap();
  let b = s.save(ciclano()).await.unwrap();

  let all = s.find_all().await.unwrap();
  assert_eq!(all, vec![a, b]);
}

// ─── Delete ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn delete_by_id_removes_person() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  let id = saved.id.unwrap();

  s.delete_by_id(id).await.unwrap();
  assert!(s.find_by_id(id).await.unwrap().is_none());
}

#[tokio::test]
async fn delete_by_id_missing_is_noop() {
  let s = store().await;
  s.save(fulano()).await.unwrap();
  s.delete_by_id(999).await.unwrap();
  assert_eq!(s.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_entity_removes_person() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  s.delete(&saved).await.unwrap();
  assert!(s.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_unsaved_entity_is_rejected() {
  let s = store().await;
  let err = s.delete(&fulano()).await.unwrap_err();
  assert!(matches!(err, Error::MissingId));
}

#[tokio::test]
async fn deleted_email_can_be_reused() {
  let s = store().await;
  let saved = s.save(fulano()).await.unwrap();
  s.delete(&saved).await.unwrap();

  let again = s.save(fulano()).await.unwrap();
  assert_ne!(again.id, saved.id);
}

// ─── Service over SQLite ─────────────────────────────────────────────────────

#[tokio::test]
async fn service_create_then_find_round_trips() {
  let svc = PersonService::new(Arc::new(store().await));
  let created = svc.create(fulano()).await.unwrap();
  let found = svc.find_by_id(created.id.unwrap()).await.unwrap();
  assert_eq!(found, created);
}

#[tokio::test]
async fn service_duplicate_create_leaves_store_unchanged() {
  let svc = PersonService::new(Arc::new(store().await));
  svc.create(fulano()).await.unwrap();

  let err = svc.create(fulano()).await.unwrap_err();
  assert!(matches!(err, roster_core::Error::DuplicateEmail(_)));
  assert_eq!(svc.find_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn service_missing_ids_are_not_found() {
  let svc = PersonService::new(Arc::new(store().await));
  assert!(matches!(svc.find_by_id(3).await, Err(roster_core::Error::NotFound(3))));
  assert!(matches!(
    svc.update(fulano().with_id(3)).await,
    Err(roster_core::Error::NotFound(3))
  ));
  assert!(matches!(svc.delete(3).await, Err(roster_core::Error::NotFound(3))));
}
