//! The `PersonStore` trait.
//!
//! The trait is implemented by storage backends (e.g. `roster-store-sqlite`).
//! [`PersonService`](crate::service::PersonService) depends on this
//! abstraction, not on any concrete backend.

use std::future::Future;

use crate::person::Person;

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a person storage backend.
///
/// Each method is individually atomic. Callers must not assume that two calls
/// are composed into one transaction.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait PersonStore: Send + Sync {
  /// Backend error. Converting into [`crate::Error`] must map a violated
  /// email uniqueness constraint to [`crate::Error::DuplicateEmail`] and an
  /// update of a missing row to [`crate::Error::NotFound`].
  type Error: std::error::Error + Into<crate::Error> + Send + Sync + 'static;

  // ── Writes ────────────────────────────────────────────────────────────

  /// Insert `person` when it has no id (assigning one), otherwise overwrite
  /// the stored row with that id. Returns the persisted person.
  fn save(
    &self,
    person: Person,
  ) -> impl Future<Output = Result<Person, Self::Error>> + Send + '_;

  /// Delete the row backing `person`.
  fn delete<'a>(
    &'a self,
    person: &'a Person,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + 'a;

  /// Delete the row with `id`. Deleting a missing id is not an error.
  fn delete_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  // ── Reads ─────────────────────────────────────────────────────────────

  fn find_by_id(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + '_;

  fn find_by_email<'a>(
    &'a self,
    email: &'a str,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + 'a;

  /// First person whose first and last name match exactly.
  fn find_by_name<'a>(
    &'a self,
    first_name: &'a str,
    last_name: &'a str,
  ) -> impl Future<Output = Result<Option<Person>, Self::Error>> + Send + 'a;

  /// Every stored person, in ascending id order.
  fn find_all(
    &self,
  ) -> impl Future<Output = Result<Vec<Person>, Self::Error>> + Send + '_;
}
