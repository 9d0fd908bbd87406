//! Error type for `roster-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// The `UNIQUE (email)` constraint rejected a write.
  #[error("email already exists: {0}")]
  DuplicateEmail(String),

  /// An update targeted an id with no row.
  #[error("person not found: {0}")]
  PersonNotFound(i64),

  /// A delete-by-entity was given a person that was never persisted.
  #[error("person has no id")]
  MissingId,
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
  /// Classify a write failure, turning a violated email uniqueness
  /// constraint into [`Error::DuplicateEmail`].
  pub(crate) fn from_write(err: tokio_rusqlite::Error, email: &str) -> Self {
    if is_unique_violation(&err) {
      Error::DuplicateEmail(email.to_owned())
    } else {
      Error::Database(err)
    }
  }
}

fn is_unique_violation(err: &tokio_rusqlite::Error) -> bool {
  matches!(
    err,
    tokio_rusqlite::Error::Rusqlite(rusqlite::Error::SqliteFailure(e, _))
      if e.extended_code == rusqlite::ffi::SQLITE_CONSTRAINT_UNIQUE
  )
}

impl From<Error> for roster_core::Error {
  fn from(err: Error) -> Self {
    match err {
      Error::DuplicateEmail(email) => roster_core::Error::DuplicateEmail(email),
      Error::PersonNotFound(id) => roster_core::Error::NotFound(id),
      Error::MissingId => roster_core::Error::MissingId,
      other @ Error::Database(_) => roster_core::Error::Store(Box::new(other)),
    }
  }
}
