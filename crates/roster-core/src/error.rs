//! Error types for `roster-core`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("no person found with id {0}")]
  NotFound(i64),

  #[error("no person found named {first} {last}")]
  NotFoundByName { first: String, last: String },

  #[error("email already exists: {0}")]
  DuplicateEmail(String),

  #[error("person id is required")]
  MissingId,

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
