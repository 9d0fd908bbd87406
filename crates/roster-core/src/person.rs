//! Person — the single entity managed by Roster.

use serde::{Deserialize, Serialize};

/// One individual in the registry.
///
/// `id` is `None` until the person is first persisted; the store assigns a
/// positive identifier on insert and it never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
  #[serde(default)]
  pub id:         Option<i64>,
  pub first_name: String,
  pub last_name:  String,
  pub address:    String,
  /// Free-form; no vocabulary is enforced.
  pub gender:     String,
  /// Unique across all persons.
  pub email:      String,
}

impl Person {
  /// Build a not-yet-persisted person.
  pub fn new(
    first_name: impl Into<String>,
    last_name: impl Into<String>,
    address: impl Into<String>,
    gender: impl Into<String>,
    email: impl Into<String>,
  ) -> Self {
    Self {
      id:         None,
      first_name: first_name.into(),
      last_name:  last_name.into(),
      address:    address.into(),
      gender:     gender.into(),
      email:      email.into(),
    }
  }

  /// Returns `self` with the given identifier.
  pub fn with_id(mut self, id: i64) -> Self {
    self.id = Some(id);
    self
  }

  pub fn is_persisted(&self) -> bool {
    self.id.is_some()
  }
}
