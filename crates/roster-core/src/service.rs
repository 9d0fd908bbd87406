//! [`PersonService`] — business rules layered over a [`PersonStore`].
//!
//! The service owns two rules the store does not: an email must be unused
//! before a person is created, and the target of a read, update or delete
//! must exist. Store failures are converted into [`Error`] at this boundary.

use std::sync::Arc;

use tracing::{info, warn};

use crate::{Error, Result, person::Person, store::PersonStore};

/// Use-case service for person CRUD.
pub struct PersonService<S> {
  store: Arc<S>,
}

impl<S> Clone for PersonService<S> {
  fn clone(&self) -> Self {
    Self { store: Arc::clone(&self.store) }
  }
}

impl<S: PersonStore> PersonService<S> {
  pub fn new(store: Arc<S>) -> Self {
    Self { store }
  }

  pub fn store(&self) -> &S {
    &self.store
  }

  /// Every stored person, in storage order.
  pub async fn find_all(&self) -> Result<Vec<Person>> {
    info!("finding all persons");
    self.store.find_all().await.map_err(Into::<Error>::into)
  }

  pub async fn find_by_id(&self, id: i64) -> Result<Person> {
    info!(id, "finding person by id");
    self.require(id).await
  }

  pub async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Person> {
    info!(first_name, last_name, "finding person by name");
    self
      .store
      .find_by_name(first_name, last_name)
      .await
      .map_err(Into::<Error>::into)?
      .ok_or_else(|| Error::NotFoundByName {
        first: first_name.to_owned(),
        last:  last_name.to_owned(),
      })
  }

  /// Persist a new person and return it with its assigned id.
  ///
  /// Any id carried by `person` is discarded. Fails with
  /// [`Error::DuplicateEmail`] without writing if the email is taken; the
  /// store's uniqueness constraint yields the same error if a concurrent
  /// create claims the email between the check and the insert.
  pub async fn create(&self, mut person: Person) -> Result<Person> {
    info!(email = %person.email, "creating person");

    let existing = self
      .store
      .find_by_email(&person.email)
      .await
      .map_err(Into::<Error>::into)?;
    if existing.is_some() {
      warn!(email = %person.email, "rejecting duplicate email");
      return Err(Error::DuplicateEmail(person.email));
    }

    person.id = None;
    self.store.save(person).await.map_err(Into::<Error>::into)
  }

  /// Replace the name, address and gender of the stored person with
  /// `person.id`.
  ///
  /// The stored email is kept: email is fixed at creation.
  pub async fn update(&self, person: Person) -> Result<Person> {
    let id = person.id.ok_or(Error::MissingId)?;
    info!(id, "updating person");

    let mut entity = self.require(id).await?;
    entity.first_name = person.first_name;
    entity.last_name = person.last_name;
    entity.address = person.address;
    entity.gender = person.gender;

    self.store.save(entity).await.map_err(Into::<Error>::into)
  }

  /// Permanently remove the person with `id`.
  pub async fn delete(&self, id: i64) -> Result<()> {
    info!(id, "deleting person");
    let entity = self.require(id).await?;
    self.store.delete(&entity).await.map_err(Into::<Error>::into)
  }

  async fn require(&self, id: i64) -> Result<Person> {
    let found = self.store.find_by_id(id).await.map_err(Into::<Error>::into)?;
    found.ok_or_else(|| {
      warn!(id, "person not found");
      Error::NotFound(id)
    })
  }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
