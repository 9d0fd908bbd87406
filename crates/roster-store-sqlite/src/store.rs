//! [`SqliteStore`] — the SQLite implementation of [`PersonStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;
use tracing::debug;

use roster_core::{person::Person, store::PersonStore};

use crate::{
  Error, Result,
  schema::{PERSON_COLUMNS, SCHEMA},
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A person store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    debug!(path = %path.as_ref().display(), "opening sqlite store");
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

  async fn insert(&self, person: Person) -> Result<Person> {
    let row = person.clone();

    let id = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO person (first_name, last_name, address, gender, email)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.address,
            row.gender,
            row.email,
          ],
        )?;
        Ok(conn.last_insert_rowid())
      })
      .await
      .map_err(|e| Error::from_write(e, &person.email))?;

    debug!(id, "inserted person");
    Ok(person.with_id(id))
  }

  async fn update(&self, id: i64, person: Person) -> Result<Person> {
    let row = person.clone();

    let changed = self
      .conn
      .call(move |conn| {
        Ok(conn.execute(
          "UPDATE person
              SET first_name = ?1, last_name = ?2, address = ?3,
                  gender = ?4, email = ?5
            WHERE id = ?6",
          rusqlite::params![
            row.first_name,
            row.last_name,
            row.address,
            row.gender,
            row.email,
            id,
          ],
        )?)
      })
      .await
      .map_err(|e| Error::from_write(e, &person.email))?;

    if changed == 0 {
      return Err(Error::PersonNotFound(id));
    }
    Ok(person)
  }

  /// Run a single-row lookup with one `WHERE` clause.
  async fn find_one<P>(&self, where_clause: &'static str, params: P) -> Result<Option<Person>>
  where
    P: rusqlite::Params + Send + 'static,
  {
    let person = self
      .conn
      .call(move |conn| {
        let sql = format!("SELECT {PERSON_COLUMNS} FROM person WHERE {where_clause} LIMIT 1");
        Ok(conn.query_row(&sql, params, person_from_row).optional()?)
      })
      .await?;
    Ok(person)
  }
}

fn person_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Person> {
  Ok(Person {
    id:         Some(row.get(0)?),
    first_name: row.get(1)?,
    last_name:  row.get(2)?,
    address:    row.get(3)?,
    gender:     row.get(4)?,
    email:      row.get(5)?,
  })
}

// ─── PersonStore impl ────────────────────────────────────────────────────────

impl PersonStore for SqliteStore {
  type Error = Error;

  // ── Writes ────────────────────────────────────────────────────────────────

  async fn save(&self, person: Person) -> Result<Person> {
    match person.id {
      None => self.insert(person).await,
      Some(id) => self.update(id, person).await,
    }
  }

  async fn delete(&self, person: &Person) -> Result<()> {
    let id = person.id.ok_or(Error::MissingId)?;
    self.delete_by_id(id).await
  }

  async fn delete_by_id(&self, id: i64) -> Result<()> {
    let removed = self
      .conn
      .call(move |conn| Ok(conn.execute("DELETE FROM person WHERE id = ?1", [id])?))
      .await?;
    debug!(id, removed, "deleted person");
    Ok(())
  }

  // ── Reads ─────────────────────────────────────────────────────────────────

  async fn find_by_id(&self, id: i64) -> Result<Option<Person>> {
    self.find_one("id = ?1", [id]).await
  }

  async fn find_by_email(&self, email: &str) -> Result<Option<Person>> {
    self.find_one("email = ?1", [email.to_owned()]).await
  }

  async fn find_by_name(&self, first_name: &str, last_name: &str) -> Result<Option<Person>> {
    self
      .find_one(
        "first_name = ?1 AND last_name = ?2 ORDER BY id",
        [first_name.to_owned(), last_name.to_owned()],
      )
      .await
  }

  async fn find_all(&self) -> Result<Vec<Person>> {
    let persons = self
      .conn
      .call(|conn| {
        let mut stmt =
          conn.prepare(&format!("SELECT {PERSON_COLUMNS} FROM person ORDER BY id"))?;
        let rows = stmt
          .query_map([], person_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;
    Ok(persons)
  }
}
