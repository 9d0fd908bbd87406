//! Handlers for `/person` endpoints.
//!
//! | Method   | Path           | Notes |
//! |----------|----------------|-------|
//! | `GET`    | `/person`      | All persons |
//! | `GET`    | `/person/:id`  | 404 with empty body if not found |
//! | `POST`   | `/person`      | Body: [`Person`] (id ignored); 409 on duplicate email |
//! | `PUT`    | `/person`      | Body: [`Person`] with id; 404 if not found |
//! | `DELETE` | `/person/:id`  | 204 on success |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
};
use roster_core::{Person, PersonService, PersonStore};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /person`
pub async fn list<S>(
  State(service): State<Arc<PersonService<S>>>,
) -> Result<Json<Vec<Person>>, ApiError>
where
  S: PersonStore,
{
  Ok(Json(service.find_all().await?))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /person/:id`
pub async fn get_one<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<i64>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  Ok(Json(service.find_by_id(id).await?))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /person` — returns 200 + the stored person with its assigned id.
pub async fn create<S>(
  State(service): State<Arc<PersonService<S>>>,
  Json(body): Json<Person>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  Ok(Json(service.create(body).await?))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /person` — the target is the `id` inside the body.
pub async fn update<S>(
  State(service): State<Arc<PersonService<S>>>,
  Json(body): Json<Person>,
) -> Result<Json<Person>, ApiError>
where
  S: PersonStore,
{
  Ok(Json(service.update(body).await?))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /person/:id`
pub async fn delete<S>(
  State(service): State<Arc<PersonService<S>>>,
  Path(id): Path<i64>,
) -> Result<StatusCode, ApiError>
where
  S: PersonStore,
{
  service.delete(id).await?;
  Ok(StatusCode::NO_CONTENT)
}
