//! JSON REST API for Roster.
//!
//! Exposes an axum [`Router`] backed by a [`PersonService`] over any
//! [`roster_core::PersonStore`]. Tracing layers, TLS, and transport concerns
//! are the caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! let service = Arc::new(PersonService::new(Arc::new(store)));
//! axum::serve(listener, roster_api::api_router(service)).await?;
//! ```

pub mod error;
pub mod person;

use std::sync::Arc;

use axum::{Router, routing::get};
use roster_core::{PersonService, PersonStore};

pub use error::ApiError;

/// Build a fully-materialised API router for `service`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(service: Arc<PersonService<S>>) -> Router<()>
where
  S: PersonStore + 'static,
{
  Router::new()
    .route(
      "/person",
      get(person::list::<S>)
        .post(person::create::<S>)
        .put(person::update::<S>),
    )
    .route(
      "/person/{id}",
      get(person::get_one::<S>).delete(person::delete::<S>),
    )
    .with_state(service)
}

// ─── Integration tests ────────────────────────────────────────────────────────
