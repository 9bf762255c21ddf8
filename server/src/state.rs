//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Recipes live in Postgres and are read per request; nothing is cached.

use sqlx::PgPool;

/// Shared application state. Clone is required by Axum; `PgPool` is an `Arc`
/// internally.
#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
