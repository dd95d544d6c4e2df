//! HTTP route modules.
//!
//! Each module contributes a typed sub-router through its `routes()`
//! function. Protection is per-handler: anything taking a
//! [`CurrentUser`](crate::extract::CurrentUser) argument requires a
//! valid bearer token, everything else is public.

pub mod auth;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Assemble the full API router over the shared state.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(notes::routes())
        .with_state(state)
}
