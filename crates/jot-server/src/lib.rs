//! jot-server: the HTTP face of the jot note service.
//!
//! A thin axum layer over the jot-core services: handlers parse the
//! request, call [`Authenticator`](jot_core::Authenticator) or
//! [`NoteService`](jot_core::NoteService), and shape the response.
//! Session tokens are verified statelessly on every protected request by
//! the [`CurrentUser`] extractor, and all authorization lives in the
//! services and the store's ownership filters.
//!
//! Failures leave the server as a flat `{"error": "..."}` JSON body with
//! the status implied by the core error. The middleware stack adds
//! request ids, per-request trace spans, and CORS.
//!
//! ```rust,ignore
//! use jot_server::{config::ServerConfig, routes, state::AppState};
//! use jot_store::{Store, StoreConfig};
//!
//! let config = ServerConfig::from_env()?;
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let app = routes::build_router(AppState::new(store, config));
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod routes;
pub mod state;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use extract::CurrentUser;
pub use state::AppState;

pub use jot_core;
pub use jot_store;
