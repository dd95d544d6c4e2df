//! jot-store: PostgreSQL persistence for the jot note service.
//!
//! Everything lives in two tables, `users` and `notes`, created by an
//! embedded idempotent migration on connect. [`Store`] exposes row-level
//! CRUD over sqlx and implements the jot-core store traits, so the
//! domain services above this crate deal only in domain types.
//!
//! ```rust,ignore
//! use jot_store::{Store, StoreConfig};
//!
//! let store = Store::connect(StoreConfig::from_env()?).await?;
//! let user = store.get_user_by_email("alice@example.com").await?;
//! ```

pub mod error;
pub mod models;
pub mod schema;
pub mod store;

pub use error::{StoreError, StoreResult};
pub use models::{NoteRow, UserRow};
pub use store::{Store, StoreConfig};

pub use jot_core;
