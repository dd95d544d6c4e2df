//! jot-core: domain types and services for the jot note service
//!
//! This crate provides:
//! - Core domain types (User, Note, and their id newtypes)
//! - Storage traits the services are written against
//! - Password hashing, session tokens, and the authentication service
//! - The ownership-scoped note service
//!
//! Everything here is storage-agnostic: the Postgres implementation of the
//! store traits lives in `jot-store`, and tests run the services against
//! in-memory fakes.

pub mod auth;
pub mod error;
pub mod notes;
pub mod store;
pub mod types;

// Re-export commonly used items at crate root for convenience
pub use auth::{Authenticator, Claims};
pub use error::{Error, Result};
pub use notes::NoteService;
pub use store::{CredentialStore, NewNote, NewUser, NoteStore};
pub use types::{Note, NoteId, User, UserId};
