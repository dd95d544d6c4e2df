//! Storage traits the core services are written against.
//!
//! The services only need a handful of operations, so the traits stay
//! narrow: credentials on one side, notes on the other. The Postgres
//! implementation lives in `jot-store`; tests substitute in-memory fakes.
//!
//! Note mutations take both the note id and the caller's user id so a
//! backend can apply ownership as part of the same filter that finds the
//! row. `update_note_text` and `delete_note` return `Ok(None)` when no row
//! matched, which covers both "no such note" and "not yours" without the
//! backend having to tell them apart.

use async_trait::async_trait;
use crate::error::Result;
use crate::types::{Note, NoteId, User, UserId};

/// Input for creating a user. The password is already hashed by the time
/// it reaches a store.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
}

/// Input for creating a note.
#[derive(Debug, Clone)]
pub struct NewNote {
    pub owner: UserId,
    pub text: String,
}

/// Persistence for credential records.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Insert a new user. Fails with [`Error::DuplicateUser`] if the email
    /// is already taken.
    ///
    /// [`Error::DuplicateUser`]: crate::Error::DuplicateUser
    async fn insert_user(&self, user: NewUser) -> Result<User>;

    /// Look up a user by exact email.
    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>>;

    /// Look up a user by id.
    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>>;
}

/// Persistence for notes.
#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Insert a new note and return the stored record.
    async fn insert_note(&self, note: NewNote) -> Result<Note>;

    /// List all notes owned by `owner`, newest first.
    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>>;

    /// Replace the text of a note owned by `owner`. Returns the updated
    /// record, or `None` if no note matched both id and owner.
    async fn update_note_text(
        &self,
        id: NoteId,
        owner: UserId,
        text: &str,
    ) -> Result<Option<Note>>;

    /// Delete a note owned by `owner`. Returns the deleted record, or
    /// `None` if no note matched both id and owner.
    async fn delete_note(&self, id: NoteId, owner: UserId) -> Result<Option<Note>>;
}
