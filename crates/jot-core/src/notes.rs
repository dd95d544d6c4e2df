//! Ownership-scoped CRUD over a note store.

use crate::error::{Error, Result};
use crate::store::{NewNote, NoteStore};
use crate::types::{Note, NoteId, UserId};

/// Note operations for a verified caller.
///
/// Every method takes the caller's user id, and mutations rely on the
/// store filtering by note id and owner in one statement. A note that
/// exists under someone else's account therefore looks exactly like a
/// note that does not exist.
#[derive(Debug, Clone)]
pub struct NoteService<N> {
    store: N,
}

impl<N: NoteStore> NoteService<N> {
    /// Create a note service over `store`.
    pub fn new(store: N) -> Self {
        Self { store }
    }

    /// All notes owned by `owner`, newest first. Empty vec when none.
    pub async fn list(&self, owner: UserId) -> Result<Vec<Note>> {
        self.store.list_notes(owner).await
    }

    /// Create a note. Text is stored verbatim but must not be blank.
    pub async fn create(&self, owner: UserId, text: &str) -> Result<Note> {
        if text.trim().is_empty() {
            return Err(Error::validation("note text is required"));
        }

        self.store
            .insert_note(NewNote {
                owner,
                text: text.to_string(),
            })
            .await
    }

    /// Replace a note's text, keeping its creation timestamp.
    pub async fn update(&self, owner: UserId, id: NoteId, text: &str) -> Result<Note> {
        if text.trim().is_empty() {
            return Err(Error::validation("note text is required"));
        }

        self.store
            .update_note_text(id, owner, text)
            .await?
            .ok_or(Error::NotFound)
    }

    /// Delete a note. Deleting the same id twice reports not found the
    /// second time.
    pub async fn delete(&self, owner: UserId, id: NoteId) -> Result<()> {
        self.store
            .delete_note(id, owner)
            .await?
            .map(|_| ())
            .ok_or(Error::NotFound)
    }
}
