//! In-memory store fakes for exercising the core services without a
//! database.

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use jot_core::error::{Error, Result};
use jot_core::store::{CredentialStore, NewNote, NewUser, NoteStore};
use jot_core::types::{Note, NoteId, User, UserId};

/// In-memory implementation of both store traits.
///
/// Rows live in insertion order; `list_notes` reverses that order, which
/// matches the newest-first contract as long as inserts happen one at a
/// time (always true in these tests). Clones share the same underlying
/// storage, so a test can hand one clone to a service and keep another
/// for direct inspection.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    users: Mutex<Vec<User>>,
    notes: Mutex<Vec<Note>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.inner.users.lock().unwrap().len()
    }

    /// Number of stored notes across all owners.
    pub fn note_count(&self) -> usize {
        self.inner.notes.lock().unwrap().len()
    }

    /// Direct lookup of a stored user record, bypassing the service layer.
    pub fn stored_user(&self, email: &str) -> Option<User> {
        self.inner
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned()
    }

    /// Direct lookup of a stored note record, bypassing the service layer.
    pub fn stored_note(&self, id: NoteId) -> Option<Note> {
        self.inner
            .notes
            .lock()
            .unwrap()
            .iter()
            .find(|n| n.id == id)
            .cloned()
    }
}

#[async_trait]
impl CredentialStore for MemoryStore {
    async fn insert_user(&self, user: NewUser) -> Result<User> {
        let mut users = self.inner.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Err(Error::DuplicateUser);
        }

        let record = User {
            id: UserId::new(),
            email: user.email,
            password_hash: user.password_hash,
            created: chrono::Utc::now(),
        };
        users.push(record.clone());
        Ok(record)
    }

    async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .inner
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn find_user_by_id(&self, id: UserId) -> Result<Option<User>> {
        Ok(self
            .inner
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == id)
            .cloned())
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert_note(&self, note: NewNote) -> Result<Note> {
        let record = Note {
            id: NoteId::new(),
            owner: note.owner,
            text: note.text,
            created: chrono::Utc::now(),
        };
        self.inner.notes.lock().unwrap().push(record.clone());
        Ok(record)
    }

    async fn list_notes(&self, owner: UserId) -> Result<Vec<Note>> {
        Ok(self
            .inner
            .notes
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.owner == owner)
            .rev()
            .cloned()
            .collect())
    }

    async fn update_note_text(
        &self,
        id: NoteId,
        owner: UserId,
        text: &str,
    ) -> Result<Option<Note>> {
        let mut notes = self.inner.notes.lock().unwrap();
        match notes.iter_mut().find(|n| n.id == id && n.owner == owner) {
            Some(note) => {
                note.text = text.to_string();
                Ok(Some(note.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_note(&self, id: NoteId, owner: UserId) -> Result<Option<Note>> {
        let mut notes = self.inner.notes.lock().unwrap();
        match notes.iter().position(|n| n.id == id && n.owner == owner) {
            Some(idx) => Ok(Some(notes.remove(idx))),
            None => Ok(None),
        }
    }
}
