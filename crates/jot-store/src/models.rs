//! Database models for the storage layer.
//!
//! These types map directly to database rows and are used for sqlx
//! queries. They are separate from the domain types in jot-core so the
//! column layout can evolve without touching the services.

use chrono::{DateTime, Utc};
use jot_core::types::{Note, NoteId, User, UserId};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row for the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct UserRow {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: UserId::from_uuid(row.id),
            email: row.email,
            password_hash: row.password_hash,
            created: row.created,
        }
    }
}

/// Database row for the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct NoteRow {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl From<NoteRow> for Note {
    fn from(row: NoteRow) -> Self {
        Self {
            id: NoteId::from_uuid(row.id),
            owner: UserId::from_uuid(row.owner_id),
            text: row.text,
            created: row.created,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_row_conversion() {
        let id = Uuid::new_v4();
        let now = Utc::now();
        let row = UserRow {
            id,
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$...".to_string(),
            created: now,
        };

        let user: User = row.into();
        assert_eq!(user.id, UserId::from_uuid(id));
        assert_eq!(user.email, "alice@example.com");
        assert_eq!(user.created, now);
    }

    #[test]
    fn test_note_row_conversion() {
        let id = Uuid::new_v4();
        let owner = Uuid::new_v4();
        let row = NoteRow {
            id,
            owner_id: owner,
            text: "remember the milk".to_string(),
            created: Utc::now(),
        };

        let note: Note = row.into();
        assert_eq!(note.id, NoteId::from_uuid(id));
        assert_eq!(note.owner, UserId::from_uuid(owner));
        assert_eq!(note.text, "remember the milk");
    }
}
