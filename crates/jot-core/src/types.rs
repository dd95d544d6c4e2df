//! Core data types for the jot note service.
//!
//! Two records exist in this system: a `User` (credential record) and a
//! `Note` (a unit of user-owned text). Both carry UUID-backed identifiers
//! wrapped in newtypes so an owner id can never be confused with a note id
//! in an ownership-scoped call.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Defines a UUID-backed id newtype.
///
/// Ids serialize as plain UUID strings, display as their hyphenated form,
/// and parse back from it.
macro_rules! uuid_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Mint a fresh random id (UUID v4).
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Borrow the inner UUID.
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.parse::<Uuid>().map(Self)
            }
        }
    };
}

uuid_id! {
    /// Identifier of a user, assigned by the credential store at creation.
    UserId
}

uuid_id! {
    /// Identifier of a note, assigned by the note store at creation.
    NoteId
}

/// A credential record.
///
/// The email is stored and compared case-sensitively. The password hash is
/// an argon2 PHC string and never leaves the server; this type deliberately
/// does not implement `Serialize`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub password_hash: String,
    pub created: DateTime<Utc>,
}

/// A unit of user-owned text.
///
/// `owner` is a non-owning reference to the user the note belongs to. The
/// creation timestamp is fixed at insert and never changes, so list order
/// is stable under edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Note {
    pub id: NoteId,
    pub owner: UserId,
    pub text: String,
    pub created: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_id_display_parses_back() {
        let id = UserId::new();
        let parsed: UserId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn note_id_wraps_uuid() {
        let uuid = Uuid::new_v4();
        let id = NoteId::from_uuid(uuid);
        assert_eq!(id.as_uuid(), &uuid);
    }

    #[test]
    fn ids_serialize_as_bare_strings() {
        let id = NoteId::from_uuid(Uuid::nil());
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", Uuid::nil()));
    }

    #[test]
    fn rejects_malformed_id_strings() {
        assert!("not-a-uuid".parse::<NoteId>().is_err());
    }
}
