//! Integration tests for the note service over an in-memory note store.
//!
//! The scenarios that matter here are ordering (newest first, stable under
//! edits) and isolation: one user's notes must be invisible and untouchable
//! through another user's id, with cross-owner access indistinguishable
//! from absence.

mod common;

use common::MemoryStore;
use jot_core::error::Error;
use jot_core::notes::NoteService;
use jot_core::types::{NoteId, UserId};

// ============================================================================
// Create and list
// ============================================================================

#[tokio::test]
async fn list_is_empty_for_new_user() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    assert!(notes.list(owner).await.unwrap().is_empty());
}

#[tokio::test]
async fn create_then_list_newest_first() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let first = notes.create(owner, "first").await.unwrap();
    let second = notes.create(owner, "second").await.unwrap();
    let third = notes.create(owner, "third").await.unwrap();

    let listed = notes.list(owner).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[tokio::test]
async fn create_rejects_blank_text() {
    let store = MemoryStore::new();
    let notes = NoteService::new(store.clone());
    let owner = UserId::new();

    for text in ["", "   ", "\n\t"] {
        let result = notes.create(owner, text).await;
        assert!(
            matches!(result, Err(Error::Validation(_))),
            "expected validation failure for {text:?}"
        );
    }

    // Rejected creates must leave no trace in the store.
    assert_eq!(store.note_count(), 0);
}

#[tokio::test]
async fn create_preserves_text_verbatim() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let note = notes.create(owner, "  padded text  ").await.unwrap();
    assert_eq!(note.text, "  padded text  ");
}

// ============================================================================
// Update
// ============================================================================

#[tokio::test]
async fn update_replaces_text_and_keeps_identity() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let created = notes.create(owner, "draft").await.unwrap();
    let updated = notes.update(owner, created.id, "final").await.unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.text, "final");
    assert_eq!(updated.created, created.created);
}

#[tokio::test]
async fn update_does_not_change_list_order() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let first = notes.create(owner, "first").await.unwrap();
    let second = notes.create(owner, "second").await.unwrap();

    // Editing the older note must not promote it.
    notes.update(owner, first.id, "first, edited").await.unwrap();

    let listed = notes.list(owner).await.unwrap();
    let ids: Vec<_> = listed.iter().map(|n| n.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

#[tokio::test]
async fn update_rejects_blank_text() {
    let store = MemoryStore::new();
    let notes = NoteService::new(store.clone());
    let owner = UserId::new();

    let created = notes.create(owner, "keep me").await.unwrap();
    let result = notes.update(owner, created.id, "   ").await;

    assert!(matches!(result, Err(Error::Validation(_))));
    assert_eq!(store.stored_note(created.id).unwrap().text, "keep me");
}

#[tokio::test]
async fn update_missing_note_is_not_found() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let result = notes.update(owner, NoteId::new(), "text").await;
    assert!(matches!(result, Err(Error::NotFound)));
}

// ============================================================================
// Delete
// ============================================================================

#[tokio::test]
async fn delete_removes_only_the_target() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let keep = notes.create(owner, "keep").await.unwrap();
    let discard = notes.create(owner, "discard").await.unwrap();

    notes.delete(owner, discard.id).await.unwrap();

    let listed = notes.list(owner).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, keep.id);
}

#[tokio::test]
async fn delete_twice_reports_not_found() {
    let notes = NoteService::new(MemoryStore::new());
    let owner = UserId::new();

    let note = notes.create(owner, "ephemeral").await.unwrap();
    notes.delete(owner, note.id).await.unwrap();

    let result = notes.delete(owner, note.id).await;
    assert!(matches!(result, Err(Error::NotFound)));
}

// ============================================================================
// Ownership isolation
// ============================================================================

#[tokio::test]
async fn list_sees_only_own_notes() {
    let notes = NoteService::new(MemoryStore::new());
    let alice = UserId::new();
    let bob = UserId::new();

    notes.create(alice, "alice 1").await.unwrap();
    notes.create(bob, "bob 1").await.unwrap();
    notes.create(alice, "alice 2").await.unwrap();

    let alice_notes = notes.list(alice).await.unwrap();
    assert_eq!(alice_notes.len(), 2);
    assert!(alice_notes.iter().all(|n| n.owner == alice));

    let bob_notes = notes.list(bob).await.unwrap();
    assert_eq!(bob_notes.len(), 1);
    assert_eq!(bob_notes[0].text, "bob 1");
}

#[tokio::test]
async fn update_through_wrong_owner_is_not_found() {
    let store = MemoryStore::new();
    let notes = NoteService::new(store.clone());
    let alice = UserId::new();
    let bob = UserId::new();

    let note = notes.create(alice, "alice's note").await.unwrap();
    let result = notes.update(bob, note.id, "hijacked").await;

    // Someone else's note is indistinguishable from a missing one.
    assert!(matches!(result, Err(Error::NotFound)));
    assert_eq!(store.stored_note(note.id).unwrap().text, "alice's note");
}

#[tokio::test]
async fn delete_through_wrong_owner_is_not_found() {
    let store = MemoryStore::new();
    let notes = NoteService::new(store.clone());
    let alice = UserId::new();
    let bob = UserId::new();

    let note = notes.create(alice, "alice's note").await.unwrap();
    let result = notes.delete(bob, note.id).await;

    assert!(matches!(result, Err(Error::NotFound)));
    assert!(store.stored_note(note.id).is_some());
}
