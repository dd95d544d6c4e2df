//! Note routes: list, create, update, delete.
//!
//! All four require a verified caller and operate only on that caller's
//! notes. Listing returns a bare JSON array, newest first. Deletion
//! answers 204 with an empty body while create and update echo the
//! affected note; that asymmetry is part of the API contract.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, put},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use jot_core::types::{Note, NoteId, UserId};

use crate::error::ApiResult;
use crate::extract::CurrentUser;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct CreateNoteRequest {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateNoteRequest {
    pub text: String,
}

/// Public view of a note.
#[derive(Debug, Serialize)]
pub struct NoteBody {
    pub id: NoteId,
    pub owner: UserId,
    pub text: String,
    pub created: DateTime<Utc>,
}

impl From<Note> for NoteBody {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            owner: note.owner,
            text: note.text,
            created: note.created,
        }
    }
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET /api/notes - all of the caller's notes, newest first.
async fn list_notes(
    State(state): State<AppState>,
    user: CurrentUser,
) -> ApiResult<Json<Vec<NoteBody>>> {
    let notes = state.notes().list(user.id).await?;

    tracing::debug!(user_id = %user.id, count = notes.len(), "Listed notes");

    Ok(Json(notes.into_iter().map(Into::into).collect()))
}

/// POST /api/notes - create a note owned by the caller.
async fn create_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteBody>)> {
    let note = state.notes().create(user.id, &request.text).await?;

    tracing::info!(user_id = %user.id, note_id = %note.id, "Note created");

    Ok((StatusCode::CREATED, Json(note.into())))
}

/// PUT /api/notes/{id} - replace the text of one of the caller's notes.
async fn update_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<Json<NoteBody>> {
    let note = state
        .notes()
        .update(user.id, NoteId::from_uuid(id), &request.text)
        .await?;

    tracing::info!(user_id = %user.id, note_id = %note.id, "Note updated");

    Ok(Json(note.into()))
}

/// DELETE /api/notes/{id} - delete one of the caller's notes.
async fn delete_note(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(id): Path<Uuid>,
) -> ApiResult<StatusCode> {
    state.notes().delete(user.id, NoteId::from_uuid(id)).await?;

    tracing::info!(user_id = %user.id, note_id = %id, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// Build note routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", put(update_note).delete(delete_note))
}
