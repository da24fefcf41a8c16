use uuid::Uuid;

use crate::{
    error::{ApiError, ApiResult},
    notes::repo::{NewNote, Note, NoteChanges, NoteScope, NoteStore},
};

pub async fn create(notes: &dyn NoteStore, scope: NoteScope, note: NewNote) -> ApiResult<Note> {
    let note = notes.insert(scope, note).await?;
    tracing::debug!(note_id = %note.id, ?scope, "note created");
    Ok(note)
}

pub async fn list(notes: &dyn NoteStore, scope: NoteScope) -> ApiResult<Vec<Note>> {
    Ok(notes.list(scope).await?)
}

pub async fn get(notes: &dyn NoteStore, scope: NoteScope, note_id: Uuid) -> ApiResult<Note> {
    notes.find(scope, note_id).await?.ok_or(ApiError::NotFound)
}

/// Replaces both title and description; a missing note is `NotFound`.
pub async fn update(
    notes: &dyn NoteStore,
    scope: NoteScope,
    note_id: Uuid,
    changes: NoteChanges,
) -> ApiResult<Note> {
    notes
        .update(scope, note_id, changes)
        .await?
        .ok_or(ApiError::NotFound)
}

/// Deleting a note that is already gone is not an error.
pub async fn delete(notes: &dyn NoteStore, scope: NoteScope, note_id: Uuid) -> ApiResult<()> {
    let deleted = notes.delete(scope, note_id).await?;
    if !deleted {
        tracing::debug!(%note_id, ?scope, "delete matched no note");
    }
    Ok(())
}
