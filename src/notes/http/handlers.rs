use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use uuid::Uuid;

use crate::{
    AppState,
    error::ApiResult,
    notes::{repo::NoteScope, service},
};

use super::dto::{
    CreateNoteRequest, MessageResponse, NoteCreatedResponse, NoteResponse, NotesResponse,
    UpdateNoteRequest,
};

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created", body = NoteCreatedResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 403, description = "Forbidden", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn create_note(
    scope: NoteScope,
    State(state): State<AppState>,
    Json(request): Json<CreateNoteRequest>,
) -> ApiResult<(StatusCode, Json<NoteCreatedResponse>)> {
    let note = service::create(state.storage.notes.as_ref(), scope, request.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(NoteCreatedResponse {
            message: "Note Created",
            note: note.into(),
        }),
    ))
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Notes visible to the caller", body = NotesResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 403, description = "Forbidden", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn list_notes(
    scope: NoteScope,
    State(state): State<AppState>,
) -> ApiResult<(StatusCode, Json<NotesResponse>)> {
    let rows = service::list(state.storage.notes.as_ref(), scope).await?;
    let notes = rows.into_iter().map(Into::into).collect();

    Ok((StatusCode::OK, Json(NotesResponse { notes })))
}

#[utoipa::path(
    get,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note", body = NoteResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 403, description = "Forbidden", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn get_note(
    scope: NoteScope,
    State(state): State<AppState>,
    Path(note_id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<NoteResponse>)> {
    let note = service::get(state.storage.notes.as_ref(), scope, note_id).await?;

    Ok((StatusCode::OK, Json(NoteResponse { note: note.into() })))
}

#[utoipa::path(
    put,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Note updated", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 403, description = "Forbidden", body = crate::error::ErrorBody),
        (status = 404, description = "Note not found", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn update_note(
    scope: NoteScope,
    State(state): State<AppState>,
    Path(note_id): Path<Uuid>,
    Json(request): Json<UpdateNoteRequest>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    service::update(state.storage.notes.as_ref(), scope, note_id, request.into()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Note updated successfully",
        }),
    ))
}

#[utoipa::path(
    delete,
    path = "/notes/{id}",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note deleted, or already absent", body = MessageResponse),
        (status = 401, description = "Unauthorized", body = crate::error::ErrorBody),
        (status = 403, description = "Forbidden", body = crate::error::ErrorBody),
        (status = 500, description = "Internal server error", body = crate::error::ErrorBody)
    ),
    security(
        ("bearer_auth" = [])
    ),
    tag = "Notes"
)]
pub async fn delete_note(
    scope: NoteScope,
    State(state): State<AppState>,
    Path(note_id): Path<Uuid>,
) -> ApiResult<(StatusCode, Json<MessageResponse>)> {
    service::delete(state.storage.notes.as_ref(), scope, note_id).await?;

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Note Deleted",
        }),
    ))
}
