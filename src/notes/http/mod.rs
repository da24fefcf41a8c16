use axum::{
    Router,
    routing::{get, post},
};

use crate::AppState;
mod dto;
pub(crate) mod handlers;

pub use dto::{
    CreateNoteRequest, MessageResponse, NoteCreatedResponse, NoteDto, NoteResponse,
    NotesResponse, UpdateNoteRequest,
};
pub use handlers::{create_note, delete_note, get_note, list_notes, update_note};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_note).get(list_notes))
        .route("/{id}", get(get_note).put(update_note).delete(delete_note))
}
