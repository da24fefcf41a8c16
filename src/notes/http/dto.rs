use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::notes::repo::{NewNote, Note, NoteChanges};

#[derive(Deserialize, ToSchema)]
pub struct CreateNoteRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl From<CreateNoteRequest> for NewNote {
    fn from(req: CreateNoteRequest) -> Self {
        Self {
            title: req.title,
            description: req.description,
        }
    }
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNoteRequest {
    #[serde(default)]
    pub new_title: String,
    #[serde(default)]
    pub new_description: String,
}

impl From<UpdateNoteRequest> for NoteChanges {
    fn from(req: UpdateNoteRequest) -> Self {
        Self {
            title: req.new_title,
            description: req.new_description,
        }
    }
}

#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NoteDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

impl From<Note> for NoteDto {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            description: note.description,
            created_at: note.created_at,
            updated_at: note.updated_at,
        }
    }
}

#[derive(Serialize, ToSchema)]
pub struct NoteCreatedResponse {
    pub message: &'static str,
    pub note: NoteDto,
}

#[derive(Serialize, ToSchema)]
pub struct NoteResponse {
    pub note: NoteDto,
}

#[derive(Serialize, ToSchema)]
pub struct NotesResponse {
    pub notes: Vec<NoteDto>,
}

#[derive(Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: &'static str,
}
