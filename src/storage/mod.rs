//! Storage handle shared by every request.
//!
//! The handle bundles one [`NoteStore`] and one [`UserStore`] implementation.
//! Both are chosen once at start-up and passed into [`crate::AppState`]; no
//! code reaches for a global connection.

use std::sync::Arc;

use sqlx::PgPool;
use uuid::Uuid;

use crate::{notes::repo::NoteStore, users::repo::UserStore};

pub mod memory;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Db(#[from] sqlx::Error),
    #[error("username is already taken")]
    UsernameTaken,
    #[error("user {0} does not exist")]
    UnknownOwner(Uuid),
}

#[derive(Clone)]
pub struct Storage {
    pub notes: Arc<dyn NoteStore>,
    pub users: Arc<dyn UserStore>,
}

impl Storage {
    pub fn postgres(db: PgPool) -> Self {
        Self {
            notes: Arc::new(crate::notes::repo::PgNoteStore::new(db.clone())),
            users: Arc::new(crate::users::repo::PgUserStore::new(db)),
        }
    }

    /// Both stores share one in-process map, so note ownership stays
    /// consistent between them.
    pub fn in_memory() -> Self {
        let store = Arc::new(memory::MemoryStore::default());
        Self {
            notes: store.clone(),
            users: store,
        }
    }
}
