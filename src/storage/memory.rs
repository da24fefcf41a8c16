//! In-process store used when no database is configured, and by the HTTP tests.

use async_trait::async_trait;
use parking_lot::RwLock;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::{
    notes::repo::{NewNote, Note, NoteChanges, NoteScope, NoteStore},
    storage::StoreError,
    users::repo::{NewUser, User, UserStore},
};

#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    notes: Vec<Note>,
    users: Vec<User>,
}

fn visible(note: &Note, scope: NoteScope) -> bool {
    match scope {
        NoteScope::Global => true,
        NoteScope::Owner(owner) => note.owner_id == Some(owner),
    }
}

#[async_trait]
impl NoteStore for MemoryStore {
    async fn insert(&self, scope: NoteScope, note: NewNote) -> Result<Note, StoreError> {
        let mut inner = self.inner.write();
        let now = OffsetDateTime::now_utc();
        let note = Note {
            id: Uuid::new_v4(),
            owner_id: scope.owner(),
            title: note.title,
            description: note.description,
            created_at: now,
            updated_at: now,
        };

        if let NoteScope::Owner(owner) = scope {
            let user = inner
                .users
                .iter_mut()
                .find(|u| u.id == owner)
                .ok_or(StoreError::UnknownOwner(owner))?;
            user.notes.push(note.id);
        }
        inner.notes.push(note.clone());

        Ok(note)
    }

    async fn list(&self, scope: NoteScope) -> Result<Vec<Note>, StoreError> {
        let inner = self.inner.read();
        let notes = match scope {
            NoteScope::Global => inner.notes.clone(),
            NoteScope::Owner(owner) => {
                let Some(user) = inner.users.iter().find(|u| u.id == owner) else {
                    return Ok(Vec::new());
                };
                user.notes
                    .iter()
                    .filter_map(|id| inner.notes.iter().find(|n| n.id == *id))
                    .filter(|n| visible(n, scope))
                    .cloned()
                    .collect()
            }
        };

        Ok(notes)
    }

    async fn find(&self, scope: NoteScope, note_id: Uuid) -> Result<Option<Note>, StoreError> {
        let inner = self.inner.read();
        Ok(inner
            .notes
            .iter()
            .find(|n| n.id == note_id && visible(n, scope))
            .cloned())
    }

    async fn update(
        &self,
        scope: NoteScope,
        note_id: Uuid,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StoreError> {
        let mut inner = self.inner.write();
        let Some(note) = inner
            .notes
            .iter_mut()
            .find(|n| n.id == note_id && visible(n, scope))
        else {
            return Ok(None);
        };

        note.title = changes.title;
        note.description = changes.description;
        note.updated_at = OffsetDateTime::now_utc();

        Ok(Some(note.clone()))
    }

    async fn delete(&self, scope: NoteScope, note_id: Uuid) -> Result<bool, StoreError> {
        let mut inner = self.inner.write();
        let Some(pos) = inner
            .notes
            .iter()
            .position(|n| n.id == note_id && visible(n, scope))
        else {
            return Ok(false);
        };

        let removed = inner.notes.remove(pos);
        if let Some(owner) = removed.owner_id {
            if let Some(user) = inner.users.iter_mut().find(|u| u.id == owner) {
                user.notes.retain(|id| *id != removed.id);
            }
        }

        Ok(true)
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let mut inner = self.inner.write();
        if inner.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::UsernameTaken);
        }

        let now = OffsetDateTime::now_utc();
        let user = User {
            id: Uuid::new_v4(),
            username: user.username,
            password_hash: user.password_hash,
            notes: Vec::new(),
            created_at: now,
            updated_at: now,
        };
        inner.users.push(user.clone());

        Ok(user)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, StoreError> {
        let inner = self.inner.read();
        Ok(inner.users.iter().find(|u| u.id == user_id).cloned())
    }
}
