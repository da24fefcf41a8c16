use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::storage::StoreError;

#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Note {
    pub id: Uuid,
    pub owner_id: Option<Uuid>,
    pub title: String,
    pub description: String,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone, Default)]
pub struct NewNote {
    pub title: String,
    pub description: String,
}

/// Full replacement of the mutable note fields.
#[derive(Debug, Clone, Default)]
pub struct NoteChanges {
    pub title: String,
    pub description: String,
}

/// Which notes an operation may see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteScope {
    /// Every note, regardless of owner.
    Global,
    /// Only notes attached to this user.
    Owner(Uuid),
}

impl NoteScope {
    pub fn owner(self) -> Option<Uuid> {
        match self {
            NoteScope::Global => None,
            NoteScope::Owner(id) => Some(id),
        }
    }
}

#[async_trait]
pub trait NoteStore: Send + Sync {
    /// Creates the note and, for an owner scope, attaches it to the owner in
    /// the same write.
    async fn insert(&self, scope: NoteScope, note: NewNote) -> Result<Note, StoreError>;

    /// Notes visible in `scope`, in attach order.
    async fn list(&self, scope: NoteScope) -> Result<Vec<Note>, StoreError>;

    async fn find(&self, scope: NoteScope, note_id: Uuid) -> Result<Option<Note>, StoreError>;

    /// Overwrites title and description, refreshes `updated_at` and returns
    /// the new snapshot. `None` when no note matched.
    async fn update(
        &self,
        scope: NoteScope,
        note_id: Uuid,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StoreError>;

    /// Returns whether a note was removed.
    async fn delete(&self, scope: NoteScope, note_id: Uuid) -> Result<bool, StoreError>;

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub struct PgNoteStore {
    db: PgPool,
}

impl PgNoteStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl NoteStore for PgNoteStore {
    async fn insert(&self, scope: NoteScope, note: NewNote) -> Result<Note, StoreError> {
        let res = sqlx::query_as::<_, Note>(
            r#"
            INSERT INTO notes (id, owner_id, title, description)
            VALUES ($1, $2, $3, $4)
            RETURNING id, owner_id, title, description, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(scope.owner())
        .bind(note.title)
        .bind(note.description)
        .fetch_one(&self.db)
        .await;

        match res {
            Ok(note) => Ok(note),
            Err(sqlx::Error::Database(db_error)) if db_error.code().as_deref() == Some("23503") => {
                Err(StoreError::UnknownOwner(scope.owner().unwrap_or_default()))
            }
            Err(e) => Err(StoreError::Db(e)),
        }
    }

    async fn list(&self, scope: NoteScope) -> Result<Vec<Note>, StoreError> {
        let rows = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, owner_id, title, description, created_at, updated_at
            FROM notes
            WHERE ($1::uuid IS NULL OR owner_id = $1)
            ORDER BY seq
            "#,
        )
        .bind(scope.owner())
        .fetch_all(&self.db)
        .await?;

        Ok(rows)
    }

    async fn find(&self, scope: NoteScope, note_id: Uuid) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            SELECT id, owner_id, title, description, created_at, updated_at
            FROM notes
            WHERE id = $1 AND ($2::uuid IS NULL OR owner_id = $2)
            "#,
        )
        .bind(note_id)
        .bind(scope.owner())
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn update(
        &self,
        scope: NoteScope,
        note_id: Uuid,
        changes: NoteChanges,
    ) -> Result<Option<Note>, StoreError> {
        let row = sqlx::query_as::<_, Note>(
            r#"
            UPDATE notes
            SET title = $3, description = $4, updated_at = now()
            WHERE id = $1 AND ($2::uuid IS NULL OR owner_id = $2)
            RETURNING id, owner_id, title, description, created_at, updated_at
            "#,
        )
        .bind(note_id)
        .bind(scope.owner())
        .bind(changes.title)
        .bind(changes.description)
        .fetch_optional(&self.db)
        .await?;

        Ok(row)
    }

    async fn delete(&self, scope: NoteScope, note_id: Uuid) -> Result<bool, StoreError> {
        let res = sqlx::query(
            r#"
            DELETE FROM notes
            WHERE id = $1 AND ($2::uuid IS NULL OR owner_id = $2)
            "#,
        )
        .bind(note_id)
        .bind(scope.owner())
        .execute(&self.db)
        .await?;

        Ok(res.rows_affected() == 1)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query_scalar::<_, i32>("SELECT 1")
            .fetch_one(&self.db)
            .await?;
        Ok(())
    }
}
