use async_trait::async_trait;
use sqlx::PgPool;
use time::OffsetDateTime;
use uuid::Uuid;

use crate::storage::StoreError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
    /// Ids of the notes this user owns, in attach order.
    pub notes: Vec<Uuid>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Fails with [`StoreError::UsernameTaken`] when the username exists.
    async fn insert(&self, user: NewUser) -> Result<User, StoreError>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError>;

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, StoreError>;
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password_hash: String,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    async fn with_notes(&self, row: UserRow) -> Result<User, StoreError> {
        let notes = sqlx::query_scalar::<_, Uuid>(
            r#"
            SELECT id
            FROM notes
            WHERE owner_id = $1
            ORDER BY seq
            "#,
        )
        .bind(row.id)
        .fetch_all(&self.db)
        .await?;

        Ok(User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: NewUser) -> Result<User, StoreError> {
        let res = sqlx::query_as::<_, UserRow>(
            r#"
            INSERT INTO users (id, username, password_hash)
            VALUES ($1, $2, $3)
            RETURNING id, username, password_hash, created_at, updated_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user.username)
        .bind(user.password_hash)
        .fetch_one(&self.db)
        .await;

        let row = match res {
            Ok(row) => row,
            Err(sqlx::Error::Database(db_error)) if db_error.code().as_deref() == Some("23505") => {
                return Err(StoreError::UsernameTaken);
            }
            Err(e) => return Err(StoreError::Db(e)),
        };

        Ok(User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            notes: Vec::new(),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => self.with_notes(row).await.map(Some),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, user_id: Uuid) -> Result<Option<User>, StoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT id, username, password_hash, created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.db)
        .await?;

        match row {
            Some(row) => self.with_notes(row).await.map(Some),
            None => Ok(None),
        }
    }
}
