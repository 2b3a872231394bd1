use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::user_models::{NewUser, User};
use crate::error::{AppError, Result};

/// Accessor for the `users` collection.
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> Result<Vec<User>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>>;

    async fn create(&self, user: NewUser) -> Result<User>;

    /// Puts `message_id` at the front of the user's message list.
    /// Returns `None` when the user does not exist.
    async fn prepend_message(&self, user_id: Uuid, message_id: Uuid) -> Result<Option<User>>;
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at ASC, id ASC")
            .fetch_all(&self.pool)
            .await?;

        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(user)
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, username, password_hash) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(user.id.unwrap_or_else(Uuid::new_v4))
        .bind(&user.username)
        .bind(&user.password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_insert(e, "User"))?;

        Ok(user)
    }

    async fn prepend_message(&self, user_id: Uuid, message_id: Uuid) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET
                messages = array_prepend($1, messages),
                updated_at = NOW()
             WHERE id = $2
             RETURNING *",
        )
        .bind(message_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}
