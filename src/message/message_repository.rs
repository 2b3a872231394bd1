use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use super::message_models::{Message, MessageChanges, NewMessage};
use crate::error::{AppError, Result};

/// Accessor for the `messages` collection.
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// All messages in insertion order.
    async fn find_all(&self) -> Result<Vec<Message>>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>>;

    /// Persists a message, generating an identifier unless one was supplied.
    async fn create(&self, message: NewMessage) -> Result<Message>;

    /// Applies `changes` and returns the stored result, or `None` if no such message exists.
    async fn update(&self, id: Uuid, changes: MessageChanges) -> Result<Option<Message>>;

    /// Removes the message and returns it, or `None` if it did not exist.
    async fn delete(&self, id: Uuid) -> Result<Option<Message>>;
}

#[derive(Clone)]
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>> {
        let messages =
            sqlx::query_as::<_, Message>("SELECT * FROM messages ORDER BY created_at ASC, id ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(messages)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>("SELECT * FROM messages WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(message)
    }

    async fn create(&self, message: NewMessage) -> Result<Message> {
        let message = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (id, title, body, author)
             VALUES ($1, $2, $3, $4)
             RETURNING *",
        )
        .bind(message.id.unwrap_or_else(Uuid::new_v4))
        .bind(&message.title)
        .bind(&message.body)
        .bind(message.author)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::from_insert(e, "Message"))?;

        Ok(message)
    }

    async fn update(&self, id: Uuid, changes: MessageChanges) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(
            "UPDATE messages SET
                title = COALESCE($1, title),
                body = COALESCE($2, body),
                author = COALESCE($3, author),
                updated_at = clock_timestamp()
             WHERE id = $4
             RETURNING *",
        )
        .bind(changes.title)
        .bind(changes.body)
        .bind(changes.author)
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(message)
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>("DELETE FROM messages WHERE id = $1 RETURNING *")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(message)
    }
}
