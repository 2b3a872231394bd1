use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::message::message_dto::{CreateMessageRequest, UpdateMessageRequest};
use crate::message::message_models::Message;
use crate::message::message_repository::MessageRepository;
use crate::user::UserRepository;

/// Message use cases, including the write that touches the author's message list.
#[derive(Clone)]
pub struct MessageService {
    messages: Arc<dyn MessageRepository>,
    users: Arc<dyn UserRepository>,
}

impl MessageService {
    pub fn new(messages: Arc<dyn MessageRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { messages, users }
    }

    pub async fn list_messages(&self) -> Result<Vec<Message>> {
        self.messages.find_all().await
    }

    pub async fn get_message(&self, message_id: Uuid) -> Result<Option<Message>> {
        self.messages.find_by_id(message_id).await
    }

    /// Persists the message, then records it at the front of the author's list.
    ///
    /// The two writes are not atomic. If the second one fails, or the author
    /// does not exist, the message is deleted again before the error is
    /// returned. Readers may briefly see the message in between.
    pub async fn create_message(&self, payload: CreateMessageRequest) -> Result<Message> {
        let message = self.messages.create(payload.into()).await?;

        let outcome = match self.users.prepend_message(message.author, message.id).await {
            Ok(Some(_)) => return Ok(message),
            Ok(None) => AppError::NotFound("Author not found".to_string()),
            Err(e) => e,
        };

        tracing::warn!(
            message_id = %message.id,
            author = %message.author,
            "Author update failed, removing message: {}",
            outcome
        );
        if let Err(e) = self.messages.delete(message.id).await {
            tracing::error!(
                message_id = %message.id,
                "Failed to remove orphaned message: {:?}",
                e
            );
        }

        Err(outcome)
    }

    pub async fn update_message(
        &self,
        message_id: Uuid,
        payload: UpdateMessageRequest,
    ) -> Result<Option<Message>> {
        self.messages.update(message_id, payload.into()).await
    }

    /// Returns the removed message, if there was one. The author's list is left as is.
    pub async fn delete_message(&self, message_id: Uuid) -> Result<Option<Message>> {
        self.messages.delete(message_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::{InMemoryMessageRepository, InMemoryUserRepository};
    use crate::user::{NewUser, User};
    use async_trait::async_trait;

    /// User store whose writes always fail.
    struct BrokenUserRepository;

    #[async_trait]
    impl UserRepository for BrokenUserRepository {
        async fn find_all(&self) -> Result<Vec<User>> {
            Ok(Vec::new())
        }

        async fn find_by_id(&self, _id: Uuid) -> Result<Option<User>> {
            Ok(None)
        }

        async fn create(&self, _user: NewUser) -> Result<User> {
            Err(AppError::InternalError)
        }

        async fn prepend_message(&self, _user_id: Uuid, _message_id: Uuid) -> Result<Option<User>> {
            Err(AppError::Database(sqlx::Error::PoolTimedOut))
        }
    }

    fn request(author: Uuid) -> CreateMessageRequest {
        CreateMessageRequest {
            id: None,
            title: "SecondMessage".to_string(),
            body: "Body of sample Message".to_string(),
            author,
        }
    }

    #[tokio::test]
    async fn test_create_links_message_to_author() {
        let messages = Arc::new(InMemoryMessageRepository::new());
        let users = Arc::new(InMemoryUserRepository::new());
        let author = users
            .create(NewUser {
                id: None,
                username: "me1".to_string(),
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let service = MessageService::new(messages.clone(), users.clone());

        let message = service.create_message(request(author.id)).await.unwrap();

        let author = users.find_by_id(author.id).await.unwrap().unwrap();
        assert_eq!(author.messages, vec![message.id]);
        assert!(messages.find_by_id(message.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_create_with_missing_author_leaves_no_orphan() {
        let messages = Arc::new(InMemoryMessageRepository::new());
        let service = MessageService::new(messages.clone(), Arc::new(InMemoryUserRepository::new()));

        let err = service.create_message(request(Uuid::new_v4())).await.unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert!(messages.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_rolls_back_when_user_write_fails() {
        let messages = Arc::new(InMemoryMessageRepository::new());
        let service = MessageService::new(messages.clone(), Arc::new(BrokenUserRepository));

        let err = service.create_message(request(Uuid::new_v4())).await.unwrap_err();

        assert!(matches!(err, AppError::Database(_)));
        assert!(messages.find_all().await.unwrap().is_empty());
    }
}
