//! In-process stores used when no database is configured, and by the test suite.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::{mapref::entry::Entry, DashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::{
    error::{AppError, Result},
    message::{Message, MessageChanges, MessageRepository, NewMessage},
    user::{NewUser, User, UserRepository},
};

/// Messages kept in insertion order.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    messages: RwLock<Vec<Message>>,
}

impl InMemoryMessageRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn find_all(&self) -> Result<Vec<Message>> {
        Ok(self.messages.read().await.clone())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Message>> {
        let messages = self.messages.read().await;
        Ok(messages.iter().find(|m| m.id == id).cloned())
    }

    async fn create(&self, message: NewMessage) -> Result<Message> {
        let mut messages = self.messages.write().await;
        let id = message.id.unwrap_or_else(Uuid::new_v4);
        if messages.iter().any(|m| m.id == id) {
            return Err(AppError::Conflict("Message already exists".to_string()));
        }

        let now = Utc::now();
        let message = Message {
            id,
            title: message.title,
            body: message.body,
            author: message.author,
            created_at: now,
            updated_at: now,
        };
        messages.push(message.clone());

        Ok(message)
    }

    async fn update(&self, id: Uuid, changes: MessageChanges) -> Result<Option<Message>> {
        let mut messages = self.messages.write().await;
        let Some(message) = messages.iter_mut().find(|m| m.id == id) else {
            return Ok(None);
        };

        changes.apply(message);
        message.updated_at = Utc::now();

        Ok(Some(message.clone()))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Message>> {
        let mut messages = self.messages.write().await;
        let removed = messages
            .iter()
            .position(|m| m.id == id)
            .map(|index| messages.remove(index));

        Ok(removed)
    }
}

#[derive(Default)]
pub struct InMemoryUserRepository {
    users: DashMap<Uuid, User>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>> {
        let mut users: Vec<User> = self.users.iter().map(|entry| entry.value().clone()).collect();
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(users)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>> {
        Ok(self.users.get(&id).map(|entry| entry.value().clone()))
    }

    async fn create(&self, user: NewUser) -> Result<User> {
        let id = user.id.unwrap_or_else(Uuid::new_v4);
        match self.users.entry(id) {
            Entry::Occupied(_) => Err(AppError::Conflict("User already exists".to_string())),
            Entry::Vacant(slot) => {
                let now = Utc::now();
                let user = User {
                    id,
                    username: user.username,
                    password_hash: user.password_hash,
                    messages: Vec::new(),
                    created_at: now,
                    updated_at: now,
                };
                slot.insert(user.clone());
                Ok(user)
            }
        }
    }

    async fn prepend_message(&self, user_id: Uuid, message_id: Uuid) -> Result<Option<User>> {
        let updated = self.users.get_mut(&user_id).map(|mut entry| {
            let user = entry.value_mut();
            user.messages.insert(0, message_id);
            user.updated_at = Utc::now();
            user.clone()
        });

        Ok(updated)
    }
}
