use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Message {
    #[serde(rename = "_id")]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    /// Identifier of the authoring user. Not checked against `users`.
    pub author: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields for a message about to be persisted.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub id: Option<Uuid>,
    pub title: String,
    pub body: String,
    pub author: Uuid,
}

/// Merge-update: `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default)]
pub struct MessageChanges {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<Uuid>,
}

impl MessageChanges {
    pub fn apply(self, message: &mut Message) {
        if let Some(title) = self.title {
            message.title = title;
        }
        if let Some(body) = self.body {
            message.body = body;
        }
        if let Some(author) = self.author {
            message.author = author;
        }
    }
}
