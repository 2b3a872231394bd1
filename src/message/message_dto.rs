use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::message_models::{Message, MessageChanges, NewMessage};

pub const DELETED_MESSAGE: &str = "Deleted Message";
pub const MISSING_MESSAGE: &str = "message does not exist.";

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateMessageRequest {
    /// Optional caller-chosen identifier.
    #[serde(default, alias = "_id")]
    pub id: Option<Uuid>,
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub body: String,
    pub author: Uuid,
}

impl From<CreateMessageRequest> for NewMessage {
    fn from(req: CreateMessageRequest) -> Self {
        Self {
            id: req.id,
            title: req.title,
            body: req.body,
            author: req.author,
        }
    }
}

#[derive(Debug, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateMessageRequest {
    #[validate(length(min = 1))]
    pub title: Option<String>,
    #[validate(length(min = 1))]
    pub body: Option<String>,
    pub author: Option<Uuid>,
}

impl From<UpdateMessageRequest> for MessageChanges {
    fn from(req: UpdateMessageRequest) -> Self {
        Self {
            title: req.title,
            body: req.body,
            author: req.author,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageListResponse {
    pub messages: Vec<Message>,
}

/// `{ "message": ... }`, with `null` when nothing matched.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageEnvelope {
    pub message: Option<Message>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct DeleteMessageResponse {
    pub message: String,
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
}

impl DeleteMessageResponse {
    pub fn deleted(id: Uuid) -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
            id: Some(id),
        }
    }

    pub fn missing() -> Self {
        Self {
            message: MISSING_MESSAGE.to_string(),
            id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_accepts_underscore_id() {
        let id = Uuid::new_v4();
        let req: CreateMessageRequest = serde_json::from_value(json!({
            "_id": id,
            "title": "Hello World",
            "body": "This is a test message",
            "author": Uuid::new_v4(),
        }))
        .unwrap();
        assert_eq!(req.id, Some(id));
    }

    #[test]
    fn test_create_request_requires_author() {
        let result = serde_json::from_value::<CreateMessageRequest>(json!({
            "title": "Hello World",
            "body": "This is a test message",
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_create_request_rejects_empty_title() {
        let req = CreateMessageRequest {
            id: None,
            title: String::new(),
            body: "body".to_string(),
            author: Uuid::new_v4(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_partial_body() {
        let req: UpdateMessageRequest =
            serde_json::from_value(json!({ "title": "Hello Mars" })).unwrap();
        assert!(req.validate().is_ok());
        assert!(req.body.is_none());
    }

    #[test]
    fn test_delete_responses() {
        let id = Uuid::new_v4();
        assert_eq!(
            serde_json::to_value(DeleteMessageResponse::deleted(id)).unwrap(),
            json!({ "message": "Deleted Message", "_id": id })
        );
        assert_eq!(
            serde_json::to_value(DeleteMessageResponse::missing()).unwrap(),
            json!({ "message": "message does not exist." })
        );
    }

    #[test]
    fn test_envelope_serializes_null() {
        let value = serde_json::to_value(MessageEnvelope { message: None }).unwrap();
        assert_eq!(value, json!({ "message": null }));
    }
}
