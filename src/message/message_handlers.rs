use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    error::Result,
    message::message_dto::{
        CreateMessageRequest, DeleteMessageResponse, MessageEnvelope, MessageListResponse,
        UpdateMessageRequest,
    },
    state::AppState,
};

/// List every message
#[utoipa::path(
    get,
    path = "/messages",
    tag = "messages",
    responses(
        (status = 200, description = "All messages in insertion order", body = MessageListResponse)
    )
)]
pub async fn get_messages(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let messages = state.message_service.list_messages().await?;

    Ok((StatusCode::OK, Json(MessageListResponse { messages })))
}

/// Get one message
#[utoipa::path(
    get,
    path = "/messages/{message_id}",
    tag = "messages",
    params(
        ("message_id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "The message, or null when it does not exist", body = MessageEnvelope),
        (status = 400, description = "Malformed message ID")
    )
)]
pub async fn get_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let message = state.message_service.get_message(message_id).await?;

    Ok((StatusCode::OK, Json(MessageEnvelope { message })))
}

/// Create a message and attach it to its author
#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = CreateMessageRequest,
    responses(
        (status = 200, description = "Message created", body = crate::message::Message),
        (status = 400, description = "Invalid input"),
        (status = 404, description = "Author not found"),
        (status = 409, description = "Message ID already taken")
    )
)]
pub async fn create_message(
    State(state): State<AppState>,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let message = state.message_service.create_message(payload).await?;
    tracing::debug!(message_id = %message.id, "Message created");

    Ok((StatusCode::OK, Json(message)))
}

/// Merge the given fields into a message
#[utoipa::path(
    put,
    path = "/messages/{message_id}",
    tag = "messages",
    params(
        ("message_id" = Uuid, Path, description = "Message ID")
    ),
    request_body = UpdateMessageRequest,
    responses(
        (status = 200, description = "The updated message, or null when it does not exist", body = MessageEnvelope),
        (status = 400, description = "Invalid input")
    )
)]
pub async fn update_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
    Json(payload): Json<UpdateMessageRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let message = state
        .message_service
        .update_message(message_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(MessageEnvelope { message })))
}

/// Delete a message
#[utoipa::path(
    delete,
    path = "/messages/{message_id}",
    tag = "messages",
    params(
        ("message_id" = Uuid, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Deletion outcome; a missing message is reported in the text", body = DeleteMessageResponse),
        (status = 400, description = "Malformed message ID")
    )
)]
pub async fn delete_message(
    State(state): State<AppState>,
    Path(message_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let response = match state.message_service.delete_message(message_id).await? {
        Some(_) => {
            tracing::debug!(%message_id, "Message deleted");
            DeleteMessageResponse::deleted(message_id)
        }
        None => DeleteMessageResponse::missing(),
    };

    Ok((StatusCode::OK, Json(response)))
}
