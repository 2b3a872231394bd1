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
    state::AppState,
    user::user_dto::{CreateUserRequest, UserEnvelope, UserListResponse},
};

/// List every user
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users", body = UserListResponse)
    )
)]
pub async fn get_users(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let users = state.user_service.list_users().await?;

    Ok((StatusCode::OK, Json(UserListResponse { users })))
}

/// Get one user
#[utoipa::path(
    get,
    path = "/users/{user_id}",
    tag = "users",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "The user, or null when it does not exist", body = UserEnvelope)
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse> {
    let user = state.user_service.get_user(user_id).await?;

    Ok((StatusCode::OK, Json(UserEnvelope { user })))
}

/// Register a user
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequest,
    responses(
        (status = 200, description = "User created", body = crate::user::User),
        (status = 400, description = "Invalid input"),
        (status = 409, description = "User ID already taken")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse> {
    payload.validate()?;

    let user = state.user_service.create_user(payload).await?;
    tracing::info!(user_id = %user.id, "User created");

    Ok((StatusCode::OK, Json(user)))
}
