use crate::{
    message::{
        self,
        message_dto::{
            CreateMessageRequest, DeleteMessageResponse, MessageEnvelope, MessageListResponse,
            UpdateMessageRequest,
        },
        message_models::Message,
    },
    state::AppState,
    user::{
        self,
        user_dto::{CreateUserRequest, UserEnvelope, UserListResponse},
        user_models::User,
    },
};
use axum::Router;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        message::message_handlers::get_messages,
        message::message_handlers::get_message,
        message::message_handlers::create_message,
        message::message_handlers::update_message,
        message::message_handlers::delete_message,
        user::user_handlers::get_users,
        user::user_handlers::get_user,
        user::user_handlers::create_user,
    ),
    components(
        schemas(
            Message,
            CreateMessageRequest,
            UpdateMessageRequest,
            MessageListResponse,
            MessageEnvelope,
            DeleteMessageResponse,
            User,
            CreateUserRequest,
            UserListResponse,
            UserEnvelope,
        )
    ),
    tags(
        (name = "messages", description = "Message board endpoints"),
        (name = "users", description = "Message authors")
    )
)]
struct ApiDoc;

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .nest("/messages", message::message_routes())
        .nest("/users", user::user_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
