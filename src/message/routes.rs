use axum::{routing::get, Router};

use super::message_handlers::{
    create_message, delete_message, get_message, get_messages, update_message,
};
use crate::state::AppState;

pub fn message_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_messages).post(create_message))
        .route(
            "/:message_id",
            get(get_message).put(update_message).delete(delete_message),
        )
}
