use axum::{routing::get, Router};

use super::user_handlers::{create_user, get_user, get_users};
use crate::state::AppState;

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(get_users).post(create_user))
        .route("/:user_id", get(get_user))
}
