pub mod password;
pub mod routes;
pub mod user_dto;
pub mod user_handlers;
pub mod user_models;
pub mod user_repository;
pub mod user_service;

pub use routes::user_routes;
pub use user_models::{NewUser, User};
pub use user_repository::{PgUserRepository, UserRepository};
pub use user_service::UserService;
