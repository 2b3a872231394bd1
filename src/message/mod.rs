pub mod message_dto;
pub mod message_handlers;
pub mod message_models;
pub mod message_repository;
pub mod message_service;
pub mod routes;

pub use message_models::{Message, MessageChanges, NewMessage};
pub use message_repository::{MessageRepository, PgMessageRepository};
pub use message_service::MessageService;
pub use routes::message_routes;
