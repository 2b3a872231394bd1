mod db;
mod error;
mod memory;
mod message;
mod routes;
mod state;
mod user;

use std::sync::Arc;

use db::{create_pool, ensure_schema};
use memory::{InMemoryMessageRepository, InMemoryUserRepository};
use message::{MessageRepository, PgMessageRepository};
use routes::create_router;
use state::{AppState, Config};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use user::{PgUserRepository, UserRepository};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenv::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,message_board=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let (message_repository, user_repository) = build_repositories(&config).await?;

    let state = AppState::new(&config, message_repository, user_repository);
    let app = create_router(state);

    let addr = config.bind_address();
    tracing::info!("Server starting on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn build_repositories(
    config: &Config,
) -> anyhow::Result<(Arc<dyn MessageRepository>, Arc<dyn UserRepository>)> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!("DATABASE_URL not set, data will be kept in memory only");
        let messages: Arc<dyn MessageRepository> = Arc::new(InMemoryMessageRepository::new());
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepository::new());
        return Ok((messages, users));
    };

    tracing::info!("Connecting to database...");
    let db = create_pool(database_url, config.database_max_connections).await?;

    tracing::info!("Ensuring schema...");
    ensure_schema(&db).await?;

    let messages: Arc<dyn MessageRepository> = Arc::new(PgMessageRepository::new(db.clone()));
    let users: Arc<dyn UserRepository> = Arc::new(PgUserRepository::new(db));
    Ok((messages, users))
}
