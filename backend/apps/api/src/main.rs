//! API Server Entry Point
//!
//! Uses `anyhow` for startup errors; request-level errors are rendered by
//! the auth and catalog crates.

use std::net::SocketAddr;

use api::{AppConfig, build_app};
use auth::presentation::handlers::AuthAppState;
use auth::{InMemoryCredentialStore, PgCredentialStore};
use catalog::InMemoryCheeseRepository;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,auth=info,catalog=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    let cheeses = InMemoryCheeseRepository::seeded();

    let app = match &config.database_url {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(5)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            let state = AuthAppState::new(PgCredentialStore::new(pool), config.auth.clone());
            build_app(state, cheeses, &config.client_url, &config.static_dir)?
        }
        None => {
            tracing::warn!("DATABASE_URL not set, users are kept in memory only");

            let state = AuthAppState::new(InMemoryCredentialStore::new(), config.auth.clone());
            build_app(state, cheeses, &config.client_url, &config.static_dir)?
        }
    };

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
