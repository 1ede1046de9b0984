//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use api::app::build_app;
use api::config::{ApiConfig, DEFAULT_LOG_FILTER};
use auth::{InMemoryUserRepository, PgUserRepository};
use axum::Router;
use qa::{InMemoryQaRepository, PgQaRepository};
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
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
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ApiConfig::from_env()?;
    tracing::debug!(?config, "Configuration loaded");

    if config.jwt_secret.is_none() {
        tracing::warn!("JWT_SECRET is not set; login and protected routes will answer 500");
    }

    let cors = config.cors_layer();
    let auth_config = config.auth_config();

    let app: Router = match config.database_url.as_deref() {
        Some(database_url) => {
            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .connect(database_url)
                .await?;

            tracing::info!("Connected to database");

            // Run migrations
            sqlx::migrate!("../../../database/migrations")
                .run(&pool)
                .await?;

            tracing::info!("Migrations completed");

            build_app(
                PgUserRepository::new(pool.clone()),
                PgQaRepository::new(pool),
                auth_config,
                cors,
            )
        }
        None => {
            tracing::warn!("DATABASE_URL is not set; using in-memory storage");
            build_app(
                InMemoryUserRepository::new(),
                InMemoryQaRepository::new(),
                auth_config,
                cors,
            )
        }
    };

    // Start server
    let addr = config.bind_addr;
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
