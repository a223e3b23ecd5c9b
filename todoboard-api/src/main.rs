//! # Todoboard API Server
//!
//! Binary entry point. Loads configuration from the environment, connects
//! to Postgres, runs pending migrations, wires up the Firebase identity
//! provider and serves the router until a shutdown signal arrives.

use std::sync::Arc;

use todoboard_api::app::{build_router, AppState};
use todoboard_api::config::Config;
use todoboard_shared::auth::{FirebaseAuth, FirebaseConfig};
use todoboard_shared::db::migrations::run_migrations;
use todoboard_shared::db::pool::{close_pool, create_pool, DatabaseConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "todoboard_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "Todoboard API server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    run_migrations(&pool).await?;

    let identity = Arc::new(FirebaseAuth::new(FirebaseConfig {
        auth_url: config.firebase.auth_url.clone(),
        api_key: config.firebase.api_key.clone(),
        timeout_seconds: config.firebase.timeout_seconds,
    })?);

    let bind_address = config.bind_address();
    let state = AppState::new(pool.clone(), config, identity);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server listening on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    close_pool(pool).await;
    tracing::info!("Shutdown complete");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", error);
        return;
    }
    tracing::info!("Shutdown signal received");
}
