use anyhow::{Context, Result};
use std::net::SocketAddr;
use tracing::info;
use word_translator::{config::Config, server};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored when variables come from the environment)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("word_translator=info".parse()?),
        )
        .init();

    // Load configuration from environment
    let config = Config::from_env()?;
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));

    let state = server::AppState::new(config)?;
    let app = server::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Server running on port {}", addr.port());
    axum::serve(listener, app).await?;

    Ok(())
}
