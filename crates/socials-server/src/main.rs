//! Binary entrypoint for the socials HTTP server.
//!
//! Loads an optional `.env`, then reads configuration from environment
//! variables (see [`socials_server::config`]). Log filtering follows
//! `RUST_LOG`, defaulting to `info`.

use tracing_subscriber::EnvFilter;

use socials_server::config::ServerConfig;
use socials_server::router::build_router;
use socials_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine.
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "loaded environment file");
    }

    let config = ServerConfig::from_env()?;
    let state = AppState::new(&config)?;
    let app = build_router(state);

    let addr = config.bind_addr();
    tracing::info!(
        env_state = %config.env_state,
        backend = %config.backend,
        "socials server starting on {}",
        addr
    );

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
