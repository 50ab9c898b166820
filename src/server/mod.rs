//! HTTP server: JSON routes over the engine, configured from the command
//! line or environment.

mod config;
mod extract;
mod routes;

pub use config::ServerConfig;
pub use extract::{ApiJson, MalformedBody};
pub use routes::{router, ApiError, AppState};

use tracing::info;

/// Bind and serve until the process is stopped.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.addr()?;
    let app = router(AppState::new(config.seed));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, seed = ?config.seed, "Circle of Life server listening");

    axum::serve(listener, app).await?;
    Ok(())
}
