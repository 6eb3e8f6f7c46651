//! Static site server
//!
//! Serves the compiled Leptos bundle (`ui/dist`) from the binary, built on
//! Axum. Unknown paths fall back to `index.html` so the client-side view
//! model can take over.
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check
//! - `GET /api/guides` - Bundled wellness guides as JSON
//! - `GET /*` - Embedded UI assets

/// Request handlers.
pub mod handlers;
/// Router configuration.
pub mod routes;

use crate::utils::config::SiteConfig;
use std::net::SocketAddr;
use tracing::info;

/// Bind and serve until the process is stopped
pub async fn serve(config: &SiteConfig) -> std::io::Result<()> {
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Serving site on http://{}", addr);
    axum::serve(listener, routes::create_router()).await
}
