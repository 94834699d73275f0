//! `catalog-admin`: serves the server-rendered catalog admin UI and its WASM bundle.

mod config;
mod error;
mod routes;

use crate::config::HostConfig;
use crate::error::HostError;

#[tokio::main]
async fn main() -> Result<(), HostError> {
    // Allow missing `.env` files without failing.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = HostConfig::from_lookup(|key| std::env::var(key).ok())?;
    let app = routes::app()?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| HostError::Bind { addr: addr.clone(), source })?;

    tracing::info!(port = config.port, "catalog-admin listening");
    axum::serve(listener, app).await.map_err(HostError::Serve)
}
