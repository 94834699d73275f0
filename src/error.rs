//! Host startup and serve failures.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum HostError {
    #[error("invalid PORT {raw:?}: expected an integer in 1..=65535")]
    InvalidPort { raw: String },
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },
    #[error("server failed: {0}")]
    Serve(#[source] std::io::Error),
}
