//! Error type shared by every backend call site.
//!
//! The UI never distinguishes these variants for the user (every failure
//! becomes a per-operation message), but logs and the CLI do.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Failure talking to the catalog backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (DNS, connection refused, CORS).
    #[error("request failed: {0}")]
    Network(String),
    /// The backend answered with a non-2xx status.
    #[error("backend responded with status {0}")]
    Status(u16),
    /// The response body was not the expected JSON shape.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The call was made where no HTTP transport exists (server-side render).
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Status code carried by [`ApiError::Status`], if any.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status(code) => Some(*code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
