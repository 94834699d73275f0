//! Shared catalog model and REST endpoint table.
//!
//! This crate owns the wire representation used by both `client` (browser UI)
//! and `cli`. Entities are plain serde structs in the backend's camelCase JSON
//! shape; the [`Resource`] trait describes each collection so list, form and
//! request logic can be written once for Books, Genres and Publishers.

pub mod error;
pub mod model;
pub mod page;
pub mod resource;

pub use error::ApiError;
pub use model::{Book, BookInput, Genre, NameInput, Publisher, name_for};
pub use page::{Page, PageRequest};
pub use resource::{Endpoint, Method, Resource};

/// Backend base URL used when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8082";
