//! Collection description and the backend endpoint table.
//!
//! Every collection exposes the same five routes under `/api/{collection}`.
//! Delete is a `GET` on the backend; it is declared here and nowhere else.

#[cfg(test)]
#[path = "resource_test.rs"]
mod resource_test;

use std::fmt::Debug;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::page::PageRequest;

/// Describes one catalog collection to code that is generic over entities.
pub trait Resource: Clone + Debug + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// JSON body accepted by `store` and `update`.
    type Input: Clone + Debug + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Path segment under `/api`, e.g. `"genres"`.
    const COLLECTION: &'static str;
    /// Singular display label, e.g. `"Genre"`.
    const LABEL: &'static str;
    /// Plural display label, e.g. `"Genres"`.
    const PLURAL: &'static str;

    fn id(&self) -> i64;

    /// Write shape seeded from this record, id included.
    fn to_input(&self) -> Self::Input;
}

/// HTTP method of a backend route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
        }
    }
}

/// A backend route: method plus path (query string included).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoint {
    pub method: Method,
    pub path: String,
}

impl Endpoint {
    /// `GET /api/{c}/list?page=&size=`
    #[must_use]
    pub fn list<R: Resource>(request: PageRequest) -> Self {
        Self { method: Method::Get, path: format!("/api/{}/list?{}", R::COLLECTION, request.query()) }
    }

    /// `GET /api/{c}/all`
    #[must_use]
    pub fn all<R: Resource>() -> Self {
        Self { method: Method::Get, path: format!("/api/{}/all", R::COLLECTION) }
    }

    /// `POST /api/{c}/store`
    #[must_use]
    pub fn store<R: Resource>() -> Self {
        Self { method: Method::Post, path: format!("/api/{}/store", R::COLLECTION) }
    }

    /// `PUT /api/{c}/update/{id}`
    #[must_use]
    pub fn update<R: Resource>(id: i64) -> Self {
        Self { method: Method::Put, path: format!("/api/{}/update/{id}", R::COLLECTION) }
    }

    /// `GET /api/{c}/delete/{id}`
    #[must_use]
    pub fn delete<R: Resource>(id: i64) -> Self {
        Self { method: Method::Get, path: format!("/api/{}/delete/{id}", R::COLLECTION) }
    }

    /// Absolute URL against `base_url`; a trailing slash on the base is ignored.
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path)
    }
}
