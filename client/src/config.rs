//! Build-time client configuration.
//!
//! The browser bundle has no process environment, so the backend URL is baked
//! in at compile time from `CATALOG_API_BASE_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Rows requested per page by every list view.
pub const PAGE_SIZE: u32 = 5;

/// Backend base URL, e.g. `http://localhost:8082`.
pub fn api_base_url() -> &'static str {
    resolve_base_url(option_env!("CATALOG_API_BASE_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    match configured {
        Some(url) if !url.trim().is_empty() => url,
        _ => catalog::DEFAULT_API_BASE_URL,
    }
}
