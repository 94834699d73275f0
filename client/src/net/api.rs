//! REST calls against the catalog backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning [`ApiError::Unavailable`], since the
//! pages only fetch after hydration.
//!
//! Every function is generic over [`Resource`], so the three collections share
//! one implementation. Routes come from [`Endpoint`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use catalog::{ApiError, Endpoint, Page, PageRequest, Resource};

/// `GET /api/{c}/list?page=&size=`
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails, the status is not 2xx, or the
/// body is not a page envelope.
pub async fn fetch_page<R: Resource>(request: PageRequest) -> Result<Page<R>, ApiError> {
    let endpoint = Endpoint::list::<R>(request);
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(&endpoint, None).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/{c}/all`: the whole collection, unpaginated.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the body is not a JSON array.
pub async fn fetch_all<R: Resource>() -> Result<Vec<R>, ApiError> {
    let endpoint = Endpoint::all::<R>();
    #[cfg(feature = "hydrate")]
    {
        let resp = dispatch(&endpoint, None).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// `POST /api/{c}/store`. Returns the created record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the input or the reply is malformed.
pub async fn store<R: Resource>(input: &R::Input) -> Result<R, ApiError> {
    let endpoint = Endpoint::store::<R>();
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(input)?;
        let resp = dispatch(&endpoint, Some(&body)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, input);
        Err(ApiError::Unavailable)
    }
}

/// `PUT /api/{c}/update/{id}`. Returns the updated record.
///
/// # Errors
///
/// Returns an [`ApiError`] if the backend rejects the input or the reply is malformed.
pub async fn update<R: Resource>(id: i64, input: &R::Input) -> Result<R, ApiError> {
    let endpoint = Endpoint::update::<R>(id);
    #[cfg(feature = "hydrate")]
    {
        let body = serde_json::to_value(input)?;
        let resp = dispatch(&endpoint, Some(&body)).await?;
        decode(resp).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, input);
        Err(ApiError::Unavailable)
    }
}

/// `GET /api/{c}/delete/{id}`. The response body is ignored.
///
/// # Errors
///
/// Returns an [`ApiError`] if the request fails or the status is not 2xx.
pub async fn delete<R: Resource>(id: i64) -> Result<(), ApiError> {
    let endpoint = Endpoint::delete::<R>(id);
    #[cfg(feature = "hydrate")]
    {
        dispatch(&endpoint, None).await?;
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = endpoint;
        Err(ApiError::Unavailable)
    }
}

/// `"METHOD url"` label used in log lines.
pub fn describe(endpoint: &Endpoint) -> String {
    format!("{} {}", endpoint.method.as_str(), endpoint.url(crate::config::api_base_url()))
}

#[cfg(feature = "hydrate")]
async fn dispatch(
    endpoint: &Endpoint,
    body: Option<&serde_json::Value>,
) -> Result<gloo_net::http::Response, ApiError> {
    use catalog::Method;
    use gloo_net::http::Request;

    let url = endpoint.url(crate::config::api_base_url());
    let builder = match endpoint.method {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
    };
    let sent = match body {
        Some(body) => builder.json(body).map_err(network_error)?.send().await,
        None => builder.send().await,
    };
    let resp = sent.map_err(network_error)?;
    if !resp.ok() {
        log::warn!("{} -> {}", describe(endpoint), resp.status());
        return Err(ApiError::Status(resp.status()));
    }
    Ok(resp)
}

#[cfg(feature = "hydrate")]
async fn decode<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(err.to_string())
}
