//! # HTTP Retrieval Utilities
//!
//! A thin asynchronous API client wrapper around `reqwest`. It handles base
//! URL joining, status inspection and JSON decoding, and reports failures
//! through one typed error. Every call is a single attempt: no retry
//! middleware, no backoff, no per-request timeout.

use reqwest::Url;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Failure of a provider fetch.
///
/// Errors carry their origin (the URL involved) and nothing else; callers
/// either treat them as fatal or log and drop them.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request path could not be joined onto the client's base URL.
    #[error("invalid request path {path:?}: {source}")]
    InvalidPath {
        /// The offending relative path.
        path: String,
        #[source]
        source: url::ParseError,
    },
    /// The request never completed: connection, DNS or body-read failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        /// The full URL that was requested.
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The provider answered outside the 2xx range.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// The full URL that was requested.
        url: String,
        /// The numeric HTTP status code.
        status: u16,
    },
    /// The provider answered 2xx but the body did not decode to the expected shape.
    #[error("response from {url} could not be decoded: {source}")]
    Decode {
        /// The full URL that was requested.
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// A standardized container for API responses.
///
/// Wraps the deserialized data along with the status of the HTTP
/// transaction, so callers can distinguish an HTTP-level failure from a
/// transport one without losing the error body the server sent.
#[derive(Debug)]
pub struct ApiResponse<T> {
    /// The full URL that was requested.
    pub url: String,
    /// The successfully deserialized response body, if any.
    pub data: Option<T>,
    /// The raw error body returned by the server if the request failed.
    pub error_body: Option<String>,
    /// The numeric HTTP status code.
    pub status: u16,
    /// Indicates if the status code was in the 2xx range.
    pub success: bool,
}

/// A minimal asynchronous HTTP client for JSON GET endpoints.
///
/// Holds a shared `reqwest::Client` (connection pooling across calls) and
/// the base URL all relative paths are joined onto.
pub struct ApiClient {
    /// The underlying HTTP client, reused across all calls.
    inner: reqwest::Client,
    /// The base URL to which all relative paths are joined.
    base_url: Url,
}

impl ApiClient {
    /// Creates a new `ApiClient`.
    ///
    /// # Arguments
    /// * `base_url` - The absolute base URL for the API (e.g. "https://api.example.com/v1/").
    ///
    /// # Panics
    /// Panics if the `base_url` is not a valid absolute URL.
    pub fn new(base_url: &str) -> Self {
        let url = Url::parse(base_url).expect("Invalid Base URL (must be absolute)");
        Self {
            inner: reqwest::Client::new(),
            base_url: url,
        }
    }

    /// Performs one GET request and decodes the body as JSON.
    ///
    /// A non-2xx answer is not an `Err`: it comes back as an `ApiResponse`
    /// with `success == false` and the raw error body, so callers can decide
    /// how to surface it.
    ///
    /// # Errors
    /// `FetchError::InvalidPath` if `path` cannot be joined onto the base URL,
    /// `FetchError::Transport` if the request or body read fails, and
    /// `FetchError::Decode` if a 2xx body is not valid JSON for `T`.
    pub async fn get_json<T>(&self, path: &str) -> Result<ApiResponse<T>, FetchError>
    where
        T: DeserializeOwned,
    {
        let full_url = self
            .base_url
            .join(path)
            .map_err(|source| FetchError::InvalidPath {
                path: path.to_string(),
                source,
            })?;
        let url_text = full_url.to_string();

        let response = self
            .inner
            .get(full_url)
            .send()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_text.clone(),
                source,
            })?;
        let status = response.status();

        if !status.is_success() {
            // Capture the error body as a string for logging by the caller.
            let error_body = response.text().await.ok();
            return Ok(ApiResponse {
                url: url_text,
                data: None,
                error_body,
                status: status.as_u16(),
                success: false,
            });
        }

        // Read the full body first so a decode failure can be told apart
        // from a transport one.
        let body = response
            .text()
            .await
            .map_err(|source| FetchError::Transport {
                url: url_text.clone(),
                source,
            })?;
        let data = serde_json::from_str::<T>(&body).map_err(|source| FetchError::Decode {
            url: url_text.clone(),
            source,
        })?;

        Ok(ApiResponse {
            url: url_text,
            data: Some(data),
            error_body: None,
            status: status.as_u16(),
            success: true,
        })
    }
}
