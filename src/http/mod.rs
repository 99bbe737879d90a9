//! Transport boundary for the feed loader.
//!
//! [`HttpClient`] is the single capability the loader needs: one GET, one
//! outcome. Any HTTP response, whatever its status, is an `Ok`; only failures
//! to obtain a response at all are errors. [`ReqwestHttpClient`] binds the
//! trait to `reqwest`.

mod reqwest_client;

pub use reqwest_client::ReqwestHttpClient;

use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Raw result of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Failure to obtain an HTTP response.
///
/// The loader does not look at the variant; all of them surface as
/// `FeedLoaderError::Connectivity`.
#[derive(Debug, Error)]
pub enum HttpClientError {
    /// Network-level error (DNS, connection, TLS, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// No response within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),
    /// Body exceeded the configured size limit
    #[error("Response too large (exceeds {0} bytes)")]
    ResponseTooLarge(usize),
    /// The stack produced something that is not a usable response
    /// (e.g. a body shorter than its declared length)
    #[error("Unexpected response: {0}")]
    UnexpectedValues(String),
}

/// Performs a single HTTP GET.
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError>;
}
