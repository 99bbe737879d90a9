use super::{HttpClient, HttpClientError, HttpResponse};
use async_trait::async_trait;
use futures::StreamExt;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// [`HttpClient`] backed by a shared `reqwest::Client`.
///
/// Every request carries `Authorization: Client-ID <key>` when an access key
/// is configured. Status codes are not interpreted here.
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
    access_key: Option<SecretString>,
    timeout: Duration,
    max_response_bytes: usize,
}

impl ReqwestHttpClient {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);
    pub const DEFAULT_MAX_RESPONSE_BYTES: usize = 10 * 1024 * 1024; // 10MB

    pub fn new(client: reqwest::Client, access_key: Option<SecretString>) -> Self {
        if access_key.is_none() {
            tracing::warn!("No access key configured, requests will be sent unauthenticated");
        }

        Self {
            client,
            access_key,
            timeout: Self::DEFAULT_TIMEOUT,
            max_response_bytes: Self::DEFAULT_MAX_RESPONSE_BYTES,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_max_response_bytes(mut self, limit: usize) -> Self {
        self.max_response_bytes = limit;
        self
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &Url) -> Result<HttpResponse, HttpClientError> {
        let mut request = self.client.get(url.clone());

        // SEC-002: the key is exposed only into the header, never into logs
        if let Some(key) = &self.access_key {
            tracing::trace!("Access key authentication configured");
            request = request.header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", key.expose_secret()),
            );
        }

        // One deadline covers connect, headers and the full body
        let exchange = async {
            let response = request.send().await.map_err(HttpClientError::Network)?;

            let status = response.status().as_u16();
            tracing::debug!(url = %url, status = status, "Received response");

            let body = read_limited_bytes(response, self.max_response_bytes).await?;
            Ok::<_, HttpClientError>(HttpResponse { status, body })
        };

        tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| HttpClientError::Timeout(self.timeout))?
    }
}

async fn read_limited_bytes(
    response: reqwest::Response,
    limit: usize,
) -> Result<Vec<u8>, HttpClientError> {
    // Fast path: check Content-Length header
    if let Some(len) = response.content_length() {
        if len > limit as u64 {
            return Err(HttpClientError::ResponseTooLarge(limit));
        }
    }

    let mut bytes = Vec::new();
    let mut stream = response.bytes_stream();

    // SEC-004: saturating_add keeps the size check from overflowing
    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(classify_body_error)?;
        if bytes.len().saturating_add(chunk.len()) > limit {
            return Err(HttpClientError::ResponseTooLarge(limit));
        }
        bytes.extend_from_slice(&chunk);
    }

    Ok(bytes)
}

/// A body that fails after the status line arrived (truncated, undecodable)
/// is an unusable response, not a connectivity failure.
fn classify_body_error(err: reqwest::Error) -> HttpClientError {
    if err.is_body() || err.is_decode() {
        HttpClientError::UnexpectedValues(format!("unreadable response body: {err}"))
    } else {
        HttpClientError::Network(err)
    }
}
