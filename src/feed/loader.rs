use super::endpoint::Endpoint;
use super::item::FeedItem;
use super::mapper;
use crate::http::HttpClient;
use std::sync::Arc;
use thiserror::Error;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Public failure kinds of a feed load.
///
/// Deliberately closed: the underlying cause is logged, not returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FeedLoaderError {
    /// The request never produced an HTTP response
    #[error("Could not reach the photo service")]
    Connectivity,
    /// A response arrived but its status or payload was unusable
    #[error("Photo service returned invalid data")]
    InvalidData,
}

pub type LoadFeedResult = Result<Vec<FeedItem>, FeedLoaderError>;

/// Continuation invoked at most once with the outcome of a load.
pub type LoadCompletion = Box<dyn FnOnce(LoadFeedResult) + Send + 'static>;

/// Source of feed pages.
pub trait FeedLoader: Send + Sync {
    /// Starts loading `page` and returns immediately. `completion` runs once,
    /// on whatever task finishes the request.
    fn load(&self, page: i64, completion: LoadCompletion);
}

/// [`FeedLoader`] that fetches pages over an [`HttpClient`].
///
/// Each `load` spawns a Tokio task, so it must be called from within a Tokio
/// runtime. Dropping the loader suppresses every completion still in flight:
/// the pending request is abandoned and the continuation is never invoked.
pub struct RemoteFeedLoader<C: HttpClient + ?Sized> {
    base_url: Url,
    client: Arc<C>,
    dropped: CancellationToken,
}

impl<C: HttpClient + ?Sized + 'static> RemoteFeedLoader<C> {
    pub fn new(base_url: Url, client: Arc<C>) -> Self {
        Self {
            base_url,
            client,
            dropped: CancellationToken::new(),
        }
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }
}

impl<C: HttpClient + ?Sized + 'static> FeedLoader for RemoteFeedLoader<C> {
    fn load(&self, page: i64, completion: LoadCompletion) {
        let url = Endpoint::Photos { page }.url_with_base(&self.base_url);
        let client = Arc::clone(&self.client);
        // The task holds only the token, never the loader itself
        let dropped = self.dropped.clone();

        tracing::debug!(page = page, url = %url, "Loading feed page");

        tokio::spawn(async move {
            let outcome = tokio::select! {
                biased;
                _ = dropped.cancelled() => None,
                result = client.get(&url) => Some(result),
            };

            let Some(result) = outcome else {
                tracing::debug!(page = page, "Loader dropped, discarding in-flight request");
                return;
            };
            if dropped.is_cancelled() {
                tracing::debug!(page = page, "Loader dropped, suppressing completion");
                return;
            }

            let result = match result {
                Ok(response) => match mapper::map(&response.body, response.status) {
                    Ok(items) => {
                        tracing::debug!(page = page, items = items.len(), "Feed page loaded");
                        Ok(items)
                    }
                    Err(e) => {
                        tracing::warn!(
                            page = page,
                            status = response.status,
                            error = %e,
                            "Rejected feed response"
                        );
                        Err(FeedLoaderError::InvalidData)
                    }
                },
                Err(e) => {
                    tracing::warn!(page = page, error = %e, "Feed request failed");
                    Err(FeedLoaderError::Connectivity)
                }
            };

            completion(result);
        });
    }
}

impl<C: HttpClient + ?Sized> Drop for RemoteFeedLoader<C> {
    fn drop(&mut self) {
        self.dropped.cancel();
    }
}
