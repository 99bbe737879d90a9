//! Remote photo-feed loading.
//!
//! This module turns "give me page N" into a list of typed photo records:
//!
//! - **Endpoint**: builds the versioned API URL for a page
//! - **Mapper**: validates the HTTP status and decodes the JSON payload
//! - **Loader**: ties endpoint, transport and mapper together behind one
//!   asynchronous `load` with a two-kind error
//!
//! # Architecture
//!
//! - [`endpoint`] - Pure URL construction
//! - [`item`] - Immutable domain records ([`FeedItem`], [`ProfileItem`])
//! - [`mapper`] - Response validation and schema-checked decoding
//! - [`loader`] - [`FeedLoader`] trait and the HTTP-backed [`RemoteFeedLoader`]
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use unsplash_feed::feed::{Endpoint, FeedLoader, RemoteFeedLoader};
//! use unsplash_feed::http::ReqwestHttpClient;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let client = Arc::new(ReqwestHttpClient::new(reqwest::Client::new(), None));
//! let base = url::Url::parse(unsplash_feed::feed::DEFAULT_BASE_URL).unwrap();
//! let loader = RemoteFeedLoader::new(base, client);
//!
//! let (tx, rx) = tokio::sync::oneshot::channel();
//! loader.load(1, Box::new(move |result| {
//!     let _ = tx.send(result);
//! }));
//! let items = rx.await.unwrap();
//! # }
//! ```

pub mod endpoint;
pub mod item;
pub mod loader;
pub mod mapper;

pub use endpoint::{Endpoint, DEFAULT_BASE_URL};
pub use item::{FeedItem, ProfileItem};
pub use loader::{FeedLoader, FeedLoaderError, LoadCompletion, LoadFeedResult, RemoteFeedLoader};
pub use mapper::MapperError;
