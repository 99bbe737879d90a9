//! Loads the paginated Unsplash photo feed and maps it into an immutable
//! domain model.
//!
//! - [`feed`] - Endpoint construction, response mapping, and the loader
//! - [`http`] - Transport trait and its `reqwest` implementation
//! - [`config`] - Optional TOML configuration
//! - [`util`] - Base-URL validation

pub mod config;
pub mod feed;
pub mod http;
pub mod util;
