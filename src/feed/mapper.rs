//! Validates an HTTP response and decodes the photo-list payload.
//!
//! The wire shape is mirrored by private `Remote*` structs that serde decodes
//! directly; a second `TryFrom` step pulls the required size variants out of
//! the URL maps and builds the domain records. Every failure along the way is
//! a [`MapperError`], which the loader collapses into `InvalidData`.

use super::item::{FeedItem, ProfileItem};
use serde::Deserialize;
use std::collections::HashMap;
use thiserror::Error;
use url::Url;

const OK_200: u16 = 200;

const FEED_IMAGE_SIZE: &str = "small";
const PROFILE_IMAGE_SIZE: &str = "medium";

/// Why a response could not be turned into feed items.
///
/// Internal detail for logging; callers of the loader only ever see
/// `FeedLoaderError::InvalidData`.
#[derive(Debug, Error)]
pub enum MapperError {
    /// Response status was anything other than 200
    #[error("Unexpected HTTP status {0}")]
    UnexpectedStatus(u16),
    /// Body was not a JSON array of the expected item shape
    #[error("Malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
    /// A size-keyed URL map lacked the variant we need
    #[error("Missing '{size}' entry in '{field}'")]
    MissingImageSize {
        field: &'static str,
        size: &'static str,
    },
    /// The required size variant was not an absolute URL
    #[error("Invalid URL in '{field}': {source}")]
    InvalidImageUrl {
        field: &'static str,
        source: url::ParseError,
    },
    /// A profile string that must be non-empty was empty
    #[error("Empty value for '{0}'")]
    EmptyField(&'static str),
}

/// Maps a raw response into feed items.
///
/// Items keep their payload order. An empty JSON array is a valid, empty
/// page. One bad item fails the whole page.
pub fn map(data: &[u8], status: u16) -> Result<Vec<FeedItem>, MapperError> {
    if status != OK_200 {
        return Err(MapperError::UnexpectedStatus(status));
    }

    let remote: Vec<RemoteFeedItem> = serde_json::from_slice(data)?;
    remote.into_iter().map(FeedItem::try_from).collect()
}

#[derive(Debug, Deserialize)]
struct RemoteFeedItem {
    id: String,
    #[serde(default)]
    description: Option<String>,
    urls: HashMap<String, String>,
    likes: u64,
    user: RemoteProfileItem,
}

#[derive(Debug, Deserialize)]
struct RemoteProfileItem {
    id: String,
    name: String,
    username: String,
    profile_image: HashMap<String, String>,
}

impl TryFrom<RemoteFeedItem> for FeedItem {
    type Error = MapperError;

    fn try_from(remote: RemoteFeedItem) -> Result<Self, Self::Error> {
        let image_url = sized_url(&remote.urls, "urls", FEED_IMAGE_SIZE)?;
        let profile = ProfileItem::try_from(remote.user)?;

        Ok(FeedItem::new(
            remote.id,
            remote.description,
            image_url,
            remote.likes,
            profile,
        ))
    }
}

impl TryFrom<RemoteProfileItem> for ProfileItem {
    type Error = MapperError;

    fn try_from(remote: RemoteProfileItem) -> Result<Self, Self::Error> {
        let id = non_empty(remote.id, "user.id")?;
        let name = non_empty(remote.name, "user.name")?;
        let username = non_empty(remote.username, "user.username")?;
        let image_url = sized_url(&remote.profile_image, "user.profile_image", PROFILE_IMAGE_SIZE)?;

        Ok(ProfileItem::new(id, name, username, image_url))
    }
}

/// Picks one rendition out of a size-keyed URL map. Other sizes are ignored.
fn sized_url(
    urls: &HashMap<String, String>,
    field: &'static str,
    size: &'static str,
) -> Result<Url, MapperError> {
    let raw = urls
        .get(size)
        .ok_or(MapperError::MissingImageSize { field, size })?;
    Url::parse(raw).map_err(|source| MapperError::InvalidImageUrl { field, source })
}

fn non_empty(value: String, field: &'static str) -> Result<String, MapperError> {
    if value.is_empty() {
        return Err(MapperError::EmptyField(field));
    }
    Ok(value)
}
