use serde::Serialize;
use url::Url;

/// A single photo entry from one feed page.
///
/// Built once by the response mapper and immutable afterwards. Equality and
/// hashing are structural, including the embedded [`ProfileItem`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct FeedItem {
    id: String,
    description: Option<String>,
    image_url: Url,
    likes: u64,
    profile: ProfileItem,
}

impl FeedItem {
    pub fn new(
        id: impl Into<String>,
        description: Option<String>,
        image_url: Url,
        likes: u64,
        profile: ProfileItem,
    ) -> Self {
        Self {
            id: id.into(),
            description,
            image_url,
            likes,
            profile,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// Caption, if the photo has one. `None` is distinct from `Some("")`.
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// URL of the small preview rendition.
    pub fn image_url(&self) -> &Url {
        &self.image_url
    }

    pub fn likes(&self) -> u64 {
        self.likes
    }

    pub fn profile(&self) -> &ProfileItem {
        &self.profile
    }
}

/// Snapshot of the photo's author as of the feed response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ProfileItem {
    id: String,
    name: String,
    username: String,
    image_url: Url,
}

impl ProfileItem {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        username: impl Into<String>,
        image_url: Url,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            username: username.into(),
            image_url,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// URL of the medium avatar rendition.
    pub fn image_url(&self) -> &Url {
        &self.image_url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn profile(id: &str) -> ProfileItem {
        ProfileItem::new(
            id,
            "Jane Doe",
            "janedoe",
            Url::parse("https://images.unsplash.com/profile-1?w=64").unwrap(),
        )
    }

    fn item(id: &str, profile: ProfileItem) -> FeedItem {
        FeedItem::new(
            id,
            Some("a caption".to_string()),
            Url::parse("https://images.unsplash.com/photo-1?w=400").unwrap(),
            12,
            profile,
        )
    }

    #[test]
    fn test_structural_equality_includes_profile() {
        assert_eq!(item("a", profile("p1")), item("a", profile("p1")));
        assert_ne!(item("a", profile("p1")), item("a", profile("p2")));
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(item("a", profile("p1")));
        set.insert(item("a", profile("p1")));
        set.insert(item("b", profile("p1")));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_absent_description_differs_from_empty() {
        let p = profile("p1");
        let url = Url::parse("https://images.unsplash.com/photo-1").unwrap();
        let absent = FeedItem::new("a", None, url.clone(), 0, p.clone());
        let empty = FeedItem::new("a", Some(String::new()), url, 0, p);

        assert_eq!(absent.description(), None);
        assert_eq!(empty.description(), Some(""));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_items_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FeedItem>();
        assert_send_sync::<ProfileItem>();
    }
}
