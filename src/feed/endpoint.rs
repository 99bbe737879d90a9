use std::sync::LazyLock;
use url::Url;

/// Production API host. Paths are appended to this base.
pub const DEFAULT_BASE_URL: &str = "https://api.unsplash.com/";

const PHOTOS_PATH: &str = "photos";

static DEFAULT_BASE: LazyLock<Url> = LazyLock::new(|| {
    Url::parse(DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid absolute URL")
});

/// A logical request against the photo API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// One page of the editorial photo feed.
    ///
    /// No range check is applied; the server decides what an out-of-range
    /// page means.
    Photos { page: i64 },
}

impl Endpoint {
    /// Builds the URL against [`DEFAULT_BASE_URL`].
    pub fn url(&self) -> Url {
        self.url_with_base(&DEFAULT_BASE)
    }

    /// Builds the URL against a caller-supplied base.
    ///
    /// The base path is kept and the endpoint path appended to it; any query
    /// already on the base is replaced.
    pub fn url_with_base(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_fragment(None);
        url.set_query(None);

        match self {
            Endpoint::Photos { page } => {
                let path = format!("{}/{}", base.path().trim_end_matches('/'), PHOTOS_PATH);
                url.set_path(&path);
                url.query_pairs_mut().append_pair("page", &page.to_string());
            }
        }

        url
    }
}
