use thiserror::Error;
use url::Url;

/// Errors that can occur while validating the API base URL.
#[derive(Error, Debug)]
pub enum UrlValidationError {
    /// The URL string could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    /// The URL uses a scheme other than http or https.
    #[error("Unsupported scheme: {0} (only http/https allowed)")]
    UnsupportedScheme(String),
    /// The URL has no host component.
    #[error("URL has no host")]
    MissingHost,
    /// SEC-003: Plain HTTP to a non-local host would expose the access key.
    #[error("Insecure base URL: HTTPS required (except localhost for testing)")]
    InsecureBaseUrl,
}

/// Validates a base URL for the photo API.
///
/// Accepts `https` URLs with a host. Plain `http` is accepted only for
/// loopback hosts (`localhost`, `127.0.0.1`, `[::1]`) so local mock servers
/// work, since every request carries the access key.
///
/// # Examples
///
/// ```
/// use unsplash_feed::util::validate_base_url;
///
/// assert!(validate_base_url("https://api.unsplash.com/").is_ok());
/// assert!(validate_base_url("http://127.0.0.1:8080").is_ok());
/// assert!(validate_base_url("http://api.unsplash.com/").is_err());
/// assert!(validate_base_url("file:///etc/passwd").is_err());
/// ```
pub fn validate_base_url(url_str: &str) -> Result<Url, UrlValidationError> {
    let url = Url::parse(url_str)?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => return Err(UrlValidationError::UnsupportedScheme(scheme.to_owned())),
    }

    let host = url.host_str().ok_or(UrlValidationError::MissingHost)?;

    // SEC-003: Enforce HTTPS so the Authorization header never crosses the
    // network in clear text; loopback stays open for local mock servers.
    if url.scheme() == "http" && !is_loopback_host(host) {
        tracing::error!(base_url = %url, "Rejecting non-HTTPS base URL");
        return Err(UrlValidationError::InsecureBaseUrl);
    }

    Ok(url)
}

fn is_loopback_host(host: &str) -> bool {
    if host == "localhost" {
        return true;
    }

    // Strip brackets from IPv6 addresses for parsing
    let host_for_parse = host
        .strip_prefix('[')
        .and_then(|h| h.strip_suffix(']'))
        .unwrap_or(host);

    host_for_parse
        .parse::<std::net::IpAddr>()
        .is_ok_and(|ip| ip.is_loopback())
}
