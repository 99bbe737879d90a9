//! End-to-end tests: `RemoteFeedLoader` over `ReqwestHttpClient`.
//!
//! The HTTP side is served by a local wiremock server. The live test against
//! the real API is ignored by default and needs `UNSPLASH_ACCESS_KEY`.

use secrecy::SecretString;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::oneshot;
use unsplash_feed::feed::{FeedLoader, FeedLoaderError, LoadFeedResult, RemoteFeedLoader};
use unsplash_feed::http::ReqwestHttpClient;
use url::Url;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn load(loader: &impl FeedLoader, page: i64) -> LoadFeedResult {
    let (tx, rx) = oneshot::channel();
    loader.load(
        page,
        Box::new(move |result| {
            let _ = tx.send(result);
        }),
    );
    tokio::time::timeout(Duration::from_secs(5), rx)
        .await
        .expect("load did not complete")
        .expect("completion dropped")
}

fn loader_for(base: &str, client: ReqwestHttpClient) -> RemoteFeedLoader<ReqwestHttpClient> {
    RemoteFeedLoader::new(Url::parse(base).unwrap(), Arc::new(client))
}

fn keyed_client() -> ReqwestHttpClient {
    ReqwestHttpClient::new(
        reqwest::Client::new(),
        Some(SecretString::from("test-access-key".to_string())),
    )
}

fn photo_json(id: &str) -> serde_json::Value {
    json!({
        "id": id,
        "description": null,
        "alt_description": "a mountain at dusk",
        "urls": {
            "raw": format!("https://images.unsplash.com/photo-{id}?ixid=1"),
            "full": format!("https://images.unsplash.com/photo-{id}?q=85"),
            "regular": format!("https://images.unsplash.com/photo-{id}?w=1080"),
            "small": format!("https://images.unsplash.com/photo-{id}?w=400"),
            "thumb": format!("https://images.unsplash.com/photo-{id}?w=200"),
        },
        "likes": 42,
        "user": {
            "id": format!("u-{id}"),
            "username": "photographer",
            "name": "Some Photographer",
            "profile_image": {
                "small": "https://images.unsplash.com/profile-1?w=32",
                "medium": "https://images.unsplash.com/profile-1?w=64",
                "large": "https://images.unsplash.com/profile-1?w=128",
            },
        },
    })
}

#[tokio::test]
async fn test_loads_page_with_authorization() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/photos"))
        .and(query_param("page", "3"))
        .and(header("Authorization", "Client-ID test-access-key"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([photo_json("a"), photo_json("b")])),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let loader = loader_for(&mock_server.uri(), keyed_client());
    let items = load(&loader, 3).await.unwrap();

    assert_eq!(items.len(), 2);
    assert_eq!(items[0].id(), "a");
    assert_eq!(items[1].id(), "b");
    assert_eq!(items[0].description(), None);
    assert_eq!(items[0].likes(), 42);
    assert_eq!(
        items[0].image_url().as_str(),
        "https://images.unsplash.com/photo-a?w=400"
    );
    assert_eq!(items[0].profile().username(), "photographer");
    assert_eq!(
        items[0].profile().image_url().as_str(),
        "https://images.unsplash.com/profile-1?w=64"
    );
}

#[tokio::test]
async fn test_server_error_is_invalid_data() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "errors": ["OAuth error: The access token is invalid"]
        })))
        .mount(&mock_server)
        .await;

    let loader = loader_for(&mock_server.uri(), keyed_client());

    assert_eq!(load(&loader, 1).await, Err(FeedLoaderError::InvalidData));
}

#[tokio::test]
async fn test_out_of_range_page_is_surfaced_as_invalid_data() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("page", "-1"))
        .respond_with(ResponseTemplate::new(400))
        .mount(&mock_server)
        .await;

    let loader = loader_for(&mock_server.uri(), keyed_client());

    assert_eq!(load(&loader, -1).await, Err(FeedLoaderError::InvalidData));
}

#[tokio::test]
async fn test_refused_connection_is_connectivity() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let loader = loader_for(&format!("http://127.0.0.1:{port}/"), keyed_client());

    assert_eq!(load(&loader, 1).await, Err(FeedLoaderError::Connectivity));
}

#[tokio::test]
async fn test_transport_timeout_is_connectivity() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("[]")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&mock_server)
        .await;

    let client = keyed_client().with_timeout(Duration::from_millis(50));
    let loader = loader_for(&mock_server.uri(), client);

    assert_eq!(load(&loader, 1).await, Err(FeedLoaderError::Connectivity));
}

#[tokio::test]
#[ignore = "hits the live Unsplash API; requires UNSPLASH_ACCESS_KEY"]
async fn test_live_api_returns_default_page_size() {
    let key = std::env::var("UNSPLASH_ACCESS_KEY").expect("UNSPLASH_ACCESS_KEY not set");
    let client = ReqwestHttpClient::new(reqwest::Client::new(), Some(SecretString::from(key)));
    let loader = loader_for(unsplash_feed::feed::DEFAULT_BASE_URL, client);

    let items = load(&loader, 1).await.unwrap();

    assert_eq!(items.len(), 10);
}
