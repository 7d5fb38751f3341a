use serde_json::json;
use wiremock::matchers::{header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use reddigest::clients::RedditClient;
use reddigest::core::config::{RedditConfig, TimeRange};
use reddigest::storage::DataStore;

fn test_config() -> RedditConfig {
    RedditConfig {
        subreddit: "rust".to_string(),
        post_limit: 2,
        comment_depth: 2,
        time_range: TimeRange::Day,
    }
}

fn post_json(id: &str, title: &str) -> serde_json::Value {
    json!({
        "id": id,
        "title": title,
        "selftext": "some body",
        "url": format!("https://reddit.com/r/rust/comments/{}/", id),
        "permalink": format!("/r/rust/comments/{}/", id),
        "author": "ferris",
        "created_utc": 1737338183.0,
        "score": 10,
        "num_comments": 3,
        "upvote_ratio": 0.9,
        "link_flair_text": null,
        "is_self": true,
        "domain": "self.rust"
    })
}

fn listing_json(posts: &[serde_json::Value]) -> serde_json::Value {
    let children: Vec<_> = posts
        .iter()
        .map(|p| json!({ "kind": "t3", "data": p }))
        .collect();
    json!({ "kind": "Listing", "data": { "children": children } })
}

fn comments_json(bodies: &[serde_json::Value]) -> serde_json::Value {
    json!([
        { "kind": "Listing", "data": { "children": [] } },
        { "kind": "Listing", "data": { "children": bodies } },
    ])
}

#[tokio::test]
async fn test_fetch_attaches_filtered_comments_and_snapshots() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");

    Mock::given(method("GET"))
        .and(path("/r/rust/top.json"))
        .and(query_param("t", "day"))
        .and(query_param("limit", "2"))
        .and(header_exists("user-agent"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(listing_json(&[post_json("aaa", "First")])),
        )
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/rust/comments/aaa.json"))
        .and(query_param("depth", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comments_json(&[
            json!({ "kind": "t1", "data": { "body": "great post" } }),
            // Non-comment kinds and bodiless comments are unusable.
            json!({ "kind": "more", "data": { "count": 5 } }),
            json!({ "kind": "t1", "data": { "body": "" } }),
            json!({ "kind": "t1", "data": {} }),
            json!({ "kind": "t1", "data": { "body": "second comment" } }),
        ])))
        .mount(&server)
        .await;

    let client = RedditClient::new(&test_config(), DataStore::new(dir.path()))
        .with_base_url(server.uri());

    let posts = client.fetch_posts().await.expect("fetch should succeed");
    assert_eq!(posts.len(), 1);
    assert_eq!(posts[0].id, "aaa");
    assert_eq!(
        posts[0].comments,
        vec!["great post".to_string(), "second comment".to_string()],
        "Only textual t1 comments survive, in source order"
    );

    let snapshot_dir = dir.path().join("reddit");
    let snapshots: Vec<_> = std::fs::read_dir(&snapshot_dir)
        .expect("snapshot dir should exist")
        .collect();
    assert_eq!(snapshots.len(), 1, "Exactly one snapshot per run");
}

#[tokio::test]
async fn test_comment_failure_aborts_fetch_without_snapshot() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");

    Mock::given(method("GET"))
        .and(path("/r/rust/top.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(listing_json(&[
            post_json("aaa", "First"),
            post_json("bbb", "Second"),
        ])))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/r/rust/comments/aaa.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(comments_json(&[])))
        .mount(&server)
        .await;

    // Second post's comment tree fails.
    Mock::given(method("GET"))
        .and(path("/r/rust/comments/bbb.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let client = RedditClient::new(&test_config(), DataStore::new(dir.path()))
        .with_base_url(server.uri());

    let result = client.fetch_posts().await;
    assert!(result.is_err(), "Partial fetches must fail whole");
    assert!(
        !dir.path().join("reddit").exists(),
        "No snapshot may be written for a failed fetch"
    );
}

#[tokio::test]
async fn test_malformed_listing_is_an_error() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().expect("tempdir");

    Mock::given(method("GET"))
        .and(path("/r/rust/top.json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "unexpected": true })))
        .mount(&server)
        .await;

    let client = RedditClient::new(&test_config(), DataStore::new(dir.path()))
        .with_base_url(server.uri());

    let err = client.fetch_posts().await.unwrap_err();
    assert!(
        err.to_string().contains("Failed to parse Reddit response"),
        "Got: {}",
        err
    );
}
