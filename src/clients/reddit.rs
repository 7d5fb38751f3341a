//! Reddit read-API client.
//!
//! Two GET calls per run: the top-post listing for the configured
//! subreddit, then one comment-tree request per post. The full post list
//! (comments attached) is snapshotted before it is returned, so the
//! snapshot only exists for fully successful fetches.

use chrono::DateTime;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use crate::core::config::{RedditConfig, TimeRange};
use crate::core::models::Post;
use crate::errors::DigestError;
use crate::storage::{DataStore, RAW_POSTS_DIR, timestamp_slug};

const DEFAULT_BASE_URL: &str = "https://www.reddit.com";

/// Descriptive client-identifying header required by the Reddit API.
const USER_AGENT_VALUE: &str = "reddigest/1.0 (batch digest bot)";

/// Number of comments shown per post in the formatted display block.
const DISPLAYED_COMMENTS: usize = 3;

/// Listing envelope returned by `top.json`.
#[derive(Debug, Deserialize)]
struct TopListing {
    data: ListingData,
}

#[derive(Debug, Deserialize)]
struct ListingData {
    children: Vec<ListingChild>,
}

#[derive(Debug, Deserialize)]
struct ListingChild {
    data: Post,
}

pub struct RedditClient {
    base_url: String,
    subreddit: String,
    post_limit: u32,
    comment_depth: u32,
    time_range: TimeRange,
    store: DataStore,
}

impl RedditClient {
    pub fn new(config: &RedditConfig, store: DataStore) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            subreddit: config.subreddit.clone(),
            post_limit: config.post_limit,
            comment_depth: config.comment_depth,
            time_range: config.time_range,
            store,
        }
    }

    /// Point the client at a different API origin. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Fetch the top-ranked posts with their top-level comments attached.
    ///
    /// All-or-nothing: any transport or payload failure on the listing or
    /// on any comment request aborts the fetch before the snapshot is
    /// written, and no partial post list is returned.
    pub async fn fetch_posts(&self) -> Result<Vec<Post>, DigestError> {
        info!(
            "Fetching Reddit posts: r/{}, limit: {}, depth: {}, time_range: {}",
            self.subreddit, self.post_limit, self.comment_depth, self.time_range
        );

        let url = format!(
            "{}/r/{}/top.json?t={}&limit={}",
            self.base_url, self.subreddit, self.time_range, self.post_limit
        );
        let listing: TopListing = self
            .get(&url)
            .await?
            .json()
            .await
            .map_err(|e| DigestError::RedditError(format!("top listing: {}", e)))?;

        let mut posts: Vec<Post> = listing.data.children.into_iter().map(|c| c.data).collect();

        for post in &mut posts {
            let comments_url = format!(
                "{}/r/{}/comments/{}.json?depth={}",
                self.base_url, self.subreddit, post.id, self.comment_depth
            );
            let payload: Value = self
                .get(&comments_url)
                .await?
                .json()
                .await
                .map_err(|e| DigestError::RedditError(format!("comments for {}: {}", post.id, e)))?;
            post.comments = extract_comment_bodies(&payload);
        }

        let filename = format!("posts_{}.json", timestamp_slug());
        self.store.save(RAW_POSTS_DIR, &filename, &posts)?;

        Ok(posts)
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, DigestError> {
        let response = super::HTTP_CLIENT
            .get(url)
            .header(reqwest::header::USER_AGENT, USER_AGENT_VALUE)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(DigestError::HttpError(format!(
                "GET {} returned {}",
                url,
                response.status()
            )));
        }
        Ok(response)
    }
}

/// Pull top-level textual comment bodies out of a comment-tree response.
///
/// The endpoint returns a two-element array: the post listing, then the
/// comment listing. Only children of kind `t1` with a non-empty string
/// body survive; anything else (deleted, removed, non-comment kinds) is
/// dropped without distinguishing why it was unusable.
fn extract_comment_bodies(payload: &Value) -> Vec<String> {
    payload
        .get(1)
        .and_then(|listing| listing.get("data"))
        .and_then(|data| data.get("children"))
        .and_then(|children| children.as_array())
        .map(|children| {
            children
                .iter()
                .filter(|child| {
                    child.get("kind").and_then(|k| k.as_str()) == Some("t1")
                })
                .filter_map(|child| {
                    child
                        .get("data")
                        .and_then(|data| data.get("body"))
                        .and_then(|body| body.as_str())
                })
                .filter(|body| !body.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// Render a post as the human-readable block fed to the summarizer.
///
/// Line order is fixed: title, author, post time, body or link, score,
/// comment count, optional flair, permalink, then up to three top
/// comments. Absent optional fields produce no line.
pub fn format_post(post: &Post) -> String {
    let posted = DateTime::from_timestamp(post.created_utc as i64, 0)
        .map(|t| t.format("%Y/%m/%d %H:%M:%S").to_string())
        .unwrap_or_else(|| post.created_utc.to_string());

    let mut lines = vec![
        format!("Title: {}", post.title),
        format!("Author: {}", post.author),
        format!("Posted: {}", posted),
    ];

    if post.is_self {
        let body = post
            .selftext
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or("(no body)");
        lines.push(format!("Body: {}", body));
    } else {
        lines.push(format!("Link: {} ({})", post.url, post.domain));
    }

    lines.push(format!(
        "Score: {} ({}% upvoted)",
        post.score,
        (post.upvote_ratio * 100.0).round() as i64
    ));
    lines.push(format!("Comments: {}", post.num_comments));

    if let Some(flair) = post.link_flair_text.as_deref().filter(|s| !s.is_empty()) {
        lines.push(format!("Flair: {}", flair));
    }

    lines.push(format!("URL: https://reddit.com{}", post.permalink));

    if !post.comments.is_empty() {
        lines.push("\nTop comments:".to_string());
        for comment in post.comments.iter().take(DISPLAYED_COMMENTS) {
            lines.push(format!("> {}", comment));
        }
    }

    lines.join("\n")
}
