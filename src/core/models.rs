use serde::{Deserialize, Serialize};

/// One fetched Reddit post, with its top-level comment bodies attached.
///
/// Matches the wire shape of the listing endpoint's `data` object, so the
/// same type serves deserialization and the raw-post snapshot. Immutable
/// after `fetch_posts` attaches the comments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub selftext: Option<String>,
    pub url: String,
    pub permalink: String,
    pub author: String,
    pub created_utc: f64,
    pub score: i64,
    pub num_comments: u64,
    pub upvote_ratio: f64,
    pub link_flair_text: Option<String>,
    pub is_self: bool,
    pub domain: String,
    /// Top-level textual comment bodies in source ranking order.
    /// Attached after the per-post comment fetch.
    #[serde(default)]
    pub comments: Vec<String>,
}

/// Projection of a [`Post`] into the summarization request payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummaryInput {
    pub id: String,
    pub content: String,
}

/// Snapshot record of one summarization call: the inputs, the generated
/// digest, and the generation timestamp.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRecord {
    pub original: Vec<PostSummaryInput>,
    pub summary: String,
    pub timestamp: String,
}
