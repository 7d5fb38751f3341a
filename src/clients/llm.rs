//! DeepSeek chat-completion client.
//!
//! One POST per run. The request carries exactly three ordered messages:
//! the system instruction, the user instruction, and the serialized post
//! list. The generated digest follows the output-format contract in
//! [`crate::prompt`].

use std::time::Duration;

use reqwest::Client;
use serde_json::{Value, json};
use tracing::info;

use crate::core::models::{PostSummaryInput, SummaryRecord};
use crate::errors::DigestError;
use crate::prompt::{SYSTEM_PROMPT, USER_PROMPT};
use crate::storage::{DataStore, SUMMARIES_DIR, timestamp_slug};

const DEFAULT_BASE_URL: &str = "https://api.deepseek.com";
const MODEL_NAME: &str = "deepseek-chat";

/// Completion calls can run long; the shared 30 s client is too tight.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(300);

pub struct LlmClient {
    base_url: String,
    api_key: String,
    store: DataStore,
}

impl LlmClient {
    pub fn new(api_key: String, store: DataStore) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            store,
        }
    }

    /// Point the client at a different API origin. Used by tests.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Summarize the formatted posts into a single digest document.
    ///
    /// On success the (input, output, timestamp) record is snapshotted
    /// before the digest is returned. An empty or missing completion is
    /// an error and writes no snapshot.
    pub async fn summarize(&self, posts: &[PostSummaryInput]) -> Result<String, DigestError> {
        info!("Summarizing {} posts with {}", posts.len(), MODEL_NAME);

        let request_body = build_request_body(posts)
            .map_err(|e| DigestError::LlmError(format!("serialize request: {}", e)))?;

        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|_| Client::new());

        let response = client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DigestError::HttpError(format!("completion request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(DigestError::LlmError(format!("{}: {}", status, error_text)));
        }

        let response_json: Value = response
            .json()
            .await
            .map_err(|e| DigestError::LlmError(format!("parse completion response: {}", e)))?;

        let summary = extract_completion_text(&response_json)
            .ok_or_else(|| DigestError::LlmError("No text in response".to_string()))?;

        let timestamp = timestamp_slug();
        let record = SummaryRecord {
            original: posts.to_vec(),
            summary: summary.clone(),
            timestamp: timestamp.clone(),
        };
        self.store
            .save(SUMMARIES_DIR, &format!("summary_{}.json", timestamp), &record)?;

        Ok(summary)
    }
}

/// Build the chat-completion request body: fixed model, three ordered
/// messages, the last one carrying the pretty-printed item list.
pub fn build_request_body(posts: &[PostSummaryInput]) -> Result<Value, serde_json::Error> {
    let serialized_posts = serde_json::to_string_pretty(posts)?;
    Ok(json!({
        "model": MODEL_NAME,
        "messages": [
            { "role": "system", "content": SYSTEM_PROMPT },
            { "role": "user", "content": USER_PROMPT },
            { "role": "user", "content": serialized_posts },
        ],
    }))
}

/// First completion's text, or `None` when the response carries no
/// non-empty content.
pub fn extract_completion_text(response: &Value) -> Option<String> {
    response
        .get("choices")
        .and_then(|choices| choices.get(0))
        .and_then(|choice| choice.get("message"))
        .and_then(|message| message.get("content"))
        .and_then(|content| content.as_str())
        .filter(|text| !text.is_empty())
        .map(str::to_string)
}
