//! Discord incoming-webhook dispatcher.
//!
//! Reassembles the generated digest into a bounded sequence of chat
//! messages: the document is split on level-3 headings so each message
//! corresponds to one summarized post, oversized sections are sliced to
//! the per-message limit, and messages go out strictly in document order
//! with a fixed pause between sends.

use std::time::Duration;

use serde_json::json;
use tracing::info;

use crate::errors::DigestError;

/// Discord's hard limit is 2000 characters; stay under it with headroom
/// for the optional code-block fence.
pub const MAX_MESSAGE_LEN: usize = 1900;

/// Fixed pause after every sent message. Not adaptive to rate-limit
/// feedback.
const SEND_INTERVAL: Duration = Duration::from_secs(1);

/// Marker that starts a new section: a line beginning with a level-3
/// heading. One section per summarized post, per the prompt contract.
const SECTION_PREFIX: &str = "### ";

#[derive(Debug, Clone, Copy, Default)]
pub struct NotifyOptions {
    /// Wrap each message in a ```md fenced code block before sending.
    pub use_code_block: bool,
}

pub struct DiscordNotifier {
    webhook_url: String,
}

impl DiscordNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
        }
    }

    /// Deliver `content` to the channel as one webhook POST per planned
    /// message, sequentially in document order, pausing [`SEND_INTERVAL`]
    /// after every send.
    ///
    /// The first failed delivery aborts the remaining sends; messages
    /// already posted stay visible in the channel.
    pub async fn notify(
        &self,
        content: &str,
        options: NotifyOptions,
    ) -> Result<(), DigestError> {
        let messages = plan_messages(content, options);
        info!("Sending {} messages to Discord", messages.len());

        for (index, message) in messages.iter().enumerate() {
            self.send_message(message).await?;
            info!("Sent message {}/{}", index + 1, messages.len());
            tokio::time::sleep(SEND_INTERVAL).await;
        }

        info!("Discord notification complete");
        Ok(())
    }

    async fn send_message(&self, content: &str) -> Result<(), DigestError> {
        let response = super::HTTP_CLIENT
            .post(&self.webhook_url)
            .json(&json!({ "content": content }))
            .send()
            .await
            .map_err(|e| DigestError::WebhookError(format!("webhook request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(DigestError::WebhookError(format!("{}: {}", status, body)));
        }
        Ok(())
    }
}

/// Split the digest immediately before every line that starts with
/// `### `, dropping sections that are empty after trimming. A heading
/// marker in the middle of a line is not a boundary.
pub fn split_sections(content: &str) -> Vec<&str> {
    let mut boundaries = vec![];
    for (offset, _) in content.match_indices(SECTION_PREFIX) {
        let at_line_start = offset == 0 || content.as_bytes()[offset - 1] == b'\n';
        if at_line_start && offset != 0 {
            boundaries.push(offset);
        }
    }

    let mut sections = Vec::with_capacity(boundaries.len() + 1);
    let mut start = 0;
    for boundary in boundaries {
        sections.push(&content[start..boundary]);
        start = boundary;
    }
    sections.push(&content[start..]);

    sections
        .into_iter()
        .filter(|section| !section.trim().is_empty())
        .collect()
}

/// Slice a section into consecutive pieces of at most
/// [`MAX_MESSAGE_LEN`] characters. Counted in characters, never cutting
/// a code point; concatenating the slices reproduces the section.
pub fn chunk_section(section: &str) -> Vec<&str> {
    if section.chars().count() <= MAX_MESSAGE_LEN {
        return vec![section];
    }

    let mut chunks = vec![];
    let mut remaining = section;
    while !remaining.is_empty() {
        let split_at = remaining
            .char_indices()
            .nth(MAX_MESSAGE_LEN)
            .map_or(remaining.len(), |(idx, _)| idx);
        let (chunk, rest) = remaining.split_at(split_at);
        chunks.push(chunk);
        remaining = rest;
    }
    chunks
}

/// Full delivery plan for a digest: section split, size enforcement, and
/// optional code-block formatting, in document order.
pub fn plan_messages(content: &str, options: NotifyOptions) -> Vec<String> {
    split_sections(content)
        .into_iter()
        .flat_map(chunk_section)
        .map(|chunk| {
            if options.use_code_block {
                format!("```md\n{}\n```", chunk)
            } else {
                chunk.to_string()
            }
        })
        .collect()
}
