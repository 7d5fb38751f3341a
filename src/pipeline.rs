//! Pipeline orchestrator.
//!
//! One run walks three stages in order: fetch, summarize, notify. Each
//! stage's output is the next stage's sole input; the first failure in
//! any stage aborts the run and propagates to the process boundary.

use tracing::info;

use crate::clients::{DiscordNotifier, LlmClient, NotifyOptions, RedditClient};
use crate::core::config::AppConfig;
use crate::core::models::PostSummaryInput;
use crate::errors::DigestError;
use crate::storage::DataStore;

/// Root of the snapshot tree written during a run.
const DATA_ROOT: &str = "data";

/// The one summarization provider this build knows how to talk to.
const SUPPORTED_PROVIDER: &str = "deepseek";

/// Stage labels for logs; the run advances through them strictly in
/// order, with no retry or skip transitions.
#[derive(Debug, Clone, Copy)]
enum Stage {
    Fetching,
    Summarizing,
    Notifying,
}

impl Stage {
    fn as_str(self) -> &'static str {
        match self {
            Stage::Fetching => "fetching",
            Stage::Summarizing => "summarizing",
            Stage::Notifying => "notifying",
        }
    }
}

pub struct DigestPipeline {
    reddit: RedditClient,
    llm: LlmClient,
    notifier: DiscordNotifier,
}

impl DigestPipeline {
    /// Build the store and the three stage clients from configuration.
    pub fn new(config: &AppConfig) -> Result<Self, DigestError> {
        if config.llm.use_provider != SUPPORTED_PROVIDER {
            return Err(DigestError::ConfigError(format!(
                "unsupported summarization provider: {}",
                config.llm.use_provider
            )));
        }

        let store = DataStore::new(DATA_ROOT);
        Ok(Self {
            reddit: RedditClient::new(&config.reddit, store.clone()),
            llm: LlmClient::new(config.llm.deepseek.api_key.clone(), store),
            notifier: DiscordNotifier::new(config.notification.discord.webhook_url.clone()),
        })
    }

    /// Assemble a pipeline from pre-built stage clients. Used by tests
    /// that point the clients at mock endpoints.
    pub fn from_parts(reddit: RedditClient, llm: LlmClient, notifier: DiscordNotifier) -> Self {
        Self {
            reddit,
            llm,
            notifier,
        }
    }

    /// Execute one fetch → summarize → notify cycle.
    pub async fn run(&self) -> Result<(), DigestError> {
        info!("Starting digest run");

        info!("Stage: {}", Stage::Fetching.as_str());
        let posts = self.reddit.fetch_posts().await?;

        // One summary input per fetched post, order preserved.
        let inputs: Vec<PostSummaryInput> = posts
            .iter()
            .map(|post| PostSummaryInput {
                id: post.id.clone(),
                content: crate::clients::reddit::format_post(post),
            })
            .collect();

        info!("Stage: {}", Stage::Summarizing.as_str());
        let summary = self.llm.summarize(&inputs).await?;

        info!("Stage: {}", Stage::Notifying.as_str());
        self.notifier
            .notify(&summary, NotifyOptions::default())
            .await?;

        info!("Digest run complete");
        Ok(())
    }
}
