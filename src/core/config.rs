use std::fmt;
use std::path::Path;

use serde::Deserialize;

use crate::errors::DigestError;

/// Default location of the configuration document, relative to the
/// working directory.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub reddit: RedditConfig,
    pub llm: LlmConfig,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RedditConfig {
    pub subreddit: String,
    pub post_limit: u32,
    pub comment_depth: u32,
    pub time_range: TimeRange,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LlmConfig {
    pub use_provider: String,
    pub deepseek: DeepSeekConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeepSeekConfig {
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationConfig {
    pub discord: DiscordConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DiscordConfig {
    pub webhook_url: String,
}

/// Reddit's `t=` ranking window for top-post listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
    Year,
    All,
}

impl TimeRange {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeRange::Day => "day",
            TimeRange::Week => "week",
            TimeRange::Month => "month",
            TimeRange::Year => "year",
            TimeRange::All => "all",
        }
    }
}

impl fmt::Display for TimeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl AppConfig {
    /// Read and parse the configuration document at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DigestError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| DigestError::ConfigError(format!("{}: {}", path.display(), e)))?;
        toml::from_str(&raw)
            .map_err(|e| DigestError::ConfigError(format!("{}: {}", path.display(), e)))
    }
}
