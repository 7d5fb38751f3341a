//! HTTP clients for the three external collaborators: the Reddit read
//! API, the DeepSeek completion API, and the Discord incoming webhook.

use std::time::Duration;

use once_cell::sync::Lazy;
use reqwest::Client;

pub mod llm;
pub mod reddit;
pub mod webhook;

pub use llm::LlmClient;
pub use reddit::RedditClient;
pub use webhook::{DiscordNotifier, NotifyOptions};

/// Shared client for the short-lived Reddit and webhook calls. The
/// completion call builds its own client with a longer timeout.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .expect("Failed to create HTTP client")
});
