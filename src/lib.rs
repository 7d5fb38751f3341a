//! reddigest - a single-shot batch job that pulls the top posts (and
//! comments) from a configured subreddit, condenses them into one digest
//! via a chat-completion call, and posts the digest to a Discord channel
//! through an incoming webhook.
//!
//! One invocation performs one fetch → summarize → notify cycle and
//! exits. There is no scheduling, no retry, and no state across runs
//! beyond the append-only JSON snapshots written under `data/`.

pub mod clients;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod prompt;
pub mod storage;

/// Configure console logging for the batch run.
///
/// Uses an env-filtered fmt subscriber; set `RUST_LOG` to adjust
/// verbosity (defaults to `info`). Call once at process start - the
/// global dispatcher is the single shared logging handle every component
/// writes to.
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();
}
