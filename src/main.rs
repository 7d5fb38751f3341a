use anyhow::Result;
use tracing::error;

use reddigest::core::config::{AppConfig, DEFAULT_CONFIG_PATH};
use reddigest::pipeline::DigestPipeline;

#[tokio::main]
async fn main() -> Result<()> {
    reddigest::setup_logging();

    let config = AppConfig::load(DEFAULT_CONFIG_PATH).map_err(|e| {
        error!("Config error: {}", e);
        e
    })?;

    let pipeline = DigestPipeline::new(&config).map_err(|e| {
        error!("Failed to initialize pipeline: {}", e);
        e
    })?;

    pipeline.run().await.map_err(|e| {
        error!("Digest run failed: {}", e);
        e
    })?;

    Ok(())
}
