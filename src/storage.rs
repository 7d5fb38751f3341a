//! Write-only snapshot store.
//!
//! Every pipeline stage that produces an auditable payload writes it here
//! as a timestamped JSON file. Nothing in the pipeline ever reads these
//! files back.

use std::path::PathBuf;

use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::info;

use crate::errors::DigestError;

/// Subdirectory for raw fetched post lists.
pub const RAW_POSTS_DIR: &str = "reddit";
/// Subdirectory for summarization records.
pub const SUMMARIES_DIR: &str = "summaries";

/// Filesystem-safe ISO-8601 timestamp used as a snapshot filename suffix.
/// Colons and periods are replaced so the slug is valid on every platform.
pub fn timestamp_slug() -> String {
    Utc::now()
        .to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// Snapshot store rooted at a single data directory.
#[derive(Debug, Clone)]
pub struct DataStore {
    root: PathBuf,
}

impl DataStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Serialize `value` as pretty-printed JSON and write it to
    /// `<root>/<subdir>/<filename>`, creating directories as needed.
    pub fn save<T: Serialize>(
        &self,
        subdir: &str,
        filename: &str,
        value: &T,
    ) -> Result<(), DigestError> {
        let dir = self.root.join(subdir);
        std::fs::create_dir_all(&dir)?;

        let path = dir.join(filename);
        let json = serde_json::to_vec_pretty(value)
            .map_err(|e| DigestError::StorageError(format!("serialize {}: {}", filename, e)))?;
        std::fs::write(&path, json)
            .map_err(|e| DigestError::StorageError(format!("{}: {}", path.display(), e)))?;

        info!("Saved snapshot: {}", path.display());
        Ok(())
    }
}
