use thiserror::Error;

#[derive(Debug, Error)]
pub enum DigestError {
    #[error("Failed to load configuration: {0}")]
    ConfigError(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Failed to parse Reddit response: {0}")]
    RedditError(String),

    #[error("Failed to access completion API: {0}")]
    LlmError(String),

    #[error("Failed to deliver webhook message: {0}")]
    WebhookError(String),

    #[error("Failed to write snapshot: {0}")]
    StorageError(String),
}

impl From<reqwest::Error> for DigestError {
    fn from(error: reqwest::Error) -> Self {
        DigestError::HttpError(error.to_string())
    }
}

impl From<std::io::Error> for DigestError {
    fn from(error: std::io::Error) -> Self {
        DigestError::StorageError(error.to_string())
    }
}
