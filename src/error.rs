use thiserror::Error;

/// Failure of one request against the matching backend.
///
/// `Rejected` is the application-level failure: the body parsed but carried
/// `success: false` (or no `success` at all). Everything else is a
/// transport, decode or local failure and is surfaced through its message.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Rejected(String),

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid endpoint base: {0}")]
    Endpoint(String),

    #[error("Failed to read file: {0}")]
    File(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid API base '{value}': {source}")]
    ApiBase {
        value: String,
        source: url::ParseError,
    },

    #[error("Invalid notification lifetime '{0}', expected milliseconds")]
    NoticeTtl(String),

    #[error("No browser window available")]
    NoWindow,
}
