//! Error types for the power rankings board

use thiserror::Error;


pub type Result<T> = std::result::Result<T, RankingsError>;

#[derive(Error, Debug)]
pub enum RankingsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Pasted team JSON could not be turned into a directory.
    #[error("Invalid JSON format: {reason}")]
    MalformedInput { reason: String },

    #[error("{what} not provided and {env_var} environment variable not set")]
    MissingParameter { what: String, env_var: String },

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Upstream request failed with status {status}: {message}")]
    UpstreamFailure { status: u16, message: String },

    /// The upstream answered but had no teams; usually a private league.
    #[error("{message}")]
    EmptyResult { message: String },

    #[error("Failed to load {platform} league: {reason}")]
    ImportFailed { platform: String, reason: String },

    #[error("Position {index} is out of range for a list of {len} teams")]
    InvalidPosition { index: usize, len: usize },

    #[error("Unknown tier: {id}")]
    UnknownTier { id: String },
}

impl RankingsError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        RankingsError::MalformedInput {
            reason: reason.into(),
        }
    }

    pub fn import_failed(platform: &str, reason: impl ToString) -> Self {
        RankingsError::ImportFailed {
            platform: platform.to_string(),
            reason: reason.to_string(),
        }
    }
}
