//! Error types for ctxgen

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("configuration error: {}", problems.join("; "))]
    Configuration { problems: Vec<String> },

    #[error("invalid uri {value:?}: {reason}")]
    InvalidUri { value: String, reason: String },

    #[error("malformed graph: {0}")]
    MalformedGraph(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn configuration(problems: Vec<String>) -> Self {
        Self::Configuration { problems }
    }

    pub fn invalid_uri(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidUri {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedGraph(message.into())
    }

    /// True for errors that stem from static misconfiguration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Configuration { .. } | Self::InvalidUri { .. })
    }
}
