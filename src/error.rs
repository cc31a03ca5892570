//! Fetch Errors

use thiserror::Error;

/// Why the dataset could not be loaded.
///
/// Messages are flattened to strings so the error can sit inside reactive state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Request could not be sent, no response arrived, or it timed out
    #[error("network error: {0}")]
    Network(String),
    /// Non-success HTTP status, or a GraphQL response carrying only errors
    #[error("server error (status {status}): {message}")]
    Server { status: u16, message: String },
    /// Body is not JSON or lacks the expected `data` payload
    #[error("invalid response: {0}")]
    Parse(String),
}

impl FetchError {
    /// Short text for the error card
    pub fn user_message(&self) -> &'static str {
        match self {
            FetchError::Network(_) => "Could not reach the film archive. Check your connection.",
            FetchError::Server { .. } => "The film archive returned an error.",
            FetchError::Parse(_) => "The film archive sent data we could not read.",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Parse(err.to_string())
    }
}
