//! Dictionary-specific error types.

use thiserror::Error;

/// Errors that can occur while talking to the dictionary API.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// The request could not be sent or the body could not be read.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL cannot carry path segments.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// The word cannot be carried as a URL path segment.
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// The word has no entry. The API may offer near matches.
    #[error("word not found")]
    NotFound {
        /// Candidate words, in the order the API returned them.
        suggestions: Vec<String>,
    },

    /// The API answered with an error payload or an unexpected status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// A successful response carried a body that is not a valid envelope.
    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl DictionaryError {
    /// Create a new "not found" error.
    pub fn not_found(suggestions: Vec<String>) -> Self {
        Self::NotFound { suggestions }
    }

    /// Create a new API error.
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Suggestions carried by a lookup miss, if this is one.
    pub fn suggestions(&self) -> Option<&[String]> {
        match self {
            Self::NotFound { suggestions } => Some(suggestions),
            _ => None,
        }
    }
}
