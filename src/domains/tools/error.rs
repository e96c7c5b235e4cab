//! Tool-specific error types.

use thiserror::Error;

use crate::domains::dictionary::DictionaryError;

/// Errors that can occur during tool operations.
///
/// Every variant ends up as the text of an error result returned to the
/// caller, so the display strings are written for an LLM to read.
#[derive(Debug, Error)]
pub enum ToolError {
    /// Invalid arguments were provided to the tool.
    #[error("{0}")]
    InvalidArguments(String),

    /// The word has no entry and the dictionary offered no alternatives.
    #[error("No suggestions available")]
    NoSuggestions,

    /// The dictionary call failed.
    #[error("RAE API {operation} error: {source}")]
    Upstream {
        operation: &'static str,
        #[source]
        source: DictionaryError,
    },

    /// The result could not be rendered as JSON.
    #[error("error formatting {what}: {source}")]
    Format {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl ToolError {
    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Wrap a dictionary failure for the named operation.
    pub fn upstream(operation: &'static str, source: DictionaryError) -> Self {
        Self::Upstream { operation, source }
    }

    /// Wrap a serialization failure for the named value.
    pub fn format(what: &'static str, source: serde_json::Error) -> Self {
        Self::Format { what, source }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_message_embeds_cause() {
        let err = ToolError::upstream("word info", DictionaryError::api(500, "boom"));
        assert_eq!(
            err.to_string(),
            "RAE API word info error: API error (status 500): boom"
        );
    }

    #[test]
    fn test_no_suggestions_message() {
        assert_eq!(ToolError::NoSuggestions.to_string(), "No suggestions available");
    }
}
