//! Common utilities shared across the dictionary tools.
//!
//! This module provides the response formatters, argument coercion and the
//! helpers that turn a tool outcome into an MCP result.

use rmcp::{
    ErrorData as McpError,
    model::{CallToolResult, Content, JsonObject},
};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domains::tools::ToolError;

/// Header line of the daily word result.
pub const DAILY_WORD_HEADER: &str = "Word of the Day:";

/// Header line of the random word result.
pub const RANDOM_WORD_HEADER: &str = "Random Word:";

/// Advisory message attached to lookup suggestions.
pub const SUGGESTIONS_MSG: &str = "Did you mean one of these words?";

/// Text returned in place of an empty suggestion list.
pub const NO_SUGGESTIONS: &str = "No suggestions available";

/// Suggestion block returned when a lookup misses.
#[derive(Debug, Clone, Serialize)]
pub struct SuggestionList<'a> {
    pub suggestions: &'a [String],
    pub msg: &'static str,
}

/// Render a value as two-space indented JSON.
pub fn format_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Render a value as indented JSON below a header line.
pub fn format_with_header<T: Serialize + ?Sized>(
    header: &str,
    value: &T,
) -> Result<String, serde_json::Error> {
    Ok(format!("{}\n{}", header, format_json(value)?))
}

/// Render lookup suggestions for the caller.
///
/// An empty list renders as the plain text [`NO_SUGGESTIONS`].
pub fn format_suggestions(suggestions: &[String]) -> Result<String, serde_json::Error> {
    if suggestions.is_empty() {
        return Ok(NO_SUGGESTIONS.to_string());
    }

    format_json(&SuggestionList {
        suggestions,
        msg: SUGGESTIONS_MSG,
    })
}

/// Coerce a length bound given as a JSON number or numeric string.
///
/// Anything that does not yield a positive integer is dropped. Numbers are
/// truncated toward zero; strings must be plain integers.
pub fn coerce_length(value: &Value) -> Option<u32> {
    match value {
        Value::String(s) => s.parse::<u32>().ok().filter(|n| *n > 0),
        Value::Number(n) => n
            .as_f64()
            .filter(|f| *f >= 1.0)
            .map(|f| f.min(u32::MAX as f64) as u32),
        _ => None,
    }
}

/// Serde adapter for optional length bounds that never fails.
pub fn lenient_length<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(coerce_length))
}

/// Serde adapter for optional text arguments that never fails.
///
/// Anything other than a string is treated as absent.
pub fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Ok(Some(s)),
        _ => Ok(None),
    }
}

/// Decode tool arguments into a params struct.
pub fn parse_arguments<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, McpError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|e| McpError::invalid_params(e.to_string(), None))
}

/// Create an error result with a formatted message.
pub fn error_result(message: &str) -> CallToolResult {
    CallToolResult::error(vec![Content::text(message.to_string())])
}

/// Create a success result with text content.
pub fn success_result(content: String) -> CallToolResult {
    CallToolResult::success(vec![Content::text(content)])
}

/// Turn a tool outcome into the result sent to the caller.
pub fn into_call_result(outcome: Result<String, ToolError>) -> CallToolResult {
    match outcome {
        Ok(text) => success_result(text),
        Err(e) => error_result(&e.to_string()),
    }
}
