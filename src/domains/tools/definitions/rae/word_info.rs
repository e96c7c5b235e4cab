//! Word lookup tool.
//!
//! Fetches the dictionary entry of a single word. When the word has no
//! entry but the dictionary offers near matches, the matches are returned
//! as a successful result so the caller can retry with one of them.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

use crate::core::config::Config;
use crate::domains::dictionary::{DictionaryClient, DictionaryError};
use crate::domains::tools::ToolError;

use super::common::{
    format_json, format_suggestions, into_call_result, lenient_text, parse_arguments,
};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the word lookup tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct WordInfoParams {
    /// The word to look up.
    #[schemars(description = "The word to look up")]
    pub word: String,

    /// Language of the word (default: es).
    #[serde(default, deserialize_with = "lenient_text")]
    #[schemars(with = "Option<String>", description = "Language code of the word (default: es)")]
    pub lang: Option<String>,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Word lookup tool - definitions of a single word from the RAE API.
pub struct WordInfoTool;

impl WordInfoTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_word_info";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a word from the RAE API: meanings, senses, etymology and conjugations. If the word is not found, returns a list of similar words to try instead.";

    /// Execute the tool logic.
    pub async fn execute(
        params: &WordInfoParams,
        client: &dyn DictionaryClient,
        default_lang: &str,
    ) -> CallToolResult {
        into_call_result(Self::lookup(params, client, default_lang).await)
    }

    #[instrument(skip_all, fields(word = %params.word))]
    async fn lookup(
        params: &WordInfoParams,
        client: &dyn DictionaryClient,
        default_lang: &str,
    ) -> Result<String, ToolError> {
        let word = params.word.as_str();
        if word.is_empty() {
            error!("missing or empty word in get_word_info");
            return Err(ToolError::invalid_arguments("missing or empty word"));
        }

        let lang = params
            .lang
            .as_deref()
            .filter(|l| !l.is_empty())
            .unwrap_or(default_lang);

        info!(word, lang, "Getting word info from RAE API");

        let entry = match client.word(word).await {
            Ok(entry) => entry,
            Err(DictionaryError::NotFound { suggestions }) => {
                if suggestions.is_empty() {
                    warn!(word, "Word not found, no suggestions available");
                    return Err(ToolError::NoSuggestions);
                }

                warn!(
                    word,
                    count = suggestions.len(),
                    "Word not found, suggesting alternatives"
                );
                return format_suggestions(&suggestions).map_err(|e| {
                    error!(word, "error formatting suggestions: {}", e);
                    ToolError::format("suggestions", e)
                });
            }
            Err(e) => {
                error!(word, "RAE API word info error: {}", e);
                return Err(ToolError::upstream("word info", e));
            }
        };

        let output = format_json(&entry).map_err(|e| {
            error!(word, "error formatting word info: {}", e);
            ToolError::format("word info", e)
        })?;

        info!(word, "GetWordInfo successful");
        Ok(output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<WordInfoParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute sharing the given client.
    pub fn create_route<S>(client: Arc<dyn DictionaryClient>, config: Arc<Config>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            let config = config.clone();
            async move {
                let params: WordInfoParams = parse_arguments(args)?;
                Ok(Self::execute(&params, client.as_ref(), &config.dictionary.default_lang).await)
            }
            .boxed()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::dictionary::{Meaning, Sense, WordEntry, mock::MockDictionary};
    use rmcp::model::RawContent;
    use serde_json::json;

    fn text_of(result: &CallToolResult) -> String {
        match &result.content[0].raw {
            RawContent::Text(text) => text.text.clone(),
            other => panic!("expected text content, got {other:?}"),
        }
    }

    fn params(word: &str) -> WordInfoParams {
        WordInfoParams {
            word: word.to_string(),
            lang: None,
        }
    }

    fn casa() -> WordEntry {
        WordEntry {
            word: "casa".to_string(),
            meanings: vec![Meaning {
                senses: vec![Sense {
                    raw: "1. f. Edificio para habitar.".to_string(),
                    meaning_number: Some(1),
                    description: "Edificio para habitar.".to_string(),
                    ..Default::default()
                }],
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_lookup_success_is_pretty_json_of_entry() {
        let client = MockDictionary::returning(casa());
        let result = WordInfoTool::execute(&params("casa"), &client, "es").await;

        assert_eq!(result.is_error, Some(false));
        let text = text_of(&result);
        assert_eq!(text, serde_json::to_string_pretty(&casa()).unwrap());
        assert!(!text.starts_with("Word of the Day:"));
        assert_eq!(client.calls(), 1);
    }

    #[tokio::test]
    async fn test_empty_word_fails_without_lookup() {
        let client = MockDictionary::returning(casa());
        let result = WordInfoTool::execute(&params(""), &client, "es").await;

        assert_eq!(result.is_error, Some(true));
        assert!(text_of(&result).contains("missing or empty word"));
        assert_eq!(client.calls(), 0);
    }

    #[test]
    fn test_missing_word_rejected_while_parsing() {
        let args = json!({"lang": "es"}).as_object().cloned().unwrap();
        let result = parse_arguments::<WordInfoParams>(args);
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_not_found_returns_suggestions() {
        let client = MockDictionary::not_found(&["casa", "caso", "cosa"]);
        let result = WordInfoTool::execute(&params("cassa"), &client, "es").await;

        assert_eq!(result.is_error, Some(false));
        let value: serde_json::Value = serde_json::from_str(&text_of(&result)).unwrap();
        assert_eq!(
            value,
            json!({
                "suggestions": ["casa", "caso", "cosa"],
                "msg": "Did you mean one of these words?"
            })
        );
    }

    #[tokio::test]
    async fn test_not_found_without_suggestions() {
        let client = MockDictionary::not_found(&[]);
        let result = WordInfoTool::execute(&params("zzzz"), &client, "es").await;

        assert_eq!(result.is_error, Some(true));
        assert_eq!(text_of(&result), "No suggestions available");
    }

    #[tokio::test]
    async fn test_upstream_failure_is_wrapped() {
        let client = MockDictionary::failing("service unavailable");
        let result = WordInfoTool::execute(&params("casa"), &client, "es").await;

        assert_eq!(result.is_error, Some(true));
        let text = text_of(&result);
        assert!(text.starts_with("RAE API word info error:"));
        assert!(text.contains("service unavailable"));
    }

    #[tokio::test]
    async fn test_non_string_lang_falls_back_to_default() {
        let args = json!({"word": "casa", "lang": 5}).as_object().cloned().unwrap();
        let params = parse_arguments::<WordInfoParams>(args).unwrap();
        assert!(params.lang.is_none());

        let client = MockDictionary::returning(casa());
        let result = WordInfoTool::execute(&params, &client, "es").await;
        assert_eq!(result.is_error, Some(false));
        assert_eq!(client.calls(), 1);
    }

    #[test]
    fn test_params_lang_optional() {
        let params: WordInfoParams = serde_json::from_str(r#"{"word": "casa"}"#).unwrap();
        assert_eq!(params.word, "casa");
        assert!(params.lang.is_none());
    }
}
