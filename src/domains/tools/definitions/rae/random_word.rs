//! Random word tool.
//!
//! Accepts optional length bounds, given either as numbers or as numeric
//! strings. Bounds that do not parse to a positive integer are dropped
//! silently. The bounds are logged but not sent to the dictionary, whose
//! random endpoint takes no filters.

use futures::FutureExt;
use rmcp::{
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Tool},
};
use schemars::JsonSchema;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info, instrument};

use crate::domains::dictionary::DictionaryClient;
use crate::domains::tools::ToolError;

use super::common::{
    RANDOM_WORD_HEADER, format_with_header, into_call_result, lenient_length, parse_arguments,
};

/// Parameters for the random word tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct RandomWordParams {
    /// Minimum length of the random word.
    #[serde(default, deserialize_with = "lenient_length")]
    #[schemars(with = "Option<u32>", description = "Minimum length of the random word")]
    pub min_length: Option<u32>,

    /// Maximum length of the random word.
    #[serde(default, deserialize_with = "lenient_length")]
    #[schemars(with = "Option<u32>", description = "Maximum length of the random word")]
    pub max_length: Option<u32>,
}

/// Random word tool.
pub struct RandomWordTool;

impl RandomWordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_random_word";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a random word from the RAE dictionary, with its meanings.";

    /// Execute the tool logic.
    pub async fn execute(params: &RandomWordParams, client: &dyn DictionaryClient) -> CallToolResult {
        into_call_result(Self::fetch(params, client).await)
    }

    #[instrument(skip_all)]
    async fn fetch(
        params: &RandomWordParams,
        client: &dyn DictionaryClient,
    ) -> Result<String, ToolError> {
        info!(
            min_length = ?params.min_length,
            max_length = ?params.max_length,
            "Getting random word from RAE API"
        );

        let entry = client.random().await.map_err(|e| {
            error!("RAE API random word error: {}", e);
            ToolError::upstream("random word", e)
        })?;

        let output = format_with_header(RANDOM_WORD_HEADER, &entry).map_err(|e| {
            error!("error formatting random word: {}", e);
            ToolError::format("random word", e)
        })?;

        info!(word = %entry.word, "GetRandomWord successful");
        Ok(output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<RandomWordParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute sharing the given client.
    pub fn create_route<S>(client: Arc<dyn DictionaryClient>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let client = client.clone();
            async move {
                let params: RandomWordParams = parse_arguments(args)?;
                Ok(Self::execute(&params, client.as_ref()).await)
            }
            .boxed()
        })
    }
}
