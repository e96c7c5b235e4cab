//! Word of the day tool.

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

use super::common::{DAILY_WORD_HEADER, format_with_header, into_call_result, parse_arguments};

/// The daily word tool takes no parameters.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct DailyWordParams {}

/// Word of the day tool.
pub struct DailyWordTool;

impl DailyWordTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_daily_word";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get the word of the day from the RAE dictionary, with its meanings.";

    /// Execute the tool logic.
    pub async fn execute(client: &dyn DictionaryClient) -> CallToolResult {
        into_call_result(Self::fetch(client).await)
    }

    #[instrument(skip_all)]
    async fn fetch(client: &dyn DictionaryClient) -> Result<String, ToolError> {
        info!("Getting daily word from RAE API");

        let entry = client.daily().await.map_err(|e| {
            error!("RAE API daily word error: {}", e);
            ToolError::upstream("daily word", e)
        })?;

        let output = format_with_header(DAILY_WORD_HEADER, &entry).map_err(|e| {
            error!("error formatting daily word: {}", e);
            ToolError::format("daily word", e)
        })?;

        info!(word = %entry.word, "GetDailyWord successful");
        Ok(output)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<DailyWordParams>(),
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
                let _params: DailyWordParams = parse_arguments(args)?;
                Ok(Self::execute(client.as_ref()).await)
            }
            .boxed()
        })
    }
}
