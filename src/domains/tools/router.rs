//! Tool Router - builds the rmcp ToolRouter.
//!
//! Every transport dispatches through this router. Each tool knows how to
//! create its own route; the router only hands them the shared client.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use crate::core::config::Config;
use crate::domains::dictionary::DictionaryClient;

use super::definitions::{DailyWordTool, RandomWordTool, WordInfoTool};

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(client: Arc<dyn DictionaryClient>, config: Arc<Config>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(WordInfoTool::create_route(client.clone(), config))
        .with_route(DailyWordTool::create_route(client.clone()))
        .with_route(RandomWordTool::create_route(client))
}
