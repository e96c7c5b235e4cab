//! MCP Server implementation and lifecycle management.
//!
//! This module contains the main server handler that implements the MCP
//! protocol by routing tool calls to the dictionary tools.
//!
//! ## Tool Architecture
//!
//! Tools are defined in `domains/tools/definitions/` with one file per tool.
//! Each tool defines:
//! - Parameters struct (for rmcp)
//! - `execute()` method (core logic)
//! - `create_route()` method (wires the tool into the router)
//!
//! The ToolRouter is built in `domains/tools/router.rs`.
//! **Adding a new tool does NOT require modifying this file!**

use rmcp::{ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler};
use std::sync::Arc;
use tracing::info;

use super::config::Config;
use super::error::Error;
use crate::domains::dictionary::{DictionaryClient, RaeClient};
use crate::domains::tools::build_tool_router;

const INSTRUCTIONS: &str = "Spanish dictionary lookups backed by the RAE API. \
     Use get_word_info for definitions of a word, get_daily_word for the word of the day \
     and get_random_word for a random entry.";

/// The main MCP server handler.
///
/// Cloned once per session by the transports; clones share the config and
/// the dictionary client.
#[derive(Clone)]
pub struct McpServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Tool router for handling tool calls.
    tool_router: ToolRouter<Self>,
}

impl McpServer {
    /// Create a new MCP server talking to the RAE API.
    pub fn new(config: Config) -> std::result::Result<Self, Error> {
        let client = RaeClient::new(&config.dictionary)?;
        info!("Dictionary client ready for {}", client.base_url());
        Ok(Self::with_client(config, Arc::new(client)))
    }

    /// Create a server around an existing dictionary client.
    pub fn with_client(config: Config, client: Arc<dyn DictionaryClient>) -> Self {
        let config = Arc::new(config);

        Self {
            tool_router: build_tool_router::<Self>(client, config.clone()),
            config,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Metadata of every registered tool.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for McpServer {
    fn get_info(&self) -> ServerInfo {
        let mut info = ServerInfo {
            instructions: Some(INSTRUCTIONS.to_string()),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        };
        info.server_info.name = self.name().to_string();
        info.server_info.version = self.version().to_string();
        info
    }
}
