//! Transport configuration types.

use serde::{Deserialize, Serialize};

use super::{TransportError, TransportResult};

/// Default port for the SSE transport.
pub const DEFAULT_PORT: u16 = 8080;

/// Transport configuration options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TransportConfig {
    /// Standard input/output transport (default for MCP).
    #[cfg(feature = "stdio")]
    Stdio,

    /// Streamable HTTP transport answering with server-sent events.
    #[cfg(feature = "sse")]
    Sse(SseConfig),
}

/// SSE transport configuration.
#[cfg(feature = "sse")]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SseConfig {
    /// Port number to listen on.
    pub port: u16,

    /// Host address to bind to.
    #[serde(default = "default_host")]
    pub host: String,

    /// Path the MCP endpoint is mounted at.
    #[serde(default = "default_mcp_path")]
    pub mcp_path: String,

    /// Enable CORS for browser clients.
    #[serde(default = "default_cors")]
    pub enable_cors: bool,
}

#[cfg(feature = "sse")]
fn default_host() -> String {
    "localhost".to_string()
}

#[cfg(feature = "sse")]
fn default_mcp_path() -> String {
    "/mcp".to_string()
}

#[cfg(feature = "sse")]
fn default_cors() -> bool {
    true
}

impl Default for TransportConfig {
    fn default() -> Self {
        #[cfg(feature = "stdio")]
        {
            return Self::Stdio;
        }

        #[cfg(all(not(feature = "stdio"), feature = "sse"))]
        {
            return Self::Sse(SseConfig::default());
        }

        #[cfg(not(any(feature = "stdio", feature = "sse")))]
        {
            compile_error!("At least one transport feature must be enabled: stdio or sse");
        }
    }
}

#[cfg(feature = "sse")]
impl Default for SseConfig {
    fn default() -> Self {
        Self::new(DEFAULT_PORT)
    }
}

#[cfg(feature = "sse")]
impl SseConfig {
    /// Create an SSE config listening on `port` with default host and path.
    pub fn new(port: u16) -> Self {
        Self {
            port,
            host: default_host(),
            mcp_path: default_mcp_path(),
            enable_cors: default_cors(),
        }
    }

    /// Address the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Externally reachable base URL.
    pub fn base_url(&self) -> String {
        format!("http://{}", self.address())
    }
}

impl TransportConfig {
    /// Create an SSE transport config.
    #[cfg(feature = "sse")]
    pub fn sse(port: u16) -> Self {
        Self::Sse(SseConfig::new(port))
    }

    /// Resolve a transport selector (`stdio` or `sse`) and port.
    ///
    /// The port only matters for `sse`. Selectors for transports that were
    /// not compiled in are rejected like unknown ones.
    #[cfg_attr(not(feature = "sse"), allow(unused_variables))]
    pub fn parse(kind: &str, port: u16) -> TransportResult<Self> {
        match kind {
            #[cfg(feature = "stdio")]
            "stdio" => Ok(Self::Stdio),
            #[cfg(feature = "sse")]
            "sse" => Ok(Self::sse(port)),
            other => Err(TransportError::unsupported(other)),
        }
    }

    /// Get a description of this transport for logging.
    pub fn description(&self) -> String {
        match self {
            #[cfg(feature = "stdio")]
            Self::Stdio => "STDIO (standard MCP mode)".to_string(),
            #[cfg(feature = "sse")]
            Self::Sse(cfg) => format!("SSE on {}{}", cfg.base_url(), cfg.mcp_path),
        }
    }

    /// Check if this transport is the standard STDIO mode.
    pub fn is_stdio(&self) -> bool {
        #[cfg(feature = "stdio")]
        {
            matches!(self, Self::Stdio)
        }
        #[cfg(not(feature = "stdio"))]
        {
            false
        }
    }
}
