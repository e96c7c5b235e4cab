//! Transport layer for the MCP server.
//!
//! This module provides the transport implementations:
//! - **STDIO**: Standard input/output (default for MCP) - feature: `stdio`
//! - **SSE**: Streamable HTTP answering with server-sent events - feature: `sse`
//!
//! Both delegate framing and session handling to rmcp; this layer only
//! decides where the server listens and for how long.

mod config;
mod error;
mod service;

#[cfg(feature = "sse")]
pub mod sse;

#[cfg(feature = "stdio")]
pub mod stdio;

pub use config::{DEFAULT_PORT, TransportConfig};
pub use error::{TransportError, TransportResult};
pub use service::TransportService;

#[cfg(feature = "sse")]
pub use config::SseConfig;
