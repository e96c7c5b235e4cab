//! Error types and handling for the MCP server.
//!
//! This module defines a unified error type for the library surface: server
//! construction and transport startup. Tool failures never reach it; they
//! are reported to the caller as tool-call errors.

use thiserror::Error;

/// A specialized Result type for MCP server operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the MCP server.
#[derive(Debug, Error)]
pub enum Error {
    /// The dictionary client could not be built.
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] crate::domains::dictionary::DictionaryError),

    /// The transport failed to start or stopped with an error.
    #[error("Transport error: {0}")]
    Transport(#[from] super::transport::TransportError),
}
