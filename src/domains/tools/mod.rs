//! Tools domain module.
//!
//! This module handles all tool-related functionality for the MCP server.
//! Tools are executable functions that MCP clients call to query the
//! dictionary.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `router.rs` - ToolRouter builder shared by every transport
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Create a new file in `definitions/rae/` (e.g., `my_tool.rs`)
//! 2. Define params, execute() and create_route()
//! 3. Export in `definitions/rae/mod.rs`
//! 4. Add route in `router.rs` using `with_route()`

pub mod definitions;
mod error;
pub mod router;

pub use error::ToolError;
pub use router::build_tool_router;
