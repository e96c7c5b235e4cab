//! Domains module containing business logic organized by bounded contexts.
//!
//! - **dictionary**: the RAE dictionary API client
//! - **tools**: MCP tools exposing the dictionary to clients

pub mod dictionary;
pub mod tools;
