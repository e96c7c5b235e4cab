//! Tool definitions module.
//!
//! This module exports all available tool definitions.
//! Each tool is defined in its own file for better maintainability.

pub mod rae;

pub use rae::{
    DailyWordParams, DailyWordTool, RandomWordParams, RandomWordTool, WordInfoParams, WordInfoTool,
};
