//! RAE dictionary tools module.
//!
//! This module provides the tools backed by the RAE dictionary API:
//! - `word_info`: Definitions of a single word, with suggestions on a miss
//! - `daily_word`: The word of the day
//! - `random_word`: A random dictionary entry

pub mod common;
pub mod daily_word;
pub mod random_word;
pub mod word_info;

pub use daily_word::{DailyWordParams, DailyWordTool};
pub use random_word::{RandomWordParams, RandomWordTool};
pub use word_info::{WordInfoParams, WordInfoTool};
