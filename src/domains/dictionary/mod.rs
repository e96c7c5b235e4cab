//! Dictionary domain module.
//!
//! This module wraps the RAE dictionary HTTP API behind the
//! [`DictionaryClient`] trait. Tools only ever see the trait, so the
//! single long-lived client handle can be swapped for a mock in tests.
//!
//! ## Architecture
//!
//! - `client.rs` - The `DictionaryClient` trait and the `reqwest`-backed `RaeClient`
//! - `model.rs` - Word records returned by the API
//! - `error.rs` - Dictionary-specific error types

mod client;
mod error;
mod model;

#[cfg(test)]
pub(crate) mod mock;

pub use client::{DictionaryClient, RaeClient};
pub use error::DictionaryError;
pub use model::{Meaning, Origin, Sense, WordEntry};
