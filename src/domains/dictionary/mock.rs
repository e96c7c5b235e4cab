//! In-memory dictionary used by tool tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use super::{DictionaryClient, DictionaryError, WordEntry};

enum Reply {
    Entry(WordEntry),
    NotFound(Vec<String>),
    Failure(String),
}

/// A `DictionaryClient` that gives the same canned reply to every call
/// and counts how often it was asked.
pub struct MockDictionary {
    reply: Reply,
    calls: AtomicUsize,
}

impl MockDictionary {
    fn with_reply(reply: Reply) -> Self {
        Self {
            reply,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn returning(entry: WordEntry) -> Self {
        Self::with_reply(Reply::Entry(entry))
    }

    pub fn not_found(suggestions: &[&str]) -> Self {
        Self::with_reply(Reply::NotFound(
            suggestions.iter().map(|s| s.to_string()).collect(),
        ))
    }

    pub fn failing(message: &str) -> Self {
        Self::with_reply(Reply::Failure(message.to_string()))
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn respond(&self) -> Result<WordEntry, DictionaryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Entry(entry) => Ok(entry.clone()),
            Reply::NotFound(suggestions) => Err(DictionaryError::not_found(suggestions.clone())),
            Reply::Failure(message) => Err(DictionaryError::api(503, message.clone())),
        }
    }
}

#[async_trait]
impl DictionaryClient for MockDictionary {
    async fn word(&self, _word: &str) -> Result<WordEntry, DictionaryError> {
        self.respond()
    }

    async fn daily(&self) -> Result<WordEntry, DictionaryError> {
        self.respond()
    }

    async fn random(&self) -> Result<WordEntry, DictionaryError> {
        self.respond()
    }
}
