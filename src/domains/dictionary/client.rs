//! Dictionary client abstraction and the RAE API implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};

use super::error::DictionaryError;
use super::model::WordEntry;
use crate::core::config::DictionaryConfig;

/// Error code the API reports for a word without an entry.
const NOT_FOUND_CODE: &str = "NOT_FOUND";

/// Read-only access to a dictionary.
///
/// Implementations are shared across concurrent tool calls through an
/// `Arc<dyn DictionaryClient>`.
#[async_trait]
pub trait DictionaryClient: Send + Sync {
    /// Look up a single word.
    ///
    /// A miss is reported as [`DictionaryError::NotFound`], carrying any
    /// near matches the dictionary offers.
    async fn word(&self, word: &str) -> Result<WordEntry, DictionaryError>;

    /// Fetch the word of the day.
    async fn daily(&self) -> Result<WordEntry, DictionaryError>;

    /// Fetch a random word.
    async fn random(&self) -> Result<WordEntry, DictionaryError>;
}

/// HTTP client for `rae-api.com`.
#[derive(Debug, Clone)]
pub struct RaeClient {
    http: Client,
    base_url: Url,
}

impl RaeClient {
    /// Build a client from the dictionary configuration.
    pub fn new(config: &DictionaryConfig) -> Result<Self, DictionaryError> {
        let base_url = Url::parse(&config.base_url)
            .map_err(|e| DictionaryError::InvalidBaseUrl(format!("{}: {}", config.base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(DictionaryError::InvalidBaseUrl(config.base_url.clone()));
        }

        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// The API base URL requests are resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve path segments against the base URL, percent-encoding each one.
    ///
    /// `.` and `..` are rejected: URL normalisation would resolve them
    /// against the base path instead of sending them literally.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, DictionaryError> {
        if let Some(dots) = segments.iter().find(|s| matches!(**s, "." | "..")) {
            return Err(DictionaryError::InvalidWord(dots.to_string()));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| DictionaryError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, DictionaryError> {
        let url = self.endpoint(segments)?;
        debug!("GET {}", url);

        let response = self.http.get(url).send().await?;
        let status = response.status();
        let body = response.bytes().await?;

        debug!("API response: {} ({} bytes)", status, body.len());
        decode_envelope(status, &body)
    }
}

#[async_trait]
impl DictionaryClient for RaeClient {
    #[instrument(skip(self))]
    async fn word(&self, word: &str) -> Result<WordEntry, DictionaryError> {
        self.get(&["words", word]).await
    }

    #[instrument(skip(self))]
    async fn daily(&self) -> Result<WordEntry, DictionaryError> {
        self.get(&["daily"]).await
    }

    #[instrument(skip(self))]
    async fn random(&self) -> Result<WordEntry, DictionaryError> {
        self.get(&["random"]).await
    }
}

/// Response envelope shared by every endpoint.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    #[serde(default)]
    ok: bool,
    data: Option<T>,
    error: Option<String>,
    #[serde(default)]
    suggestions: Vec<String>,
}

/// Turn a raw API response into a value or a typed error.
fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> Result<T, DictionaryError> {
    let envelope: Envelope<T> = match serde_json::from_slice(body) {
        Ok(envelope) => envelope,
        Err(e) if status.is_success() => return Err(DictionaryError::Decode(e)),
        Err(_) => {
            let text = String::from_utf8_lossy(body);
            let message = if text.trim().is_empty() {
                status.canonical_reason().unwrap_or("unknown error").to_string()
            } else {
                text.chars().take(200).collect()
            };
            return Err(DictionaryError::api(status.as_u16(), message));
        }
    };

    if envelope.ok {
        if let Some(data) = envelope.data {
            return Ok(data);
        }
    }

    if envelope.error.as_deref() == Some(NOT_FOUND_CODE) || status == StatusCode::NOT_FOUND {
        return Err(DictionaryError::not_found(envelope.suggestions));
    }

    let message = envelope
        .error
        .unwrap_or_else(|| "response carried no data".to_string());
    Err(DictionaryError::api(status.as_u16(), message))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> RaeClient {
        RaeClient::new(&DictionaryConfig::default()).unwrap()
    }

    #[test]
    fn test_endpoint_encodes_word() {
        let client = test_client();
        let url = client.endpoint(&["words", "camión"]).unwrap();
        assert_eq!(url.as_str(), "https://rae-api.com/api/words/cami%C3%B3n");
    }

    #[test]
    fn test_endpoint_with_trailing_slash_base() {
        let config = DictionaryConfig {
            base_url: "http://localhost:9000/api/".to_string(),
            ..Default::default()
        };
        let client = RaeClient::new(&config).unwrap();
        let url = client.endpoint(&["daily"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:9000/api/daily");
    }

    #[test]
    fn test_endpoint_keeps_slash_inside_segment() {
        let client = test_client();
        let url = client.endpoint(&["words", "a/b"]).unwrap();
        assert_eq!(url.as_str(), "https://rae-api.com/api/words/a%2Fb");
    }

    #[test]
    fn test_endpoint_rejects_dot_segments() {
        let client = test_client();
        for word in [".", ".."] {
            let err = client.endpoint(&["words", word]).unwrap_err();
            assert!(matches!(err, DictionaryError::InvalidWord(ref w) if w == word));
        }

        let url = client.endpoint(&["words", "..."]).unwrap();
        assert_eq!(url.as_str(), "https://rae-api.com/api/words/...");
    }

    #[tokio::test]
    async fn test_dot_word_fails_before_request() {
        let config = DictionaryConfig {
            base_url: "http://127.0.0.1:9/api".to_string(),
            ..Default::default()
        };
        let client = RaeClient::new(&config).unwrap();
        let err = client.word("..").await.unwrap_err();
        assert!(matches!(err, DictionaryError::InvalidWord(_)));
    }

    #[test]
    fn test_invalid_base_url() {
        let config = DictionaryConfig {
            base_url: "not a url".to_string(),
            ..Default::default()
        };
        let result = RaeClient::new(&config);
        assert!(matches!(result, Err(DictionaryError::InvalidBaseUrl(_))));
    }

    #[test]
    fn test_decode_success() {
        let body = br#"{"ok": true, "data": {"word": "casa"}}"#;
        let entry: WordEntry = decode_envelope(StatusCode::OK, body).unwrap();
        assert_eq!(entry.word, "casa");
    }

    #[test]
    fn test_decode_not_found_with_suggestions() {
        let body = br#"{"ok": false, "error": "NOT_FOUND", "suggestions": ["casa", "caso"]}"#;
        let err = decode_envelope::<WordEntry>(StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(
            err.suggestions(),
            Some(&["casa".to_string(), "caso".to_string()][..])
        );
    }

    #[test]
    fn test_decode_not_found_without_suggestions() {
        let body = br#"{"ok": false, "error": "NOT_FOUND"}"#;
        let err = decode_envelope::<WordEntry>(StatusCode::OK, body).unwrap_err();
        assert_eq!(err.suggestions(), Some(&[][..]));
    }

    #[test]
    fn test_decode_api_error() {
        let body = br#"{"ok": false, "error": "RATE_LIMITED"}"#;
        let err = decode_envelope::<WordEntry>(StatusCode::TOO_MANY_REQUESTS, body).unwrap_err();
        match err {
            DictionaryError::Api { status, message } => {
                assert_eq!(status, 429);
                assert_eq!(message, "RATE_LIMITED");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_json_error_page() {
        let err =
            decode_envelope::<WordEntry>(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>")
                .unwrap_err();
        match err {
            DictionaryError::Api { status, message } => {
                assert_eq!(status, 502);
                assert!(message.contains("bad gateway"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_decode_malformed_success_body() {
        let err = decode_envelope::<WordEntry>(StatusCode::OK, b"not json").unwrap_err();
        assert!(matches!(err, DictionaryError::Decode(_)));
    }
}
