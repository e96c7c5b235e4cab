//! Word records returned by the RAE API.
//!
//! The server does not interpret these records; they are decoded leniently
//! and serialized back out for the caller. Fields the API adds later are
//! kept in `extra` so they pass through untouched.

use serde::{Deserialize, Serialize};

/// A dictionary entry, as returned by word lookup, daily word and random word.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WordEntry {
    /// The headword.
    #[serde(default)]
    pub word: String,

    /// Meanings, one per etymology.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub meanings: Vec<Meaning>,

    /// Any other top-level fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl WordEntry {
    /// Create an entry with only a headword.
    pub fn new(word: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meaning {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub origin: Option<Origin>,

    #[serde(default)]
    pub senses: Vec<Sense>,

    /// Verb conjugation tables, kept opaque.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjugations: Option<serde_json::Value>,
}

/// Etymology of a meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Origin {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub voice: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A single numbered sense of a meaning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sense {
    #[serde(default)]
    pub raw: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meaning_number: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub synonyms: Vec<String>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub antonyms: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_entry_decodes_api_shape() {
        let json = r#"{
            "word": "casa",
            "meanings": [{
                "origin": {"raw": "Del lat. casa", "type": "lat", "voice": "casa", "text": "choza"},
                "senses": [{
                    "raw": "1. f. Edificio para habitar.",
                    "meaning_number": 1,
                    "category": "noun",
                    "description": "Edificio para habitar.",
                    "synonyms": ["vivienda"]
                }]
            }]
        }"#;

        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.word, "casa");
        assert_eq!(entry.meanings.len(), 1);
        let origin = entry.meanings[0].origin.as_ref().unwrap();
        assert_eq!(origin.kind.as_deref(), Some("lat"));
        assert_eq!(entry.meanings[0].senses[0].meaning_number, Some(1));
        assert_eq!(entry.meanings[0].senses[0].synonyms, vec!["vivienda"]);
    }

    #[test]
    fn test_unknown_fields_pass_through() {
        let json = r#"{"word": "sol", "frequency": 42}"#;
        let entry: WordEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.extra.get("frequency"), Some(&serde_json::json!(42)));

        let back = serde_json::to_value(&entry).unwrap();
        assert_eq!(back, serde_json::json!({"word": "sol", "frequency": 42}));
    }

    #[test]
    fn test_origin_type_renamed() {
        let origin = Origin {
            kind: Some("lat".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&origin).unwrap();
        assert_eq!(value, serde_json::json!({"type": "lat"}));
    }
}
