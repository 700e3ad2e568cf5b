use std::fmt::{Display, Formatter};

use common_libs::error::FmtResult;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::validation::Word;

/// Which response shape the service speaks.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SchemaVersion {
    /// Flat multi field answer with the most similar word.
    #[default]
    Similarity,
    /// Two field `word` / `etymology` answer of the first web app.
    Legacy,
    Undefined,
}

impl From<String> for SchemaVersion {
    fn from(source: String) -> Self {
        SchemaVersion::from(source.as_str())
    }
}

impl From<&str> for SchemaVersion {
    fn from(source: &str) -> Self {
        match source.to_lowercase().trim() {
            "similarity" | "a" => SchemaVersion::Similarity,
            "legacy" | "b" => SchemaVersion::Legacy,
            _ => SchemaVersion::Undefined,
        }
    }
}

impl Display for SchemaVersion {
    fn fmt(&self, f: &mut Formatter) -> FmtResult {
        let name = match self {
            SchemaVersion::Similarity => "similarity",
            SchemaVersion::Legacy => "legacy",
            SchemaVersion::Undefined => "undefined",
        };
        write!(f, "{}", name)
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WordRequest {
    pub word: String,
}

impl WordRequest {
    pub fn new(word: &Word) -> Self {
        WordRequest {
            word: word.as_str().to_string(),
        }
    }

    /// `application/x-www-form-urlencoded` body. A validated word is ASCII
    /// letters only, so it needs no percent encoding.
    pub fn form_body(&self) -> String {
        format!("word={}", self.word)
    }
}

/// Status and raw body of one answer, whatever the status.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceAnswer {
    pub status: u16,
    pub body: Vec<u8>,
}

impl ServiceAnswer {
    pub fn new(status: u16, body: Vec<u8>) -> Self {
        ServiceAnswer { status, body }
    }

    pub fn ok(body: Vec<u8>) -> Self {
        ServiceAnswer::new(200, body)
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct SimilarityResponse {
    pub error: Option<Value>,
    pub most_similar_word: Option<Value>,
    pub similarity_score: Option<Value>,
    pub origin_language: Option<Value>,
    pub noun_meaning: Option<Value>,
    pub adj_meaning: Option<Value>,
    pub verb_meaning: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct LegacyResponse {
    pub error: Option<Value>,
    pub word: Option<Value>,
    pub etymology: Option<Value>,
}

/// Text writes produced by one successful response, in render order.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct RenderedPanel {
    pub word: String,
    pub schema: SchemaVersion,
    pub outputs: Vec<RenderedOutput>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RenderedOutput {
    pub element: String,
    pub text: String,
}
