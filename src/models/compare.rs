use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

use crate::utils::{format_score, SimilarityReport};

/// Body of a compare request. Both texts are optional at the type level so a
/// missing field can be reported as a payload error instead of a parse error.
///
/// Only a JSON object is accepted; arrays and scalars fail to deserialize.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(try_from = "Map<String, Value>")]
pub struct CompareRequest {
    #[validate(required)]
    pub text1: Option<String>,
    #[validate(required)]
    pub text2: Option<String>,
}

impl CompareRequest {
    pub fn new(text1: impl Into<String>, text2: impl Into<String>) -> Self {
        Self {
            text1: Some(text1.into()),
            text2: Some(text2.into()),
        }
    }

    /// Both texts, if present.
    pub fn texts(&self) -> Option<(&str, &str)> {
        Some((self.text1.as_deref()?, self.text2.as_deref()?))
    }
}

impl TryFrom<Map<String, Value>> for CompareRequest {
    type Error = String;

    fn try_from(mut object: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut text = |key: &str| match object.remove(key) {
            None => Ok(None),
            Some(Value::String(text)) => Ok(Some(text)),
            Some(other) => Err(format!("{} must be a string, got {}", key, other)),
        };

        Ok(Self {
            text1: text("text1")?,
            text2: text("text2")?,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareResponse {
    pub request_id: Uuid,
    pub score: f64,
    pub words_in_common: Vec<String>,
    pub unique_words: usize,
    pub algorithm: String,
    pub timestamp: DateTime<Utc>,
}

impl CompareResponse {
    pub fn from_report(request_id: Uuid, algorithm: &str, report: SimilarityReport) -> Self {
        Self {
            request_id,
            score: report.score,
            words_in_common: report.common_words.into_iter().collect(),
            unique_words: report.union_size,
            algorithm: algorithm.to_string(),
            timestamp: Utc::now(),
        }
    }

    pub fn as_text(&self) -> String {
        format!("Text comparison score is {}\n", format_score(self.score))
    }
}
