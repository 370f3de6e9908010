use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{CompareError, Result};

/// Outcome of scoring two core word lists.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Overlap ratio in `[0.0, 1.0]`, rounded to 4 decimal places.
    pub score: f64,
    /// Unique words present in both documents.
    pub common_words: BTreeSet<String>,
    /// Number of unique words across both documents.
    pub union_size: usize,
}

/// Two-argument scoring contract shared by every algorithm.
pub type SimilarityFn = fn(&[String], &[String]) -> Result<SimilarityReport>;

/// Similarity algorithms that can be selected by name in configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimilarityAlgorithm {
    #[default]
    Jaccard,
}

impl SimilarityAlgorithm {
    pub const ALL: &'static [SimilarityAlgorithm] = &[SimilarityAlgorithm::Jaccard];

    pub fn as_str(&self) -> &'static str {
        match self {
            SimilarityAlgorithm::Jaccard => "jaccard",
        }
    }

    /// The scoring function registered for this algorithm.
    pub fn function(&self) -> SimilarityFn {
        match self {
            SimilarityAlgorithm::Jaccard => jaccard_similarity,
        }
    }

    pub fn score(&self, words1: &[String], words2: &[String]) -> Result<SimilarityReport> {
        (self.function())(words1, words2)
    }
}

impl fmt::Display for SimilarityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SimilarityAlgorithm {
    type Err = CompareError;

    fn from_str(name: &str) -> Result<Self> {
        match name.trim().to_lowercase().as_str() {
            // legacy configuration files name the function directly
            "jaccard" | "get_jaccard_sim" => Ok(SimilarityAlgorithm::Jaccard),
            _ => Err(CompareError::UnknownAlgorithm(name.to_string())),
        }
    }
}

/// Jaccard similarity of the unique words in two lists: `|A ∩ B| / |A ∪ B|`.
///
/// Fails with [`CompareError::ZeroOverlap`] when both lists are empty, since
/// the ratio is undefined. The score is rounded to 4 decimal places, see
/// [`round4`].
pub fn jaccard_similarity(words1: &[String], words2: &[String]) -> Result<SimilarityReport> {
    let a: HashSet<&str> = words1.iter().map(String::as_str).collect();
    let b: HashSet<&str> = words2.iter().map(String::as_str).collect();

    let common_words: BTreeSet<String> = a.intersection(&b).map(|w| w.to_string()).collect();
    let union_size = a.len() + b.len() - common_words.len();

    if union_size == 0 {
        return Err(CompareError::ZeroOverlap);
    }

    let score = round4(common_words.len() as f64 / union_size as f64);

    Ok(SimilarityReport {
        score,
        common_words,
        union_size,
    })
}

/// Rounds to 4 decimal places from the exact binary value of `value`, with
/// exact ties going to the even digit (`1/32` gives `0.0312`).
pub fn round4(value: f64) -> f64 {
    let scaled = value * 10_000.0;
    let floor = scaled.floor();

    let rounded = if scaled - floor == 0.5 {
        // scaling may have landed on the midpoint; the residual says which
        // side of it the exact product is on
        let residual = value.mul_add(10_000.0, -scaled);
        if residual > 0.0 {
            floor + 1.0
        } else if residual < 0.0 || floor % 2.0 == 0.0 {
            floor
        } else {
            floor + 1.0
        }
    } else {
        scaled.round()
    };

    rounded / 10_000.0
}

/// Renders a score the way it is reported to users: always with a
/// fractional part (`1.0`, `0.5`, `0.3333`).
pub fn format_score(score: f64) -> String {
    format!("{:?}", score)
}
