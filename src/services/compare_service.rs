use std::sync::Arc;

use crate::config::ComparisonConfig;
use crate::error::Result;
use crate::utils::{derive_core_words, SimilarityAlgorithm, SimilarityReport, StopWords};

/// Runs the normalize-then-score pipeline for pairs of documents.
///
/// The stop words are shared read-only, so one instance can serve every
/// request without locking.
#[derive(Debug, Clone)]
pub struct CompareService {
    stopwords: Arc<StopWords>,
    algorithm: SimilarityAlgorithm,
}

impl CompareService {
    pub fn new(stopwords: StopWords, algorithm: SimilarityAlgorithm) -> Self {
        Self {
            stopwords: Arc::new(stopwords),
            algorithm,
        }
    }

    pub fn from_config(config: &ComparisonConfig) -> Result<Self> {
        let algorithm = config.similarity_algorithm()?;
        Ok(Self::new(config.stop_words(), algorithm))
    }

    pub fn algorithm(&self) -> SimilarityAlgorithm {
        self.algorithm
    }

    pub fn stopwords(&self) -> &StopWords {
        &self.stopwords
    }

    pub fn core_words(&self, text: &str) -> Vec<String> {
        derive_core_words(text, &self.stopwords)
    }

    pub fn compare(&self, text1: &str, text2: &str) -> Result<SimilarityReport> {
        let words1 = self.core_words(text1);
        let words2 = self.core_words(text2);
        tracing::debug!(
            "Derived core words: doc1={} doc2={}",
            words1.len(),
            words2.len()
        );

        self.compare_words(&words1, &words2)
    }

    pub fn compare_words(&self, words1: &[String], words2: &[String]) -> Result<SimilarityReport> {
        let report = self.algorithm.score(words1, words2)?;
        tracing::info!(
            "comparison score: {} | words in common: {:?} | num unique words: {}",
            report.score,
            report.common_words,
            report.union_size
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CompareError;

    fn service(stopwords: &[&str]) -> CompareService {
        CompareService::new(StopWords::new(stopwords), SimilarityAlgorithm::Jaccard)
    }

    #[test]
    fn compares_two_texts() {
        let report = service(&["the", "on"])
            .compare("The Cat sat on the MAT.", "the cat RAN on the mat!")
            .unwrap();
        assert_eq!(report.score, 0.5);
        assert_eq!(report.union_size, 4);
    }

    #[test]
    fn texts_of_only_stopwords_fail() {
        let err = service(&["the", "on"]).compare("the on", "The. ON!").unwrap_err();
        assert!(matches!(err, CompareError::ZeroOverlap));
    }

    #[test]
    fn empty_texts_fail() {
        assert!(matches!(
            service(&[]).compare("", "   "),
            Err(CompareError::ZeroOverlap)
        ));
    }

    #[test]
    fn identical_texts_score_one() {
        let text = "Four score and seven years ago";
        assert_eq!(service(&["and"]).compare(text, text).unwrap().score, 1.0);
    }

    #[test]
    fn builds_from_config() {
        let config = ComparisonConfig {
            stopwords: Some(vec!["The".to_string()]),
            algorithm: "get_jaccard_sim".to_string(),
            ..ComparisonConfig::default()
        };
        let service = CompareService::from_config(&config).unwrap();
        assert_eq!(service.algorithm(), SimilarityAlgorithm::Jaccard);
        assert!(service.stopwords().contains("the"));
        assert_eq!(service.core_words("The end"), vec!["end"]);
    }

    #[test]
    fn rejects_unknown_algorithm_from_config() {
        let config = ComparisonConfig {
            algorithm: "cosine".to_string(),
            ..ComparisonConfig::default()
        };
        assert!(matches!(
            CompareService::from_config(&config),
            Err(CompareError::UnknownAlgorithm(_))
        ));
    }

    #[test]
    fn clones_share_stopwords() {
        let a = service(&["x"]);
        let b = a.clone();
        assert!(Arc::ptr_eq(&a.stopwords, &b.stopwords));
    }
}
