//! Process-wide pipeline constants.

use std::time::Duration;

use crate::vectorize::{STOP_WORDS, TOKEN_PATTERN};

/// Browser-like client identity sent with every article request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) \
     Chrome/120.0.0.0 Safari/537.36";

/// Upper bound on a single article fetch.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Maximum number of vocabulary terms kept per document.
pub const DEFAULT_MAX_FEATURES: usize = 20;

/// Immutable configuration shared by every pipeline run.
///
/// Built once at startup and handed to [`crate::KeywordPipeline::new`].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Request timeout for the fetch stage.
    pub timeout: Duration,
    /// Vocabulary size limit enforced by the vectorizer.
    pub max_features: usize,
    /// Regular expression matching a single token.
    pub token_pattern: &'static str,
    /// Terms excluded from the vocabulary.
    pub stop_words: &'static [&'static str],
}

impl PipelineConfig {
    /// Returns a copy of this config with a different fetch timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Returns a copy of this config with a different vocabulary limit.
    #[must_use]
    pub fn with_max_features(mut self, max_features: usize) -> Self {
        self.max_features = max_features;
        self
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            max_features: DEFAULT_MAX_FEATURES,
            token_pattern: TOKEN_PATTERN,
            stop_words: STOP_WORDS,
        }
    }
}
