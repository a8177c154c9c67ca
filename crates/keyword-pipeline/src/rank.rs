//! Ranker stage: orders term weights and renders keyword records.

use keyword_core::{KeywordRecord, TermWeight};

/// Sorts `weights` by descending weight and keeps at most `limit` records.
///
/// The sort is stable, so equal weights keep the vectorizer's vocabulary
/// order. Weights are rounded only after sorting.
pub fn rank(mut weights: Vec<TermWeight>, limit: usize) -> Vec<KeywordRecord> {
    weights.sort_by(|a, b| b.weight.total_cmp(&a.weight));
    weights
        .into_iter()
        .take(limit)
        .map(KeywordRecord::from)
        .collect()
}
