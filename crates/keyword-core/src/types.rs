//! Core data types for keyword extraction.
//!
//! - `AnalyzeRequest` is the body accepted by `POST /analyze`
//! - `TermWeight` is an unrounded, L2-normalized vectorizer weight
//! - `KeywordRecord` is the externally visible, rounded result
//!
//! All types derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of decimal places kept in presented weights.
pub const WEIGHT_PRECISION: i32 = 4;

/// Rounds a weight to [`WEIGHT_PRECISION`] decimal places, halves to even.
#[must_use]
pub fn round_weight(weight: f64) -> f64 {
    let scale = 10f64.powi(WEIGHT_PRECISION);
    (weight * scale).round_ties_even() / scale
}

// ============================================================================
// Request Types
// ============================================================================

/// Body of an analysis request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Address of the article to analyze.
    pub url: String,
}

impl AnalyzeRequest {
    /// Creates a request for the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

// ============================================================================
// Weight Types
// ============================================================================

/// A vocabulary term with its normalized TF-IDF weight.
///
/// Weights are kept at full precision; rounding happens only when a
/// `TermWeight` is turned into a [`KeywordRecord`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TermWeight {
    /// The case-folded term.
    pub term: String,

    /// Normalized weight in `[0, 1]`.
    pub weight: f64,
}

impl TermWeight {
    #[must_use]
    pub fn new(term: impl Into<String>, weight: f64) -> Self {
        Self {
            term: term.into(),
            weight,
        }
    }
}

/// A ranked keyword as returned to clients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordRecord {
    /// The keyword.
    pub word: String,

    /// Weight rounded to four decimal places.
    pub weight: f64,
}

impl From<&TermWeight> for KeywordRecord {
    fn from(term: &TermWeight) -> Self {
        Self {
            word: term.term.clone(),
            weight: round_weight(term.weight),
        }
    }
}

impl From<TermWeight> for KeywordRecord {
    fn from(term: TermWeight) -> Self {
        Self {
            weight: round_weight(term.weight),
            word: term.term,
        }
    }
}

impl fmt::Display for KeywordRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:.4})", self.word, self.weight)
    }
}

// ============================================================================
// Tests
// ============================================================================
