//! keyword-core: shared types for the article keyword service.
//!
//! These types cross crate boundaries: the pipeline produces them, the
//! server serializes them, and the CLI deserializes them.

pub mod types;

pub use types::{AnalyzeRequest, KeywordRecord, TermWeight, WEIGHT_PRECISION, round_weight};
