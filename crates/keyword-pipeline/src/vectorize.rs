//! Vectorizer stage: tokenization, stop word removal and TF-IDF weighting.
//!
//! The corpus is always the single document being analyzed, so every term
//! has document frequency 1 out of 1. With smoothed IDF,
//! `ln((1 + n) / (1 + df)) + 1`, that is exactly `1.0` for every term and the
//! weights reduce to the L2-normalized raw term counts.
//!
//! Vocabulary order is lexicographic. It decides which terms survive the
//! feature limit when counts tie, and the ranker keeps it for equal weights.

use std::collections::{BTreeMap, HashSet};

use regex::Regex;
use tracing::debug;

use keyword_core::TermWeight;

use crate::config::PipelineConfig;

/// Words of two or more alphanumeric characters.
pub const TOKEN_PATTERN: &str = r"\b\w\w+\b";

/// English stop words excluded from the vocabulary.
pub const STOP_WORDS: &[&str] = &[
    "a", "about", "above", "across", "after", "afterwards", "again", "against", "all", "almost",
    "alone", "along", "already", "also", "although", "always", "am", "among", "amongst",
    "amoungst", "amount", "an", "and", "another", "any", "anyhow", "anyone", "anything", "anyway",
    "anywhere", "are", "around", "as", "at", "back", "be", "became", "because", "become",
    "becomes", "becoming", "been", "before", "beforehand", "behind", "being", "below", "beside",
    "besides", "between", "beyond", "bill", "both", "bottom", "but", "by", "call", "can",
    "cannot", "cant", "co", "con", "could", "couldnt", "cry", "de", "describe", "detail", "do",
    "done", "down", "due", "during", "each", "eg", "eight", "either", "eleven", "else",
    "elsewhere", "empty", "enough", "etc", "even", "ever", "every", "everyone", "everything",
    "everywhere", "except", "few", "fifteen", "fifty", "fill", "find", "fire", "first", "five",
    "for", "former", "formerly", "forty", "found", "four", "from", "front", "full", "further",
    "get", "give", "go", "had", "has", "hasnt", "have", "he", "hence", "her", "here",
    "hereafter", "hereby", "herein", "hereupon", "hers", "herself", "him", "himself", "his",
    "how", "however", "hundred", "i", "ie", "if", "in", "inc", "indeed", "interest", "into", "is",
    "it", "its", "itself", "keep", "last", "latter", "latterly", "least", "less", "ltd", "made",
    "many", "may", "me", "meanwhile", "might", "mill", "mine", "more", "moreover", "most",
    "mostly", "move", "much", "must", "my", "myself", "name", "namely", "neither", "never",
    "nevertheless", "next", "nine", "no", "nobody", "none", "noone", "nor", "not", "nothing",
    "now", "nowhere", "of", "off", "often", "on", "once", "one", "only", "onto", "or", "other",
    "others", "otherwise", "our", "ours", "ourselves", "out", "over", "own", "part", "per",
    "perhaps", "please", "put", "rather", "re", "same", "see", "seem", "seemed", "seeming",
    "seems", "serious", "several", "she", "should", "show", "side", "since", "sincere", "six",
    "sixty", "so", "some", "somehow", "someone", "something", "sometime", "sometimes",
    "somewhere", "still", "such", "system", "take", "ten", "than", "that", "the", "their",
    "them", "themselves", "then", "thence", "there", "thereafter", "thereby", "therefore",
    "therein", "thereupon", "these", "they", "thick", "thin", "third", "this", "those", "though",
    "three", "through", "throughout", "thru", "thus", "to", "together", "too", "top", "toward",
    "towards", "twelve", "twenty", "two", "un", "under", "until", "up", "upon", "us", "very",
    "via", "was", "we", "well", "were", "what", "whatever", "when", "whence", "whenever",
    "where", "whereafter", "whereas", "whereby", "wherein", "whereupon", "wherever", "whether",
    "which", "while", "whither", "who", "whoever", "whole", "whom", "whose", "why", "will",
    "with", "within", "without", "would", "yet", "you", "your", "yours", "yourself",
    "yourselves",
];

/// Turns narrative text into a bounded, normalized term vector.
#[derive(Debug, Clone)]
pub struct Vectorizer {
    token: Regex,
    stop_words: HashSet<&'static str>,
    max_features: usize,
}

impl Vectorizer {
    /// Compiles the token pattern and stop word set from `config`.
    pub fn new(config: &PipelineConfig) -> Result<Self, regex::Error> {
        Ok(Self {
            token: Regex::new(config.token_pattern)?,
            stop_words: config.stop_words.iter().copied().collect(),
            max_features: config.max_features,
        })
    }

    /// Lower-cased tokens of `text`, stop words included, in document order.
    pub fn tokenize<'a>(&'a self, text: &'a str) -> impl Iterator<Item = String> + 'a {
        self.token
            .find_iter(text)
            .map(|m| m.as_str().to_lowercase())
    }

    /// Counts non-stop-word tokens, keyed in vocabulary order.
    pub fn term_counts(&self, text: &str) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for token in self.tokenize(text) {
            if self.stop_words.contains(token.as_str()) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
        counts
    }

    /// Computes TF-IDF weights for `text`.
    ///
    /// At most `max_features` terms are returned, chosen by count with ties
    /// going to the earlier vocabulary term. Output is in vocabulary order
    /// and has unit Euclidean norm unless it is empty.
    pub fn vectorize(&self, text: &str) -> Vec<TermWeight> {
        let counts = self.term_counts(text);
        let vocabulary = counts.len();

        let mut kept: Vec<(String, usize)> = counts.into_iter().collect();
        if kept.len() > self.max_features {
            // Stable: equal counts stay in vocabulary order.
            kept.sort_by(|a, b| b.1.cmp(&a.1));
            kept.truncate(self.max_features);
            kept.sort_by(|a, b| a.0.cmp(&b.0));
        }

        let weights: Vec<TermWeight> = kept
            .into_iter()
            .map(|(term, count)| TermWeight::new(term, count as f64 * SINGLE_DOCUMENT_IDF))
            .collect();

        debug!(vocabulary, terms = weights.len(), "vectorized narrative text");
        l2_normalize(weights)
    }
}

/// `ln((1 + 1) / (1 + 1)) + 1`.
const SINGLE_DOCUMENT_IDF: f64 = 1.0;

fn l2_normalize(mut weights: Vec<TermWeight>) -> Vec<TermWeight> {
    let norm = weights.iter().map(|t| t.weight * t.weight).sum::<f64>().sqrt();
    if norm > 0.0 {
        for term in &mut weights {
            term.weight /= norm;
        }
    }
    weights
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vectorizer() -> Vectorizer {
        Vectorizer::new(&PipelineConfig::default()).unwrap()
    }

    fn weight_of(weights: &[TermWeight], term: &str) -> Option<f64> {
        weights.iter().find(|t| t.term == term).map(|t| t.weight)
    }

    #[test]
    fn tokenizer_lowercases_and_drops_short_tokens() {
        let v = vectorizer();
        let tokens: Vec<String> = v.tokenize("A Rust-based CLI, v2 is OK! x_y 42").collect();
        assert_eq!(tokens, ["rust", "based", "cli", "v2", "is", "ok", "x_y", "42"]);
    }

    #[test]
    fn stop_words_never_counted() {
        let v = vectorizer();
        let counts = v.term_counts("The the THE over and dog");
        assert_eq!(counts.len(), 1);
        assert_eq!(counts["dog"], 1);
    }

    #[test]
    fn fox_and_dog_weights() {
        let v = vectorizer();
        let weights = v.vectorize("The quick brown fox jumps over the lazy dog. The dog barks.");

        let terms: Vec<&str> = weights.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, ["barks", "brown", "dog", "fox", "jumps", "lazy", "quick"]);

        let norm = 10f64.sqrt();
        assert!((weight_of(&weights, "dog").unwrap() - 2.0 / norm).abs() < 1e-12);
        assert!((weight_of(&weights, "fox").unwrap() - 1.0 / norm).abs() < 1e-12);
        assert!(weight_of(&weights, "the").is_none());
        assert!(weight_of(&weights, "over").is_none());
    }

    #[test]
    fn output_has_unit_norm() {
        let v = vectorizer();
        let weights = v.vectorize("alpha beta beta gamma gamma gamma delta");
        let norm: f64 = weights.iter().map(|t| t.weight * t.weight).sum::<f64>().sqrt();
        assert!((norm - 1.0).abs() < 1e-12);
        assert!(weights.iter().all(|t| (0.0..=1.0).contains(&t.weight)));
    }

    #[test]
    fn single_term_has_weight_one() {
        let weights = vectorizer().vectorize("keyword keyword keyword");
        assert_eq!(weights, vec![TermWeight::new("keyword", 1.0)]);
    }

    #[test]
    fn feature_limit_keeps_most_frequent() {
        let v = vectorizer();
        // 25 distinct terms; t00..t04 appear three times, the rest once.
        let mut words = Vec::new();
        for i in 0..25 {
            let repeats = if i < 5 { 3 } else { 1 };
            for _ in 0..repeats {
                words.push(format!("t{i:02}"));
            }
        }
        let weights = v.vectorize(&words.join(" "));

        assert_eq!(weights.len(), 20);
        for i in 0..5 {
            assert!(weight_of(&weights, &format!("t{i:02}")).is_some());
        }
        // Ties at count 1 go to the earliest vocabulary terms.
        assert!(weight_of(&weights, "t19").is_some());
        assert!(weight_of(&weights, "t20").is_none());
        assert!(weight_of(&weights, "t24").is_none());
    }

    #[test]
    fn stop_word_only_text_is_empty_not_an_error() {
        let weights = vectorizer().vectorize("the and of to it is a");
        assert!(weights.is_empty());
    }

    #[test]
    fn custom_feature_limit() {
        let config = PipelineConfig::default().with_max_features(2);
        let v = Vectorizer::new(&config).unwrap();
        let weights = v.vectorize("cat cat cat bird bird fish");
        let terms: Vec<&str> = weights.iter().map(|t| t.term.as_str()).collect();
        assert_eq!(terms, ["bird", "cat"]);
    }
}
