//! keyword-pipeline: turns an article URL into a ranked keyword list.
//!
//! Stages run strictly in order and each one fails fast:
//! - [`fetch`]: download the article markup
//! - [`extract`]: reduce markup to narrative text
//! - [`vectorize`]: tokenize and compute single-document TF-IDF weights
//! - [`rank`]: sort, bound and round into [`KeywordRecord`]s
//!
//! # Usage
//!
//! ```rust,ignore
//! use keyword_pipeline::{KeywordPipeline, PipelineConfig};
//!
//! let pipeline = KeywordPipeline::new(PipelineConfig::default())?;
//! let keywords = pipeline.analyze("https://example.com/post").await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod rank;
pub mod vectorize;

pub use config::PipelineConfig;
pub use error::{EmptyContentError, FetchError, PipelineError, PipelineResult};
pub use extract::{Extraction, ExtractionTier};
pub use fetch::Fetcher;
pub use vectorize::Vectorizer;

use keyword_core::KeywordRecord;
use tracing::info;

/// The full Fetcher → Extractor → Vectorizer → Ranker pipeline.
///
/// Holds only immutable state, so one instance can serve concurrent
/// requests without locking.
#[derive(Debug, Clone)]
pub struct KeywordPipeline {
    config: PipelineConfig,
    fetcher: Fetcher,
    vectorizer: Vectorizer,
}

impl KeywordPipeline {
    /// Builds the pipeline from `config`.
    pub fn new(config: PipelineConfig) -> PipelineResult<Self> {
        let fetcher = Fetcher::new(&config)?;
        let vectorizer = Vectorizer::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            vectorizer,
        })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Fetches `url` and returns its ranked keywords.
    pub async fn analyze(&self, url: &str) -> PipelineResult<Vec<KeywordRecord>> {
        let markup = self.fetcher.fetch(url).await?;
        let keywords = self.analyze_markup(&markup)?;
        info!(url, keywords = keywords.len(), "analyzed article");
        Ok(keywords)
    }

    /// Runs extraction, vectorization and ranking on already fetched markup.
    pub fn analyze_markup(&self, markup: &str) -> PipelineResult<Vec<KeywordRecord>> {
        let extraction = extract::extract(markup)?;
        let weights = self.vectorizer.vectorize(&extraction.text);
        Ok(rank::rank(weights, self.config.max_features))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Router, routing::get};
    use std::time::{Duration, Instant};
    use tokio::net::TcpListener;

    const FOX_ARTICLE: &str = "<html><body><article><p>The quick brown fox jumps over the \
         lazy dog. The dog barks.</p></article></body></html>";

    fn pipeline() -> KeywordPipeline {
        KeywordPipeline::new(PipelineConfig::default()).unwrap()
    }

    #[test]
    fn fox_article_ranks_dog_first() {
        let keywords = pipeline().analyze_markup(FOX_ARTICLE).unwrap();

        assert_eq!(keywords[0].word, "dog");
        assert_eq!(keywords[0].weight, 0.6325);
        assert!(keywords[1..].iter().all(|k| k.weight == 0.3162));
        // Equal weights keep vocabulary order.
        let rest: Vec<&str> = keywords[1..].iter().map(|k| k.word.as_str()).collect();
        assert_eq!(rest, ["barks", "brown", "fox", "jumps", "lazy", "quick"]);
        assert!(keywords.iter().all(|k| k.word != "the" && k.word != "over"));
    }

    #[test]
    fn paragraph_fallback_uses_every_paragraph() {
        let html = "<html><body><p>Alpha ships.</p><p>Beta ships.</p><p>Gamma ships.</p></body></html>";
        let keywords = pipeline().analyze_markup(html).unwrap();
        let words: Vec<&str> = keywords.iter().map(|k| k.word.as_str()).collect();
        assert_eq!(words, ["ships", "alpha", "beta", "gamma"]);
    }

    #[test]
    fn script_only_page_is_empty_content() {
        let html = "<html><head><script>var lonelyVariable = 1;</script></head><body></body></html>";
        let err = pipeline().analyze_markup(html).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyContent(_)));
    }

    #[test]
    fn blank_article_is_not_replaced_by_sidebar_text() {
        let html = "<html><body><article>\n  <img src=\"hero.png\">\n</article>\
                    <p>Sidebar promo text</p></body></html>";
        let err = pipeline().analyze_markup(html).unwrap_err();
        assert!(matches!(err, PipelineError::EmptyContent(_)));
    }

    #[test]
    fn script_words_never_ranked() {
        let html = "<body><article><script>var trackingPixel = 1;</script>Readable prose here</article></body>";
        let keywords = pipeline().analyze_markup(html).unwrap();
        assert!(keywords.iter().all(|k| k.word != "trackingpixel" && k.word != "var"));
    }

    #[test]
    fn large_vocabulary_is_bounded() {
        let words: Vec<String> = (0..40).map(|i| format!("term{i:02}")).collect();
        let html = format!("<article>{}</article>", words.join(" "));
        let keywords = pipeline().analyze_markup(&html).unwrap();
        assert_eq!(keywords.len(), 20);
        assert!(keywords.windows(2).all(|w| w[0].weight >= w[1].weight));
    }

    #[test]
    fn stop_word_article_yields_empty_list() {
        let keywords = pipeline().analyze_markup("<article>the and of it</article>").unwrap();
        assert!(keywords.is_empty());
    }

    #[test]
    fn repeated_runs_are_identical() {
        let p = pipeline();
        let first = serde_json::to_string(&p.analyze_markup(FOX_ARTICLE).unwrap()).unwrap();
        let second = serde_json::to_string(&p.analyze_markup(FOX_ARTICLE).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn analyze_fetches_and_ranks() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let app = Router::new().route("/post", get(|| async { axum::response::Html(FOX_ARTICLE) }));
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let keywords = pipeline()
            .analyze(&format!("http://{addr}/post"))
            .await
            .unwrap();
        assert_eq!(keywords[0].word, "dog");
    }

    #[tokio::test]
    async fn unreachable_host_is_fetch_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let started = Instant::now();
        let err = pipeline()
            .analyze(&format!("http://{addr}/"))
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Fetch(_)));
        assert!(started.elapsed() <= Duration::from_secs(10));
    }
}
