//! Extractor stage: reduces raw markup to narrative text.
//!
//! Extraction walks [`ExtractionTier::ORDER`] and stops at the first tier
//! that yields any text. A blank result from that tier is an empty page; it
//! does not fall through to later tiers. Text inside `<script>` and `<style>` elements
//! is never collected, whichever tier runs.

use std::fmt;
use std::sync::LazyLock;

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::error::EmptyContentError;

static ARTICLE: LazyLock<Selector> = LazyLock::new(|| selector("article"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| selector("p"));
static BODY: LazyLock<Selector> = LazyLock::new(|| selector("body"));

/// Elements whose text content is never part of the narrative.
const EXCLUDED_ELEMENTS: &[&str] = &["script", "style"];

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid CSS")
}

/// One strategy for locating article text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExtractionTier {
    /// The first `<article>` element.
    Article,
    /// Every `<p>` element, space-joined.
    Paragraphs,
    /// The whole document body.
    Body,
}

impl ExtractionTier {
    /// Tiers in the order they are attempted.
    pub const ORDER: [ExtractionTier; 3] = [Self::Article, Self::Paragraphs, Self::Body];

    /// Applies this tier to a parsed document. The result is untrimmed and
    /// may be empty.
    pub fn apply(self, document: &Html) -> String {
        match self {
            Self::Article => document
                .select(&ARTICLE)
                .next()
                .map(element_text)
                .unwrap_or_default(),
            Self::Paragraphs => document
                .select(&PARAGRAPH)
                .map(element_text)
                .collect::<Vec<_>>()
                .join(" "),
            Self::Body => document
                .select(&BODY)
                .next()
                .map(element_text)
                .unwrap_or_default(),
        }
    }
}

impl fmt::Display for ExtractionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Article => "article",
            Self::Paragraphs => "paragraphs",
            Self::Body => "body",
        };
        f.write_str(name)
    }
}

/// Narrative text together with the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    pub tier: ExtractionTier,
    /// Trimmed, never empty.
    pub text: String,
}

/// Extracts narrative text from markup.
///
/// The first tier with any text at all wins, even if that text is only
/// whitespace; trimming happens once, after the tier is chosen.
pub fn extract(markup: &str) -> Result<Extraction, EmptyContentError> {
    let document = Html::parse_document(markup);

    let Some((tier, text)) = ExtractionTier::ORDER
        .into_iter()
        .map(|tier| (tier, tier.apply(&document)))
        .find(|(_, text)| !text.is_empty())
    else {
        warn!("no narrative text in document");
        return Err(EmptyContentError);
    };

    let text = text.trim();
    if text.is_empty() {
        warn!(%tier, "selected element holds no narrative text");
        return Err(EmptyContentError);
    }

    debug!(%tier, chars = text.len(), "extracted narrative text");
    Ok(Extraction {
        tier,
        text: text.to_string(),
    })
}

/// Joins the text nodes under `element` with single spaces, skipping any
/// node nested in an excluded element.
fn element_text(element: ElementRef<'_>) -> String {
    element
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let excluded = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|e| EXCLUDED_ELEMENTS.contains(&e.name()))
            });
            (!excluded).then_some(&**text)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
