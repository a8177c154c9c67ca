//! ANALYZE command - Ask the keyword server to analyze an article.

use anyhow::Result;
use clap::Args;
use keyword_core::{AnalyzeRequest, KeywordRecord};

use super::{make_request, output};

/// Arguments for the analyze command.
#[derive(Args)]
pub struct AnalyzeArgs {
    /// Article URL to analyze
    pub article: String,
}

/// Execute the analyze command.
pub async fn execute(base_url: &str, human: bool, args: AnalyzeArgs) -> Result<()> {
    let client = reqwest::Client::new();
    let url = format!("{}/analyze", base_url.trim_end_matches('/'));
    let request = AnalyzeRequest::new(args.article);

    let keywords: Vec<KeywordRecord> = make_request(client.post(&url).json(&request)).await?;

    output(keywords.as_slice(), human)
}
