//! LOCAL command - Run the keyword pipeline in-process.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use keyword_pipeline::{KeywordPipeline, PipelineConfig};

use super::output;

/// Arguments for the local command.
#[derive(Args)]
#[group(required = true, multiple = false)]
pub struct LocalArgs {
    /// Article URL to fetch and analyze
    pub article: Option<String>,

    /// Saved HTML file to analyze instead of fetching
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Execute the local command.
pub async fn execute(human: bool, args: LocalArgs) -> Result<()> {
    let pipeline = KeywordPipeline::new(PipelineConfig::default())?;

    let keywords = match (args.article, args.file) {
        (_, Some(path)) => {
            let markup = tokio::fs::read_to_string(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            pipeline.analyze_markup(&markup)?
        }
        (Some(article), None) => pipeline.analyze(&article).await?,
        (None, None) => anyhow::bail!("either an article URL or --file is required"),
    };

    output(keywords.as_slice(), human)
}
