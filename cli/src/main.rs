//! Command-line interface for article keyword extraction.
//!
//! Commands:
//! - analyze: Ask a running keyword server to analyze a URL
//! - local: Run the pipeline in-process on a URL or a saved HTML file
//!
//! Configuration via environment:
//! - KEYWORDS_URL: Base URL of the keyword server (default: http://127.0.0.1:8000)

mod commands;

use clap::{Parser, Subcommand};

use commands::{analyze::AnalyzeArgs, local::LocalArgs};

/// Article keyword extraction CLI
///
/// Prints ranked TF-IDF keywords for a web article. Output is JSON by
/// default; pass --human for a formatted table.
#[derive(Parser)]
#[command(name = "keywords")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Output human-readable formatted text instead of JSON
    #[arg(long, global = true)]
    human: bool,

    /// Keyword server URL
    #[arg(
        long,
        env = "KEYWORDS_URL",
        default_value = "http://127.0.0.1:8000",
        global = true
    )]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze an article through the keyword server
    Analyze(AnalyzeArgs),

    /// Analyze an article in-process, without a server
    Local(LocalArgs),
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Analyze(args) => commands::analyze::execute(&cli.url, cli.human, args).await,
        Commands::Local(args) => commands::local::execute(cli.human, args).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
