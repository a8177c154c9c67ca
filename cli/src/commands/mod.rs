//! Command implementations for the keywords CLI.
//!
//! Each command module provides:
//! - Args struct for clap argument parsing
//! - execute() function that performs the command
//! - Human-readable and JSON output formatting

pub mod analyze;
pub mod local;

use anyhow::Result;
use colored::Colorize;
use keyword_core::KeywordRecord;
use serde::Serialize;

/// Common error type for HTTP requests.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },
}

/// Print output in JSON or human-readable format.
pub fn output<T: Serialize + HumanReadable + ?Sized>(value: &T, human: bool) -> Result<()> {
    if human {
        value.print_human();
    } else {
        println!("{}", serde_json::to_string_pretty(value)?);
    }
    Ok(())
}

/// Trait for types that can be printed in human-readable format.
pub trait HumanReadable {
    fn print_human(&self);
}

/// Width of the weight bar at weight 1.0.
const BAR_WIDTH: usize = 40;

impl HumanReadable for [KeywordRecord] {
    fn print_human(&self) {
        println!("{}", "Keywords".green().bold());
        println!("{}", "=".repeat(60));

        if self.is_empty() {
            println!("  {}", "(No keywords found)".dimmed());
            return;
        }

        let width = self.iter().map(|k| k.word.chars().count()).max().unwrap_or(0);
        for (rank, keyword) in self.iter().enumerate() {
            println!(
                "  {:>2}. {:<width$}  {:.4}  {}",
                rank + 1,
                keyword.word.bold(),
                keyword.weight,
                weight_bar(keyword.weight).cyan(),
            );
        }

        println!();
        println!("  {} {}", "Total:".cyan(), self.len());
    }
}

/// Renders `weight` in `[0, 1]` as a bar of block characters.
pub fn weight_bar(weight: f64) -> String {
    let cells = (weight.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells)
}

/// Send a request and decode a JSON body, surfacing the server's `detail`
/// message on failure.
pub async fn make_request<T: serde::de::DeserializeOwned>(
    request: reqwest::RequestBuilder,
) -> Result<T, CliError> {
    let response = request.send().await?;
    let status = response.status();

    if status.is_success() {
        let body = response.json::<T>().await?;
        Ok(body)
    } else {
        let body = response.text().await.unwrap_or_default();
        Err(CliError::Server {
            status: status.as_u16(),
            message: error_message(&body),
        })
    }
}

/// Extracts `detail` from a JSON error body, or returns the body as is.
fn error_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|json| json.get("detail")?.as_str().map(str::to_string))
        .unwrap_or_else(|| body.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_message_prefers_detail() {
        let body = r#"{"detail":"No text found in the article","code":"EMPTY_CONTENT"}"#;
        assert_eq!(error_message(body), "No text found in the article");
    }

    #[test]
    fn error_message_falls_back_to_body() {
        assert_eq!(error_message("Bad Gateway"), "Bad Gateway");
        assert_eq!(error_message(r#"{"error":"x"}"#), r#"{"error":"x"}"#);
    }

    #[test]
    fn weight_bar_scales() {
        assert_eq!(weight_bar(1.0).chars().count(), BAR_WIDTH);
        assert_eq!(weight_bar(0.5).chars().count(), BAR_WIDTH / 2);
        assert!(weight_bar(0.0).is_empty());
    }
}
