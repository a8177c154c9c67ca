//! Fetcher stage: retrieves raw article markup over HTTP.
//!
//! A single request is made per URL with a fixed timeout and a browser-like
//! `User-Agent`. Nothing is retried; any non-success status is a failure.

use std::time::Duration;

use reqwest::{Client, Url};
use tracing::{debug, warn};

use crate::config::{PipelineConfig, USER_AGENT};
use crate::error::FetchError;

/// HTTP client for article downloads.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
    timeout: Duration,
}

impl Fetcher {
    /// Builds a fetcher from the pipeline configuration.
    pub fn new(config: &PipelineConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(FetchError::Client)?;

        Ok(Self {
            client,
            timeout: config.timeout,
        })
    }

    /// Downloads `url` and returns the response body as text.
    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|e| FetchError::InvalidUrl {
            url: url.to_string(),
            reason: e.to_string(),
        })?;

        debug!(url, "fetching article");

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|e| self.classify(url, e))?;

        let status = response.status();
        if !status.is_success() {
            warn!(url, status = status.as_u16(), "article fetch returned error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        response.text().await.map_err(|e| {
            if e.is_timeout() {
                self.timed_out(url)
            } else {
                FetchError::Body {
                    url: url.to_string(),
                    source: e,
                }
            }
        })
    }

    fn classify(&self, url: &str, error: reqwest::Error) -> FetchError {
        let err = if error.is_timeout() {
            self.timed_out(url)
        } else if error.is_connect() {
            FetchError::Connect {
                url: url.to_string(),
                source: error,
            }
        } else {
            FetchError::Request {
                url: url.to_string(),
                source: error,
            }
        };
        warn!(url, error = %err, "article fetch failed");
        err
    }

    fn timed_out(&self, url: &str) -> FetchError {
        FetchError::Timeout {
            url: url.to_string(),
            timeout: self.timeout,
        }
    }
}
