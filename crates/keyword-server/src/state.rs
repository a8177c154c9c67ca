//! Application state shared across handlers.

use std::sync::Arc;

use keyword_pipeline::{KeywordPipeline, PipelineConfig, PipelineResult};

use crate::config::ServerConfig;

/// Application state shared across all handlers.
///
/// This is cloneable and can be extracted in handlers using `State<AppState>`.
/// Everything inside is immutable, so no locking is needed.
#[derive(Clone)]
pub struct AppState {
    /// Keyword extraction pipeline.
    pipeline: Arc<KeywordPipeline>,
    /// Server configuration.
    config: Arc<ServerConfig>,
}

impl AppState {
    /// Create new application state.
    pub fn new(pipeline_config: PipelineConfig, config: ServerConfig) -> PipelineResult<Self> {
        Ok(Self {
            pipeline: Arc::new(KeywordPipeline::new(pipeline_config)?),
            config: Arc::new(config),
        })
    }

    /// Get a reference to the keyword pipeline.
    pub fn pipeline(&self) -> &KeywordPipeline {
        &self.pipeline
    }

    /// Get a reference to the server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
