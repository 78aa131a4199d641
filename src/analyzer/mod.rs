//! The service that turns a budget into advice.
//!
//! - `HttpAnalyzer`: POSTs the budget to a remote `/api/analyze` endpoint
//! - `LocalAnalyzer`: deterministic rules, no network; used when no URL is configured

mod http;
mod local;

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

pub(crate) use http::HttpAnalyzer;
pub(crate) use local::{analyze_budget, LocalAnalyzer};

use crate::config::AnalyzerConfig;
use crate::models::{AnalysisResult, Budget};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub(crate) enum AnalyzerError {
    /// The analyzer answered with a non-success status.
    #[error("analyzer rejected the request with status {status}")]
    Rejected {
        status: u16,
        /// `message` field of the error body, if there was one.
        message: Option<String>,
    },
    #[error("analyzer request failed: {0}")]
    Network(String),
    #[error("analyzer sent an unreadable response: {0}")]
    InvalidResponse(String),
}

impl AnalyzerError {
    /// What to tell the user: the server's own message when it sent one.
    pub(crate) fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[async_trait]
pub(crate) trait Analyzer: Send + Sync {
    fn name(&self) -> &'static str;

    async fn analyze(&self, budget: &Budget) -> Result<AnalysisResult, AnalyzerError>;
}

/// Pick the analyzer the configuration asks for.
pub(crate) fn from_config(config: &AnalyzerConfig) -> Result<Arc<dyn Analyzer>, AnalyzerError> {
    match config.url.as_deref() {
        Some(url) => {
            let analyzer = HttpAnalyzer::new(url, config.timeout())?;
            info!(
                endpoint = analyzer.endpoint(),
                timeout_secs = config.timeout_secs,
                "using remote analyzer"
            );
            Ok(Arc::new(analyzer))
        }
        None => {
            info!("no analyzer url configured, using local rules");
            Ok(Arc::new(LocalAnalyzer))
        }
    }
}
