use std::time::Duration;

use async_trait::async_trait;
use tracing::{info, warn};

use super::{Analyzer, AnalyzerError};
use crate::models::{AnalysisResult, Budget};

pub(crate) struct HttpAnalyzer {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAnalyzer {
    pub(crate) fn new(base_url: &str, timeout: Duration) -> Result<Self, AnalyzerError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AnalyzerError::Network(e.to_string()))?;
        Ok(Self {
            endpoint: format!("{}/api/analyze", base_url.trim_end_matches('/')),
            client,
        })
    }

    pub(crate) fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl Analyzer for HttpAnalyzer {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn analyze(&self, budget: &Budget) -> Result<AnalysisResult, AnalyzerError> {
        info!(endpoint = %self.endpoint, "submitting budget for analysis");
        let response = self
            .client
            .post(&self.endpoint)
            .json(budget)
            .send()
            .await
            .map_err(|e| AnalyzerError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = server_message(&body);
            warn!(status = status.as_u16(), ?message, "analyzer rejected budget");
            return Err(AnalyzerError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<AnalysisResult>()
            .await
            .map_err(|e| AnalyzerError::InvalidResponse(e.to_string()))
    }
}

/// The non-empty string `message` field of a JSON error body.
pub(crate) fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(serde_json::Value::as_str)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
#[path = "http_tests.rs"]
mod tests;
