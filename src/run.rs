mod cli;
mod explore;

use std::path::Path;

use anyhow::{Context, Result};

use crate::analyzer;
use crate::config::Config;
use crate::models::Budget;
use crate::orchestrator::ScenarioOrchestrator;

pub(crate) use cli::{as_cli, split_config_flag};

/// Read a budget from a JSON file and reject negative figures.
pub(crate) fn load_budget(path: &Path) -> Result<Budget> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read budget file: {}", path.display()))?;
    let budget: Budget = serde_json::from_str(&text)
        .with_context(|| format!("Invalid budget file: {}", path.display()))?;
    budget
        .validate()
        .with_context(|| format!("Invalid budget file: {}", path.display()))?;
    Ok(budget)
}

pub(crate) fn build_orchestrator(config: &Config) -> Result<ScenarioOrchestrator> {
    let analyzer = analyzer::from_config(&config.analyzer).context("Failed to set up analyzer")?;
    tracing::info!(analyzer = analyzer.name(), "analyzer ready");
    Ok(ScenarioOrchestrator::new(analyzer))
}
