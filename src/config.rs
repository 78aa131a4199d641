use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

pub(crate) const ENV_ANALYZER_URL: &str = "WHATIF_ANALYZER_URL";
pub(crate) const ENV_ANALYZER_TIMEOUT: &str = "WHATIF_ANALYZER_TIMEOUT_SECS";
pub(crate) const ENV_LOG: &str = "WHATIF_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct Config {
    pub(crate) analyzer: AnalyzerConfig,
    pub(crate) log: LogConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct AnalyzerConfig {
    /// Base URL of a remote analyzer. `None` means analyze locally.
    pub(crate) url: Option<String>,
    pub(crate) timeout_secs: u64,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            url: None,
            timeout_secs: 30,
        }
    }
}

impl AnalyzerConfig {
    pub(crate) fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub(crate) struct LogConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `"whatif=debug"`.
    pub(crate) filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load `explicit` if given, else the per-user config file if it exists,
    /// then apply environment overrides.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::resolve(explicit, default_path(), |key| std::env::var(key).ok())
    }

    /// An explicit file must exist. The per-user file is optional, and so is
    /// the home directory it lives under.
    pub(crate) fn resolve(
        explicit: Option<&Path>,
        fallback: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let mut config = match (explicit, fallback) {
            (Some(path), _) => Self::from_file(path)?,
            (None, Some(path)) if path.exists() => Self::from_file(&path)?,
            (None, Some(path)) => {
                debug!(path = %path.display(), "no config file, using defaults");
                Self::default()
            }
            (None, None) => {
                debug!("no config directory, using defaults");
                Self::default()
            }
        };
        config.apply_overrides(lookup)?;
        Ok(config)
    }

    pub(crate) fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_toml_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))
    }

    pub(crate) fn from_toml_str(text: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(text)?;
        config.analyzer.url = normalize_url(config.analyzer.url.take());
        Ok(config)
    }

    /// Environment wins over the file. An empty analyzer URL forces local analysis.
    pub(crate) fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<()> {
        if let Some(url) = lookup(ENV_ANALYZER_URL) {
            self.analyzer.url = normalize_url(Some(url));
        }
        if let Some(secs) = lookup(ENV_ANALYZER_TIMEOUT) {
            self.analyzer.timeout_secs = secs.trim().parse().with_context(|| {
                format!("{ENV_ANALYZER_TIMEOUT} must be a whole number of seconds, got '{secs}'")
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.log.filter = filter;
        }
        Ok(())
    }
}

fn normalize_url(url: Option<String>) -> Option<String> {
    url.map(|u| u.trim().to_string()).filter(|u| !u.is_empty())
}

/// `None` when the platform has no home directory to hang it off.
pub(crate) fn default_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "whatif", "WhatIf")
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
