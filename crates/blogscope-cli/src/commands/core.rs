//! Shared utilities for every command
//!
//! - `load_config` - Resolve configuration and the data directory
//! - `open_engine` - Load the data files into a metrics engine
//! - `output_dir` - Pick the directory artifacts are written to

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use blogscope_core::{AnalyticsConfig, BlogData, MetricsEngine};

/// Load configuration; an explicit `--data-dir` wins over config and environment
pub fn load_config(config_path: Option<&Path>, data_dir: Option<&Path>) -> Result<AnalyticsConfig> {
    let mut config = AnalyticsConfig::load(config_path).context("Failed to load configuration")?;
    if let Some(dir) = data_dir {
        config.data_dir = dir.to_path_buf();
    }
    Ok(config)
}

/// Load the blog data described by `config`
///
/// Missing or unreadable files are logged and treated as empty.
pub fn open_engine(config: &AnalyticsConfig) -> MetricsEngine {
    tracing::debug!(data_dir = %config.data_dir.display(), "Opening blog data");
    let data = BlogData::load(&config.data_dir);
    MetricsEngine::with_config(data, config.content.clone())
}

pub fn output_dir(config: &AnalyticsConfig, explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(|| config.reports_dir.clone())
}
