//! Analytics configuration
//!
//! Configuration is read from TOML. Lookup order:
//! 1. An explicit path (`--config`)
//! 2. `~/.config/blogscope/config.toml` (platform config dir)
//! 3. The built-in defaults below
//!
//! `BLOGSCOPE_DATA_DIR` overrides the configured data directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

use crate::error::{Error, Result};

/// Environment variable overriding the data directory
pub const DATA_DIR_ENV: &str = "BLOGSCOPE_DATA_DIR";

const DEFAULT_CONFIG: &str = r#"
[paths]
data_dir = "database"
reports_dir = "reports"

[content]
words_per_minute = 200
top_tags = 10
"#;

/// Settings for content analysis
#[derive(Debug, Clone, PartialEq)]
pub struct ContentConfig {
    /// Reading speed used for reading-time estimates
    pub words_per_minute: usize,
    /// How many tags to report as most used
    pub top_tags: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            words_per_minute: 200,
            top_tags: 10,
        }
    }
}

/// Resolved configuration
#[derive(Debug, Clone, PartialEq)]
pub struct AnalyticsConfig {
    /// Directory holding posts.json, comments.json, ...
    pub data_dir: PathBuf,
    /// Default output directory for reports, charts and exports
    pub reports_dir: PathBuf,
    pub content: ContentConfig,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("database"),
            reports_dir: PathBuf::from("reports"),
            content: ContentConfig::default(),
        }
    }
}

impl AnalyticsConfig {
    /// Load configuration, applying the environment override
    pub fn load(override_path: Option<&Path>) -> Result<Self> {
        let mut config = load_config(override_path)?;

        if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
            if !dir.is_empty() {
                config.data_dir = PathBuf::from(dir);
            }
        }

        debug!(
            data_dir = %config.data_dir.display(),
            reports_dir = %config.reports_dir.display(),
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Parse configuration from TOML content
    pub fn from_toml(content: &str) -> Result<Self> {
        parse_config(content)
    }
}

/// Default user config path
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("blogscope").join("config.toml"))
}

fn load_config(override_path: Option<&Path>) -> Result<AnalyticsConfig> {
    let content = match override_path {
        Some(path) => fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => match default_config_path() {
            Some(path) if path.exists() => fs::read_to_string(&path).map_err(|e| {
                Error::Config(format!("Failed to read {}: {}", path.display(), e))
            })?,
            _ => DEFAULT_CONFIG.to_string(),
        },
    };

    parse_config(&content)
}

#[derive(Debug, Deserialize)]
struct RawConfig {
    paths: Option<RawPaths>,
    content: Option<RawContent>,
}

#[derive(Debug, Deserialize)]
struct RawPaths {
    data_dir: Option<PathBuf>,
    reports_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct RawContent {
    words_per_minute: Option<usize>,
    top_tags: Option<usize>,
}

fn parse_config(content: &str) -> Result<AnalyticsConfig> {
    let raw: RawConfig = toml::from_str(content)?;
    let mut config = AnalyticsConfig::default();

    if let Some(paths) = raw.paths {
        if let Some(dir) = paths.data_dir {
            config.data_dir = dir;
        }
        if let Some(dir) = paths.reports_dir {
            config.reports_dir = dir;
        }
    }

    if let Some(content) = raw.content {
        if let Some(wpm) = content.words_per_minute {
            if wpm == 0 {
                return Err(Error::Config(
                    "content.words_per_minute must be greater than 0".into(),
                ));
            }
            config.content.words_per_minute = wpm;
        }
        if let Some(top) = content.top_tags {
            config.content.top_tags = top;
        }
    }

    Ok(config)
}
