//! Blogscope Core Library
//!
//! Offline analytics for a JSON-file blog backend:
//! - Forgiving loader for posts, categories, comments and settings
//! - Metrics engine (overview, content, engagement, categories, temporal, top content, SEO)
//! - Rule-based insight generator
//! - Markdown report, SVG charts and CSV export
//! - TOML configuration

pub mod charts;
pub mod config;
pub mod data;
pub mod error;
pub mod export;
pub mod insights;
pub mod metrics;
pub mod models;
pub mod report;
pub mod text;

pub use config::{AnalyticsConfig, ContentConfig};
pub use data::BlogData;
pub use error::{Error, Result};
pub use export::export_csv;
pub use insights::{Insight, InsightGenerator, InsightKind, Severity};
pub use metrics::{MetricsEngine, MetricsSnapshot};
pub use models::{Category, Comment, Post, RecordId};
