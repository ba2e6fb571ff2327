//! Blog metrics
//!
//! `MetricsEngine` owns the loaded collections and exposes one query per
//! metric family:
//!
//! - **Overview** - post counts, totals, per-post averages
//! - **Content** - word counts, reading time, title length, tag usage
//! - **Engagement** - engagement rates, comment statistics, most engaging posts
//! - **Categories** - per-category totals and averages
//! - **Top content** - rankings by views, comments, likes, engagement score
//! - **Temporal** - publishing by month and weekday, posting frequency
//! - **SEO** - title / meta description windows, image and tag coverage
//!
//! ## Usage
//!
//! ```rust,ignore
//! use blogscope_core::{BlogData, MetricsEngine};
//!
//! let engine = MetricsEngine::new(BlogData::load(&data_dir));
//! let overview = engine.overview();
//! let snapshot = engine.snapshot();
//! ```

pub mod engine;
pub mod stats;
pub mod types;

pub use engine::{
    weekday_name, MetricsEngine, MOST_ENGAGING_LIMIT, OPTIMAL_META_DESCRIPTION_LENGTH,
    OPTIMAL_TITLE_LENGTH, TOP_CONTENT_LIMIT,
};
pub use types::{
    CategoryPerformance, CommentStats, ContentAnalysis, ContentOptimization, EngagementAnalysis,
    EngagingPost, LengthWindowAnalysis, MetricsSnapshot, Overview, RankedPost, RateStats,
    ScoredPost, SeoAnalysis, SummaryStats, TagCount, TemporalAnalysis, TopContent, WeekdayCount,
};
