//! Static SVG charts
//!
//! - `blog_analytics_dashboard.svg` - eleven panels covering every metric family
//! - `blog_wordcloud.svg` - most frequent words in titles, content and tags
//!
//! Both are drawn with plotters into an in-memory SVG string, which
//! `write_dashboard` / `write_word_cloud` then save to disk.

pub mod dashboard;
pub mod wordcloud;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::Result;
use crate::metrics::MetricsEngine;

pub use dashboard::{histogram, seo_color, COMMENT_TIMELINE_DAYS, DASHBOARD_SIZE, HISTOGRAM_BINS};
pub use wordcloud::{word_frequencies, MAX_WORDS};

pub const DASHBOARD_FILE: &str = "blog_analytics_dashboard.svg";
pub const WORD_CLOUD_FILE: &str = "blog_wordcloud.svg";

/// Dashboard SVG as a string
pub fn render_dashboard(engine: &MetricsEngine) -> Result<String> {
    dashboard::render(engine)
}

/// Word cloud SVG as a string, or `None` when the posts contain no usable words
pub fn render_word_cloud(engine: &MetricsEngine) -> Result<Option<String>> {
    let words = word_frequencies(engine.posts());
    if words.is_empty() {
        return Ok(None);
    }

    wordcloud::render(&words).map(Some)
}

pub fn write_dashboard(engine: &MetricsEngine, dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(DASHBOARD_FILE);
    fs::write(&path, render_dashboard(engine)?)?;
    info!(path = %path.display(), "Wrote analytics dashboard");
    Ok(path)
}

pub fn write_word_cloud(engine: &MetricsEngine, dir: &Path) -> Result<Option<PathBuf>> {
    let Some(svg) = render_word_cloud(engine)? else {
        info!("No words to plot, skipping word cloud");
        return Ok(None);
    };

    fs::create_dir_all(dir)?;
    let path = dir.join(WORD_CLOUD_FILE);
    fs::write(&path, svg)?;
    info!(path = %path.display(), "Wrote word cloud");
    Ok(Some(path))
}

/// Dashboard plus, when there are posts, the word cloud
pub fn write_all(engine: &MetricsEngine, dir: &Path) -> Result<Vec<PathBuf>> {
    let mut written = vec![write_dashboard(engine, dir)?];
    if !engine.posts().is_empty() {
        written.extend(write_word_cloud(engine, dir)?);
    }
    Ok(written)
}
