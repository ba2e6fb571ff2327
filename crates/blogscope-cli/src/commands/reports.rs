//! Report command implementations

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use blogscope_core::{report, InsightGenerator, MetricsEngine};
use chrono::Local;

/// `total_posts` -> `Total Posts`
pub fn title_case_key(key: &str) -> String {
    report::title_case(&key.replace('_', " "))
}

pub fn cmd_overview(engine: &MetricsEngine) -> Result<()> {
    let overview = engine.overview();

    println!();
    println!("📊 Blog Overview");
    println!("   ─────────────────────────────────────────────");
    for (key, value) in overview.fields() {
        println!("   {}: {}", title_case_key(key), value);
    }

    Ok(())
}

pub fn cmd_insights(engine: &MetricsEngine) -> Result<()> {
    let insights = engine.generate_insights();

    println!();
    println!("💡 Insights & Recommendations");
    println!("   ─────────────────────────────────────────────");
    if insights.is_empty() {
        println!("   No insights available.");
        return Ok(());
    }
    for insight in &insights {
        println!("   {}", insight);
    }

    Ok(())
}

/// Default command: overview followed by insights
pub fn cmd_summary(engine: &MetricsEngine) -> Result<()> {
    cmd_overview(engine)?;
    cmd_insights(engine)
}

/// Write the Markdown report to `output`, or to stdout
pub fn cmd_report(engine: &MetricsEngine, output: Option<&Path>) -> Result<()> {
    let snapshot = engine.snapshot();
    let insights = InsightGenerator::new().generate(&snapshot);
    let markdown =
        report::render(&snapshot, &insights, Local::now()).context("Failed to render report")?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create directory: {}", parent.display())
                })?;
            }
            fs::write(path, &markdown)
                .with_context(|| format!("Failed to write report: {}", path.display()))?;
            println!("✅ Report saved to: {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(markdown.as_bytes())
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}
