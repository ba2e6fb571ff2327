//! Chart command implementation

use std::path::Path;

use anyhow::{Context, Result};
use blogscope_core::{charts, MetricsEngine};

pub fn cmd_visualize(engine: &MetricsEngine, output_dir: &Path) -> Result<()> {
    println!("📈 Rendering charts to {}...", output_dir.display());

    let written = charts::write_all(engine, output_dir).with_context(|| {
        format!("Failed to write charts to {}", output_dir.display())
    })?;

    for path in &written {
        println!("   {}", path.display());
    }
    if engine.posts().is_empty() {
        println!("   💡 No posts found, skipped the word cloud");
    }
    println!("✅ {} chart(s) written", written.len());

    Ok(())
}
