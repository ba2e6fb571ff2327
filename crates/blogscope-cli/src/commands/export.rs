//! CSV export command implementation

use std::path::Path;

use anyhow::{Context, Result};
use blogscope_core::{export_csv, MetricsEngine};

pub fn cmd_export(engine: &MetricsEngine, output_dir: &Path) -> Result<()> {
    println!("📦 Exporting CSV files to {}...", output_dir.display());

    let written = export_csv(engine.data(), output_dir)
        .with_context(|| format!("Failed to export CSV to {}", output_dir.display()))?;

    if written.is_empty() {
        println!("   No records to export.");
        return Ok(());
    }
    for path in &written {
        println!("   {}", path.display());
    }
    println!("✅ {} file(s) exported", written.len());

    Ok(())
}
