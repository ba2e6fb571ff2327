//! Blogscope CLI - Blog analytics from JSON data files
//!
//! Usage:
//!   blogscope                      Overview followed by insights
//!   blogscope report [OUTPUT]      Markdown report (stdout if no file)
//!   blogscope visualize [DIR]      SVG dashboard and word cloud
//!   blogscope export [DIR]         CSV export of every collection
//!   blogscope insights             Insights only
//!   blogscope overview             Headline metrics only

mod cli;
mod commands;

#[cfg(test)]
mod tests;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::*;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging
    // Priority: RUST_LOG env var > --verbose flag > default (info)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).compact())
        .init();

    let config = commands::load_config(cli.config.as_deref(), cli.data_dir.as_deref())?;
    let engine = commands::open_engine(&config);

    match cli.command {
        None => commands::cmd_summary(&engine),
        Some(Commands::Report { output }) => commands::cmd_report(&engine, output.as_deref()),
        Some(Commands::Visualize { output_dir }) => {
            let dir = commands::output_dir(&config, output_dir);
            commands::cmd_visualize(&engine, &dir)
        }
        Some(Commands::Export { output_dir }) => {
            let dir = commands::output_dir(&config, output_dir);
            commands::cmd_export(&engine, &dir)
        }
        Some(Commands::Insights) => commands::cmd_insights(&engine),
        Some(Commands::Overview) => commands::cmd_overview(&engine),
    }
}
