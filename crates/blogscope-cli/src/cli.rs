//! CLI argument definitions using clap
//!
//! This module contains the clap structs for parsing CLI arguments.
//! The actual command implementations are in the `commands` module.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Blogscope - Analytics for a JSON-file blog
#[derive(Parser)]
#[command(name = "blogscope")]
#[command(about = "Offline analytics, reports and charts for a JSON-file blog", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory containing posts.json, comments.json, categories.json and settings.json
    ///
    /// Overrides the configured data directory and BLOGSCOPE_DATA_DIR.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Configuration file (defaults to ~/.config/blogscope/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a command, prints the overview followed by insights
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate the Markdown analytics report
    Report {
        /// Output file (prints to stdout if omitted)
        output: Option<PathBuf>,
    },

    /// Render the SVG dashboard and word cloud
    Visualize {
        /// Output directory (defaults to the configured reports directory)
        output_dir: Option<PathBuf>,
    },

    /// Export posts, comments and categories as CSV
    Export {
        /// Output directory (defaults to the configured reports directory)
        output_dir: Option<PathBuf>,
    },

    /// Show insights and recommendations
    Insights,

    /// Show headline metrics
    Overview,
}
