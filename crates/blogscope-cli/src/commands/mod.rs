//! CLI command implementations
//!
//! Commands are organized by output:
//! - `core` - Shared utilities (config loading, engine construction, output paths)
//! - `reports` - Console and Markdown reporting (overview, insights, report)
//! - `visualize` - SVG dashboard and word cloud
//! - `export` - CSV export

pub mod core;
pub mod export;
pub mod reports;
pub mod visualize;

// Re-export command functions for main.rs
pub use self::core::*;
pub use export::*;
pub use reports::*;
pub use visualize::*;
