//! CLI command tests
//!
//! This module contains all tests for the CLI commands.

use std::fs;
use std::path::{Path, PathBuf};

use blogscope_core::{AnalyticsConfig, MetricsEngine};
use serde_json::json;
use tempfile::TempDir;

use crate::commands::{self, title_case_key};

fn write_blog(dir: &Path) {
    let posts = json!([
        {
            "id": 1,
            "title": "Shipping a Rust CLI",
            "content": "<p>Ship small tools often.</p>",
            "date": "2024-05-06",
            "category": "programming",
            "tags": ["rust", "cli"],
            "views": 320,
            "comments": 4,
            "likes": 12,
            "image": "cli.png"
        },
        {
            "id": 2,
            "title": "Draft notes",
            "content": "Unfinished",
            "date": "2024-05-20",
            "published": false,
            "views": 0
        }
    ]);
    let comments = json!([
        { "id": 1, "postId": 1, "content": "Helpful", "date": "2024-05-07 12:00:00", "approved": true }
    ]);
    fs::write(dir.join("posts.json"), posts.to_string()).unwrap();
    fs::write(dir.join("comments.json"), comments.to_string()).unwrap();
}

/// A data directory with fixtures and a config pointing at it
fn setup_blog() -> (TempDir, AnalyticsConfig) {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("database");
    fs::create_dir_all(&data_dir).unwrap();
    write_blog(&data_dir);

    let config = AnalyticsConfig {
        data_dir,
        reports_dir: dir.path().join("reports"),
        ..Default::default()
    };
    (dir, config)
}

fn setup_engine() -> (TempDir, AnalyticsConfig, MetricsEngine) {
    let (dir, config) = setup_blog();
    let engine = commands::open_engine(&config);
    (dir, config, engine)
}

// ========== Core Tests ==========

#[test]
fn test_title_case_key() {
    assert_eq!(title_case_key("total_posts"), "Total Posts");
    assert_eq!(
        title_case_key("average_views_per_post"),
        "Average Views Per Post"
    );
}

#[test]
fn test_load_config_data_dir_override() {
    let dir = TempDir::new().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[paths]\ndata_dir = \"from-config\"\nreports_dir = \"out\"\n",
    )
    .unwrap();

    let cli_dir = PathBuf::from("from-cli");
    let config =
        commands::load_config(Some(config_path.as_path()), Some(cli_dir.as_path())).unwrap();
    assert_eq!(config.data_dir, cli_dir);
    assert_eq!(config.reports_dir, PathBuf::from("out"));
}

#[test]
fn test_load_config_missing_file() {
    let dir = TempDir::new().unwrap();
    let result = commands::load_config(Some(dir.path().join("nope.toml").as_path()), None);
    assert!(result.is_err());
}

#[test]
fn test_open_engine_loads_data() {
    let (_dir, _config, engine) = setup_engine();
    assert_eq!(engine.posts().len(), 2);
    assert_eq!(engine.comments().len(), 1);
    assert!(engine.categories().is_empty());
}

#[test]
fn test_output_dir_defaults_to_reports_dir() {
    let (_dir, config) = setup_blog();
    assert_eq!(commands::output_dir(&config, None), config.reports_dir);

    let explicit = PathBuf::from("elsewhere");
    assert_eq!(
        commands::output_dir(&config, Some(explicit.clone())),
        explicit
    );
}

// ========== Report Command Tests ==========

#[test]
fn test_cmd_overview_and_insights() {
    let (_dir, _config, engine) = setup_engine();
    assert!(commands::cmd_overview(&engine).is_ok());
    assert!(commands::cmd_insights(&engine).is_ok());
    assert!(commands::cmd_summary(&engine).is_ok());
}

#[test]
fn test_cmd_summary_on_empty_data() {
    let dir = TempDir::new().unwrap();
    let config = AnalyticsConfig {
        data_dir: dir.path().join("missing"),
        ..Default::default()
    };
    let engine = commands::open_engine(&config);
    assert!(commands::cmd_summary(&engine).is_ok());
}

#[test]
fn test_cmd_report_writes_file() {
    let (dir, _config, engine) = setup_engine();
    let output = dir.path().join("nested").join("report.md");

    commands::cmd_report(&engine, Some(output.as_path())).unwrap();

    let markdown = fs::read_to_string(&output).unwrap();
    assert!(markdown.starts_with("# Blog Analytics Report"));
    assert!(markdown.contains("- **Total Posts:** 2 (1 published, 1 drafts)"));
    assert!(markdown.contains("### Programming"));
}

// ========== Artifact Command Tests ==========

#[test]
fn test_cmd_visualize() {
    let (_dir, config, engine) = setup_engine();
    let out = commands::output_dir(&config, None);

    commands::cmd_visualize(&engine, &out).unwrap();

    assert!(out.join("blog_analytics_dashboard.svg").exists());
    assert!(out.join("blog_wordcloud.svg").exists());
}

#[test]
fn test_cmd_export() {
    let (_dir, config, engine) = setup_engine();
    let out = commands::output_dir(&config, None);

    commands::cmd_export(&engine, &out).unwrap();

    assert!(out.join("blog_posts_export.csv").exists());
    assert!(out.join("blog_comments_export.csv").exists());
    // No categories.json in the fixture
    assert!(!out.join("blog_categories_export.csv").exists());
}

#[test]
fn test_cmd_export_empty_data() {
    let dir = TempDir::new().unwrap();
    let config = AnalyticsConfig {
        data_dir: dir.path().join("missing"),
        reports_dir: dir.path().join("out"),
        ..Default::default()
    };
    let engine = commands::open_engine(&config);

    commands::cmd_export(&engine, &config.reports_dir).unwrap();
    assert!(fs::read_dir(&config.reports_dir).unwrap().next().is_none());
}
