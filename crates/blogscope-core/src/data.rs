//! Blog data loading
//!
//! The blog backend keeps four JSON files in its data directory. Loading is
//! deliberately forgiving: a missing or corrupt file becomes an empty
//! collection, and a single bad record is skipped, so the analytics always
//! have something (possibly empty) to work with.

use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;
use crate::models::{Category, Comment, Post};

pub const POSTS_FILE: &str = "posts.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const COMMENTS_FILE: &str = "comments.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// The four collections an analysis run works on
#[derive(Debug, Clone, Default)]
pub struct BlogData {
    pub posts: Vec<Post>,
    pub categories: Vec<Category>,
    pub comments: Vec<Comment>,
    /// Site settings, opaque to the analytics
    pub settings: Value,
    /// Records as read from disk; `None` for data built in memory
    pub raw: Option<RawRecords>,
}

/// Every array element of each data file, untouched by defaults or validation
#[derive(Debug, Clone, Default)]
pub struct RawRecords {
    pub posts: Vec<Value>,
    pub categories: Vec<Value>,
    pub comments: Vec<Value>,
}

impl BlogData {
    /// Build from in-memory collections
    pub fn new(posts: Vec<Post>, comments: Vec<Comment>) -> Self {
        Self {
            posts,
            comments,
            ..Default::default()
        }
    }

    /// Load every collection from a data directory
    pub fn load(data_dir: &Path) -> Self {
        let posts_path = data_dir.join(POSTS_FILE);
        let categories_path = data_dir.join(CATEGORIES_FILE);
        let comments_path = data_dir.join(COMMENTS_FILE);

        let raw = RawRecords {
            posts: read_records(&posts_path),
            categories: read_records(&categories_path),
            comments: read_records(&comments_path),
        };
        let data = Self {
            posts: parse_records(&raw.posts, &posts_path),
            categories: parse_records(&raw.categories, &categories_path),
            comments: parse_records(&raw.comments, &comments_path),
            settings: load_settings(&data_dir.join(SETTINGS_FILE)),
            raw: Some(raw),
        };

        debug!(
            posts = data.posts.len(),
            categories = data.categories.len(),
            comments = data.comments.len(),
            dir = %data_dir.display(),
            "Loaded blog data"
        );

        data
    }

    pub fn with_categories(mut self, categories: Vec<Category>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = settings;
        self
    }
}

/// Load a JSON array of records, returning an empty list on any file-level failure
pub fn load_records<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    parse_records(&read_records(path), path)
}

/// Elements of a JSON array file, empty on any file-level failure
pub fn read_records(path: &Path) -> Vec<Value> {
    if !path.exists() {
        warn!(path = %path.display(), "Data file not found");
        return Vec::new();
    }

    match read_json(path) {
        Ok(Value::Array(values)) => values,
        Ok(_) => {
            warn!(path = %path.display(), "Data file is not a JSON array");
            Vec::new()
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "Failed to load data file");
            Vec::new()
        }
    }
}

/// Deserialize each element on its own, skipping the ones that don't fit `T`
fn parse_records<T: DeserializeOwned>(values: &[Value], path: &Path) -> Vec<T> {
    values
        .iter()
        .enumerate()
        .filter_map(|(index, value)| match T::deserialize(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    index,
                    error = %e,
                    "Skipping malformed record"
                );
                None
            }
        })
        .collect()
}

/// Load the settings object, `Value::Null` when unavailable
pub fn load_settings(path: &Path) -> Value {
    if !path.exists() {
        warn!(path = %path.display(), "Data file not found");
        return Value::Null;
    }

    read_json(path).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Failed to load data file");
        Value::Null
    })
}

fn read_json(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let posts: Vec<Post> = load_records(&dir.path().join("nope.json"));
        assert!(posts.is_empty());
    }

    #[test]
    fn test_corrupt_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(POSTS_FILE);
        fs::write(&path, "{ not json").unwrap();

        let posts: Vec<Post> = load_records(&path);
        assert!(posts.is_empty());
    }

    #[test]
    fn test_non_array_file_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(POSTS_FILE);
        fs::write(&path, r#"{"title": "single"}"#).unwrap();

        let posts: Vec<Post> = load_records(&path);
        assert!(posts.is_empty());
    }

    #[test]
    fn test_malformed_record_is_skipped() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(POSTS_FILE);
        fs::write(
            &path,
            r#"[{"title": "ok", "views": 10}, {"title": "bad", "views": -4}, {"title": "also ok"}]"#,
        )
        .unwrap();

        let posts: Vec<Post> = load_records(&path);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].title, "ok");
        assert_eq!(posts[1].title, "also ok");
    }

    #[test]
    fn test_load_directory() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(POSTS_FILE),
            r#"[{"id": 1, "title": "First", "views": 5}]"#,
        )
        .unwrap();
        fs::write(
            dir.path().join(COMMENTS_FILE),
            r#"[{"id": 9, "postId": 1, "content": "hi", "approved": true}]"#,
        )
        .unwrap();
        fs::write(dir.path().join(SETTINGS_FILE), r#"{"siteName": "TechBlog"}"#).unwrap();

        let data = BlogData::load(dir.path());
        assert_eq!(data.posts.len(), 1);
        assert_eq!(data.comments.len(), 1);
        assert!(data.categories.is_empty());
        assert_eq!(data.settings["siteName"], "TechBlog");
    }

    #[test]
    fn test_load_keeps_raw_records() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(POSTS_FILE),
            r#"[{"id": 1, "title": "First"}, {"id": 2, "views": "lots"}]"#,
        )
        .unwrap();

        let data = BlogData::load(dir.path());
        assert_eq!(data.posts.len(), 1);
        assert_eq!(data.posts[0].category, "uncategorized");

        let raw = data.raw.unwrap();
        assert_eq!(raw.posts.len(), 2);
        assert!(raw.posts[0].get("category").is_none());
        assert_eq!(raw.posts[1]["views"], "lots");
        assert!(raw.comments.is_empty());
    }

    #[test]
    fn test_missing_settings_is_null() {
        let dir = TempDir::new().unwrap();
        assert_eq!(load_settings(&dir.path().join(SETTINGS_FILE)), Value::Null);
    }
}
