//! CSV export of the raw collections
//!
//! Each collection is flattened to one row per record, as it appears in the
//! data file. The header is the
//! union of record keys in the order they are first seen, so records with
//! extra fields still export cleanly.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::{Map, Value};
use tracing::info;

use crate::data::BlogData;
use crate::error::Result;

pub const POSTS_EXPORT_FILE: &str = "blog_posts_export.csv";
pub const COMMENTS_EXPORT_FILE: &str = "blog_comments_export.csv";
pub const CATEGORIES_EXPORT_FILE: &str = "blog_categories_export.csv";

/// Write one CSV per non-empty collection into `dir`, returning the written paths
///
/// Data loaded from disk is exported as read, including records the metrics
/// skipped as malformed. In-memory data is exported from the typed records.
pub fn export_csv(data: &BlogData, dir: &Path) -> Result<Vec<PathBuf>> {
    fs::create_dir_all(dir)?;

    let collections = match &data.raw {
        Some(raw) => [
            (POSTS_EXPORT_FILE, to_rows(&raw.posts)?),
            (COMMENTS_EXPORT_FILE, to_rows(&raw.comments)?),
            (CATEGORIES_EXPORT_FILE, to_rows(&raw.categories)?),
        ],
        None => [
            (POSTS_EXPORT_FILE, to_rows(&data.posts)?),
            (COMMENTS_EXPORT_FILE, to_rows(&data.comments)?),
            (CATEGORIES_EXPORT_FILE, to_rows(&data.categories)?),
        ],
    };

    let mut written = Vec::new();
    for (file, rows) in collections {
        if rows.is_empty() {
            continue;
        }
        let path = dir.join(file);
        write_rows(&rows, fs::File::create(&path)?)?;
        info!(rows = rows.len(), path = %path.display(), "Exported CSV");
        written.push(path);
    }
    Ok(written)
}

/// Serialize `records` as CSV to any writer
pub fn write_records<T: Serialize, W: io::Write>(records: &[T], writer: W) -> Result<()> {
    write_rows(&to_rows(records)?, writer)
}

/// One JSON object per record; non-object records land in a `value` column
fn to_rows<T: Serialize>(records: &[T]) -> Result<Vec<Map<String, Value>>> {
    records
        .iter()
        .map(|record| match serde_json::to_value(record)? {
            Value::Object(map) => Ok(map),
            other => {
                let mut map = Map::new();
                map.insert("value".to_string(), other);
                Ok(map)
            }
        })
        .collect()
}

fn write_rows<W: io::Write>(rows: &[Map<String, Value>], writer: W) -> Result<()> {
    let header = columns(rows);
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&header)?;
    for row in rows {
        csv.write_record(header.iter().map(|key| cell(row.get(key))))?;
    }
    csv.flush()?;
    Ok(())
}

/// Union of keys, first-seen order
fn columns(rows: &[Map<String, Value>]) -> Vec<String> {
    let mut header: Vec<String> = Vec::new();
    for row in rows {
        for key in row.keys() {
            if !header.iter().any(|h| h == key) {
                header.push(key.clone());
            }
        }
    }
    header
}

fn cell(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => n.to_string(),
        // Compact JSON for arrays and objects
        Some(nested) => nested.to_string(),
    }
}
