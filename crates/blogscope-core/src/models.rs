//! Domain models for blogscope
//!
//! Records mirror the JSON files written by the blog backend. Every field has
//! an explicit default so a partially filled record still loads, and fields
//! the analytics never look at are kept in `extra` for export.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Category assigned to posts that have none
pub const UNCATEGORIZED: &str = "uncategorized";

/// Date format used by post dates
pub const POST_DATE_FORMAT: &str = "%Y-%m-%d";

/// Record identifier (posts use integers, categories use slugs)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(id) => write!(f, "{}", id),
            RecordId::Text(id) => write!(f, "{}", id),
        }
    }
}

/// A blog post
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    /// Body markup (HTML-ish)
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Publication date, expected as `YYYY-MM-DD`
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default = "default_true", deserialize_with = "null_as_true")]
    pub published: bool,
    #[serde(default = "default_category", deserialize_with = "null_as_uncategorized")]
    pub category: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub comments: u64,
    #[serde(default, deserialize_with = "null_as_default")]
    pub likes: u64,
    #[serde(default)]
    pub meta_description: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Fields the analytics don't use (slug, excerpt, author, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Default for Post {
    fn default() -> Self {
        Self {
            id: None,
            title: String::new(),
            content: String::new(),
            date: String::new(),
            published: true,
            category: default_category(),
            tags: Vec::new(),
            views: 0,
            comments: 0,
            likes: 0,
            meta_description: None,
            image: None,
            extra: Map::new(),
        }
    }
}

impl Post {
    /// Comments plus likes, saturating at `u64::MAX`
    pub fn interactions(&self) -> u64 {
        self.comments.saturating_add(self.likes)
    }

    /// Weighted engagement score: a comment counts 10 views, a like 5
    ///
    /// Saturates instead of overflowing on absurd counters.
    pub fn engagement_score(&self) -> u64 {
        self.views
            .saturating_add(self.comments.saturating_mul(10))
            .saturating_add(self.likes.saturating_mul(5))
    }

    /// (comments + likes) / views * 100, or `None` for posts never viewed
    pub fn engagement_rate(&self) -> Option<f64> {
        if self.views == 0 {
            return None;
        }
        Some(self.interactions() as f64 / self.views as f64 * 100.0)
    }

    /// Publication date, `None` when missing or malformed
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, POST_DATE_FORMAT).ok()
    }

    /// Title length in characters
    pub fn title_length(&self) -> usize {
        self.title.chars().count()
    }

    /// Meta description length in characters (0 when absent)
    pub fn meta_description_length(&self) -> usize {
        self.meta_description
            .as_deref()
            .map(|d| d.chars().count())
            .unwrap_or(0)
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|i| !i.is_empty())
    }

    pub fn has_tags(&self) -> bool {
        !self.tags.is_empty()
    }
}

/// A reader comment
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    /// Parent post (not enforced)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub post_id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,
    /// Date-time, expected as `YYYY-MM-DD HH:MM:SS`
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub approved: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Comment {
    /// Date portion of the comment timestamp, `None` when empty
    pub fn day(&self) -> Option<&str> {
        self.date
            .split([' ', 'T'])
            .next()
            .filter(|day| !day.is_empty())
    }

    /// Content length in characters
    pub fn length(&self) -> usize {
        self.content.chars().count()
    }
}

/// A category registry entry (informational only)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Category {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RecordId>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_true() -> bool {
    true
}

fn default_category() -> String {
    UNCATEGORIZED.to_string()
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn null_as_true<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(true))
}

fn null_as_uncategorized<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(default_category))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_post_defaults() {
        let post: Post = serde_json::from_str(r#"{"title": "Hello"}"#).unwrap();
        assert!(post.published);
        assert_eq!(post.category, UNCATEGORIZED);
        assert_eq!(post.views, 0);
        assert!(post.tags.is_empty());
        assert!(post.id.is_none());
    }

    #[test]
    fn test_post_nulls_use_defaults() {
        let post: Post = serde_json::from_str(
            r#"{"id": 3, "published": null, "category": null, "views": null, "tags": null}"#,
        )
        .unwrap();
        assert!(post.published);
        assert_eq!(post.category, UNCATEGORIZED);
        assert_eq!(post.views, 0);
        assert_eq!(post.id, Some(RecordId::Int(3)));
    }

    #[test]
    fn test_post_keeps_unknown_fields() {
        let post: Post = serde_json::from_str(
            r#"{"title": "T", "slug": "t", "metaDescription": "desc", "author": "Jo"}"#,
        )
        .unwrap();
        assert_eq!(post.meta_description.as_deref(), Some("desc"));
        assert_eq!(post.extra["slug"], "t");
        assert_eq!(post.extra["author"], "Jo");
        assert!(!post.extra.contains_key("metaDescription"));
    }

    #[test]
    fn test_engagement_score() {
        let post = Post {
            views: 100,
            comments: 3,
            likes: 4,
            ..Default::default()
        };
        assert_eq!(post.engagement_score(), 150);
        assert_eq!(post.interactions(), 7);
    }

    #[test]
    fn test_engagement_score_saturates() {
        let post = Post {
            views: u64::MAX,
            comments: u64::MAX / 2,
            likes: 1,
            ..Default::default()
        };
        assert_eq!(post.engagement_score(), u64::MAX);
        assert_eq!(post.interactions(), u64::MAX / 2 + 1);

        let likes_only = Post {
            likes: u64::MAX,
            comments: 1,
            ..Default::default()
        };
        assert_eq!(likes_only.engagement_score(), u64::MAX);
        assert_eq!(likes_only.interactions(), u64::MAX);
    }

    #[test]
    fn test_engagement_rate_zero_views() {
        let post = Post {
            comments: 3,
            ..Default::default()
        };
        assert_eq!(post.engagement_rate(), None);

        let viewed = Post {
            views: 200,
            comments: 3,
            likes: 7,
            ..Default::default()
        };
        assert_eq!(viewed.engagement_rate(), Some(5.0));
    }

    #[test]
    fn test_parsed_date() {
        let mut post = Post {
            date: "2024-01-15".to_string(),
            ..Default::default()
        };
        assert_eq!(post.parsed_date(), NaiveDate::from_ymd_opt(2024, 1, 15));

        post.date = "15/01/2024".to_string();
        assert_eq!(post.parsed_date(), None);
    }

    #[test]
    fn test_title_length_counts_chars() {
        let post = Post {
            title: "Café".to_string(),
            ..Default::default()
        };
        assert_eq!(post.title_length(), 4);
    }

    #[test]
    fn test_has_image_ignores_empty() {
        let mut post = Post {
            image: Some(String::new()),
            ..Default::default()
        };
        assert!(!post.has_image());
        post.image = Some("cover.png".to_string());
        assert!(post.has_image());
    }

    #[test]
    fn test_comment_day() {
        let comment = Comment {
            date: "2024-03-01 10:00:00".to_string(),
            ..Default::default()
        };
        assert_eq!(comment.day(), Some("2024-03-01"));

        let iso = Comment {
            date: "2024-03-02T08:30:00".to_string(),
            ..Default::default()
        };
        assert_eq!(iso.day(), Some("2024-03-02"));

        let empty = Comment::default();
        assert_eq!(empty.day(), None);
    }

    #[test]
    fn test_category_ids_are_text() {
        let category: Category =
            serde_json::from_str(r#"{"id": "programming", "name": "Programming"}"#).unwrap();
        assert_eq!(
            category.id,
            Some(RecordId::Text("programming".to_string()))
        );
        assert_eq!(category.id.unwrap().to_string(), "programming");
    }
}
