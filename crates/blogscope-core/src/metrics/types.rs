//! Value objects returned by the metrics engine
//!
//! All of them serialize to JSON and default to their zero-valued form,
//! which is also what an empty dataset produces.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::Post;

/// Headline numbers for the whole blog
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Overview {
    pub total_posts: usize,
    pub published_posts: usize,
    pub draft_posts: usize,
    pub total_views: u64,
    /// Approved comments only
    pub total_comments: usize,
    pub total_likes: u64,
    /// Per published post
    pub average_views_per_post: f64,
    /// Approved comments per published post
    pub average_comments_per_post: f64,
}

impl Overview {
    /// (label, value) pairs in display order
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("total_posts", self.total_posts.to_string()),
            ("published_posts", self.published_posts.to_string()),
            ("draft_posts", self.draft_posts.to_string()),
            ("total_views", self.total_views.to_string()),
            ("total_comments", self.total_comments.to_string()),
            ("total_likes", self.total_likes.to_string()),
            (
                "average_views_per_post",
                self.average_views_per_post.to_string(),
            ),
            (
                "average_comments_per_post",
                self.average_comments_per_post.to_string(),
            ),
        ]
    }
}

/// min / max / average / median of an integer-valued series
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    pub min: usize,
    pub max: usize,
    pub average: f64,
    pub median: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagCount {
    pub tag: String,
    pub count: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub word_count_stats: SummaryStats,
    /// Minutes
    pub reading_time_stats: SummaryStats,
    /// Characters
    pub title_length_stats: SummaryStats,
    /// Most frequent first, ties in first-seen order
    pub most_used_tags: Vec<TagCount>,
    pub total_unique_tags: usize,
}

/// Distribution of per-post engagement rates (percent)
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RateStats {
    pub average: f64,
    pub median: f64,
    pub max: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommentStats {
    /// Approved comments
    pub total_comments: usize,
    /// Characters
    pub average_length: f64,
    /// `YYYY-MM-DD` -> approved comments that day
    pub comments_per_day: BTreeMap<String, usize>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngagingPost {
    pub title: String,
    pub views: u64,
    pub comments: u64,
    pub likes: u64,
}

impl EngagingPost {
    pub fn interactions(&self) -> u64 {
        self.comments + self.likes
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementAnalysis {
    pub engagement_rate_stats: RateStats,
    pub comment_stats: CommentStats,
    pub most_engaging_posts: Vec<EngagingPost>,
}

/// Aggregates for one category
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CategoryPerformance {
    pub category: String,
    pub posts: usize,
    pub total_views: u64,
    pub total_comments: u64,
    pub total_likes: u64,
    pub average_views: f64,
    pub average_comments: f64,
    pub average_likes: f64,
}

/// A post paired with its engagement score
#[derive(Debug, Clone, Copy)]
pub struct ScoredPost<'a> {
    pub post: &'a Post,
    pub engagement_score: u64,
}

/// One entry of a top-content ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedPost {
    pub title: String,
    pub date: String,
    pub category: String,
    pub views: u64,
    pub comments: u64,
    pub likes: u64,
    pub engagement_score: u64,
}

impl From<ScoredPost<'_>> for RankedPost {
    fn from(scored: ScoredPost<'_>) -> Self {
        Self {
            title: scored.post.title.clone(),
            date: scored.post.date.clone(),
            category: scored.post.category.clone(),
            views: scored.post.views,
            comments: scored.post.comments,
            likes: scored.post.likes,
            engagement_score: scored.engagement_score,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TopContent {
    pub top_by_views: Vec<RankedPost>,
    pub top_by_comments: Vec<RankedPost>,
    pub top_by_likes: Vec<RankedPost>,
    pub top_by_engagement: Vec<RankedPost>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayCount {
    pub weekday: String,
    pub posts: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TemporalAnalysis {
    /// `YYYY-MM` -> posts
    pub posts_by_month: BTreeMap<String, usize>,
    /// `YYYY-MM` -> views
    pub views_by_month: BTreeMap<String, u64>,
    /// Weekdays with at least one post, Monday first
    pub posts_by_weekday: Vec<WeekdayCount>,
    pub average_posts_per_month: f64,
    pub most_productive_month: Option<String>,
    pub most_productive_weekday: Option<String>,
}

impl TemporalAnalysis {
    /// Posts published on `weekday` (full English name)
    pub fn posts_on(&self, weekday: &str) -> usize {
        self.posts_by_weekday
            .iter()
            .find(|w| w.weekday == weekday)
            .map(|w| w.posts)
            .unwrap_or(0)
    }
}

/// How many posts fall inside an SEO length window
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct LengthWindowAnalysis {
    pub average_length: f64,
    pub optimal_length_count: usize,
    pub optimal_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentOptimization {
    pub posts_with_images: usize,
    pub posts_with_images_percentage: f64,
    pub posts_with_tags: usize,
    pub posts_with_tags_percentage: f64,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub title_analysis: LengthWindowAnalysis,
    pub meta_description_analysis: LengthWindowAnalysis,
    pub content_optimization: ContentOptimization,
}

/// Every metric family computed once
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricsSnapshot {
    pub overview: Overview,
    pub content: ContentAnalysis,
    pub engagement: EngagementAnalysis,
    /// First-seen category order
    pub categories: Vec<CategoryPerformance>,
    pub temporal: TemporalAnalysis,
    pub top_content: TopContent,
    pub seo: SeoAnalysis,
}
