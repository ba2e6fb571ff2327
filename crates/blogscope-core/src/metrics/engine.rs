//! Metrics engine - one query method per metric family
//!
//! Every query is a pure function of the loaded collections. Nothing is
//! cached and nothing is written back, so methods can be called in any order.

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use chrono::{Datelike, NaiveDate, Weekday};
use serde_json::Value;
use tracing::debug;

use crate::config::ContentConfig;
use crate::data::BlogData;
use crate::insights::InsightGenerator;
use crate::models::{Category, Comment, Post};
use crate::text;

use super::stats::{self, percentage, ratio, round2};
use super::types::{
    CategoryPerformance, CommentStats, ContentAnalysis, ContentOptimization, EngagementAnalysis,
    EngagingPost, LengthWindowAnalysis, MetricsSnapshot, Overview, RankedPost, RateStats,
    ScoredPost, SeoAnalysis, SummaryStats, TagCount, TemporalAnalysis, TopContent, WeekdayCount,
};

/// Posts listed as most engaging
pub const MOST_ENGAGING_LIMIT: usize = 5;
/// Posts per top-content ranking
pub const TOP_CONTENT_LIMIT: usize = 10;
/// SEO-friendly title length, inclusive
pub const OPTIMAL_TITLE_LENGTH: (usize, usize) = (50, 60);
/// SEO-friendly meta description length, inclusive
pub const OPTIMAL_META_DESCRIPTION_LENGTH: (usize, usize) = (150, 160);

const WEEKDAYS: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// Full English weekday name
pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Computes blog metrics over an in-memory dataset
pub struct MetricsEngine {
    data: BlogData,
    content: ContentConfig,
}

impl MetricsEngine {
    pub fn new(data: BlogData) -> Self {
        Self::with_config(data, ContentConfig::default())
    }

    pub fn with_config(data: BlogData, content: ContentConfig) -> Self {
        Self { data, content }
    }

    pub fn data(&self) -> &BlogData {
        &self.data
    }

    pub fn posts(&self) -> &[Post] {
        &self.data.posts
    }

    pub fn comments(&self) -> &[Comment] {
        &self.data.comments
    }

    pub fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    pub fn settings(&self) -> &Value {
        &self.data.settings
    }

    fn approved_comments(&self) -> impl Iterator<Item = &Comment> {
        self.data.comments.iter().filter(|c| c.approved)
    }

    /// Word count of every post, in post order
    pub fn word_counts(&self) -> Vec<usize> {
        self.data
            .posts
            .iter()
            .map(|p| text::word_count(&p.content))
            .collect()
    }

    /// Post counts, totals and per-published-post averages
    pub fn overview(&self) -> Overview {
        let posts = &self.data.posts;

        let total_posts = posts.len();
        let published_posts = posts.iter().filter(|p| p.published).count();
        let total_views = stats::total(posts.iter().map(|p| p.views));
        let total_likes = stats::total(posts.iter().map(|p| p.likes));
        let total_comments = self.approved_comments().count();

        let overview = Overview {
            total_posts,
            published_posts,
            draft_posts: total_posts - published_posts,
            total_views,
            total_comments,
            total_likes,
            average_views_per_post: round2(ratio(total_views as f64, published_posts as f64)),
            average_comments_per_post: round2(ratio(
                total_comments as f64,
                published_posts as f64,
            )),
        };

        debug!(
            posts = overview.total_posts,
            published = overview.published_posts,
            "Computed overview"
        );
        overview
    }

    /// Length, reading time and tag usage statistics
    pub fn content_analysis(&self) -> ContentAnalysis {
        let posts = &self.data.posts;
        if posts.is_empty() {
            return ContentAnalysis::default();
        }

        let word_counts = self.word_counts();
        let reading_times: Vec<usize> = word_counts
            .iter()
            .map(|&words| text::reading_time(words, self.content.words_per_minute))
            .collect();
        let title_lengths: Vec<usize> = posts.iter().map(Post::title_length).collect();

        let (most_used_tags, total_unique_tags) =
            tag_frequency(posts.iter().flat_map(|p| p.tags.iter()), self.content.top_tags);

        debug!(
            posts = posts.len(),
            unique_tags = total_unique_tags,
            "Computed content analysis"
        );

        ContentAnalysis {
            word_count_stats: summarize(&word_counts),
            reading_time_stats: summarize(&reading_times),
            title_length_stats: summarize(&title_lengths),
            most_used_tags,
            total_unique_tags,
        }
    }

    /// Engagement rates, approved-comment statistics and most engaging posts
    pub fn engagement_analysis(&self) -> EngagementAnalysis {
        let rates: Vec<f64> = self
            .data
            .posts
            .iter()
            .filter_map(Post::engagement_rate)
            .collect();

        let mut lengths = Vec::new();
        let mut comments_per_day: BTreeMap<String, usize> = BTreeMap::new();
        for comment in self.approved_comments() {
            lengths.push(comment.length() as f64);
            if let Some(day) = comment.day() {
                *comments_per_day.entry(day.to_string()).or_insert(0) += 1;
            }
        }

        let mut engaging: Vec<&Post> = self.data.posts.iter().collect();
        engaging.sort_by_key(|p| Reverse(p.interactions()));
        let most_engaging_posts = engaging
            .into_iter()
            .take(MOST_ENGAGING_LIMIT)
            .map(|p| EngagingPost {
                title: p.title.clone(),
                views: p.views,
                comments: p.comments,
                likes: p.likes,
            })
            .collect();

        debug!(
            rated_posts = rates.len(),
            approved_comments = lengths.len(),
            "Computed engagement analysis"
        );

        EngagementAnalysis {
            engagement_rate_stats: RateStats {
                average: round2(stats::mean(&rates)),
                median: round2(stats::median(&rates)),
                max: round2(stats::max(&rates)),
            },
            comment_stats: CommentStats {
                total_comments: lengths.len(),
                average_length: round2(stats::mean(&lengths)),
                comments_per_day,
            },
            most_engaging_posts,
        }
    }

    /// Per-category totals and averages, in first-seen category order
    pub fn category_performance(&self) -> Vec<CategoryPerformance> {
        let mut categories: Vec<CategoryPerformance> = Vec::new();
        let mut index: HashMap<&str, usize> = HashMap::new();

        for post in &self.data.posts {
            let slot = *index.entry(post.category.as_str()).or_insert_with(|| {
                categories.push(CategoryPerformance {
                    category: post.category.clone(),
                    ..Default::default()
                });
                categories.len() - 1
            });

            let stats = &mut categories[slot];
            stats.posts += 1;
            stats.total_views = stats.total_views.saturating_add(post.views);
            stats.total_comments = stats.total_comments.saturating_add(post.comments);
            stats.total_likes = stats.total_likes.saturating_add(post.likes);
        }

        for stats in &mut categories {
            let posts = stats.posts as f64;
            stats.average_views = round2(ratio(stats.total_views as f64, posts));
            stats.average_comments = round2(ratio(stats.total_comments as f64, posts));
            stats.average_likes = round2(ratio(stats.total_likes as f64, posts));
        }

        debug!(categories = categories.len(), "Computed category performance");
        categories
    }

    /// Every post with its engagement score, in post order
    pub fn scored_posts(&self) -> Vec<ScoredPost<'_>> {
        self.data
            .posts
            .iter()
            .map(|post| ScoredPost {
                post,
                engagement_score: post.engagement_score(),
            })
            .collect()
    }

    /// Top posts by views, comments, likes and engagement score
    pub fn top_content(&self) -> TopContent {
        let scored = self.scored_posts();

        TopContent {
            top_by_views: top_by(&scored, |s| s.post.views),
            top_by_comments: top_by(&scored, |s| s.post.comments),
            top_by_likes: top_by(&scored, |s| s.post.likes),
            top_by_engagement: top_by(&scored, |s| s.engagement_score),
        }
    }

    /// Publishing patterns by month and weekday
    pub fn temporal_analysis(&self) -> TemporalAnalysis {
        let mut posts_by_month: BTreeMap<String, usize> = BTreeMap::new();
        let mut views_by_month: BTreeMap<String, u64> = BTreeMap::new();
        let mut month_order: Vec<String> = Vec::new();
        let mut weekday_posts = [0usize; 7];
        let mut weekday_order: Vec<Weekday> = Vec::new();
        let mut span: Option<(NaiveDate, NaiveDate)> = None;

        for post in &self.data.posts {
            let Some(date) = post.parsed_date() else {
                continue;
            };

            let month = date.format("%Y-%m").to_string();
            if !posts_by_month.contains_key(&month) {
                month_order.push(month.clone());
            }
            *posts_by_month.entry(month.clone()).or_insert(0) += 1;
            let views = views_by_month.entry(month).or_insert(0);
            *views = views.saturating_add(post.views);

            let weekday = date.weekday();
            let slot = weekday.num_days_from_monday() as usize;
            if weekday_posts[slot] == 0 {
                weekday_order.push(weekday);
            }
            weekday_posts[slot] += 1;

            span = Some(match span {
                Some((first, last)) => (first.min(date), last.max(date)),
                None => (date, date),
            });
        }

        let average_posts_per_month = match span {
            Some((first, last)) => {
                let months = (last.year() - first.year()) * 12 + last.month() as i32
                    - first.month() as i32
                    + 1;
                round2(ratio(self.data.posts.len() as f64, months as f64))
            }
            None => 0.0,
        };

        let most_productive_month = first_max(month_order.iter(), |m| posts_by_month[*m]).cloned();
        let most_productive_weekday = first_max(weekday_order.iter(), |w| {
            weekday_posts[w.num_days_from_monday() as usize]
        })
        .map(|w| weekday_name(*w).to_string());

        let posts_by_weekday = WEEKDAYS
            .iter()
            .filter(|w| weekday_posts[w.num_days_from_monday() as usize] > 0)
            .map(|w| WeekdayCount {
                weekday: weekday_name(*w).to_string(),
                posts: weekday_posts[w.num_days_from_monday() as usize],
            })
            .collect();

        debug!(
            months = posts_by_month.len(),
            average_posts_per_month, "Computed temporal analysis"
        );

        TemporalAnalysis {
            posts_by_month,
            views_by_month,
            posts_by_weekday,
            average_posts_per_month,
            most_productive_month,
            most_productive_weekday,
        }
    }

    /// Title / meta description windows and image / tag coverage
    pub fn seo_analysis(&self) -> SeoAnalysis {
        let posts = &self.data.posts;
        if posts.is_empty() {
            return SeoAnalysis::default();
        }

        let title_lengths: Vec<usize> = posts.iter().map(Post::title_length).collect();
        let meta_lengths: Vec<usize> = posts.iter().map(Post::meta_description_length).collect();
        let posts_with_images = posts.iter().filter(|p| p.has_image()).count();
        let posts_with_tags = posts.iter().filter(|p| p.has_tags()).count();

        debug!(posts = posts.len(), "Computed SEO analysis");

        SeoAnalysis {
            title_analysis: window_analysis(&title_lengths, OPTIMAL_TITLE_LENGTH),
            meta_description_analysis: window_analysis(
                &meta_lengths,
                OPTIMAL_META_DESCRIPTION_LENGTH,
            ),
            content_optimization: ContentOptimization {
                posts_with_images,
                posts_with_images_percentage: percentage(posts_with_images, posts.len()),
                posts_with_tags,
                posts_with_tags_percentage: percentage(posts_with_tags, posts.len()),
            },
        }
    }

    /// Run every metric family
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            overview: self.overview(),
            content: self.content_analysis(),
            engagement: self.engagement_analysis(),
            categories: self.category_performance(),
            temporal: self.temporal_analysis(),
            top_content: self.top_content(),
            seo: self.seo_analysis(),
        }
    }

    /// Insight messages in their fixed order
    pub fn generate_insights(&self) -> Vec<String> {
        InsightGenerator::new()
            .generate(&self.snapshot())
            .into_iter()
            .map(|insight| insight.message)
            .collect()
    }
}

fn summarize(values: &[usize]) -> SummaryStats {
    let as_f64: Vec<f64> = values.iter().map(|&v| v as f64).collect();
    SummaryStats {
        min: values.iter().copied().min().unwrap_or(0),
        max: values.iter().copied().max().unwrap_or(0),
        average: round2(stats::mean(&as_f64)),
        median: round2(stats::median(&as_f64)),
    }
}

/// Count tags, returning the `limit` most used and the number of distinct tags
fn tag_frequency<'a>(
    tags: impl Iterator<Item = &'a String>,
    limit: usize,
) -> (Vec<TagCount>, usize) {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for tag in tags {
        match index.get(tag.as_str()) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                index.insert(tag.as_str(), counts.len());
                counts.push(TagCount {
                    tag: tag.clone(),
                    count: 1,
                });
            }
        }
    }

    let unique = counts.len();
    counts.sort_by_key(|t| Reverse(t.count));
    counts.truncate(limit);
    (counts, unique)
}

/// Stable descending ranking on `key`, truncated to the top-content limit
fn top_by<K: Ord>(scored: &[ScoredPost<'_>], key: impl Fn(&ScoredPost<'_>) -> K) -> Vec<RankedPost> {
    let mut ranked = scored.to_vec();
    ranked.sort_by_key(|s| Reverse(key(s)));
    ranked
        .into_iter()
        .take(TOP_CONTENT_LIMIT)
        .map(RankedPost::from)
        .collect()
}

/// First item with the highest key
fn first_max<T, K: Ord>(items: impl Iterator<Item = T>, key: impl Fn(&T) -> K) -> Option<T> {
    let mut best: Option<(K, T)> = None;
    for item in items {
        let k = key(&item);
        let better = match &best {
            Some((best_key, _)) => k > *best_key,
            None => true,
        };
        if better {
            best = Some((k, item));
        }
    }
    best.map(|(_, item)| item)
}

fn window_analysis(lengths: &[usize], (low, high): (usize, usize)) -> LengthWindowAnalysis {
    let optimal = lengths
        .iter()
        .filter(|&&len| (low..=high).contains(&len))
        .count();
    let as_f64: Vec<f64> = lengths.iter().map(|&v| v as f64).collect();

    LengthWindowAnalysis {
        average_length: round2(stats::mean(&as_f64)),
        optimal_length_count: optimal,
        optimal_percentage: percentage(optimal, lengths.len()),
    }
}
