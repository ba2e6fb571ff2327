//! Built-in insight rules
//!
//! Most rules are threshold ladders: an ordered list of (predicate, message)
//! steps over one metric, evaluated top to bottom, first match wins.

use crate::metrics::MetricsSnapshot;

use super::generator::InsightRule;
use super::types::{Insight, InsightKind, Severity};

/// Comparison applied to a metric value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Threshold {
    Above(f64),
    AtLeast(f64),
    Below(f64),
    /// Always matches (the bottom rung of a ladder)
    Otherwise,
}

impl Threshold {
    pub fn matches(&self, value: f64) -> bool {
        match *self {
            Threshold::Above(limit) => value > limit,
            Threshold::AtLeast(limit) => value >= limit,
            Threshold::Below(limit) => value < limit,
            Threshold::Otherwise => true,
        }
    }
}

/// One rung of a ladder
#[derive(Debug, Clone)]
pub struct Step {
    pub threshold: Threshold,
    pub severity: Severity,
    pub message: &'static str,
}

impl Step {
    pub const fn new(threshold: Threshold, severity: Severity, message: &'static str) -> Self {
        Self {
            threshold,
            severity,
            message,
        }
    }
}

/// Emits the message of the first matching step, or nothing
pub struct ThresholdLadder {
    kind: InsightKind,
    name: &'static str,
    metric: fn(&MetricsSnapshot) -> f64,
    steps: Vec<Step>,
}

impl ThresholdLadder {
    pub fn new(
        kind: InsightKind,
        name: &'static str,
        metric: fn(&MetricsSnapshot) -> f64,
        steps: Vec<Step>,
    ) -> Self {
        Self {
            kind,
            name,
            metric,
            steps,
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }
}

impl InsightRule for ThresholdLadder {
    fn kind(&self) -> InsightKind {
        self.kind
    }

    fn name(&self) -> &'static str {
        self.name
    }

    fn evaluate(&self, snapshot: &MetricsSnapshot) -> Option<Insight> {
        let value = (self.metric)(snapshot);
        self.steps
            .iter()
            .find(|step| step.threshold.matches(value))
            .map(|step| Insight::new(self.kind, step.severity, step.message))
    }
}

/// Names the category with the highest average views
pub struct TopCategoryRule;

impl InsightRule for TopCategoryRule {
    fn kind(&self) -> InsightKind {
        InsightKind::TopCategory
    }

    fn name(&self) -> &'static str {
        "Top Category"
    }

    fn evaluate(&self, snapshot: &MetricsSnapshot) -> Option<Insight> {
        let mut best = snapshot.categories.first()?;
        for category in &snapshot.categories[1..] {
            if category.average_views > best.average_views {
                best = category;
            }
        }

        Some(Insight::new(
            InsightKind::TopCategory,
            Severity::Info,
            format!(
                "🏆 '{}' is your top-performing category with {:.0} average views.",
                best.category, best.average_views
            ),
        ))
    }
}

pub fn visibility() -> ThresholdLadder {
    ThresholdLadder::new(
        InsightKind::Visibility,
        "Visibility",
        |s| s.overview.average_views_per_post,
        vec![
            Step::new(
                Threshold::Above(500.0),
                Severity::Info,
                "🎉 Excellent! Your posts are getting great visibility with high average views.",
            ),
            Step::new(
                Threshold::Above(100.0),
                Severity::Info,
                "👍 Good readership! Consider promoting your content more to increase views.",
            ),
            Step::new(
                Threshold::Otherwise,
                Severity::Attention,
                "📈 Focus on SEO optimization and content promotion to increase visibility.",
            ),
        ],
    )
}

pub fn engagement() -> ThresholdLadder {
    ThresholdLadder::new(
        InsightKind::Engagement,
        "Engagement",
        |s| s.engagement.engagement_rate_stats.average,
        vec![
            Step::new(
                Threshold::Above(5.0),
                Severity::Info,
                "💬 Outstanding engagement! Your readers are actively interacting with your content.",
            ),
            Step::new(
                Threshold::Above(2.0),
                Severity::Info,
                "👥 Good engagement levels. Consider adding more call-to-actions to boost interaction.",
            ),
            Step::new(
                Threshold::Otherwise,
                Severity::Attention,
                "🔄 Low engagement. Try asking questions and encouraging comments at the end of posts.",
            ),
        ],
    )
}

pub fn content_length() -> ThresholdLadder {
    ThresholdLadder::new(
        InsightKind::ContentLength,
        "Content Length",
        |s| s.content.word_count_stats.average,
        vec![
            Step::new(
                Threshold::Above(1500.0),
                Severity::Info,
                "📚 Your posts are comprehensive and detailed, which is great for SEO and authority.",
            ),
            Step::new(
                Threshold::Above(800.0),
                Severity::Info,
                "📝 Good post length for readability and SEO. Consider varying length based on topic.",
            ),
            Step::new(
                Threshold::Otherwise,
                Severity::Attention,
                "📄 Consider writing longer, more detailed posts to improve SEO and provide more value.",
            ),
        ],
    )
}

pub fn publishing_frequency() -> ThresholdLadder {
    ThresholdLadder::new(
        InsightKind::PublishingFrequency,
        "Publishing Frequency",
        |s| s.temporal.average_posts_per_month,
        vec![
            Step::new(
                Threshold::AtLeast(4.0),
                Severity::Info,
                "📅 Great posting consistency! Regular publishing helps build audience loyalty.",
            ),
            Step::new(
                Threshold::AtLeast(2.0),
                Severity::Info,
                "📆 Good posting frequency. Consider increasing to 3-4 posts per month for better growth.",
            ),
            Step::new(
                Threshold::Otherwise,
                Severity::Attention,
                "⏰ Increase posting frequency to at least 2-3 posts per month for better engagement.",
            ),
        ],
    )
}

pub fn title_optimization() -> ThresholdLadder {
    ThresholdLadder::new(
        InsightKind::TitleOptimization,
        "Title Optimization",
        |s| s.seo.title_analysis.optimal_percentage,
        vec![Step::new(
            Threshold::Below(50.0),
            Severity::Warning,
            "🔍 Optimize your post titles to 50-60 characters for better SEO performance.",
        )],
    )
}

pub fn image_coverage() -> ThresholdLadder {
    ThresholdLadder::new(
        InsightKind::ImageCoverage,
        "Image Coverage",
        |s| s.seo.content_optimization.posts_with_images_percentage,
        vec![Step::new(
            Threshold::Below(80.0),
            Severity::Warning,
            "🖼️ Add featured images to more posts to improve visual appeal and social sharing.",
        )],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::CategoryPerformance;

    fn snapshot_with_views(average: f64) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.overview.average_views_per_post = average;
        snapshot
    }

    #[test]
    fn test_threshold_matches() {
        assert!(Threshold::Above(5.0).matches(5.1));
        assert!(!Threshold::Above(5.0).matches(5.0));
        assert!(Threshold::AtLeast(4.0).matches(4.0));
        assert!(Threshold::Below(50.0).matches(49.99));
        assert!(!Threshold::Below(50.0).matches(50.0));
        assert!(Threshold::Otherwise.matches(f64::MIN));
    }

    #[test]
    fn test_visibility_ladder_boundaries() {
        let ladder = visibility();
        let tier = |views: f64| ladder.evaluate(&snapshot_with_views(views)).unwrap().message;

        assert!(tier(501.0).contains("Excellent"));
        assert!(tier(500.0).contains("Good readership"));
        assert!(tier(100.01).contains("Good readership"));
        assert!(tier(100.0).contains("Focus on SEO"));
        assert!(tier(0.0).contains("Focus on SEO"));
    }

    #[test]
    fn test_engagement_messages() {
        let ladder = engagement();
        let tier = |rate: f64| {
            let mut snapshot = MetricsSnapshot::default();
            snapshot.engagement.engagement_rate_stats.average = rate;
            ladder.evaluate(&snapshot).unwrap().message
        };

        assert!(tier(5.5).starts_with("💬 Outstanding engagement!"));
        assert_eq!(
            tier(3.0),
            "👥 Good engagement levels. Consider adding more call-to-actions to boost interaction."
        );
        assert!(tier(2.0).starts_with("🔄 Low engagement."));
    }

    #[test]
    fn test_ladders_end_with_catch_all() {
        for ladder in [visibility(), engagement(), content_length(), publishing_frequency()] {
            assert_eq!(
                ladder.steps().last().map(|s| s.threshold),
                Some(Threshold::Otherwise),
                "{} must always emit",
                ladder.name()
            );
        }
    }

    #[test]
    fn test_frequency_uses_inclusive_thresholds() {
        let ladder = publishing_frequency();
        let mut snapshot = MetricsSnapshot::default();

        snapshot.temporal.average_posts_per_month = 4.0;
        assert!(ladder.evaluate(&snapshot).unwrap().message.contains("Great posting"));
        snapshot.temporal.average_posts_per_month = 2.0;
        assert!(ladder.evaluate(&snapshot).unwrap().message.contains("Good posting"));
        snapshot.temporal.average_posts_per_month = 1.99;
        assert!(ladder.evaluate(&snapshot).unwrap().message.contains("Increase posting"));
    }

    #[test]
    fn test_warnings_only_below_threshold() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.seo.title_analysis.optimal_percentage = 50.0;
        snapshot.seo.content_optimization.posts_with_images_percentage = 80.0;
        assert!(title_optimization().evaluate(&snapshot).is_none());
        assert!(image_coverage().evaluate(&snapshot).is_none());

        snapshot.seo.title_analysis.optimal_percentage = 49.0;
        snapshot.seo.content_optimization.posts_with_images_percentage = 79.0;
        let title = title_optimization().evaluate(&snapshot).unwrap();
        assert_eq!(title.severity, Severity::Warning);
        assert!(image_coverage().evaluate(&snapshot).is_some());
    }

    #[test]
    fn test_top_category_first_wins_ties() {
        let mut snapshot = MetricsSnapshot::default();
        assert!(TopCategoryRule.evaluate(&snapshot).is_none());

        snapshot.categories = vec![
            CategoryPerformance {
                category: "rust".into(),
                average_views: 120.4,
                ..Default::default()
            },
            CategoryPerformance {
                category: "go".into(),
                average_views: 120.4,
                ..Default::default()
            },
            CategoryPerformance {
                category: "misc".into(),
                average_views: 3.0,
                ..Default::default()
            },
        ];

        let insight = TopCategoryRule.evaluate(&snapshot).unwrap();
        assert_eq!(
            insight.message,
            "🏆 'rust' is your top-performing category with 120 average views."
        );
    }
}
