//! Insight generator - runs the registered rules in order

use crate::metrics::MetricsSnapshot;

use super::rules::{self, TopCategoryRule};
use super::types::{Insight, InsightKind};

/// A rule that turns one aggregate metric into at most one insight
pub trait InsightRule: Send + Sync {
    fn kind(&self) -> InsightKind;

    /// Human-readable name
    fn name(&self) -> &'static str;

    fn evaluate(&self, snapshot: &MetricsSnapshot) -> Option<Insight>;
}

/// Produces insights from a metrics snapshot
pub struct InsightGenerator {
    rules: Vec<Box<dyn InsightRule>>,
}

impl Default for InsightGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl InsightGenerator {
    /// Create a generator with the built-in rules in their display order
    pub fn new() -> Self {
        let mut generator = Self::empty();

        generator.register(Box::new(rules::visibility()));
        generator.register(Box::new(rules::engagement()));
        generator.register(Box::new(rules::content_length()));
        generator.register(Box::new(TopCategoryRule));
        generator.register(Box::new(rules::publishing_frequency()));
        generator.register(Box::new(rules::title_optimization()));
        generator.register(Box::new(rules::image_coverage()));

        generator
    }

    /// Create a generator with no rules
    pub fn empty() -> Self {
        Self { rules: vec![] }
    }

    /// Append a rule; rules run in registration order
    pub fn register(&mut self, rule: Box<dyn InsightRule>) {
        self.rules.push(rule);
    }

    pub fn generate(&self, snapshot: &MetricsSnapshot) -> Vec<Insight> {
        let insights: Vec<Insight> = self
            .rules
            .iter()
            .filter_map(|rule| {
                let insight = rule.evaluate(snapshot);
                tracing::debug!(
                    rule = rule.name(),
                    emitted = insight.is_some(),
                    "Insight rule evaluated"
                );
                insight
            })
            .collect();

        tracing::debug!(count = insights.len(), "Insight generation complete");
        insights
    }

    /// Registered rule kinds, in order
    pub fn kinds(&self) -> Vec<InsightKind> {
        self.rules.iter().map(|r| r.kind()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::Severity;
    use crate::metrics::CategoryPerformance;

    #[test]
    fn test_generator_order() {
        let generator = InsightGenerator::new();
        assert_eq!(
            generator.kinds(),
            vec![
                InsightKind::Visibility,
                InsightKind::Engagement,
                InsightKind::ContentLength,
                InsightKind::TopCategory,
                InsightKind::PublishingFrequency,
                InsightKind::TitleOptimization,
                InsightKind::ImageCoverage,
            ]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let insights = InsightGenerator::new().generate(&MetricsSnapshot::default());

        // Three ladders with catch-alls plus the two warnings at 0%
        let kinds: Vec<InsightKind> = insights.iter().map(|i| i.kind).collect();
        assert_eq!(
            kinds,
            vec![
                InsightKind::Visibility,
                InsightKind::Engagement,
                InsightKind::ContentLength,
                InsightKind::PublishingFrequency,
                InsightKind::TitleOptimization,
                InsightKind::ImageCoverage,
            ]
        );
    }

    #[test]
    fn test_healthy_blog() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.overview.average_views_per_post = 900.0;
        snapshot.engagement.engagement_rate_stats.average = 7.5;
        snapshot.content.word_count_stats.average = 1800.0;
        snapshot.temporal.average_posts_per_month = 4.0;
        snapshot.seo.title_analysis.optimal_percentage = 75.0;
        snapshot.seo.content_optimization.posts_with_images_percentage = 100.0;
        snapshot.categories = vec![CategoryPerformance {
            category: "programming".into(),
            average_views: 900.0,
            ..Default::default()
        }];

        let insights = InsightGenerator::new().generate(&snapshot);
        assert_eq!(insights.len(), 5);
        assert!(insights.iter().all(|i| i.severity == Severity::Info));
        assert!(insights[0].message.contains("Excellent"));
        assert!(insights[3].message.contains("'programming'"));
    }

    struct AlwaysRule;

    impl InsightRule for AlwaysRule {
        fn kind(&self) -> InsightKind {
            InsightKind::Visibility
        }

        fn name(&self) -> &'static str {
            "Always"
        }

        fn evaluate(&self, _snapshot: &MetricsSnapshot) -> Option<Insight> {
            Some(Insight::new(InsightKind::Visibility, Severity::Info, "always"))
        }
    }

    #[test]
    fn test_register_custom_rule() {
        let mut generator = InsightGenerator::empty();
        generator.register(Box::new(AlwaysRule));

        let insights = generator.generate(&MetricsSnapshot::default());
        assert_eq!(insights.len(), 1);
        assert_eq!(insights[0].message, "always");
    }
}
