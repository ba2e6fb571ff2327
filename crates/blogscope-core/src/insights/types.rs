//! Core types for insight generation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which metric an insight talks about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    /// Average views per published post
    Visibility,
    /// Average engagement rate
    Engagement,
    /// Average word count
    ContentLength,
    /// Best category by average views
    TopCategory,
    /// Posts per month
    PublishingFrequency,
    /// Share of titles in the SEO window
    TitleOptimization,
    /// Share of posts with a featured image
    ImageCoverage,
}

impl InsightKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            InsightKind::Visibility => "visibility",
            InsightKind::Engagement => "engagement",
            InsightKind::ContentLength => "content_length",
            InsightKind::TopCategory => "top_category",
            InsightKind::PublishingFrequency => "publishing_frequency",
            InsightKind::TitleOptimization => "title_optimization",
            InsightKind::ImageCoverage => "image_coverage",
        }
    }
}

impl fmt::Display for InsightKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for InsightKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visibility" => Ok(InsightKind::Visibility),
            "engagement" => Ok(InsightKind::Engagement),
            "content_length" => Ok(InsightKind::ContentLength),
            "top_category" => Ok(InsightKind::TopCategory),
            "publishing_frequency" => Ok(InsightKind::PublishingFrequency),
            "title_optimization" => Ok(InsightKind::TitleOptimization),
            "image_coverage" => Ok(InsightKind::ImageCoverage),
            _ => Err(format!("Unknown insight kind: {}", s)),
        }
    }
}

/// How much an insight calls for action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Things are going well
    Info,
    /// Room for improvement
    Attention,
    /// Something to fix
    Warning,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Attention => "attention",
            Severity::Warning => "warning",
        }
    }

    /// Numeric priority (higher = more urgent)
    pub fn priority(&self) -> u8 {
        match self {
            Severity::Info => 1,
            Severity::Attention => 2,
            Severity::Warning => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single natural-language observation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    pub message: String,
}

impl Insight {
    pub fn new(kind: InsightKind, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            kind,
            severity,
            message: message.into(),
        }
    }
}

impl fmt::Display for Insight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insight_kind_roundtrip() {
        assert_eq!(InsightKind::ContentLength.as_str(), "content_length");
        assert_eq!(
            InsightKind::from_str("image_coverage").unwrap(),
            InsightKind::ImageCoverage
        );
        assert!(InsightKind::from_str("nonsense").is_err());
    }

    #[test]
    fn test_severity_priority() {
        assert!(Severity::Warning.priority() > Severity::Attention.priority());
        assert!(Severity::Attention.priority() > Severity::Info.priority());
    }

    #[test]
    fn test_insight_display_is_message() {
        let insight = Insight::new(InsightKind::Visibility, Severity::Info, "Looking good");
        assert_eq!(insight.to_string(), "Looking good");
        assert_eq!(
            serde_json::to_value(&insight).unwrap()["severity"],
            "info"
        );
    }
}
