//! Markdown analytics report

use std::fmt::Write;

use chrono::{DateTime, Local};

use crate::error::Result;
use crate::insights::Insight;
use crate::metrics::MetricsSnapshot;

/// Entries shown in each "top" list of the report
const REPORT_TOP_LIMIT: usize = 5;

const RECOMMENDATIONS: &str = "\
## Recommendations for Growth

### Content Strategy
1. **Consistency:** Keep a regular publishing schedule (aim for 3-4 posts per month)
2. **Length:** Target 1000-2000 words per post for better SEO performance
3. **Engagement:** End posts with questions to encourage comments
4. **Visuals:** Include featured images in all posts

### SEO Optimization
1. **Titles:** Keep titles between 50-60 characters for optimal search display
2. **Meta Descriptions:** Write compelling 150-160 character descriptions
3. **Tags:** Use 3-5 relevant tags per post
4. **Internal Linking:** Link between related posts to improve site structure

### Audience Engagement
1. **Comments:** Respond to comments promptly to encourage discussion
2. **Social Media:** Share posts across social platforms
3. **Email:** Build an email list for direct reader communication
4. **Community:** Engage with other bloggers in your niche

### Analytics Tracking
1. **Monitor:** Track these metrics monthly to identify trends
2. **A/B Test:** Experiment with different post formats and topics
3. **User Feedback:** Survey readers about content preferences
4. **Performance:** Focus on replicating successful content patterns
";

/// Render the full report to a string
pub fn render(
    snapshot: &MetricsSnapshot,
    insights: &[Insight],
    generated_at: DateTime<Local>,
) -> Result<String> {
    let mut out = String::new();
    write_report(snapshot, insights, generated_at, &mut out)?;
    Ok(out)
}

pub fn write_report<W: Write>(
    snapshot: &MetricsSnapshot,
    insights: &[Insight],
    generated_at: DateTime<Local>,
    w: &mut W,
) -> Result<()> {
    writeln!(w, "# Blog Analytics Report")?;
    writeln!(w, "Generated on: {}", generated_at.format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(w)?;

    write_summary(snapshot, w)?;
    write_content(snapshot, w)?;
    write_engagement(snapshot, w)?;
    write_categories(snapshot, w)?;
    write_publishing(snapshot, w)?;
    write_top_content(snapshot, w)?;
    write_seo(snapshot, w)?;

    writeln!(w, "## Key Insights and Recommendations")?;
    for insight in insights {
        writeln!(w, "- {}", insight.message)?;
    }
    writeln!(w)?;

    write!(w, "{}", RECOMMENDATIONS)?;
    writeln!(w)?;
    writeln!(w, "---")?;
    writeln!(w, "*Report generated by blogscope*")?;
    Ok(())
}

fn write_summary<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    let o = &s.overview;
    writeln!(w, "## Executive Summary")?;
    writeln!(
        w,
        "- **Total Posts:** {} ({} published, {} drafts)",
        o.total_posts, o.published_posts, o.draft_posts
    )?;
    writeln!(w, "- **Total Views:** {}", with_commas(o.total_views))?;
    writeln!(w, "- **Total Comments:** {}", o.total_comments)?;
    writeln!(w, "- **Total Likes:** {}", o.total_likes)?;
    writeln!(w, "- **Average Views per Post:** {}", o.average_views_per_post)?;
    writeln!(
        w,
        "- **Average Comments per Post:** {}",
        o.average_comments_per_post
    )?;
    writeln!(w)?;
    Ok(())
}

fn write_content<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    let c = &s.content;
    writeln!(w, "## Content Analysis")?;
    writeln!(w)?;
    writeln!(w, "### Word Count Statistics")?;
    writeln!(w, "- **Average Words per Post:** {}", c.word_count_stats.average)?;
    writeln!(w, "- **Shortest Post:** {} words", c.word_count_stats.min)?;
    writeln!(w, "- **Longest Post:** {} words", c.word_count_stats.max)?;
    writeln!(w, "- **Median Length:** {} words", c.word_count_stats.median)?;
    writeln!(w)?;
    writeln!(w, "### Reading Time")?;
    writeln!(
        w,
        "- **Average Reading Time:** {} minutes",
        c.reading_time_stats.average
    )?;
    writeln!(
        w,
        "- **Range:** {}-{} minutes",
        c.reading_time_stats.min, c.reading_time_stats.max
    )?;
    writeln!(w)?;
    writeln!(w, "### Tags and Topics")?;
    writeln!(w, "- **Total Unique Tags:** {}", c.total_unique_tags)?;
    writeln!(w, "- **Most Popular Tags:**")?;
    for tag in &c.most_used_tags {
        writeln!(w, "  - {}: {} posts", tag.tag, tag.count)?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_engagement<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    let e = &s.engagement;
    writeln!(w, "## Engagement Analysis")?;
    writeln!(w)?;
    writeln!(w, "### Overall Engagement")?;
    writeln!(
        w,
        "- **Average Engagement Rate:** {:.2}%",
        e.engagement_rate_stats.average
    )?;
    writeln!(
        w,
        "- **Median Engagement Rate:** {:.2}%",
        e.engagement_rate_stats.median
    )?;
    writeln!(
        w,
        "- **Best Engagement Rate:** {:.2}%",
        e.engagement_rate_stats.max
    )?;
    writeln!(w)?;
    writeln!(w, "### Comment Statistics")?;
    writeln!(
        w,
        "- **Total Approved Comments:** {}",
        e.comment_stats.total_comments
    )?;
    writeln!(
        w,
        "- **Average Comment Length:** {} characters",
        e.comment_stats.average_length
    )?;
    writeln!(w)?;
    writeln!(w, "### Most Engaging Posts")?;
    for (i, post) in e.most_engaging_posts.iter().enumerate() {
        writeln!(
            w,
            "{}. **{}** - {} views, {} comments, {} likes",
            i + 1,
            post.title,
            post.views,
            post.comments,
            post.likes
        )?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_categories<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    writeln!(w, "## Category Performance")?;
    for category in &s.categories {
        writeln!(w)?;
        writeln!(w, "### {}", title_case(&category.category))?;
        writeln!(w, "- **Posts:** {}", category.posts)?;
        writeln!(w, "- **Total Views:** {}", with_commas(category.total_views))?;
        writeln!(w, "- **Average Views:** {:.1}", category.average_views)?;
        writeln!(w, "- **Total Comments:** {}", category.total_comments)?;
        writeln!(w, "- **Average Comments:** {:.1}", category.average_comments)?;
        writeln!(w, "- **Total Likes:** {}", category.total_likes)?;
        writeln!(w, "- **Average Likes:** {:.1}", category.average_likes)?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_publishing<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    let t = &s.temporal;
    writeln!(w, "## Publishing Patterns")?;
    writeln!(w)?;
    writeln!(w, "### Frequency")?;
    writeln!(
        w,
        "- **Average Posts per Month:** {:.1}",
        t.average_posts_per_month
    )?;
    writeln!(
        w,
        "- **Most Productive Month:** {}",
        t.most_productive_month.as_deref().unwrap_or("N/A")
    )?;
    writeln!(
        w,
        "- **Most Productive Day:** {}",
        t.most_productive_weekday.as_deref().unwrap_or("N/A")
    )?;
    writeln!(w)?;
    writeln!(w, "### Posts by Day of Week")?;
    for day in &t.posts_by_weekday {
        writeln!(w, "- {}: {} posts", day.weekday, day.posts)?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_top_content<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    let top = &s.top_content;
    writeln!(w, "## Top Performing Content")?;
    writeln!(w)?;
    writeln!(w, "### Most Viewed Posts")?;
    for (i, post) in top.top_by_views.iter().take(REPORT_TOP_LIMIT).enumerate() {
        writeln!(
            w,
            "{}. **{}** - {} views ({})",
            i + 1,
            post.title,
            with_commas(post.views),
            post.date
        )?;
    }
    writeln!(w)?;
    writeln!(w, "### Most Commented Posts")?;
    for (i, post) in top.top_by_comments.iter().take(REPORT_TOP_LIMIT).enumerate() {
        writeln!(
            w,
            "{}. **{}** - {} comments ({})",
            i + 1,
            post.title,
            post.comments,
            post.date
        )?;
    }
    writeln!(w)?;
    writeln!(w, "### Highest Engagement Score")?;
    for (i, post) in top
        .top_by_engagement
        .iter()
        .take(REPORT_TOP_LIMIT)
        .enumerate()
    {
        writeln!(
            w,
            "{}. **{}** - Score: {} ({} views, {} comments, {} likes)",
            i + 1,
            post.title,
            post.engagement_score,
            post.views,
            post.comments,
            post.likes
        )?;
    }
    writeln!(w)?;
    Ok(())
}

fn write_seo<W: Write>(s: &MetricsSnapshot, w: &mut W) -> Result<()> {
    let seo = &s.seo;
    writeln!(w, "## SEO Analysis")?;
    writeln!(w)?;
    writeln!(w, "### Title Optimization")?;
    writeln!(
        w,
        "- **Average Title Length:** {:.1} characters",
        seo.title_analysis.average_length
    )?;
    writeln!(
        w,
        "- **Optimal Length Titles (50-60 chars):** {} ({:.1}%)",
        seo.title_analysis.optimal_length_count, seo.title_analysis.optimal_percentage
    )?;
    writeln!(w)?;
    writeln!(w, "### Meta Description Optimization")?;
    writeln!(
        w,
        "- **Average Meta Description Length:** {:.1} characters",
        seo.meta_description_analysis.average_length
    )?;
    writeln!(
        w,
        "- **Optimal Length Descriptions (150-160 chars):** {} ({:.1}%)",
        seo.meta_description_analysis.optimal_length_count,
        seo.meta_description_analysis.optimal_percentage
    )?;
    writeln!(w)?;
    writeln!(w, "### Content Optimization")?;
    let opt = &seo.content_optimization;
    writeln!(
        w,
        "- **Posts with Featured Images:** {} ({:.1}%)",
        opt.posts_with_images, opt.posts_with_images_percentage
    )?;
    writeln!(
        w,
        "- **Posts with Tags:** {} ({:.1}%)",
        opt.posts_with_tags, opt.posts_with_tags_percentage
    )?;
    writeln!(w)?;
    Ok(())
}

/// 1234567 -> "1,234,567"
pub fn with_commas(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Capitalize the first letter of every alphabetic run ("web-development" -> "Web-Development")
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for ch in s.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::{InsightKind, Severity};
    use crate::metrics::{CategoryPerformance, RankedPost};
    use chrono::TimeZone;

    fn timestamp() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()
    }

    #[test]
    fn test_with_commas() {
        assert_eq!(with_commas(0), "0");
        assert_eq!(with_commas(999), "999");
        assert_eq!(with_commas(1000), "1,000");
        assert_eq!(with_commas(1234567), "1,234,567");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("web-development"), "Web-Development");
        assert_eq!(title_case("uncategorized"), "Uncategorized");
        assert_eq!(title_case("AI tools"), "Ai Tools");
    }

    #[test]
    fn test_empty_report_renders() {
        let report = render(&MetricsSnapshot::default(), &[], timestamp()).unwrap();
        assert!(report.starts_with("# Blog Analytics Report"));
        assert!(report.contains("Generated on: 2024-05-01 12:30:00"));
        assert!(report.contains("- **Most Productive Month:** N/A"));
        assert!(report.contains("## Recommendations for Growth"));
    }

    #[test]
    fn test_report_sections() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.overview.total_posts = 3;
        snapshot.overview.total_views = 12500;
        snapshot.categories = vec![CategoryPerformance {
            category: "web-development".into(),
            posts: 2,
            average_views: 445.0,
            ..Default::default()
        }];
        snapshot.top_content.top_by_engagement = vec![RankedPost {
            title: "Responsive Apps".into(),
            date: "2024-04-20".into(),
            category: "web-development".into(),
            views: 890,
            comments: 8,
            likes: 67,
            engagement_score: 1305,
        }];
        let insights = vec![Insight::new(
            InsightKind::Visibility,
            Severity::Info,
            "Great visibility",
        )];

        let report = render(&snapshot, &insights, timestamp()).unwrap();
        assert!(report.contains("- **Total Views:** 12,500"));
        assert!(report.contains("### Web-Development"));
        assert!(report.contains("- **Average Views:** 445.0"));
        assert!(report.contains(
            "1. **Responsive Apps** - Score: 1305 (890 views, 8 comments, 67 likes)"
        ));
        assert!(report.contains("- Great visibility"));
    }
}
