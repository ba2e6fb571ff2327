//! Analytics dashboard: a 3x4 grid of chart panels in one SVG
//!
//! The first two rows hold four panels each. The last row holds two panels
//! followed by the category heatmap, which spans the remaining two columns.

use std::borrow::Cow;

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};

use crate::error::Result;
use crate::metrics::{MetricsEngine, MetricsSnapshot};

type Panel<'a> = DrawingArea<SVGBackend<'a>, Shift>;

const COLUMNS: usize = 4;
const ROWS: usize = 3;

pub const DASHBOARD_SIZE: (u32, u32) = (1760, 1140);

/// Bins in the word-count histogram
pub const HISTOGRAM_BINS: usize = 10;
/// Days shown in the comments timeline
pub const COMMENT_TIMELINE_DAYS: usize = 30;

const TITLE_LABEL_CHARS: usize = 20;
const CATEGORY_LABEL_CHARS: usize = 14;
/// Axis labels shown on the timeline panels
const TIMELINE_LABELS: usize = 8;

const FONT: &str = "sans-serif";
const TITLE_FONT: (&str, i32) = (FONT, 28);
const CAPTION_FONT: (&str, i32) = (FONT, 16);
const LABEL_FONT: (&str, i32) = (FONT, 11);

const PANEL_BACKGROUND: RGBColor = RGBColor(250, 250, 250);
const AXIS_COLOR: RGBColor = RGBColor(85, 85, 85);

const OVERVIEW_COLORS: [RGBColor; 4] = [
    RGBColor(0x34, 0x98, 0xdb),
    RGBColor(0xe7, 0x4c, 0x3c),
    RGBColor(0x2e, 0xcc, 0x71),
    RGBColor(0xf3, 0x9c, 0x12),
];
const CATEGORY_COLOR: RGBColor = RGBColor(0x9b, 0x59, 0xb6);
const ENGAGING_COLOR: RGBColor = RGBColor(0x1a, 0xbc, 0x9c);
const TIMELINE_COLOR: RGBColor = RGBColor(0xe6, 0x7e, 0x22);
const HISTOGRAM_COLOR: RGBColor = RGBColor(0x34, 0x49, 0x5e);
const TAG_COLOR: RGBColor = RGBColor(0x8e, 0x44, 0xad);
const SCATTER_COLOR: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);
const COMMENTS_COLOR: RGBColor = RGBColor(0x2e, 0xcc, 0x71);
const WEEKDAY_COLOR: RGBColor = RGBColor(0xf3, 0x9c, 0x12);

pub const SEO_GOOD: RGBColor = RGBColor(0x27, 0xae, 0x60);
pub const SEO_FAIR: RGBColor = RGBColor(0xf3, 0x9c, 0x12);
pub const SEO_POOR: RGBColor = RGBColor(0xe7, 0x4c, 0x3c);

/// Bar colour for an SEO percentage
pub fn seo_color(percentage: f64) -> RGBColor {
    if percentage >= 80.0 {
        SEO_GOOD
    } else if percentage >= 50.0 {
        SEO_FAIR
    } else {
        SEO_POOR
    }
}

/// One labelled bar
#[derive(Debug, Clone)]
struct Bar {
    label: String,
    value: f64,
    color: RGBColor,
}

impl Bar {
    fn new(label: impl Into<String>, value: f64, color: RGBColor) -> Self {
        Self {
            label: label.into(),
            value,
            color,
        }
    }
}

/// Frequency histogram with `bins` equal-width buckets from min to max
///
/// Returns (lower bound, count) per bucket. The last bucket includes the max.
pub fn histogram(values: &[usize], bins: usize) -> Vec<(f64, usize)> {
    let (Some(&min), Some(&max)) = (values.iter().min(), values.iter().max()) else {
        return Vec::new();
    };
    if bins == 0 {
        return Vec::new();
    }

    let min = min as f64;
    let span = (max as f64 - min).max(1.0);
    let width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &value in values {
        let slot = (((value as f64 - min) / width) as usize).min(bins - 1);
        counts[slot] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| (min + i as f64 * width, count))
        .collect()
}

/// Render the full dashboard to an SVG string
pub fn render(engine: &MetricsEngine) -> Result<String> {
    let snapshot = engine.snapshot();
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, DASHBOARD_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let body = root.titled("Blog Analytics Dashboard", TITLE_FONT)?;
        let panels = layout(&body)?;

        overview_panel(&panels[0], &snapshot)?;
        category_views_panel(&panels[1], &snapshot)?;
        engaging_posts_panel(&panels[2], &snapshot)?;
        publishing_timeline_panel(&panels[3], &snapshot)?;
        word_count_panel(&panels[4], &engine.word_counts())?;
        tags_panel(&panels[5], &snapshot)?;
        scatter_panel(&panels[6], engine)?;
        seo_panel(&panels[7], &snapshot)?;
        comments_timeline_panel(&panels[8], &snapshot)?;
        weekday_panel(&panels[9], &snapshot)?;
        heatmap_panel(&panels[10], &snapshot)?;

        root.present()?;
    }
    Ok(out)
}

/// Eleven panels in row-major order; the last one is two columns wide
fn layout<'a>(body: &Panel<'a>) -> Result<Vec<Panel<'a>>> {
    let rows = body.split_evenly((ROWS, 1));
    let mut panels: Vec<Panel<'a>> = rows[..ROWS - 1]
        .iter()
        .flat_map(|row| row.split_evenly((1, COLUMNS)))
        .collect();

    let last = &rows[ROWS - 1];
    let half = last.dim_in_pixel().0 as i32 / 2;
    let (left, right) = last.split_horizontally(half);
    panels.extend(left.split_evenly((1, 2)));
    panels.push(right);

    for panel in &panels {
        panel.fill(&PANEL_BACKGROUND)?;
    }
    Ok(panels)
}

/// Cut `s` to `max` characters, marking the cut with "..."
fn shorten(s: &str, max: usize) -> Cow<'_, str> {
    if s.chars().count() <= max {
        Cow::Borrowed(s)
    } else {
        let cut: String = s.chars().take(max).collect();
        Cow::Owned(format!("{}...", cut))
    }
}

/// Integers without a fractional part, everything else with one decimal
fn format_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        format!("{:.1}", value)
    }
}

/// Label for a segment centre, empty between segments
fn segment_label(value: &SegmentValue<usize>, labels: &[String]) -> String {
    match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => {
            labels.get(*i).cloned().unwrap_or_default()
        }
        SegmentValue::Last => String::new(),
    }
}

/// Upper axis bound with a little headroom; never zero
fn axis_max(max: f64) -> f64 {
    if max > 0.0 {
        max * 1.1
    } else {
        1.0
    }
}

fn no_data(area: &Panel<'_>, title: &str) -> Result<()> {
    let inner = area.titled(title, CAPTION_FONT)?;
    let (width, height) = inner.dim_in_pixel();
    let style = (FONT, 13)
        .into_font()
        .color(&AXIS_COLOR)
        .pos(Pos::new(HPos::Center, VPos::Center));
    inner.draw(&Text::new(
        "No data",
        (width as i32 / 2, height as i32 / 2),
        style,
    ))?;
    Ok(())
}

/// Vertical bar chart. `y_max` fixes the scale; otherwise the largest bar sets it.
fn vertical_bars(
    area: &Panel<'_>,
    title: &str,
    y_desc: &str,
    bars: &[Bar],
    y_max: Option<f64>,
    value_labels: bool,
) -> Result<()> {
    if bars.is_empty() {
        return no_data(area, title);
    }

    let max = y_max.unwrap_or_else(|| axis_max(bars.iter().map(|b| b.value).fold(0.0, f64::max)));
    let labels: Vec<String> = bars.iter().map(|b| b.label.clone()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&|v| segment_label(v, &labels))
        .y_desc(y_desc)
        .label_style(LABEL_FONT)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let mut rect = Rectangle::new(
            [
                (SegmentValue::Exact(i), 0.0),
                (SegmentValue::Exact(i + 1), bar.value.min(max)),
            ],
            bar.color.filled(),
        );
        rect.set_margin(0, 0, 6, 6);
        rect
    }))?;

    if value_labels {
        let style = LABEL_FONT
            .into_font()
            .color(&BLACK)
            .pos(Pos::new(HPos::Center, VPos::Bottom));
        chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
            Text::new(
                format_value(bar.value),
                (SegmentValue::CenterOf(i), bar.value.min(max)),
                style.clone(),
            )
        }))?;
    }
    Ok(())
}

/// Horizontal bar chart, first bar on top
fn horizontal_bars(area: &Panel<'_>, title: &str, bars: &[Bar]) -> Result<()> {
    if bars.is_empty() {
        return no_data(area, title);
    }

    let n = bars.len();
    let max = axis_max(bars.iter().map(|b| b.value).fold(0.0, f64::max));
    // Segment 0 is at the bottom, so labels run in reverse
    let labels: Vec<String> = bars.iter().rev().map(|b| b.label.clone()).collect();

    let mut chart = ChartBuilder::on(area)
        .caption(title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(140)
        .build_cartesian_2d(0f64..max, (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .y_labels(n)
        .y_label_formatter(&|v| segment_label(v, &labels))
        .label_style(LABEL_FONT)
        .draw()?;

    chart.draw_series(bars.iter().enumerate().map(|(i, bar)| {
        let row = n - 1 - i;
        let mut rect = Rectangle::new(
            [
                (0.0, SegmentValue::Exact(row)),
                (bar.value, SegmentValue::Exact(row + 1)),
            ],
            bar.color.filled(),
        );
        rect.set_margin(4, 4, 0, 0);
        rect
    }))?;
    Ok(())
}

/// Line chart with point markers over labelled x positions
fn line_chart(
    area: &Panel<'_>,
    title: &str,
    y_desc: &str,
    points: &[(String, f64)],
    color: RGBColor,
) -> Result<()> {
    if points.is_empty() {
        return no_data(area, title);
    }

    let max = axis_max(points.iter().map(|(_, v)| *v).fold(0.0, f64::max));
    // Thin out labels on crowded axes
    let every = points.len().div_ceil(TIMELINE_LABELS).max(1);
    let labels: Vec<String> = points
        .iter()
        .enumerate()
        .map(|(i, (label, _))| {
            if i % every == 0 {
                label.clone()
            } else {
                String::new()
            }
        })
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(title, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d((0..points.len()).into_segmented(), 0f64..max)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len())
        .x_label_formatter(&|v| segment_label(v, &labels))
        .y_desc(y_desc)
        .label_style(LABEL_FONT)
        .draw()?;

    let coords: Vec<(SegmentValue<usize>, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, (_, v))| (SegmentValue::CenterOf(i), *v))
        .collect();
    chart.draw_series(LineSeries::new(coords.clone(), color.stroke_width(2)))?;
    chart.draw_series(
        coords
            .into_iter()
            .map(|c| Circle::new(c, 3, color.filled())),
    )?;
    Ok(())
}

fn overview_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let o = &s.overview;
    let bars: Vec<Bar> = [
        ("Posts", o.published_posts as f64),
        ("Views", o.total_views as f64),
        ("Comments", o.total_comments as f64),
        ("Likes", o.total_likes as f64),
    ]
    .into_iter()
    .zip(OVERVIEW_COLORS)
    .map(|((label, value), color)| Bar::new(label, value, color))
    .collect();
    vertical_bars(area, "Blog Overview", "Count", &bars, None, true)
}

fn category_views_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let bars: Vec<Bar> = s
        .categories
        .iter()
        .map(|c| {
            Bar::new(
                shorten(&c.category, CATEGORY_LABEL_CHARS),
                c.average_views,
                CATEGORY_COLOR,
            )
        })
        .collect();
    vertical_bars(
        area,
        "Average Views by Category",
        "Average Views",
        &bars,
        None,
        false,
    )
}

fn engaging_posts_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let bars: Vec<Bar> = s
        .engagement
        .most_engaging_posts
        .iter()
        .map(|p| {
            Bar::new(
                shorten(&p.title, TITLE_LABEL_CHARS),
                p.interactions() as f64,
                ENGAGING_COLOR,
            )
        })
        .collect();
    horizontal_bars(area, "Most Engaging Posts", &bars)
}

fn publishing_timeline_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let points: Vec<(String, f64)> = s
        .temporal
        .posts_by_month
        .iter()
        .map(|(month, posts)| (month.clone(), *posts as f64))
        .collect();
    line_chart(
        area,
        "Publishing Timeline",
        "Posts Published",
        &points,
        TIMELINE_COLOR,
    )
}

fn word_count_panel(area: &Panel<'_>, word_counts: &[usize]) -> Result<()> {
    let bars: Vec<Bar> = histogram(word_counts, HISTOGRAM_BINS)
        .into_iter()
        .map(|(lower, count)| Bar::new(format!("{:.0}", lower), count as f64, HISTOGRAM_COLOR))
        .collect();
    vertical_bars(
        area,
        "Word Count Distribution",
        "Number of Posts",
        &bars,
        None,
        false,
    )
}

fn tags_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let bars: Vec<Bar> = s
        .content
        .most_used_tags
        .iter()
        .map(|t| Bar::new(shorten(&t.tag, CATEGORY_LABEL_CHARS), t.count as f64, TAG_COLOR))
        .collect();
    vertical_bars(area, "Most Popular Tags", "Usage Count", &bars, None, false)
}

fn scatter_panel(area: &Panel<'_>, engine: &MetricsEngine) -> Result<()> {
    const TITLE: &str = "Views vs Engagement";
    let points: Vec<(f64, f64)> = engine
        .posts()
        .iter()
        .map(|p| (p.views as f64, p.interactions() as f64))
        .collect();
    if points.is_empty() {
        return no_data(area, TITLE);
    }

    let x_max = axis_max(points.iter().map(|(x, _)| *x).fold(0.0, f64::max));
    let y_max = axis_max(points.iter().map(|(_, y)| *y).fold(0.0, f64::max));

    let mut chart = ChartBuilder::on(area)
        .caption(TITLE, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..x_max, 0f64..y_max)?;

    chart
        .configure_mesh()
        .x_desc("Views")
        .y_desc("Comments + Likes")
        .label_style(LABEL_FONT)
        .draw()?;

    chart.draw_series(
        points
            .into_iter()
            .map(|p| Circle::new(p, 4, SCATTER_COLOR.mix(0.6).filled())),
    )?;
    Ok(())
}

fn seo_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let opt = &s.seo.content_optimization;
    let bars: Vec<Bar> = [
        ("Optimal Titles", s.seo.title_analysis.optimal_percentage),
        ("Posts with Images", opt.posts_with_images_percentage),
        ("Posts with Tags", opt.posts_with_tags_percentage),
    ]
    .into_iter()
    .map(|(label, pct)| Bar::new(label, pct, seo_color(pct)))
    .collect();
    vertical_bars(
        area,
        "SEO Optimization Status",
        "Percentage (%)",
        &bars,
        Some(100.0),
        true,
    )
}

fn comments_timeline_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let per_day = &s.engagement.comment_stats.comments_per_day;
    let skip = per_day.len().saturating_sub(COMMENT_TIMELINE_DAYS);
    let points: Vec<(String, f64)> = per_day
        .iter()
        .skip(skip)
        .map(|(day, count)| (day.clone(), *count as f64))
        .collect();
    line_chart(
        area,
        "Comments Timeline (Last 30 Days)",
        "Comments",
        &points,
        COMMENTS_COLOR,
    )
}

fn weekday_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    let bars: Vec<Bar> = s
        .temporal
        .posts_by_weekday
        .iter()
        .map(|d| Bar::new(d.weekday.clone(), d.posts as f64, WEEKDAY_COLOR))
        .collect();
    vertical_bars(
        area,
        "Posts by Day of Week",
        "Number of Posts",
        &bars,
        None,
        false,
    )
}

/// Light yellow to dark red, `t` in [0, 1]
fn heat_color(t: f64) -> RGBColor {
    let t = t.clamp(0.0, 1.0);
    let (from, to) = ((255.0, 255.0, 204.0), (189.0, 0.0, 38.0));
    let mix = |a: f64, b: f64| (a + (b - a) * t).round() as u8;
    RGBColor(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

fn heatmap_panel(area: &Panel<'_>, s: &MetricsSnapshot) -> Result<()> {
    const TITLE: &str = "Category Performance Heatmap";
    if s.categories.is_empty() {
        return no_data(area, TITLE);
    }

    let columns: Vec<String> = ["Views", "Comments", "Likes"]
        .iter()
        .map(|c| c.to_string())
        .collect();
    let n = s.categories.len();
    let values: Vec<[f64; 3]> = s
        .categories
        .iter()
        .map(|c| [c.average_views, c.average_comments, c.average_likes])
        .collect();
    // Each column is scaled on its own so small counts still show contrast
    let column_max: Vec<f64> = (0..columns.len())
        .map(|col| values.iter().map(|r| r[col]).fold(0.0, f64::max))
        .collect();
    // First category on top
    let labels: Vec<String> = s
        .categories
        .iter()
        .rev()
        .map(|c| shorten(&c.category, CATEGORY_LABEL_CHARS).into_owned())
        .collect();

    let mut chart = ChartBuilder::on(area)
        .caption(TITLE, CAPTION_FONT)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(120)
        .build_cartesian_2d((0..columns.len()).into_segmented(), (0..n).into_segmented())?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_labels(columns.len())
        .y_labels(n)
        .x_label_formatter(&|v| segment_label(v, &columns))
        .y_label_formatter(&|v| segment_label(v, &labels))
        .label_style(LABEL_FONT)
        .draw()?;

    let cells: Vec<(usize, usize, f64, f64)> = values
        .iter()
        .enumerate()
        .flat_map(|(i, row)| {
            let column_max = &column_max;
            row.iter().enumerate().map(move |(col, value)| {
                let t = if column_max[col] > 0.0 {
                    value / column_max[col]
                } else {
                    0.0
                };
                (col, n - 1 - i, *value, t)
            })
        })
        .collect();

    chart.draw_series(cells.iter().map(|&(col, row, _, t)| {
        Rectangle::new(
            [
                (SegmentValue::Exact(col), SegmentValue::Exact(row)),
                (SegmentValue::Exact(col + 1), SegmentValue::Exact(row + 1)),
            ],
            heat_color(t).filled(),
        )
    }))?;
    chart.draw_series(cells.iter().map(|&(col, row, value, t)| {
        let fill = if t > 0.6 { WHITE } else { BLACK };
        Text::new(
            format_value(value),
            (SegmentValue::CenterOf(col), SegmentValue::CenterOf(row)),
            LABEL_FONT
                .into_font()
                .color(&fill)
                .pos(Pos::new(HPos::Center, VPos::Center)),
        )
    }))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rgb(color: RGBColor) -> (u8, u8, u8) {
        (color.0, color.1, color.2)
    }

    #[test]
    fn test_histogram_bins() {
        let bins = histogram(&[0, 10, 20, 100], HISTOGRAM_BINS);
        assert_eq!(bins.len(), 10);
        assert_eq!(bins[0], (0.0, 1));
        assert_eq!(bins[1], (10.0, 1));
        assert_eq!(bins[2], (20.0, 1));
        assert_eq!(bins[5], (50.0, 0));
        // Max lands in the last bin
        assert_eq!(bins[9], (90.0, 1));
        assert_eq!(bins.iter().map(|(_, c)| c).sum::<usize>(), 4);
    }

    #[test]
    fn test_histogram_single_value() {
        let bins = histogram(&[300, 300], 10);
        assert_eq!(bins[0].1, 2);
        assert!(histogram(&[], 10).is_empty());
    }

    #[test]
    fn test_seo_color_thresholds() {
        assert_eq!(rgb(seo_color(80.0)), rgb(SEO_GOOD));
        assert_eq!(rgb(seo_color(79.9)), rgb(SEO_FAIR));
        assert_eq!(rgb(seo_color(50.0)), rgb(SEO_FAIR));
        assert_eq!(rgb(seo_color(49.9)), rgb(SEO_POOR));
    }

    #[test]
    fn test_heat_color_endpoints() {
        assert_eq!(rgb(heat_color(0.0)), (255, 255, 204));
        assert_eq!(rgb(heat_color(1.0)), (189, 0, 38));
        assert_eq!(rgb(heat_color(7.0)), (189, 0, 38));
    }

    #[test]
    fn test_shorten_and_format_value() {
        assert_eq!(shorten("short", 20), "short");
        assert_eq!(
            shorten("A rather long post title here", 20),
            "A rather long post t..."
        );
        assert_eq!(format_value(42.0), "42");
        assert_eq!(format_value(12.345), "12.3");
    }

    #[test]
    fn test_segment_label() {
        let labels = vec!["Mon".to_string(), "Tue".to_string()];
        assert_eq!(segment_label(&SegmentValue::CenterOf(1), &labels), "Tue");
        assert_eq!(segment_label(&SegmentValue::Exact(5), &labels), "");
        assert_eq!(segment_label(&SegmentValue::Last, &labels), "");
    }

    #[test]
    fn test_layout_has_eleven_panels() {
        let mut out = String::new();
        let root = SVGBackend::with_string(&mut out, DASHBOARD_SIZE).into_drawing_area();
        let panels = layout(&root).unwrap();

        assert_eq!(panels.len(), 11);
        let (cell_width, _) = panels[0].dim_in_pixel();
        let (heatmap_width, _) = panels[10].dim_in_pixel();
        assert_eq!(cell_width, DASHBOARD_SIZE.0 / COLUMNS as u32);
        assert_eq!(heatmap_width, DASHBOARD_SIZE.0 / 2);
    }
}
