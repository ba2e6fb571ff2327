//! Word cloud of post titles, content and tags

use std::collections::HashMap;
use std::sync::LazyLock;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use regex::Regex;

use crate::error::Result;
use crate::models::Post;
use crate::text;

/// Words kept in the cloud
pub const MAX_WORDS: usize = 100;
/// Shorter words are dropped
pub const MIN_WORD_LENGTH: usize = 3;

pub const CLOUD_WIDTH: f64 = 800.0;
const TITLE_HEIGHT: f64 = 50.0;
const PADDING: f64 = 16.0;
const MIN_FONT: f64 = 12.0;
const MAX_FONT: f64 = 56.0;
/// Rough glyph width as a fraction of the font size
const GLYPH_RATIO: f64 = 0.6;

const FONT: &str = "sans-serif";
const PALETTE: [RGBColor; 6] = [
    RGBColor(0x44, 0x01, 0x54),
    RGBColor(0x3b, 0x52, 0x8b),
    RGBColor(0x21, 0x91, 0x8c),
    RGBColor(0x5e, 0xc9, 0x62),
    RGBColor(0x2a, 0x78, 0x8e),
    RGBColor(0x7a, 0xd1, 0x51),
];

const STOP_WORDS: &[&str] = &[
    "about", "after", "all", "also", "and", "any", "are", "because", "been", "before", "being",
    "between", "both", "but", "can", "could", "did", "does", "doing", "down", "during", "each",
    "few", "for", "from", "further", "had", "has", "have", "having", "her", "here", "hers",
    "him", "his", "how", "into", "its", "itself", "just", "more", "most", "not", "now", "off",
    "once", "only", "other", "our", "ours", "out", "over", "own", "same", "she", "should",
    "some", "such", "than", "that", "the", "their", "theirs", "them", "then", "there", "these",
    "they", "this", "those", "through", "too", "under", "until", "very", "was", "were", "what",
    "when", "where", "which", "while", "who", "whom", "why", "will", "with", "would", "you",
    "your", "yours",
];

static WORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[\w']+").expect("valid regex"));

/// Most frequent words across every post, most frequent first
///
/// Ties keep the order in which words first appear.
pub fn word_frequencies(posts: &[Post]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for post in posts {
        let body = text::strip_markup(&post.content);
        let tags = post.tags.join(" ");
        let sources = [post.title.as_str(), &*body, tags.as_str()];
        for source in sources {
            let lowered = source.to_lowercase();
            for word in WORD_REGEX.find_iter(&lowered) {
                let word = word.as_str().trim_matches('\'');
                if word.chars().count() < MIN_WORD_LENGTH || STOP_WORDS.contains(&word) {
                    continue;
                }
                match index.get(word) {
                    Some(&slot) => counts[slot].1 += 1,
                    None => {
                        index.insert(word.to_string(), counts.len());
                        counts.push((word.to_string(), 1));
                    }
                }
            }
        }
    }

    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(MAX_WORDS);
    counts
}

/// Render the cloud to an SVG string; words are laid out in rows, largest first
pub fn render(words: &[(String, usize)]) -> Result<String> {
    let max_count = words.first().map(|(_, c)| *c).unwrap_or(1).max(1) as f64;
    let placed = layout(words, max_count);
    let height = placed
        .last()
        .map(|p| p.baseline + PADDING)
        .unwrap_or(TITLE_HEIGHT + PADDING);

    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, (CLOUD_WIDTH as u32, height.ceil() as u32))
            .into_drawing_area();
        root.fill(&WHITE)?;
        root.draw(&Text::new(
            "Blog Content Word Cloud",
            ((CLOUD_WIDTH / 2.0) as i32, 32),
            (FONT, 20.0)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Bottom)),
        ))?;
        for (i, word) in placed.iter().enumerate() {
            let style = (FONT, word.size)
                .into_font()
                .color(&PALETTE[i % PALETTE.len()])
                .pos(Pos::new(HPos::Left, VPos::Bottom));
            root.draw(&Text::new(
                word.text,
                (word.x as i32, word.baseline as i32),
                style,
            ))?;
        }
        root.present()?;
    }
    Ok(out)
}

struct Placed<'a> {
    text: &'a str,
    x: f64,
    baseline: f64,
    size: f64,
}

fn font_size(count: usize, max_count: f64) -> f64 {
    MIN_FONT + (MAX_FONT - MIN_FONT) * (count as f64 / max_count)
}

fn layout(words: &[(String, usize)], max_count: f64) -> Vec<Placed<'_>> {
    let mut placed = Vec::with_capacity(words.len());
    let mut row: Vec<Placed<'_>> = Vec::new();
    let mut x = PADDING;
    let mut top = TITLE_HEIGHT;

    for (word, count) in words {
        let size = font_size(*count, max_count);
        let width = word.chars().count() as f64 * size * GLYPH_RATIO;
        if x + width > CLOUD_WIDTH - PADDING && !row.is_empty() {
            flush_row(&mut row, &mut placed, &mut top);
            x = PADDING;
        }
        row.push(Placed {
            text: word,
            x,
            baseline: 0.0,
            size,
        });
        x += width + size * 0.4;
    }
    if !row.is_empty() {
        flush_row(&mut row, &mut placed, &mut top);
    }
    placed
}

/// Give every word in the row a shared baseline and move below it
fn flush_row<'a>(row: &mut Vec<Placed<'a>>, placed: &mut Vec<Placed<'a>>, top: &mut f64) {
    let tallest = row.iter().map(|p| p.size).fold(0.0, f64::max);
    for mut word in row.drain(..) {
        word.baseline = *top + tallest;
        placed.push(word);
    }
    *top += tallest * 1.2;
}
