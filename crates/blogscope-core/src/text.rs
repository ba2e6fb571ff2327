//! Text helpers shared by content metrics and the word cloud

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

static MARKUP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").expect("valid regex"));

/// Remove angle-bracket tags from markup, leaving the text between them
pub fn strip_markup(content: &str) -> Cow<'_, str> {
    MARKUP_REGEX.replace_all(content, "")
}

/// Whitespace-separated words after stripping markup
pub fn word_count(content: &str) -> usize {
    strip_markup(content).split_whitespace().count()
}

/// Whole minutes to read `words`, never less than one
pub fn reading_time(words: usize, words_per_minute: usize) -> usize {
    if words_per_minute == 0 {
        return 1;
    }
    (words / words_per_minute).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<p>Hello <strong>world</strong></p>"),
            "Hello world"
        );
        assert_eq!(strip_markup("no tags here"), "no tags here");
    }

    #[test]
    fn test_word_count_ignores_tags() {
        assert_eq!(word_count("<h1>Title</h1>\n<p>one two  three</p>"), 4);
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("<br/>"), 0);
    }

    #[test]
    fn test_tags_glue_adjacent_words() {
        // Tags are removed, not replaced with spaces
        assert_eq!(word_count("one<br>two"), 1);
    }

    #[test]
    fn test_reading_time_floor_and_minimum() {
        assert_eq!(reading_time(0, 200), 1);
        assert_eq!(reading_time(199, 200), 1);
        assert_eq!(reading_time(399, 200), 1);
        assert_eq!(reading_time(400, 200), 2);
        assert_eq!(reading_time(1000, 200), 5);
    }
}
