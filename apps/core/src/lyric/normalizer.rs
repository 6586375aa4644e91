//! Text Normalizer.
//!
//! Canonicalizes raw lyric text and derives the basic word, line and stanza
//! counts shown while drafting. Every function here is total: any string,
//! including an empty one, is valid input.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

// NOTE: expect() is acceptable here, the patterns are literals checked by the tests below.
static LINE_ENDING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\r\n?").expect("Invalid regex: line ending pattern"));

/// Whitespace as the web client sees it. Unlike Unicode White_Space this
/// includes U+FEFF and excludes U+0085 and U+180E.
const SPACE_CLASS: &str =
    r"[\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";

static WHITESPACE_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("{SPACE_CLASS}+")).expect("Invalid regex: whitespace run pattern")
});

static STANZA_BREAK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"\n{SPACE_CLASS}*\n")).expect("Invalid regex: stanza break pattern")
});

/// Same set as `SPACE_CLASS`, for char-level trimming and splitting
pub fn is_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0B}'
            | '\u{0C}'
            | '\r'
            | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

pub fn trim_space(text: &str) -> &str {
    text.trim_matches(is_space)
}

/// Non-empty whitespace-delimited tokens
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(is_space).filter(|word| !word.is_empty())
}

/// Word, line and stanza counts of a normalized text
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextCounts {
    pub words: usize,
    pub lines: usize,
    pub stanzas: usize,
}

impl TextCounts {
    /// Count everything at once. Expects already-normalized text.
    pub fn of(text: &str) -> Self {
        Self {
            words: count_words(text),
            lines: count_lines(text),
            stanzas: count_stanzas(text),
        }
    }
}

/// Canonicalize line endings and intra-line whitespace.
///
/// `\r\n` and lone `\r` become `\n`, whitespace runs inside a line collapse to
/// a single space, trailing whitespace is stripped per line and the whole
/// text is trimmed.
pub fn normalize(raw: &str) -> String {
    let unified = LINE_ENDING.replace_all(raw, "\n");
    let lines: Vec<String> = unified
        .split('\n')
        .map(|line| {
            WHITESPACE_RUN
                .replace_all(line, " ")
                .trim_end_matches(is_space)
                .to_string()
        })
        .collect();
    trim_space(&lines.join("\n")).to_string()
}

/// Number of whitespace-delimited tokens, 0 for blank text
pub fn count_words(text: &str) -> usize {
    split_words(text).count()
}

/// Number of newline-delimited segments, blank ones included. 0 for blank text.
pub fn count_lines(text: &str) -> usize {
    if trim_space(text).is_empty() {
        return 0;
    }
    text.split('\n').count()
}

/// Number of blocks separated by one or more blank lines, 0 for blank text
pub fn count_stanzas(text: &str) -> usize {
    let trimmed = trim_space(text);
    if trimmed.is_empty() {
        return 0;
    }
    STANZA_BREAK.split(trimmed).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_line_endings() {
        assert_eq!(normalize("a\r\nb\rc\nd"), "a\nb\nc\nd");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  one \t  two   \nthree    "), "one two\nthree");
    }

    #[test]
    fn test_normalize_keeps_blank_lines() {
        assert_eq!(normalize("verse\n   \nchorus\n\n\n"), "verse\n\nchorus");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize("  Hold\r\n\r\n the   line \t\n");
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_empty_counts() {
        assert_eq!(TextCounts::of(""), TextCounts::default());
        assert_eq!(count_words("   "), 0);
        assert_eq!(count_lines("  \n "), 0);
        assert_eq!(count_stanzas("\n\n"), 0);
    }

    #[test]
    fn test_stanza_scenario() {
        let text = normalize("line one\n\nline two\nline three");
        assert_eq!(count_stanzas(&text), 2);
        assert_eq!(count_words(&text), 6);
        // The blank separator is a segment of its own.
        assert_eq!(count_lines(&text), 4);
    }

    #[test]
    fn test_multiple_blank_lines_are_one_break() {
        assert_eq!(count_stanzas("a\n\n\n\nb\n\nc"), 3);
    }

    #[test]
    fn test_byte_order_mark_is_whitespace() {
        assert_eq!(normalize("\u{FEFF}light gold sun"), "light gold sun");
        assert_eq!(normalize("a\u{FEFF}\u{FEFF}b"), "a b");
        assert_eq!(count_words("\u{FEFF}one\u{FEFF}two"), 2);
        assert_eq!(count_lines("\u{FEFF}"), 0);
        assert_eq!(count_stanzas("a\n\u{FEFF}\nb"), 2);
    }

    #[test]
    fn test_next_line_is_not_whitespace() {
        assert_eq!(normalize("a\u{85}b"), "a\u{85}b");
        assert_eq!(normalize("\u{85}a"), "\u{85}a");
        assert_eq!(count_words("a\u{85}b"), 1);
        assert_eq!(count_lines("\u{85}"), 1);
    }

    #[test]
    fn test_space_class_matches_char_predicate() {
        for c in ['\u{0B}', '\u{A0}', '\u{2005}', '\u{3000}', '\u{FEFF}', '\u{85}', '\u{180E}', 'x'] {
            let s = c.to_string();
            assert_eq!(WHITESPACE_RUN.is_match(&s), is_space(c), "{:?}", c);
        }
    }
}
