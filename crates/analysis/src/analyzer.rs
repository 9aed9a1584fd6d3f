//! Statistics over an immutable text snapshot.
//!
//! All offsets are char offsets. The functions here never allocate more than
//! a single pass over the snapshot requires, and never fail: bad offsets are
//! clamped, empty input produces the empty-document answers.

use unicode_segmentation::UnicodeSegmentation;

use crate::types::{LineColumn, TextStatistics};

/// Counts whitespace-separated words.
///
/// Runs of whitespace delimit words; leading/trailing whitespace and runs of
/// multiple spaces do not produce empty words. An empty buffer has 0 words.
pub fn count_words(buffer: &str) -> usize {
    buffer.split_whitespace().count()
}

/// Counts characters (Unicode scalar values).
///
/// With `include_whitespace` false, every character classified as whitespace
/// (space, tab, newline, carriage return, ...) is excluded from the count.
pub fn count_characters(buffer: &str, include_whitespace: bool) -> usize {
    if include_whitespace {
        buffer.chars().count()
    } else {
        buffer.chars().filter(|c| !c.is_whitespace()).count()
    }
}

/// Counts user-perceived characters (grapheme clusters).
///
/// A ZWJ emoji sequence or a combining-accent sequence counts as one. This is
/// what a human means by "characters" when the text is not plain ASCII.
pub fn count_graphemes(buffer: &str) -> usize {
    buffer.graphemes(true).count()
}

/// Counts lines. An empty buffer is one empty line, never zero.
///
/// A trailing `'\n'` starts a new (empty) final line, so `"a\n"` has 2 lines.
pub fn count_lines(buffer: &str) -> usize {
    buffer.chars().filter(|&c| c == '\n').count() + 1
}

/// Maps a char offset to a 1-indexed (line, column) position.
///
/// The offset is clamped to `[0, len]`. The line is the number of `'\n'`
/// characters before the offset plus one; the column is the number of
/// characters since the last preceding `'\n'` plus one. An empty buffer
/// yields the origin (1, 1).
pub fn line_col_at(buffer: &str, offset: usize) -> LineColumn {
    if buffer.is_empty() {
        return LineColumn::default();
    }

    let len = buffer.chars().count();
    let offset = offset.min(len);

    let mut line = 1;
    let mut last_newline = None;
    for (idx, ch) in buffer.chars().take(offset).enumerate() {
        if ch == '\n' {
            line += 1;
            last_newline = Some(idx);
        }
    }

    let col = match last_newline {
        Some(idx) => offset - idx,
        None => offset + 1,
    };

    LineColumn::new(line, col)
}

/// Computes all status-bar statistics in one call.
///
/// Composition of [`count_words`], [`count_characters`], [`count_lines`] and
/// [`line_col_at`]; the cursor offset is clamped like everywhere else.
pub fn statistics(buffer: &str, cursor: usize, include_whitespace: bool) -> TextStatistics {
    TextStatistics {
        words: count_words(buffer),
        characters: count_characters(buffer, include_whitespace),
        total_lines: count_lines(buffer),
        position: line_col_at(buffer, cursor),
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Word counting ====================

    #[test]
    fn count_words_empty() {
        assert_eq!(count_words(""), 0);
    }

    #[test]
    fn count_words_single() {
        assert_eq!(count_words("hello"), 1);
    }

    #[test]
    fn count_words_collapses_whitespace_runs() {
        assert_eq!(count_words("  one   two\t\tthree \n four  "), 4);
    }

    #[test]
    fn count_words_whitespace_only() {
        assert_eq!(count_words("   \n\t  "), 0);
    }

    // ==================== Character counting ====================

    #[test]
    fn count_characters_with_whitespace() {
        assert_eq!(count_characters("a b\nc", true), 5);
    }

    #[test]
    fn count_characters_without_whitespace() {
        assert_eq!(count_characters("a b\nc\t\r", false), 3);
    }

    #[test]
    fn count_characters_is_char_count_not_byte_count() {
        // "héllo" is 6 bytes but 5 chars
        assert_eq!(count_characters("héllo", true), 5);
    }

    #[test]
    fn with_whitespace_never_smaller_than_without() {
        for text in ["", "a", " ", "a b c", "\n\n\n", "héllo wörld"] {
            assert!(count_characters(text, true) >= count_characters(text, false));
        }
    }

    #[test]
    fn count_graphemes_combining_sequence() {
        // e + combining acute is 2 chars but 1 grapheme
        let text = "e\u{301}";
        assert_eq!(count_characters(text, true), 2);
        assert_eq!(count_graphemes(text), 1);
    }

    // ==================== Line counting ====================

    #[test]
    fn count_lines_empty_is_one() {
        assert_eq!(count_lines(""), 1);
    }

    #[test]
    fn count_lines_no_newline() {
        assert_eq!(count_lines("just one line"), 1);
    }

    #[test]
    fn count_lines_counts_trailing_partial_line() {
        assert_eq!(count_lines("a\nb\nc"), 3);
        assert_eq!(count_lines("a\nb\n"), 3);
    }

    #[test]
    fn count_lines_at_least_one() {
        for text in ["", "x", "\n", "a\nb"] {
            assert!(count_lines(text) >= 1);
        }
    }

    // ==================== Line/column lookup ====================

    #[test]
    fn line_col_empty_buffer_is_origin() {
        assert_eq!(line_col_at("", 0), LineColumn::new(1, 1));
        assert_eq!(line_col_at("", 99), LineColumn::new(1, 1));
    }

    #[test]
    fn line_col_start_of_buffer() {
        assert_eq!(line_col_at("hello", 0), LineColumn::new(1, 1));
    }

    #[test]
    fn line_col_within_first_line() {
        assert_eq!(line_col_at("hello", 3), LineColumn::new(1, 4));
    }

    #[test]
    fn line_col_second_line() {
        assert_eq!(line_col_at("line1\nline2\nline3", 7), LineColumn::new(2, 2));
    }

    #[test]
    fn line_col_just_after_newline() {
        // Offset 6 sits at the start of "line2"
        assert_eq!(line_col_at("line1\nline2", 6), LineColumn::new(2, 1));
    }

    #[test]
    fn line_col_at_newline_itself() {
        // Offset 5 is the '\n'; still on line 1, one past the last char
        assert_eq!(line_col_at("line1\nline2", 5), LineColumn::new(1, 6));
    }

    #[test]
    fn line_col_clamps_past_end() {
        assert_eq!(line_col_at("ab\ncd", 100), LineColumn::new(2, 3));
    }

    #[test]
    fn line_col_line_matches_newline_count() {
        let text = "a\nbb\nccc\ndddd";
        for offset in 0..=text.chars().count() {
            let newlines = text.chars().take(offset).filter(|&c| c == '\n').count();
            let pos = line_col_at(text, offset);
            assert_eq!(pos.line, newlines + 1);
            assert!(pos.col >= 1);
        }
    }

    #[test]
    fn line_col_uses_char_offsets() {
        // "né\nx": offset 3 is the start of the second line
        assert_eq!(line_col_at("né\nx", 3), LineColumn::new(2, 1));
    }

    // ==================== Combined statistics ====================

    #[test]
    fn statistics_empty_buffer() {
        let stats = statistics("", 0, true);
        assert_eq!(stats.words, 0);
        assert_eq!(stats.characters, 0);
        assert_eq!(stats.total_lines, 1);
        assert_eq!(stats.position, LineColumn::new(1, 1));
    }

    #[test]
    fn statistics_multiline() {
        let stats = statistics("hello world\nsecond line", 13, true);
        assert_eq!(stats.words, 4);
        assert_eq!(stats.characters, 23);
        assert_eq!(stats.total_lines, 2);
        assert_eq!(stats.position, LineColumn::new(2, 2));
    }

    #[test]
    fn statistics_without_whitespace() {
        let stats = statistics("a b c", 0, false);
        assert_eq!(stats.characters, 3);
        assert_eq!(stats.words, 3);
    }
}
