//! The scanning engine: literal substring search and scoped replacement.
//!
//! Matching is a left-to-right scan over the chars of the snapshot. There is
//! no pattern language; the term is compared literally, optionally
//! case-folded, optionally constrained to word boundaries. Accepted matches
//! never overlap: the scan resumes at the end of each accepted match, so
//! `"abcabc"` occurs once in `"abcabcabc"`, not twice.
//!
//! Case folding is per-character simple folding (`char::to_lowercase`,
//! compared expansion-to-expansion). Length-changing folds therefore only
//! match their own expansion; that is the same trade every literal
//! find-in-file makes.

use crate::types::{Direction, MatchSet, MatchSpan, SearchOptions};

/// True for characters that form words: Unicode alphanumerics and `_`.
///
/// This is the word-boundary rule for `whole_word` matching. Digits count as
/// word characters, so `"fox"` does not whole-word match inside `"fox9"`.
fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Compares two chars, case-folded unless the search is case-sensitive.
fn chars_match(a: char, b: char, case_sensitive: bool) -> bool {
    if case_sensitive {
        a == b
    } else {
        a == b || a.to_lowercase().eq(b.to_lowercase())
    }
}

/// True when `term` occurs at char offset `start` of `chars`.
fn matches_at(chars: &[char], start: usize, term: &[char], case_sensitive: bool) -> bool {
    chars[start..start + term.len()]
        .iter()
        .zip(term)
        .all(|(&a, &b)| chars_match(a, b, case_sensitive))
}

/// True when `[start, end)` sits on word boundaries on both sides.
fn on_word_boundary(chars: &[char], start: usize, end: usize) -> bool {
    let left_ok = start == 0 || !is_word_char(chars[start - 1]);
    let right_ok = end == chars.len() || !is_word_char(chars[end]);
    left_ok && right_ok
}

/// True when the candidate at `start` is an acceptable match.
fn accepts(chars: &[char], start: usize, term: &[char], options: &SearchOptions) -> bool {
    matches_at(chars, start, term, options.case_sensitive)
        && (!options.whole_word || on_word_boundary(chars, start, start + term.len()))
}

/// Finds every non-overlapping occurrence of `term` in `buffer`.
///
/// Returns an empty [`MatchSet`] for an empty term; an empty query is "no
/// matches", never an error. Spans come back sorted ascending by start, with
/// the current match at the first hit.
///
/// `options.direction` and `options.wrap_around` are irrelevant here: the
/// whole buffer is scanned once, left to right.
pub fn find_all(buffer: &str, term: &str, options: &SearchOptions) -> MatchSet {
    if term.is_empty() {
        return MatchSet::empty();
    }

    let chars: Vec<char> = buffer.chars().collect();
    let term_chars: Vec<char> = term.chars().collect();
    if term_chars.len() > chars.len() {
        return MatchSet::empty();
    }

    let mut spans = Vec::new();
    let mut pos = 0;
    while pos + term_chars.len() <= chars.len() {
        if accepts(&chars, pos, &term_chars, options) {
            spans.push(MatchSpan::new(pos, pos + term_chars.len()));
            // Resume at the end of the match so occurrences never overlap
            pos += term_chars.len();
        } else {
            pos += 1;
        }
    }

    MatchSet::from_spans(spans)
}

/// Single-shot search relative to a cursor offset.
///
/// Forward: the first acceptable match starting at or after `cursor`.
/// Backward: the last acceptable match ending at or before `cursor`.
/// On a miss with `options.wrap_around` set, retries once from the opposite
/// buffer boundary (the whole buffer is eligible on the retry). Returns
/// `None` when the term is empty or genuinely absent.
///
/// This models interactive find-next/find-previous, as distinct from the
/// highlight-all scan in [`find_all`].
pub fn find_from_cursor(
    buffer: &str,
    term: &str,
    cursor: usize,
    options: &SearchOptions,
) -> Option<MatchSpan> {
    if term.is_empty() {
        return None;
    }

    let chars: Vec<char> = buffer.chars().collect();
    let term_chars: Vec<char> = term.chars().collect();
    if term_chars.len() > chars.len() {
        return None;
    }

    let cursor = cursor.min(chars.len());
    let last_start = chars.len() - term_chars.len();

    match options.direction {
        Direction::Forward => {
            let hit = (cursor..=last_start).find(|&s| accepts(&chars, s, &term_chars, options));
            match hit {
                Some(s) => Some(MatchSpan::new(s, s + term_chars.len())),
                None if options.wrap_around => (0..=last_start)
                    .find(|&s| accepts(&chars, s, &term_chars, options))
                    .map(|s| MatchSpan::new(s, s + term_chars.len())),
                None => None,
            }
        }
        Direction::Backward => {
            // A backward hit must end at or before the cursor
            let before = cursor
                .checked_sub(term_chars.len())
                .map(|limit| limit.min(last_start));
            let hit = before
                .and_then(|limit| (0..=limit).rev().find(|&s| accepts(&chars, s, &term_chars, options)));
            match hit {
                Some(s) => Some(MatchSpan::new(s, s + term_chars.len())),
                None if options.wrap_around => (0..=last_start)
                    .rev()
                    .find(|&s| accepts(&chars, s, &term_chars, options))
                    .map(|s| MatchSpan::new(s, s + term_chars.len())),
                None => None,
            }
        }
    }
}

/// Splices `replacement` over `span` and returns the new buffer.
///
/// The span's current text is not re-validated against any search term;
/// deciding whether the replacement should still happen is the caller's
/// policy (see the document layer). Offsets are char offsets and are clamped
/// to the buffer length.
pub fn replace_span(buffer: &str, span: MatchSpan, replacement: &str) -> String {
    let len = buffer.chars().count();
    let start = span.start.min(len);
    let end = span.end.clamp(start, len);

    let mut out = String::with_capacity(buffer.len() + replacement.len());
    out.extend(buffer.chars().take(start));
    out.push_str(replacement);
    out.extend(buffer.chars().skip(end));
    out
}

/// Replaces every non-overlapping occurrence of `term` in a single pass.
///
/// Matches are located against the *original* buffer, then stitched together
/// with the replacement text. Replacement text is never re-scanned, so a
/// replacement containing the term cannot cascade into further substitutions.
/// Returns the new buffer and the number of substitutions made.
pub fn replace_all(
    buffer: &str,
    term: &str,
    replacement: &str,
    options: &SearchOptions,
) -> (String, usize) {
    let matches = find_all(buffer, term, options);
    if matches.is_empty() {
        return (buffer.to_string(), 0);
    }

    let chars: Vec<char> = buffer.chars().collect();
    let mut out = String::with_capacity(buffer.len());
    let mut last_end = 0;
    for span in matches.spans() {
        out.extend(chars[last_end..span.start].iter());
        out.push_str(replacement);
        last_end = span.end;
    }
    out.extend(chars[last_end..].iter());

    (out, matches.len())
}

// =============================================================================
// Tests
// =============================================================================
