//! The spell checker: dictionary lookup, suggestions, and buffer scanning.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;

/// A word the checker flagged, with its half-open char-offset span.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MisspelledWord {
    /// The word as it appears in the buffer.
    pub word: String,
    /// Char offset of the first letter.
    pub start: usize,
    /// Char offset one past the last letter.
    pub end: usize,
}

/// Dictionary-backed spell checker.
///
/// The dictionary is a lowercased word set; lookups fold the queried word to
/// lowercase so `"Hello"` and `"HELLO"` check against the same entry.
#[derive(Debug, Clone)]
pub struct SpellChecker {
    words: HashSet<String>,
    enabled: bool,
}

impl SpellChecker {
    /// Loads a dictionary from a word-per-line UTF-8 file.
    ///
    /// Blank lines are skipped; entries are lowercased on the way in.
    pub fn from_path(path: &Path) -> io::Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(Self::from_words(contents.lines()))
    }

    /// Builds a checker from an iterator of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: HashSet<String> = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self {
            words,
            enabled: true,
        }
    }

    /// A checker with no dictionary that approves every word.
    ///
    /// Used when the dictionary cannot be loaded; the editor keeps working
    /// without squiggles instead of failing to start.
    pub fn disabled() -> Self {
        Self {
            words: HashSet::new(),
            enabled: false,
        }
    }

    /// Enables or disables checking. A checker built with [`disabled`]
    /// has no dictionary and stays effectively off either way.
    ///
    /// [`disabled`]: SpellChecker::disabled
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled && !self.words.is_empty();
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Checks a single word.
    ///
    /// Returns true when the checker is disabled, the word is empty, the
    /// word contains any non-alphabetic character, or its lowercase form is
    /// in the dictionary. Only pure alphabetic words can be misspelled.
    pub fn check_word(&self, word: &str) -> bool {
        if !self.enabled || word.is_empty() {
            return true;
        }
        if !word.chars().all(|c| c.is_alphabetic()) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    /// Suggests corrections for a word, best-effort.
    ///
    /// Candidates are every dictionary word one edit away (delete, adjacent
    /// transpose, replace, insert over a-z), sorted, truncated to
    /// `max_suggestions`. A known or empty word gets no suggestions, and a
    /// disabled checker suggests nothing.
    pub fn suggestions(&self, word: &str, max_suggestions: usize) -> Vec<String> {
        if !self.enabled || word.is_empty() || self.check_word(word) {
            return Vec::new();
        }

        let word = word.to_lowercase();
        let mut candidates: Vec<String> = edits1(&word)
            .into_iter()
            .filter(|w| self.words.contains(w))
            .collect();
        candidates.sort();
        candidates.truncate(max_suggestions);
        candidates
    }

    /// Finds every misspelled word in a buffer.
    ///
    /// Words are maximal ASCII-alphabetic runs; a run glued to a digit or
    /// underscore (as in `base64` or `foo_bar`) is not a word and is never
    /// flagged. Spans are char offsets, in buffer order.
    pub fn misspelled_words(&self, buffer: &str) -> Vec<MisspelledWord> {
        if !self.enabled || buffer.is_empty() {
            return Vec::new();
        }

        let chars: Vec<char> = buffer.chars().collect();
        let mut result = Vec::new();
        let mut idx = 0;
        while idx < chars.len() {
            if !chars[idx].is_ascii_alphabetic() {
                idx += 1;
                continue;
            }

            let start = idx;
            while idx < chars.len() && chars[idx].is_ascii_alphabetic() {
                idx += 1;
            }
            let end = idx;

            // Runs flanked by other word characters (digits, underscore)
            // are fragments of identifiers, not words
            let left_ok = start == 0 || !is_word_char(chars[start - 1]);
            let right_ok = end == chars.len() || !is_word_char(chars[end]);
            if !left_ok || !right_ok {
                continue;
            }

            let word: String = chars[start..end].iter().collect();
            if !self.check_word(&word) {
                result.push(MisspelledWord { word, start, end });
            }
        }

        result
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Every string one edit away from `word` (lowercase ASCII assumed).
fn edits1(word: &str) -> HashSet<String> {
    let chars: Vec<char> = word.chars().collect();
    let mut edits = HashSet::new();

    // Deletes
    for i in 0..chars.len() {
        let mut w: String = chars[..i].iter().collect();
        w.extend(&chars[i + 1..]);
        edits.insert(w);
    }

    // Adjacent transposes
    for i in 0..chars.len().saturating_sub(1) {
        let mut swapped = chars.clone();
        swapped.swap(i, i + 1);
        edits.insert(swapped.into_iter().collect());
    }

    // Replaces
    for i in 0..chars.len() {
        for c in 'a'..='z' {
            if chars[i] != c {
                let mut replaced = chars.clone();
                replaced[i] = c;
                edits.insert(replaced.into_iter().collect());
            }
        }
    }

    // Inserts
    for i in 0..=chars.len() {
        for c in 'a'..='z' {
            let mut w: String = chars[..i].iter().collect();
            w.push(c);
            w.extend(&chars[i..]);
            edits.insert(w);
        }
    }

    edits
}

// =============================================================================
// Tests
// =============================================================================
