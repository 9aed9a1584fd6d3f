//! The document model behind one editor tab.
//!
//! A [`Document`] owns the text snapshot the core crates analyze, the cursor
//! offset, the modified flag, and the interactive search session. The GUI
//! widget pushes content changes in with [`set_text`](Document::set_text)
//! and pulls statistics, highlight spans, and replacement results back out.
//!
//! Undo/redo is the host widget's job; the document never keeps history.
//! What it does guarantee is span hygiene: every text mutation discards the
//! search session's match set and re-clamps the cursor, so stale spans are
//! never applied to new content.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use plume_analysis::TextStatistics;
use plume_search::{
    find_from_cursor, replace_all, replace_span, Direction, MatchSpan, SearchOptions,
    SearchSession, SearchState,
};
use plume_spell::{MisspelledWord, SpellChecker};

/// One open document: content, cursor, file binding, and search state.
#[derive(Debug, Clone, Default)]
pub struct Document {
    text: String,
    /// Char offset into `text`, clamped to `[0, len]` on every mutation.
    cursor: usize,
    path: Option<PathBuf>,
    modified: bool,
    search: SearchSession,
    /// The span selected by the last single-shot find, for replace-current.
    selection: Option<MatchSpan>,
}

impl Document {
    /// Creates an empty, unsaved document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an unsaved document with initial content.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Opens a file as a new document.
    pub fn open(path: impl Into<PathBuf>) -> io::Result<Self> {
        let path = path.into();
        let text = fs::read_to_string(&path)?;
        Ok(Self {
            text,
            path: Some(path),
            ..Self::default()
        })
    }

    /// Saves to the bound file path.
    ///
    /// Uses atomic write (write to temp file, then rename) to prevent
    /// corruption. Fails if the document was never saved-as.
    pub fn save(&mut self) -> io::Result<()> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "document has no file path"))?;
        self.write_to(&path)?;
        self.modified = false;
        Ok(())
    }

    /// Saves to a new path and binds the document to it.
    pub fn save_as(&mut self, path: impl Into<PathBuf>) -> io::Result<()> {
        let path = path.into();
        self.write_to(&path)?;
        self.path = Some(path);
        self.modified = false;
        Ok(())
    }

    fn write_to(&self, path: &Path) -> io::Result<()> {
        let temp_path = path.with_extension("plume.tmp");
        fs::write(&temp_path, &self.text)?;
        fs::rename(&temp_path, path)?;
        Ok(())
    }

    // =========================================================================
    // Content and cursor
    // =========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replaces the whole content (the widget pushed an edit through).
    ///
    /// Marks the document modified, clamps the cursor, and discards any
    /// active search matches.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.modified = true;
        self.after_mutation();
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Moves the cursor, clamping to the buffer length.
    pub fn set_cursor(&mut self, offset: usize) {
        self.cursor = offset.min(self.char_len());
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn is_modified(&self) -> bool {
        self.modified
    }

    /// Display name for the tab: file name, or "Untitled" before save-as.
    pub fn display_name(&self) -> String {
        self.path
            .as_deref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Cursor re-clamp plus search invalidation, after every text mutation.
    fn after_mutation(&mut self) {
        self.cursor = self.cursor.min(self.char_len());
        self.search.invalidate();
        self.selection = None;
    }

    // =========================================================================
    // Statistics and spell checking
    // =========================================================================

    /// Status-bar statistics at the current cursor.
    pub fn statistics(&self, include_whitespace: bool) -> TextStatistics {
        plume_analysis::statistics(&self.text, self.cursor, include_whitespace)
    }

    /// Misspelled-word spans for squiggle rendering.
    ///
    /// The checker is passed in rather than owned: one dictionary serves
    /// every open tab.
    pub fn misspelled_words(&self, checker: &SpellChecker) -> Vec<MisspelledWord> {
        checker.misspelled_words(&self.text)
    }

    // =========================================================================
    // Highlight-all search
    // =========================================================================

    /// Runs a highlight-all search over the current content.
    pub fn highlight_all(&mut self, term: &str, options: SearchOptions) -> SearchState {
        self.search.search(&self.text, term, options)
    }

    /// The interactive search session, for match counts and highlight spans.
    pub fn search(&self) -> &SearchSession {
        &self.search
    }

    /// Cycles to the next highlighted match and moves the cursor onto it.
    pub fn next_match(&mut self) -> Option<MatchSpan> {
        let span = self.search.advance()?;
        self.cursor = span.end;
        Some(span)
    }

    /// Cycles to the previous highlighted match and moves the cursor onto it.
    pub fn previous_match(&mut self) -> Option<MatchSpan> {
        let span = self.search.retreat()?;
        self.cursor = span.end;
        Some(span)
    }

    /// Closes the find strip: matches and selection are discarded.
    pub fn dismiss_search(&mut self) {
        self.search.dismiss();
        self.selection = None;
    }

    // =========================================================================
    // Single-shot find and replace
    // =========================================================================

    /// Finds the next occurrence relative to the cursor and selects it.
    ///
    /// Direction and wraparound come from `options`. On a hit the cursor
    /// moves past the match (forward) or to its start (backward), so
    /// repeated calls walk the buffer.
    pub fn find_next(&mut self, term: &str, options: &SearchOptions) -> Option<MatchSpan> {
        let span = find_from_cursor(&self.text, term, self.cursor, options)?;
        self.cursor = match options.direction {
            Direction::Forward => span.end,
            Direction::Backward => span.start,
        };
        self.selection = Some(span);
        Some(span)
    }

    /// The span selected by the last single-shot find, if any.
    pub fn selection(&self) -> Option<MatchSpan> {
        self.selection
    }

    /// Replaces the selected match, then advances to the next one.
    ///
    /// The replacement only proceeds when the selected text still equals the
    /// search term (folded per `options`); on mismatch it is a silent no-op.
    /// Either way the document advances to the next match, mirroring a
    /// Replace button that always moves on. Returns true when a substitution
    /// was made.
    pub fn replace_current(
        &mut self,
        term: &str,
        replacement: &str,
        options: &SearchOptions,
    ) -> bool {
        let replaced = match self.selection {
            Some(span) if self.span_text_equals(span, term, options.case_sensitive) => {
                self.text = replace_span(&self.text, span, replacement);
                self.modified = true;
                self.after_mutation();
                self.cursor = (span.start + replacement.chars().count()).min(self.char_len());
                true
            }
            _ => false,
        };

        self.find_next(term, options);
        replaced
    }

    /// Replaces every occurrence in one pass and returns the count.
    ///
    /// On a non-zero count the content is swapped for the engine's result,
    /// the document is marked modified, and any active search is discarded.
    pub fn replace_all(&mut self, term: &str, replacement: &str, options: &SearchOptions) -> usize {
        let (new_text, count) = replace_all(&self.text, term, replacement, options);
        if count > 0 {
            self.text = new_text;
            self.modified = true;
            self.after_mutation();
        }
        count
    }

    fn span_text_equals(&self, span: MatchSpan, term: &str, case_sensitive: bool) -> bool {
        let selected: String = self
            .text
            .chars()
            .skip(span.start)
            .take(span.len())
            .collect();
        if case_sensitive {
            selected == term
        } else {
            selected.to_lowercase() == term.to_lowercase()
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
