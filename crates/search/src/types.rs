//! Query options and match bookkeeping types.

/// Direction for single-shot cursor-relative search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

/// Options controlling how a search term is matched.
///
/// Passed explicitly to every query; the engine holds no ambient
/// configuration state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    /// When false, matching is case-folded.
    pub case_sensitive: bool,
    /// When true, a match must be flanked by non-word characters or the
    /// buffer boundary on both sides. A word character is a Unicode
    /// alphanumeric or `_`.
    pub whole_word: bool,
    /// When a cursor-relative search hits the buffer boundary without a
    /// match, retry once from the opposite boundary.
    pub wrap_around: bool,
    /// Direction for cursor-relative search. Ignored by `find_all`.
    pub direction: Direction,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            case_sensitive: false,
            whole_word: false,
            wrap_around: true,
            direction: Direction::Forward,
        }
    }
}

/// One search hit: a half-open `[start, end)` char-offset range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "a match span is never empty");
        Self { start, end }
    }

    /// Number of characters covered by the span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Always false: zero-length terms are rejected before a span is built.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// An ordered set of non-overlapping match spans plus a current-match cursor.
///
/// Spans are sorted ascending by start and never overlap; both are upheld by
/// construction in `find_all` (the scan resumes at each accepted match's
/// end). The current index is `None` exactly when the set is empty.
///
/// A `MatchSet` is a snapshot artifact: it is rebuilt wholesale when the term
/// or options change, and must be discarded when the underlying buffer
/// changes. There is no incremental repair of stale spans.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchSet {
    spans: Vec<MatchSpan>,
    current: Option<usize>,
}

impl MatchSet {
    /// An empty set with no current match.
    pub fn empty() -> Self {
        Self {
            spans: Vec::new(),
            current: None,
        }
    }

    /// Builds a set from spans already in buffer order.
    ///
    /// The current match starts at the first span, mirroring a find strip
    /// jumping to the first hit after a search.
    pub(crate) fn from_spans(spans: Vec<MatchSpan>) -> Self {
        let current = if spans.is_empty() { None } else { Some(0) };
        Self { spans, current }
    }

    pub fn len(&self) -> usize {
        self.spans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// All spans in buffer order, for highlight rendering.
    pub fn spans(&self) -> &[MatchSpan] {
        &self.spans
    }

    /// Index of the current match, if the set is non-empty.
    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// The current match span, if the set is non-empty.
    pub fn current_span(&self) -> Option<MatchSpan> {
        self.current.map(|idx| self.spans[idx])
    }

    /// Moves to the next match, wrapping past the last back to the first.
    ///
    /// Returns the new current index, or `None` on an empty set.
    pub fn advance(&mut self) -> Option<usize> {
        let idx = self.current?;
        let next = (idx + 1) % self.spans.len();
        self.current = Some(next);
        Some(next)
    }

    /// Moves to the previous match, wrapping from the first to the last.
    ///
    /// Returns the new current index, or `None` on an empty set.
    pub fn retreat(&mut self) -> Option<usize> {
        let idx = self.current?;
        let prev = if idx == 0 { self.spans.len() - 1 } else { idx - 1 };
        self.current = Some(prev);
        Some(prev)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn set_of(spans: &[(usize, usize)]) -> MatchSet {
        MatchSet::from_spans(spans.iter().map(|&(s, e)| MatchSpan::new(s, e)).collect())
    }

    // ==================== Construction ====================

    #[test]
    fn empty_set_has_no_current() {
        let set = MatchSet::empty();
        assert!(set.is_empty());
        assert_eq!(set.current_index(), None);
        assert_eq!(set.current_span(), None);
    }

    #[test]
    fn non_empty_set_starts_at_first_match() {
        let set = set_of(&[(2, 5), (8, 11)]);
        assert_eq!(set.current_index(), Some(0));
        assert_eq!(set.current_span(), Some(MatchSpan::new(2, 5)));
    }

    // ==================== Cycling ====================

    #[test]
    fn advance_wraps_past_last() {
        let mut set = set_of(&[(0, 1), (2, 3), (4, 5)]);
        assert_eq!(set.advance(), Some(1));
        assert_eq!(set.advance(), Some(2));
        assert_eq!(set.advance(), Some(0));
    }

    #[test]
    fn retreat_wraps_to_last() {
        let mut set = set_of(&[(0, 1), (2, 3), (4, 5)]);
        assert_eq!(set.retreat(), Some(2));
        assert_eq!(set.retreat(), Some(1));
    }

    #[test]
    fn advance_and_retreat_are_noops_on_empty_set() {
        let mut set = MatchSet::empty();
        assert_eq!(set.advance(), None);
        assert_eq!(set.retreat(), None);
    }

    #[test]
    fn single_match_cycles_to_itself() {
        let mut set = set_of(&[(3, 6)]);
        assert_eq!(set.advance(), Some(0));
        assert_eq!(set.retreat(), Some(0));
    }
}
