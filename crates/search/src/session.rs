//! The interactive search session state machine.
//!
//! A [`SearchSession`] backs one find strip. Entering a term (or toggling an
//! option) rebuilds the match set from scratch; cycling with
//! [`advance`](SearchSession::advance) / [`retreat`](SearchSession::retreat)
//! walks the existing set without re-scanning. Editing the buffer or closing
//! the strip returns the session to `Idle` and drops the set: a span computed
//! against old content is meaningless against new content.

use crate::engine::find_all;
use crate::types::{MatchSet, MatchSpan, SearchOptions};

/// Observable state of an interactive search session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchState {
    /// No active search. The session holds no matches.
    Idle,
    /// A term was searched and found nothing.
    NoMatches,
    /// A term was searched and the session is cycling through its matches.
    HasMatches,
}

/// State for one interactive search-all session.
///
/// The session exclusively owns its [`MatchSet`]; callers read spans for
/// highlighting through [`matches`](SearchSession::matches) but never mutate
/// them. There is exactly one writer (the UI event that triggered the query),
/// so no locking discipline is involved.
#[derive(Debug, Clone)]
pub struct SearchSession {
    term: String,
    options: SearchOptions,
    matches: MatchSet,
    state: SearchState,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchSession {
    /// Creates an idle session.
    pub fn new() -> Self {
        Self {
            term: String::new(),
            options: SearchOptions::default(),
            matches: MatchSet::empty(),
            state: SearchState::Idle,
        }
    }

    /// Runs a fresh search, replacing any previous match set wholesale.
    ///
    /// An empty term leaves the session idle. Returns the new state.
    pub fn search(&mut self, buffer: &str, term: &str, options: SearchOptions) -> SearchState {
        if term.is_empty() {
            self.reset();
            return self.state;
        }

        self.term = term.to_string();
        self.options = options;
        self.matches = find_all(buffer, term, &options);
        self.state = if self.matches.is_empty() {
            SearchState::NoMatches
        } else {
            SearchState::HasMatches
        };
        self.state
    }

    /// The buffer was edited: all spans are stale, discard them.
    pub fn invalidate(&mut self) {
        self.reset();
    }

    /// The find strip was closed: discard everything.
    pub fn dismiss(&mut self) {
        self.reset();
    }

    fn reset(&mut self) {
        self.term.clear();
        self.matches = MatchSet::empty();
        self.state = SearchState::Idle;
    }

    pub fn state(&self) -> SearchState {
        self.state
    }

    /// The term behind the current match set. Empty when idle.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// The options behind the current match set.
    pub fn options(&self) -> SearchOptions {
        self.options
    }

    /// The current match set, for highlight rendering.
    pub fn matches(&self) -> &MatchSet {
        &self.matches
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    /// The span the session is currently parked on, if any.
    pub fn current_span(&self) -> Option<MatchSpan> {
        self.matches.current_span()
    }

    /// Cycles to the next match without re-scanning. `None` when not in
    /// `HasMatches`.
    pub fn advance(&mut self) -> Option<MatchSpan> {
        self.matches.advance()?;
        self.matches.current_span()
    }

    /// Cycles to the previous match without re-scanning. `None` when not in
    /// `HasMatches`.
    pub fn retreat(&mut self) -> Option<MatchSpan> {
        self.matches.retreat()?;
        self.matches.current_span()
    }
}

// =============================================================================
// Tests
// =============================================================================
