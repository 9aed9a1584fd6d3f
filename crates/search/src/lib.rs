//! plume-search: in-document search and replace for the plume editor.
//!
//! This crate locates literal substring matches in a text snapshot and
//! performs scoped replacement. It has two layers:
//!
//! - The engine ([`find_all`], [`find_from_cursor`], [`replace_span`],
//!   [`replace_all`]): pure functions from a snapshot plus a query to
//!   read-only results. Nothing here mutates a document; replacement
//!   functions return a new string for the caller to apply.
//! - The session ([`SearchSession`]): the state machine behind an
//!   interactive find strip. It owns the current [`MatchSet`] and cycles
//!   through it without re-scanning; any buffer edit or dismissal drops the
//!   set outright, because spans computed against old content must never be
//!   applied to new content.
//!
//! All offsets are char offsets into the snapshot, and spans are half-open
//! `[start, end)` ranges.
//!
//! # Example
//!
//! ```
//! use plume_search::{find_all, replace_all, SearchOptions};
//!
//! let opts = SearchOptions {
//!     whole_word: true,
//!     ..SearchOptions::default()
//! };
//! let matches = find_all("The quick fox jumps over the lazy fox", "fox", &opts);
//! assert_eq!(matches.len(), 2);
//!
//! let (text, count) = replace_all("The quick fox jumps over the lazy fox", "fox", "cat", &opts);
//! assert_eq!(text, "The quick cat jumps over the lazy cat");
//! assert_eq!(count, 2);
//! ```

mod engine;
mod session;
mod types;

pub use engine::{find_all, find_from_cursor, replace_all, replace_span};
pub use session::{SearchSession, SearchState};
pub use types::{Direction, MatchSet, MatchSpan, SearchOptions};
