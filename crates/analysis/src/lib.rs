//! plume-analysis: text statistics for the plume editor.
//!
//! This crate derives display statistics from an immutable text snapshot:
//! word count, character count (with or without whitespace), line count,
//! and the 1-indexed (line, column) position of a cursor offset.
//!
//! Every function is a pure, total function over a `&str` snapshot. Offsets
//! are character offsets (Unicode scalar values), never byte offsets, and
//! out-of-range offsets are clamped rather than rejected. There are no error
//! paths: the status bar asks for numbers and always gets numbers.
//!
//! # Example
//!
//! ```
//! use plume_analysis::{statistics, LineColumn};
//!
//! let stats = statistics("hello world\nsecond line", 13, true);
//! assert_eq!(stats.words, 4);
//! assert_eq!(stats.total_lines, 2);
//! assert_eq!(stats.position, LineColumn::new(2, 2));
//! ```

mod analyzer;
mod types;

pub use analyzer::{
    count_characters, count_graphemes, count_lines, count_words, line_col_at, statistics,
};
pub use types::{LineColumn, TextStatistics};
