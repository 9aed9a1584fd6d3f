/// A cursor position as (line, column) where both are 1-indexed.
///
/// This is the form shown in a status bar: the first character of a document
/// is at line 1, column 1. Contrast with char offsets, which are 0-indexed
/// and linear.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineColumn {
    pub line: usize,
    pub col: usize,
}

impl LineColumn {
    pub fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }
}

impl Default for LineColumn {
    /// The origin of a document, including an empty one.
    fn default() -> Self {
        Self { line: 1, col: 1 }
    }
}

impl PartialOrd for LineColumn {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LineColumn {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Compare by line first, then by column
        match self.line.cmp(&other.line) {
            std::cmp::Ordering::Equal => self.col.cmp(&other.col),
            ord => ord,
        }
    }
}

/// The full set of statistics the status bar displays for one snapshot.
///
/// Produced by [`statistics`](crate::statistics); all fields are derived from
/// the same snapshot so they are mutually consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextStatistics {
    /// Number of whitespace-separated words.
    pub words: usize,
    /// Character count, with or without whitespace depending on the query.
    pub characters: usize,
    /// Total number of lines; at least 1 even for an empty document.
    pub total_lines: usize,
    /// Cursor position, 1-indexed.
    pub position: LineColumn,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_column_default_is_origin() {
        assert_eq!(LineColumn::default(), LineColumn::new(1, 1));
    }

    #[test]
    fn line_column_orders_by_line_then_col() {
        assert!(LineColumn::new(1, 9) < LineColumn::new(2, 1));
        assert!(LineColumn::new(3, 2) < LineColumn::new(3, 5));
        assert_eq!(LineColumn::new(2, 2).cmp(&LineColumn::new(2, 2)), std::cmp::Ordering::Equal);
    }
}
