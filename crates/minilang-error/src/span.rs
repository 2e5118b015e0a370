//! Span - source code locations
//!
//! A Span marks a region of the source text so diagnostics can point
//! at the exact offending characters.

use std::fmt;

/// A single position in the source text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    /// Line (1-indexed)
    pub line: u32,
    /// Column (1-indexed)
    pub column: u32,
    /// Byte offset from the beginning of the file
    pub offset: usize,
}

impl Position {
    pub fn new(line: u32, column: u32, offset: usize) -> Self {
        Self { line, column, offset }
    }
}

impl fmt::Display for Position {
    /// `line:column`, the way positions appear in diagnostics
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// A region of the source text (start to end)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start position
    pub start: Position,
    /// End position (exclusive)
    pub end: Position,
    /// Source file ID (to support multiple files)
    pub file_id: u32,
}

impl Span {
    pub fn new(start: Position, end: Position, file_id: u32) -> Self {
        Self { start, end, file_id }
    }

    /// A zero-width span at a single position
    pub fn point(pos: Position, file_id: u32) -> Self {
        Self {
            start: pos,
            end: pos,
            file_id,
        }
    }

    /// Combines two spans into one covering both
    pub fn merge(self, other: Span) -> Span {
        debug_assert_eq!(self.file_id, other.file_id, "Cannot merge spans from different files");
        Span {
            start: if self.start.offset < other.start.offset {
                self.start
            } else {
                other.start
            },
            end: if self.end.offset > other.end.offset {
                self.end
            } else {
                other.end
            },
            file_id: self.file_id,
        }
    }

    /// Length in bytes
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Trait for values that carry a source location
pub trait Spanned {
    fn span(&self) -> Span;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_merge() {
        let first = Span::new(Position::new(1, 1, 0), Position::new(1, 4, 3), 0);
        let second = Span::new(Position::new(2, 1, 8), Position::new(2, 6, 13), 0);

        let merged = first.merge(second);
        assert_eq!(merged.start.offset, 0);
        assert_eq!(merged.end.offset, 13);
        assert_eq!(merged.len(), 13);
    }

    #[test]
    fn test_point_span_is_empty() {
        let span = Span::point(Position::new(3, 7, 21), 0);
        assert!(span.is_empty());
        assert_eq!(span.start, span.end);
    }

    #[test]
    fn test_position_display() {
        assert_eq!(Position::new(12, 4, 80).to_string(), "12:4");
    }
}
