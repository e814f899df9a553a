//! Source positions and spans.
//!
//! Every token and parse node carries a [`Span`] locating it in the original
//! source text. Spans are end-exclusive and carry both byte offsets (for
//! diagnostic labeling) and 1-based line/column positions (for human-facing
//! output).

use serde::{Deserialize, Serialize};

/// A single location in source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    /// Byte offset from the start of the source.
    pub offset: usize,
    /// 1-based line number.
    pub line: u32,
    /// 1-based column number, counted in characters.
    pub column: u32,
}

impl Position {
    pub fn start() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 1,
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::start()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// An end-exclusive region of source text.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

impl Span {
    pub fn new(start: Position, end: Position) -> Self {
        Span { start, end }
    }

    /// The contiguous union of two spans. Parse-tree construction only ever
    /// joins a span with one that ends at or after it.
    pub fn join(self, other: Span) -> Span {
        Span {
            start: self.start,
            end: other.end,
        }
    }

    /// Length in bytes.
    pub fn len(&self) -> usize {
        self.end.offset.saturating_sub(self.start.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Converts a span to the byte-offset form miette labels with.
pub fn to_source_span(span: Span) -> miette::SourceSpan {
    miette::SourceSpan::from(span.start.offset..span.end.offset)
}

/// Helper to check that a span lies within a given source string.
pub fn assert_valid_span(span: Span, source: &str) {
    debug_assert!(
        span.start.offset <= span.end.offset && span.end.offset <= source.len(),
        "invalid span {} for source of length {}",
        span,
        source.len()
    );
}
