//! Lexical errors
//!
//! The lexer never prints: it returns one structured `LexError` and the
//! caller owns all rendering. The first error is terminal for the scan.

use minilang_error::span::{Position, Span};
use minilang_error::{Diagnostic, ErrorCode};
use thiserror::Error;

/// What went wrong
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LexErrorKind {
    /// A block or annotation-block comment never closed
    #[error("unterminated comment")]
    UnterminatedComment,
    /// Trailing backslash at end of input
    #[error("unterminated line continuation")]
    UnterminatedLineContinuation,
    /// No recognizer matches the character
    #[error("unexpected character")]
    UnexpectedCharacter,
    /// Malformed `'...'` literal: empty, more than one character, or
    /// end of input before the closing quote
    #[error("invalid character literal")]
    InvalidCharLiteral,
}

impl LexErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            LexErrorKind::UnexpectedCharacter => ErrorCode::UNEXPECTED_CHAR,
            LexErrorKind::UnterminatedComment => ErrorCode::UNTERMINATED_COMMENT,
            LexErrorKind::UnterminatedLineContinuation => ErrorCode::UNTERMINATED_CONTINUATION,
            LexErrorKind::InvalidCharLiteral => ErrorCode::INVALID_CHAR_LITERAL,
        }
    }
}

/// A lexical error with enough positional detail for the caller to
/// render a diagnostic pointing at the offending character
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind} at {line}:{column}: {snippet:?}")]
pub struct LexError {
    pub kind: LexErrorKind,
    /// 1-based line of the offending character
    pub line: u32,
    /// 1-based column of the offending character
    pub column: u32,
    /// Byte offset of the offending character
    pub offset: usize,
    /// The offending source text
    pub snippet: String,
}

impl LexError {
    pub fn new(kind: LexErrorKind, at: Position, snippet: impl Into<String>) -> Self {
        Self {
            kind,
            line: at.line,
            column: at.column,
            offset: at.offset,
            snippet: snippet.into(),
        }
    }

    /// Converts the error into a renderable diagnostic for `file_id`
    pub fn to_diagnostic(&self, file_id: u32) -> Diagnostic {
        let start = Position::new(self.line, self.column, self.offset);
        let width = self.snippet.chars().count().max(1) as u32;
        let end = Position::new(
            self.line,
            self.column + width,
            self.offset + self.snippet.len(),
        );
        let span = Span::new(start, end, file_id);

        let diagnostic = Diagnostic::error(self.kind.to_string())
            .with_code(self.kind.code())
            .with_label(span, self.label_message());

        match self.kind {
            LexErrorKind::UnterminatedComment => {
                diagnostic.with_help("close the comment with `*/` (or `>#` for annotation blocks)")
            }
            LexErrorKind::UnterminatedLineContinuation => {
                diagnostic.with_help("a `\\` at end of input has no line to join; remove it")
            }
            LexErrorKind::InvalidCharLiteral => {
                diagnostic.with_help("a char literal holds exactly one character, like 'a'")
            }
            LexErrorKind::UnexpectedCharacter => diagnostic,
        }
    }

    fn label_message(&self) -> String {
        match self.kind {
            LexErrorKind::UnterminatedComment => "comment opened here is never closed".into(),
            LexErrorKind::UnterminatedLineContinuation => {
                "continuation with no following line".into()
            }
            LexErrorKind::UnexpectedCharacter => {
                format!("no rule matches {:?}", self.snippet)
            }
            LexErrorKind::InvalidCharLiteral => "expected exactly one character".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LexError::new(
            LexErrorKind::UnexpectedCharacter,
            Position::new(3, 7, 20),
            "@",
        );
        assert_eq!(err.to_string(), "unexpected character at 3:7: \"@\"");
    }

    #[test]
    fn test_to_diagnostic_carries_code_and_span() {
        let err = LexError::new(
            LexErrorKind::UnterminatedComment,
            Position::new(1, 1, 0),
            "/*",
        );
        let diagnostic = err.to_diagnostic(0);
        assert_eq!(diagnostic.code, Some(ErrorCode::UNTERMINATED_COMMENT));
        assert_eq!(diagnostic.labels.len(), 1);
        assert_eq!(diagnostic.labels[0].span.start.line, 1);
        assert_eq!(diagnostic.labels[0].span.end.column, 3);
    }
}
