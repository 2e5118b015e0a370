//! Tokens for the Mini-Lang language
//!
//! A token pairs a kind with the exact source substring (lexeme) that
//! produced it, plus its location. Trivia kinds exist so a scan can also
//! emit whitespace and comments when asked to (see `LexerConfig`).

use minilang_error::span::Span;
use std::fmt;

/// All token kinds the scanner can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Name starting with a letter or `_`: `a`, `valor`, `_tmp`
    Identifier,
    /// An identifier that matches the configured reserved-word set
    Keyword,
    /// Decimal integer literal: `42`
    IntLiteral,
    /// Single-character literal: `'x'`
    CharLiteral,
    /// Double-quoted string literal. Reserved: the kind exists but the
    /// current scanner never produces it.
    StringLiteral,
    /// `+`, `-`, `*`, `/`, `=`, `<`, `>`, `<=`, `>=`, `==`, `!=`
    Operator,
    /// `:`, `;`, `,`, `{`, `}`, `(`, `)`, `[`, `]`
    Punctuation,
    /// Trivia: a run of whitespace, or a backslash-newline join
    Whitespace,
    /// Trivia: a line comment or a (possibly nested) block comment
    Comment,
    /// End of input, emitted exactly once with an empty lexeme
    Eof,
}

impl TokenKind {
    /// Whitespace and comments, skipped unless trivia emission is on
    pub fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    pub fn is_literal(&self) -> bool {
        matches!(
            self,
            TokenKind::IntLiteral | TokenKind::CharLiteral | TokenKind::StringLiteral
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::Keyword => "keyword",
            TokenKind::IntLiteral => "int literal",
            TokenKind::CharLiteral => "char literal",
            TokenKind::StringLiteral => "string literal",
            TokenKind::Operator => "operator",
            TokenKind::Punctuation => "punctuation",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        };
        write!(f, "{}", name)
    }
}

/// A token with its exact source text and location
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// Token kind
    pub kind: TokenKind,
    /// The exact source substring this token covers
    pub lexeme: String,
    /// Location in the source, `span.start` is the first character
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            span,
        }
    }

    /// 1-based line of the token's first character
    pub fn line(&self) -> u32 {
        self.span.start.line
    }

    /// 1-based column of the token's first character
    pub fn column(&self) -> u32 {
        self.span.start.column
    }

    pub fn is_eof(&self) -> bool {
        matches!(self.kind, TokenKind::Eof)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "<EOF> at {}", self.span.start),
            _ => write!(f, "<{}, {:?}> at {}", self.kind, self.lexeme, self.span.start),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use minilang_error::span::{Position, Span};

    #[test]
    fn test_trivia_classification() {
        assert!(TokenKind::Whitespace.is_trivia());
        assert!(TokenKind::Comment.is_trivia());
        assert!(!TokenKind::Identifier.is_trivia());
        assert!(!TokenKind::Eof.is_trivia());
    }

    #[test]
    fn test_token_display() {
        let span = Span::new(Position::new(2, 4, 10), Position::new(2, 7, 13), 0);
        let token = Token::new(TokenKind::Keyword, "int", span);
        assert_eq!(token.to_string(), "<keyword, \"int\"> at 2:4");
        assert_eq!(token.line(), 2);
        assert_eq!(token.column(), 4);
    }
}
