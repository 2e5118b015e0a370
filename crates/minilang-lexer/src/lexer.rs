//! Lexer for the Mini-Lang language
//!
//! Converts source text into a lazy sequence of tokens. Each pull
//! advances the cursor and yields exactly one token or one terminal
//! error; the sequence fuses after the `Eof` token or the first error.
//!
//! A scan is not restartable mid-sequence: build a fresh `Lexer` per
//! input. Instances are not safe for concurrent pulls; use one lexer
//! per file when tokenizing in parallel.

use crate::config::LexerConfig;
use crate::error::{LexError, LexErrorKind};
use crate::token::{Token, TokenKind};
use minilang_error::span::{Position, Span};
use unicode_xid::UnicodeXID;

/// The Mini-Lang lexer
pub struct Lexer {
    /// Source code characters
    chars: Vec<char>,
    /// Current position (index in the chars vector)
    pos: usize,
    /// Byte offset
    offset: usize,
    /// Current logical line (1-indexed); a `\`-newline join does not
    /// advance it
    line: u32,
    /// Current column (1-indexed)
    column: u32,
    /// Source file ID for spans
    file_id: u32,
    /// Scan configuration
    config: LexerConfig,
    /// Set once `Eof` or an error has been produced
    finished: bool,
}

impl Lexer {
    /// Creates a lexer with the default configuration
    pub fn new(source: &str, file_id: u32) -> Self {
        Self::with_config(source, file_id, LexerConfig::default())
    }

    /// Creates a lexer with an explicit configuration
    pub fn with_config(source: &str, file_id: u32, config: LexerConfig) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            offset: 0,
            line: 1,
            column: 1,
            file_id,
            config,
            finished: false,
        }
    }

    /// Returns the current character without advancing
    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    /// Returns the next character without advancing
    fn peek_next(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    /// Advances past the current character, updating line and column
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.pos += 1;
        self.offset += ch.len_utf8();

        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Consumes a `\`-newline pair. The physical lines join into one
    /// logical line: the line counter stays put and the column keeps
    /// increasing across the join.
    fn consume_line_continuation(&mut self) {
        self.pos += 2;
        self.offset += 2;
        self.column += 2;
    }

    fn current_position(&self) -> Position {
        Position::new(self.line, self.column, self.offset)
    }

    /// Builds a token covering the characters consumed since `start`
    fn make_token(&self, kind: TokenKind, start_pos: usize, start: Position) -> Token {
        let lexeme: String = self.chars[start_pos..self.pos].iter().collect();
        let span = Span::new(start, self.current_position(), self.file_id);
        Token::new(kind, lexeme, span)
    }

    fn error_at(
        &self,
        kind: LexErrorKind,
        at: Position,
        snippet: impl Into<String>,
    ) -> LexError {
        LexError::new(kind, at, snippet)
    }

    /// Reads the next token or terminal error
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            match self.scan_trivia()? {
                Some(trivia) if self.config.emit_trivia => return Ok(trivia),
                Some(_) => continue,
                None => break,
            }
        }

        let start = self.current_position();
        let start_pos = self.pos;

        let Some(ch) = self.peek() else {
            return Ok(Token::new(
                TokenKind::Eof,
                "",
                Span::point(start, self.file_id),
            ));
        };

        if is_identifier_start(ch) {
            return Ok(self.read_identifier(start_pos, start));
        }

        if ch.is_ascii_digit() {
            return Ok(self.read_number(start_pos, start));
        }

        if ch == '\'' {
            return self.read_char_literal(start_pos, start);
        }

        self.read_operator(start_pos, start)
    }

    /// Consumes at most one piece of trivia (a whitespace run, one
    /// comment, or one line-continuation join) and returns it as a
    /// token. `Ok(None)` means the cursor sits at a token start or at
    /// end of input.
    fn scan_trivia(&mut self) -> Result<Option<Token>, LexError> {
        let start = self.current_position();
        let start_pos = self.pos;

        match (self.peek(), self.peek_next()) {
            (Some(' ' | '\t' | '\r' | '\n'), _) => {
                while let Some(' ' | '\t' | '\r' | '\n') = self.peek() {
                    self.advance();
                }
                Ok(Some(self.make_token(TokenKind::Whitespace, start_pos, start)))
            }
            (Some('\\'), Some('\n')) => {
                self.consume_line_continuation();
                Ok(Some(self.make_token(TokenKind::Whitespace, start_pos, start)))
            }
            (Some('\\'), None) => Err(self.error_at(
                LexErrorKind::UnterminatedLineContinuation,
                start,
                "\\",
            )),
            (Some('/'), Some('/')) => {
                self.consume_line_comment();
                Ok(Some(self.make_token(TokenKind::Comment, start_pos, start)))
            }
            (Some('/'), Some('*')) => {
                self.consume_block_comment(('/', '*'), ('*', '/'), start)?;
                Ok(Some(self.make_token(TokenKind::Comment, start_pos, start)))
            }
            (Some('#'), Some('<')) => {
                self.consume_block_comment(('#', '<'), ('>', '#'), start)?;
                Ok(Some(self.make_token(TokenKind::Comment, start_pos, start)))
            }
            (Some('#'), _) => {
                self.consume_line_comment();
                Ok(Some(self.make_token(TokenKind::Comment, start_pos, start)))
            }
            _ => Ok(None),
        }
    }

    /// Consumes to end of line, exclusive: the newline stays for the
    /// next whitespace run
    fn consume_line_comment(&mut self) {
        while let Some(ch) = self.peek() {
            if ch == '\n' {
                break;
            }
            self.advance();
        }
    }

    /// Consumes a nested block comment delimited by two-character
    /// `open`/`close` pairs.
    ///
    /// Delimiters are matched greedily left to right and consumed
    /// atomically: a character taken as part of one delimiter is never
    /// re-matched as part of another. End of input with open nesting
    /// reports the position of the outermost opener.
    fn consume_block_comment(
        &mut self,
        open: (char, char),
        close: (char, char),
        start: Position,
    ) -> Result<(), LexError> {
        // Opening pair
        self.advance();
        self.advance();
        let mut depth: u32 = 1;

        while depth > 0 {
            match (self.peek(), self.peek_next()) {
                (Some(a), Some(b)) if (a, b) == close => {
                    depth -= 1;
                    self.advance();
                    self.advance();
                }
                (Some(a), Some(b)) if (a, b) == open => {
                    depth += 1;
                    self.advance();
                    self.advance();
                }
                (Some(_), _) => {
                    self.advance();
                }
                (None, _) => {
                    let snippet: String = [open.0, open.1].iter().collect();
                    return Err(self.error_at(LexErrorKind::UnterminatedComment, start, snippet));
                }
            }
        }

        Ok(())
    }

    /// Reads an identifier and classifies it against the keyword set
    fn read_identifier(&mut self, start_pos: usize, start: Position) -> Token {
        while let Some(ch) = self.peek() {
            if is_identifier_continue(ch) {
                self.advance();
            } else {
                break;
            }
        }

        let mut token = self.make_token(TokenKind::Identifier, start_pos, start);
        if self.config.keywords.contains(&token.lexeme) {
            token.kind = TokenKind::Keyword;
        }
        token
    }

    /// Reads a decimal integer literal
    fn read_number(&mut self, start_pos: usize, start: Position) -> Token {
        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                self.advance();
            } else {
                break;
            }
        }

        self.make_token(TokenKind::IntLiteral, start_pos, start)
    }

    /// Reads `'` + exactly one character + `'`. Anything else between
    /// the quotes is an invalid char literal.
    fn read_char_literal(
        &mut self,
        start_pos: usize,
        start: Position,
    ) -> Result<Token, LexError> {
        self.advance(); // opening quote

        match self.peek() {
            None => Err(self.error_at(LexErrorKind::InvalidCharLiteral, start, "'")),
            Some('\'') => {
                // Empty literal ''
                self.advance();
                let snippet: String = self.chars[start_pos..self.pos].iter().collect();
                Err(self.error_at(LexErrorKind::InvalidCharLiteral, start, snippet))
            }
            Some(_) => {
                self.advance(); // the character itself
                match self.peek() {
                    Some('\'') => {
                        self.advance();
                        Ok(self.make_token(TokenKind::CharLiteral, start_pos, start))
                    }
                    _ => {
                        // More than one character, or end of input before
                        // the closing quote. Take the rest of the would-be
                        // literal for the snippet.
                        while let Some(ch) = self.peek() {
                            if ch == '\n' {
                                break;
                            }
                            let closed = ch == '\'';
                            self.advance();
                            if closed {
                                break;
                            }
                        }
                        let snippet: String = self.chars[start_pos..self.pos].iter().collect();
                        Err(self.error_at(LexErrorKind::InvalidCharLiteral, start, snippet))
                    }
                }
            }
        }
    }

    /// Reads an operator or punctuation mark, longest match first
    fn read_operator(&mut self, start_pos: usize, start: Position) -> Result<Token, LexError> {
        // Two-character operators before their one-character prefixes
        if let (Some(a), Some(b)) = (self.peek(), self.peek_next()) {
            if matches!((a, b), ('<', '=') | ('>', '=') | ('=', '=') | ('!', '=')) {
                self.advance();
                self.advance();
                return Ok(self.make_token(TokenKind::Operator, start_pos, start));
            }
        }

        let Some(ch) = self.peek() else {
            return Err(self.error_at(LexErrorKind::UnexpectedCharacter, start, ""));
        };

        let kind = match ch {
            '+' | '-' | '*' | '/' | '=' | '<' | '>' => TokenKind::Operator,
            ':' | ';' | ',' | '{' | '}' | '(' | ')' | '[' | ']' => TokenKind::Punctuation,
            _ => {
                return Err(self.error_at(
                    LexErrorKind::UnexpectedCharacter,
                    start,
                    ch.to_string(),
                ));
            }
        };

        self.advance();
        Ok(self.make_token(kind, start_pos, start))
    }
}

/// Letters and `_` open an identifier
fn is_identifier_start(ch: char) -> bool {
    ch == '_' || UnicodeXID::is_xid_start(ch)
}

/// Letters, digits and `_` continue one
fn is_identifier_continue(ch: char) -> bool {
    ch == '_' || UnicodeXID::is_xid_continue(ch)
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    /// Lazy pull. Yields `None` after the `Eof` token or after the
    /// first error: no recovery is attempted.
    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.next_token() {
            Ok(token) => {
                if token.is_eof() {
                    self.finished = true;
                }
                Some(Ok(token))
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Tokenizes a whole input with the default configuration, stopping at
/// the first error. The final token is `Eof`.
pub fn tokenize(source: &str, file_id: u32) -> Result<Vec<Token>, LexError> {
    Lexer::new(source, file_id).collect()
}

/// Tokenizes a whole input with an explicit configuration
pub fn tokenize_with(
    source: &str,
    file_id: u32,
    config: LexerConfig,
) -> Result<Vec<Token>, LexError> {
    Lexer::with_config(source, file_id, config).collect()
}
