//! Integration tests for the Mini-Lang lexer
//!
//! Exercises the public surface end to end: source text in, tokens or a
//! rendered diagnostic out.

use minilang_error::{DiagnosticRenderer, SourceCache};
use minilang_lexer::{tokenize_with, LexError, LexerConfig, Token, TokenKind};

/// Result of lexing a source string
#[derive(Debug)]
pub struct LexOutcome {
    /// Tokens produced before the scan ended (error case: tokens are
    /// discarded, matching `tokenize`'s fail-fast contract)
    pub tokens: Vec<Token>,
    /// The terminal error, if the scan failed
    pub error: Option<LexError>,
    /// The error rendered against the source, without colors
    pub rendered: Option<String>,
}

impl LexOutcome {
    pub fn success(&self) -> bool {
        self.error.is_none()
    }
}

/// Lexes a source string with the given configuration and renders any
/// error against it
pub fn lex_source(source: &str, config: LexerConfig) -> LexOutcome {
    let mut cache = SourceCache::new();
    let file_id = cache.add("input.mini", source);

    match tokenize_with(source, file_id, config) {
        Ok(tokens) => LexOutcome {
            tokens,
            error: None,
            rendered: None,
        },
        Err(error) => {
            let rendered = DiagnosticRenderer::new(&cache)
                .without_colors()
                .render(&error.to_diagnostic(file_id));
            LexOutcome {
                tokens: Vec::new(),
                error: Some(error),
                rendered: Some(rendered),
            }
        }
    }
}

/// Asserts a clean scan and returns kinds and lexemes without the Eof
pub fn assert_lexes(source: &str) -> Vec<(TokenKind, String)> {
    let outcome = lex_source(source, LexerConfig::default());
    match outcome.error {
        None => outcome
            .tokens
            .into_iter()
            .filter(|t| !t.is_eof())
            .map(|t| (t.kind, t.lexeme))
            .collect(),
        Some(error) => panic!(
            "expected source to lex, but it failed:\n{}",
            outcome.rendered.unwrap_or_else(|| error.to_string())
        ),
    }
}

/// Asserts the scan fails and returns the outcome for inspection
pub fn assert_lex_fails(source: &str) -> LexOutcome {
    let outcome = lex_source(source, LexerConfig::default());
    if outcome.success() {
        panic!(
            "expected source to fail lexing, but it produced {} tokens",
            outcome.tokens.len()
        );
    }
    outcome
}
