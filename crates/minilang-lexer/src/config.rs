//! Lexer configuration
//!
//! Owned by the caller (normally the CLI layer) and consumed here as
//! plain parameters: the scanner itself stays a pure function from text
//! to tokens.

use crate::keywords::KeywordSet;

/// Configuration for a scan
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// Emit whitespace and comments as `Whitespace`/`Comment` tokens
    /// instead of skipping them. With this on, concatenating every
    /// emitted lexeme reconstructs the input byte-for-byte.
    pub emit_trivia: bool,
    /// The reserved-word set used to classify identifiers
    pub keywords: KeywordSet,
}

impl LexerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trivia(mut self) -> Self {
        self.emit_trivia = true;
        self
    }

    pub fn with_keywords(mut self, keywords: KeywordSet) -> Self {
        self.keywords = keywords;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LexerConfig::new();
        assert!(!config.emit_trivia);
        assert!(config.keywords.contains("int"));
    }

    #[test]
    fn test_builder() {
        let config = LexerConfig::new()
            .with_trivia()
            .with_keywords(KeywordSet::empty());
        assert!(config.emit_trivia);
        assert!(config.keywords.is_empty());
    }
}
