//! minilang-error - Diagnostics for the Mini-Lang compiler
//!
//! Structures for reporting errors with precise source locations,
//! rendered in the style of the Rust compiler.
//!
//! # Example
//!
//! ```rust
//! use minilang_error::{Diagnostic, ErrorCode, SourceCache, DiagnosticRenderer};
//! use minilang_error::span::{Span, Position};
//!
//! let mut cache = SourceCache::new();
//! let file_id = cache.add("example.mini", "a : int");
//!
//! let span = Span::new(
//!     Position::new(1, 1, 0),
//!     Position::new(1, 2, 1),
//!     file_id,
//! );
//!
//! let diagnostic = Diagnostic::error("unexpected character")
//!     .with_code(ErrorCode::UNEXPECTED_CHAR)
//!     .with_label(span, "no rule matches this character");
//!
//! let renderer = DiagnosticRenderer::new(&cache);
//! println!("{}", renderer.render(&diagnostic));
//! ```

pub mod diagnostic;
pub mod span;

pub use diagnostic::{
    Diagnostic, DiagnosticRenderer, ErrorCode, Label, Level, SourceCache, SourceFile,
};
pub use span::{Position, Span, Spanned};

/// Default Result type for operations that fail with a diagnostic
pub type Result<T> = std::result::Result<T, Diagnostic>;

/// Collection of diagnostics accumulated during a compiler phase
#[derive(Debug, Default)]
pub struct Diagnostics {
    items: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.items.push(diagnostic);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic::error(message));
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.items.push(Diagnostic::warning(message));
    }

    pub fn has_errors(&self) -> bool {
        self.items.iter().any(|d| d.level == Level::Error)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.items.iter()
    }

    /// Renders all diagnostics
    pub fn render(&self, cache: &SourceCache) -> String {
        let renderer = DiagnosticRenderer::new(cache);
        self.items
            .iter()
            .map(|d| renderer.render(d))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagnostics_error_tracking() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.is_empty());
        assert!(!diagnostics.has_errors());

        diagnostics.warning("odd but legal");
        assert!(!diagnostics.has_errors());

        diagnostics.error("that one is fatal");
        assert!(diagnostics.has_errors());
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_diagnostics_render_all() {
        let mut cache = SourceCache::new();
        let file_id = cache.add("two.mini", "a = @;");

        let mut diagnostics = Diagnostics::new();
        diagnostics.push(
            Diagnostic::error("unexpected character")
                .with_code(ErrorCode::UNEXPECTED_CHAR)
                .with_label(
                    Span::new(Position::new(1, 5, 4), Position::new(1, 6, 5), file_id),
                    "no rule matches this character",
                ),
        );
        diagnostics.warning("second entry");

        let output = diagnostics.render(&cache);
        assert!(output.contains("error[EL001]"));
        assert!(output.contains("two.mini:1:5"));
        assert!(output.contains("warning"));
    }
}
