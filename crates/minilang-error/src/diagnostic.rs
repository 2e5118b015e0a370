//! Diagnostic - rustc-style error reporting
//!
//! Builds detailed messages with an error code, the offending source line,
//! a caret underline and optional fix suggestions.

use crate::span::Span;
use std::fmt;
use thiserror::Error;

/// Diagnostic severity level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Fatal error - stops the current phase
    Error,
    /// Warning - does not stop anything
    Warning,
    /// Additional information
    Note,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Error => "error",
            Level::Warning => "warning",
            Level::Note => "note",
        }
    }

    /// ANSI code used when color output is enabled
    pub fn color_code(&self) -> &'static str {
        match self {
            Level::Error => "\x1b[1;31m",   // Bold red
            Level::Warning => "\x1b[1;33m", // Bold yellow
            Level::Note => "\x1b[1;36m",    // Bold cyan
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A label pointing at a region of the source
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
    /// Primary labels get the caret underline, secondary ones a dash
    pub primary: bool,
}

impl Label {
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: true,
        }
    }

    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            primary: false,
        }
    }
}

/// Structured error code, rendered as `EL001` etc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorCode {
    /// Phase letter (L = lexer; later phases reserve their own letters)
    pub phase: char,
    /// Error number within the phase
    pub number: u16,
}

impl ErrorCode {
    pub const fn new(phase: char, number: u16) -> Self {
        Self { phase, number }
    }

    // Lexer errors
    pub const UNEXPECTED_CHAR: Self = Self::new('L', 1);
    pub const UNTERMINATED_COMMENT: Self = Self::new('L', 2);
    pub const UNTERMINATED_CONTINUATION: Self = Self::new('L', 3);
    pub const INVALID_CHAR_LITERAL: Self = Self::new('L', 4);
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{}{:03}", self.phase, self.number)
    }
}

/// A complete diagnostic, built with the `with_*` methods
#[derive(Debug, Clone, Error)]
#[error("{level}: {message}")]
pub struct Diagnostic {
    pub level: Level,
    pub code: Option<ErrorCode>,
    pub message: String,
    /// Labels pointing into the source
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    /// Fix suggestions, rendered as `help:` lines
    pub helps: Vec<String>,
}

impl Diagnostic {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: Level::Error,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: Level::Warning,
            code: None,
            message: message.into(),
            labels: Vec::new(),
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }
}

/// Holds source files so the renderer can show snippets
#[derive(Debug, Default)]
pub struct SourceCache {
    files: Vec<SourceFile>,
}

#[derive(Debug)]
pub struct SourceFile {
    pub name: String,
    pub source: String,
    /// Byte offset of each line start (for fast line lookup)
    line_starts: Vec<usize>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, source: impl Into<String>) -> Self {
        let source = source.into();
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            name: name.into(),
            source,
            line_starts,
        }
    }

    /// Returns the content of a line (1-indexed), without its newline
    pub fn get_line(&self, line: u32) -> Option<&str> {
        let line_idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(line_idx)?;
        let end = self
            .line_starts
            .get(line_idx + 1)
            .map(|&e| e.saturating_sub(1))
            .unwrap_or(self.source.len());

        Some(&self.source[start..end])
    }
}

impl SourceCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file and returns its ID
    pub fn add(&mut self, name: impl Into<String>, source: impl Into<String>) -> u32 {
        let id = self.files.len() as u32;
        self.files.push(SourceFile::new(name, source));
        id
    }

    pub fn get(&self, id: u32) -> Option<&SourceFile> {
        self.files.get(id as usize)
    }
}

/// Renders diagnostics against a source cache
pub struct DiagnosticRenderer<'a> {
    cache: &'a SourceCache,
    use_colors: bool,
}

impl<'a> DiagnosticRenderer<'a> {
    pub fn new(cache: &'a SourceCache) -> Self {
        Self {
            cache,
            use_colors: true,
        }
    }

    pub fn without_colors(mut self) -> Self {
        self.use_colors = false;
        self
    }

    /// Renders the diagnostic as a string
    pub fn render(&self, diagnostic: &Diagnostic) -> String {
        let mut output = String::new();

        let reset = if self.use_colors { "\x1b[0m" } else { "" };
        let color = if self.use_colors {
            diagnostic.level.color_code()
        } else {
            ""
        };
        let bold = if self.use_colors { "\x1b[1m" } else { "" };
        let blue = if self.use_colors { "\x1b[1;34m" } else { "" };

        // Line 1: error[EL001]: message
        output.push_str(color);
        output.push_str(diagnostic.level.as_str());

        if let Some(code) = &diagnostic.code {
            output.push('[');
            output.push_str(&code.to_string());
            output.push(']');
        }

        output.push_str(reset);
        output.push_str(bold);
        output.push_str(": ");
        output.push_str(&diagnostic.message);
        output.push_str(reset);
        output.push('\n');

        // Labels with source snippets
        for label in &diagnostic.labels {
            let Some(file) = self.cache.get(label.span.file_id) else {
                continue;
            };

            // --> file:line:column
            output.push_str(&format!(
                " {}-->{} {}:{}:{}\n",
                blue, reset, file.name, label.span.start.line, label.span.start.column
            ));

            let Some(line_content) = file.get_line(label.span.start.line) else {
                continue;
            };

            let line_num = label.span.start.line;
            let padding = " ".repeat(line_num.to_string().len());

            // Gutter, source line, underline
            output.push_str(&format!(" {} {}|{}\n", padding, blue, reset));
            output.push_str(&format!(
                " {}{}{} |{} {}\n",
                blue, line_num, reset, reset, line_content
            ));

            let col_start = label.span.start.column as usize;
            let underline_len = if label.span.start.line == label.span.end.line {
                (label.span.end.column.saturating_sub(label.span.start.column)).max(1) as usize
            } else {
                line_content.len().saturating_sub(col_start - 1).max(1)
            };

            let spaces = " ".repeat(col_start.saturating_sub(1));
            let underline_char = if label.primary { '^' } else { '-' };
            let underline = underline_char.to_string().repeat(underline_len);
            let label_color = if label.primary { color } else { blue };

            output.push_str(&format!(
                " {} {}|{} {}{}{} {}{}\n",
                padding, blue, reset, spaces, label_color, underline, label.message, reset
            ));
        }

        for note in &diagnostic.notes {
            output.push_str(&format!("   = {}note{}: {}\n", bold, reset, note));
        }

        for help in &diagnostic.helps {
            let green = if self.use_colors { "\x1b[1;32m" } else { "" };
            output.push_str(&format!("   = {}help{}: {}\n", green, reset, help));
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::span::Position;

    #[test]
    fn test_diagnostic_rendering() {
        let mut cache = SourceCache::new();
        let file_id = cache.add("sample.mini", "a : int;\nb = 'ab';");

        let span = Span::new(Position::new(2, 5, 13), Position::new(2, 9, 17), file_id);

        let diagnostic = Diagnostic::error("invalid character literal")
            .with_code(ErrorCode::INVALID_CHAR_LITERAL)
            .with_label(span, "expected exactly one character")
            .with_help("a char literal holds a single character, like 'a'");

        let renderer = DiagnosticRenderer::new(&cache).without_colors();
        let output = renderer.render(&diagnostic);

        assert!(output.contains("error[EL004]"));
        assert!(output.contains("invalid character literal"));
        assert!(output.contains("sample.mini:2:5"));
        assert!(output.contains("^^^^"));
        assert!(output.contains("help: a char literal"));
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::UNEXPECTED_CHAR.to_string(), "EL001");
        assert_eq!(ErrorCode::UNTERMINATED_COMMENT.to_string(), "EL002");
    }

    #[test]
    fn test_get_line() {
        let file = SourceFile::new("f.mini", "first\nsecond\nthird");
        assert_eq!(file.get_line(1), Some("first"));
        assert_eq!(file.get_line(2), Some("second"));
        assert_eq!(file.get_line(3), Some("third"));
        assert_eq!(file.get_line(4), None);
    }
}
