//! minilang-lexer - Lexer/tokenizer for the Mini-Lang language
//!
//! This crate converts Mini-Lang source text into a lazy sequence of
//! tokens, or fails with a structured error on malformed input.
//!
//! # Features
//!
//! - Two single-line comment styles (`//` and `#`)
//! - Nested block comments (`/* ... */`) and annotation blocks (`#< ... >#`)
//! - Backslash-newline line continuations
//! - Injectable reserved-word set
//! - Optional trivia emission for byte-exact round-trips
//!
//! # Example
//!
//! ```rust
//! use minilang_lexer::{Lexer, TokenKind};
//!
//! let source = "a, b : int; /* declarations */ a = 2 + 3;";
//!
//! for result in Lexer::new(source, 0) {
//!     let token = result.expect("sample input is well-formed");
//!     if token.kind != TokenKind::Eof {
//!         println!("{}", token);
//!     }
//! }
//! ```

pub mod config;
pub mod error;
pub mod keywords;
pub mod lexer;
pub mod token;

pub use config::LexerConfig;
pub use error::{LexError, LexErrorKind};
pub use keywords::{KeywordSet, DEFAULT_KEYWORDS};
pub use lexer::{tokenize, tokenize_with, Lexer};
pub use token::{Token, TokenKind};
