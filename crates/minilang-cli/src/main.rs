//! Mini-Lang lexer CLI

use clap::{Parser, Subcommand};
use minilang_error::{DiagnosticRenderer, SourceCache};
use minilang_lexer::{KeywordSet, Lexer, LexerConfig, TokenKind};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "minilang")]
#[command(version = "0.1.0")]
#[command(about = "Mini-Lang lexer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shows file tokens with their positions
    Lex {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Also show whitespace and comment tokens
        #[arg(long)]
        trivia: bool,

        /// Reserve an extra keyword (repeatable)
        #[arg(long = "keyword", value_name = "WORD")]
        keywords: Vec<String>,
    },

    /// Checks a file for lexical errors without printing tokens
    Check {
        /// Input file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Lex {
            input,
            trivia,
            keywords,
        } => {
            println!("Tokenizing: {}\n", input.display());

            let source = read_source(&input);
            let mut cache = SourceCache::new();
            let file_id = cache.add(input.display().to_string(), &source);

            let mut keyword_set = KeywordSet::default();
            keyword_set.extend(keywords);

            let mut config = LexerConfig::new().with_keywords(keyword_set);
            if trivia {
                config = config.with_trivia();
            }

            let mut count = 0usize;
            for result in Lexer::with_config(&source, file_id, config) {
                match result {
                    Ok(token) => {
                        let display = match token.kind {
                            TokenKind::Eof => "EOF".to_string(),
                            TokenKind::Whitespace => "·".to_string(),
                            _ => format!("{:?}", token.lexeme),
                        };

                        println!(
                            "  {:4}:{:<3}  {:<14}  {}",
                            token.line(),
                            token.column(),
                            token.kind.to_string(),
                            display
                        );
                        count += 1;
                    }
                    Err(err) => {
                        eprintln!("\n{}", DiagnosticRenderer::new(&cache).render(&err.to_diagnostic(file_id)));
                        std::process::exit(1);
                    }
                }
            }

            println!("\nTotal: {} tokens", count);
        }

        Commands::Check { input } => {
            println!("Checking: {}\n", input.display());

            let source = read_source(&input);
            let mut cache = SourceCache::new();
            let file_id = cache.add(input.display().to_string(), &source);

            match minilang_lexer::tokenize(&source, file_id) {
                Ok(tokens) => {
                    println!("  [ok] Lexer: {} tokens", tokens.len());
                    println!("\nNo errors found!");
                }
                Err(err) => {
                    eprintln!("Lexer errors:\n");
                    let renderer = DiagnosticRenderer::new(&cache);
                    eprintln!("{}", renderer.render(&err.to_diagnostic(file_id)));
                    std::process::exit(1);
                }
            }
        }
    }
}

fn read_source(input: &PathBuf) -> String {
    match fs::read_to_string(input) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading file: {}", e);
            std::process::exit(1);
        }
    }
}
