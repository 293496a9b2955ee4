//! Darija Language Tokenizer Library
//!
//! This library turns Darija source text into the token stream consumed by a
//! downstream parser.

pub mod error;
pub mod lexer;

// Re-export commonly used types
pub use error::{DiagnosticSink, ErrorCollector, LexResult, LexicalError};
pub use lexer::{tokenize, tokenize_collect, tokenize_strict, Lexer, LexerOptions, Token, TokenKind};
