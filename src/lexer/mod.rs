//! Lexical analysis module for the Darija language.
//!
//! This module turns Darija source text into a flat stream of [`Token`]s.
//! Keywords are transliterated Darija words; numbers, identifiers and the
//! arithmetic operators follow the usual conventions. Comments (`#` to end of
//! line), spaces, tabs and newlines produce no tokens, but newlines advance
//! the line counter carried by every token.
//!
//! Characters that start no token are reported to a
//! [`DiagnosticSink`](crate::error::DiagnosticSink) and skipped one at a
//! time, so a single pass collects every lexical error in the input.

#[allow(clippy::module_inception)]
mod lexer;
mod literal_parser;
mod raw_token;
pub mod reserved;
mod token;

pub use lexer::{Lexer, LexerOptions, Recovery};
pub use token::{Literal, Token, TokenKind};

use crate::error::{LexResult, LexicalError};

/// Tokenize `source`, logging and skipping lexical errors.
pub fn tokenize(source: &str) -> Vec<Token> {
    Lexer::new(source).collect()
}

/// Tokenize `source`, returning the tokens along with every lexical error.
pub fn tokenize_collect(source: &str) -> (Vec<Token>, Vec<LexicalError>) {
    let mut errors: Vec<LexicalError> = Vec::new();
    let tokens = Lexer::with_sink(source, LexerOptions::default(), &mut errors).collect();
    (tokens, errors)
}

/// Tokenize `source`, failing on the first lexical error.
pub fn tokenize_strict(source: &str) -> LexResult<Vec<Token>> {
    let mut lexer = Lexer::with_sink(source, LexerOptions::default().strict(), ());
    let tokens: Vec<_> = lexer.by_ref().collect();

    match lexer.halt_error() {
        Some(error) => Err(error.clone()),
        None => Ok(tokens),
    }
}

/// 1-based column of the byte offset `position` in `source`.
///
/// An offset inside a multi-byte character counts as that character's
/// start; an offset past the end counts as the end.
pub fn column(source: &str, position: usize) -> usize {
    let mut end = position.min(source.len());
    while !source.is_char_boundary(end) {
        end -= 1;
    }
    let before = &source[..end];
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    before[line_start..].chars().count() + 1
}

/// Debug helper: one token per line.
pub fn format_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
