//! Raw pattern rules
//!
//! The logos-derived enum below is the rule table. Its patterns never
//! overlap at a given start character, so the match at each position is
//! simply the longest one. Reserved-word lookup and token construction
//! happen afterwards in [`super::Lexer`].

use logos::{Lexer as LogosLexer, Logos, Skip};

use super::literal_parser::parse_integer;

/// State carried through a logos run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub line: usize,
}

impl Cursor {
    /// Lines are 1-based; 0 is treated as 1.
    pub fn at_line(line: usize) -> Self {
        Self { line: line.max(1) }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::at_line(1)
    }
}

/// Why a rule failed to produce a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RawError {
    /// No rule matches at this position.
    #[default]
    Unrecognized,
    /// A digit run too large for the integer payload.
    Overflow,
}

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(extras = Cursor)]
#[logos(error = RawError)]
#[logos(skip r"[ \t]+")]
pub enum RawToken {
    #[regex(r"#[^\n]*", logos::skip)]
    Comment,

    #[regex(r"[0-9]+", |lex| parse_integer(lex.slice()).ok_or(RawError::Overflow))]
    Number(u64),

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Word,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Times,
    #[token("/")]
    Divide,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,

    #[regex(r"\n+", newline_run)]
    Newline,
}

fn newline_run(lex: &mut LogosLexer<RawToken>) -> Skip {
    lex.extras.line = lex.extras.line.saturating_add(lex.slice().len());
    Skip
}
