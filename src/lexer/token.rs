//! Token definitions

use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Category of a token.
///
/// The first eight kinds are structural; every other kind stands for exactly
/// one reserved word of the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Number,
    Identifier,
    Plus,
    Minus,
    Times,
    Divide,
    LParen,
    RParen,

    // Keywords
    And,
    As,
    Assert,
    Async,
    Await,
    Break,
    Class,
    Continue,
    Def,
    Del,
    Elif,
    Else,
    Except,
    False,
    Finally,
    For,
    From,
    Global,
    If,
    Import,
    In,
    Is,
    Lambda,
    None,
    Nonlocal,
    Not,
    Or,
    Pass,
    Raise,
    Return,
    True,
    Try,
    While,
    With,
    Yield,
}

impl TokenKind {
    /// Stable upper-case name, used for display and serialization.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::Number => "NUMBER",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Plus => "PLUS",
            TokenKind::Minus => "MINUS",
            TokenKind::Times => "TIMES",
            TokenKind::Divide => "DIVIDE",
            TokenKind::LParen => "LPAREN",
            TokenKind::RParen => "RPAREN",
            TokenKind::And => "AND",
            TokenKind::As => "AS",
            TokenKind::Assert => "ASSERT",
            TokenKind::Async => "ASYNC",
            TokenKind::Await => "AWAIT",
            TokenKind::Break => "BREAK",
            TokenKind::Class => "CLASS",
            TokenKind::Continue => "CONTINUE",
            TokenKind::Def => "DEF",
            TokenKind::Del => "DEL",
            TokenKind::Elif => "ELIF",
            TokenKind::Else => "ELSE",
            TokenKind::Except => "EXCEPT",
            TokenKind::False => "FALSE",
            TokenKind::Finally => "FINALLY",
            TokenKind::For => "FOR",
            TokenKind::From => "FROM",
            TokenKind::Global => "GLOBAL",
            TokenKind::If => "IF",
            TokenKind::Import => "IMPORT",
            TokenKind::In => "IN",
            TokenKind::Is => "IS",
            TokenKind::Lambda => "LAMBDA",
            TokenKind::None => "NONE",
            TokenKind::Nonlocal => "NONLOCAL",
            TokenKind::Not => "NOT",
            TokenKind::Or => "OR",
            TokenKind::Pass => "PASS",
            TokenKind::Raise => "RAISE",
            TokenKind::Return => "RETURN",
            TokenKind::True => "TRUE",
            TokenKind::Try => "TRY",
            TokenKind::While => "WHILE",
            TokenKind::With => "WITH",
            TokenKind::Yield => "YIELD",
        }
    }

    pub fn is_keyword(self) -> bool {
        self > TokenKind::RParen
    }

    /// The source text this kind is spelled with, if it has a fixed one.
    pub fn spelling(self) -> Option<&'static str> {
        match self {
            TokenKind::Number | TokenKind::Identifier => None,
            TokenKind::Plus => Some("+"),
            TokenKind::Minus => Some("-"),
            TokenKind::Times => Some("*"),
            TokenKind::Divide => Some("/"),
            TokenKind::LParen => Some("("),
            TokenKind::RParen => Some(")"),
            keyword => super::reserved::spelling_of(keyword),
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Decoded payload of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Integer(u64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Integer(n) => write!(f, "{}", n),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

/// A classified, positioned unit of source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub kind: TokenKind,
    /// `Integer` for numbers, `Text` for identifiers, absent otherwise.
    pub value: Option<Literal>,
    /// 1-based line the token starts on
    pub line: usize,
    /// Byte offset of the first character
    pub position: usize,
    /// Matched length in bytes
    pub len: usize,
}

impl Token {
    pub fn new(kind: TokenKind, value: Option<Literal>, line: usize, span: Range<usize>) -> Self {
        Self {
            kind,
            value,
            line,
            position: span.start,
            len: span.end - span.start,
        }
    }

    pub fn span(&self) -> Range<usize> {
        self.position..self.position + self.len
    }

    pub fn as_integer(&self) -> Option<u64> {
        match self.value {
            Some(Literal::Integer(n)) => Some(n),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match &self.value {
            Some(Literal::Text(s)) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match &self.value {
            Some(literal) => literal.to_string(),
            None => self.kind.spelling().unwrap_or_default().to_owned(),
        };
        write!(f, "{} {} {} {}", self.kind, value, self.line, self.position)
    }
}
