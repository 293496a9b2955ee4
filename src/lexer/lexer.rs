//! Lexer main implementation

use logos::{Logos, Span};
use std::iter::FusedIterator;

use super::literal_parser::word_len;
use super::raw_token::{Cursor, RawError, RawToken};
use super::reserved;
use super::token::{Literal, Token, TokenKind};
use crate::error::{DiagnosticSink, LexicalError, LogSink};

/// What the lexer does after reporting a lexical error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Recovery {
    /// Skip the offending text and keep scanning.
    #[default]
    Skip,
    /// End the token stream at the first error.
    Halt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerOptions {
    /// Line number of the first line of input
    pub start_line: usize,
    pub recovery: Recovery,
}

impl Default for LexerOptions {
    fn default() -> Self {
        Self {
            start_line: 1,
            recovery: Recovery::Skip,
        }
    }
}

impl LexerOptions {
    /// Lines are 1-based; 0 is treated as 1.
    pub fn start_line(mut self, line: usize) -> Self {
        self.start_line = line.max(1);
        self
    }

    pub fn strict(mut self) -> Self {
        self.recovery = Recovery::Halt;
        self
    }
}

/// Lexer for Darija source text.
///
/// Tokens are produced on demand. Diagnostics go to the sink `S`; by default
/// they are logged.
pub struct Lexer<'a, S = LogSink> {
    source: &'a str,
    inner: logos::Lexer<'a, RawToken>,
    options: LexerOptions,
    sink: S,
    halted: Option<LexicalError>,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Self::with_options(source, LexerOptions::default())
    }

    pub fn with_options(source: &'a str, options: LexerOptions) -> Self {
        Lexer::with_sink(source, options, LogSink)
    }
}

impl<'a, S: DiagnosticSink> Lexer<'a, S> {
    pub fn with_sink(source: &'a str, options: LexerOptions, sink: S) -> Self {
        log::debug!(
            "Lexing {} bytes starting at line {}",
            source.len(),
            options.start_line
        );
        Self {
            source,
            inner: RawToken::lexer_with_extras(source, Cursor::at_line(options.start_line)),
            options,
            sink,
            halted: None,
        }
    }

    /// Rewind to the start of the input with a fresh cursor.
    pub fn restart(&mut self) {
        log::debug!("Restarting lexer at line {}", self.options.start_line);
        self.inner = RawToken::lexer_with_extras(self.source, Cursor::at_line(self.options.start_line));
        self.halted = None;
    }

    /// Current line of the cursor.
    pub fn line(&self) -> usize {
        self.inner.extras.line
    }

    pub fn source(&self) -> &'a str {
        self.source
    }

    pub fn options(&self) -> LexerOptions {
        self.options
    }

    /// The error that ended the stream under [`Recovery::Halt`].
    pub fn halt_error(&self) -> Option<&LexicalError> {
        self.halted.as_ref()
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    fn cook(&mut self, raw: RawToken, span: Span, line: usize) -> Option<Token> {
        let kind = match raw {
            RawToken::Number(value) => return Some(self.number(value, span, line)),
            RawToken::Word => {
                let text = &self.source[span.clone()];
                let token = match reserved::lookup(text) {
                    Some(kind) => Token::new(kind, None, line, span),
                    None => Token::new(
                        TokenKind::Identifier,
                        Some(Literal::Text(text.to_owned())),
                        line,
                        span,
                    ),
                };
                return Some(token);
            }
            RawToken::Plus => TokenKind::Plus,
            RawToken::Minus => TokenKind::Minus,
            RawToken::Times => TokenKind::Times,
            RawToken::Divide => TokenKind::Divide,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            // skipped by their rules
            RawToken::Comment | RawToken::Newline => return None,
        };
        Some(Token::new(kind, None, line, span))
    }

    /// A digit run, unless it starts a reserved spelling such as `3aref`.
    fn number(&mut self, value: u64, span: Span, line: usize) -> Token {
        let word_end = span.start + word_len(&self.source[span.start..]);
        if word_end > span.end {
            if let Some(kind) = reserved::lookup(&self.source[span.start..word_end]) {
                self.inner.bump(word_end - span.end);
                return Token::new(kind, None, line, span.start..word_end);
            }
        }
        Token::new(TokenKind::Number, Some(Literal::Integer(value)), line, span)
    }

    fn error_at(&mut self, error: RawError, span: Span, line: usize) -> LexicalError {
        match error {
            RawError::Overflow => LexicalError::IntegerOverflow {
                literal: self.source[span.clone()].to_owned(),
                line,
                position: span.start,
            },
            RawError::Unrecognized => {
                let ch = self.source[span.start..]
                    .chars()
                    .next()
                    .unwrap_or(char::REPLACEMENT_CHARACTER);
                // Skip exactly one whole character.
                let char_end = span.start + ch.len_utf8();
                if span.end < char_end {
                    self.inner.bump(char_end - span.end);
                }
                LexicalError::IllegalCharacter {
                    ch,
                    line,
                    position: span.start,
                }
            }
        }
    }
}

impl<'a, S: DiagnosticSink> Iterator for Lexer<'a, S> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        if self.halted.is_some() {
            return None;
        }

        while let Some(result) = self.inner.next() {
            let span = self.inner.span();
            let line = self.inner.extras.line;

            match result {
                Ok(raw) => {
                    if let Some(token) = self.cook(raw, span, line) {
                        return Some(token);
                    }
                }
                Err(raw) => {
                    let error = self.error_at(raw, span, line);
                    self.sink.report(&error);
                    if self.options.recovery == Recovery::Halt {
                        self.halted = Some(error);
                        return None;
                    }
                }
            }
        }

        None
    }
}

impl<'a, S: DiagnosticSink> FusedIterator for Lexer<'a, S> {}
