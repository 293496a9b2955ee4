//! Error handling for the tokenizer.
//!
//! Lexical errors are non-fatal by default: the lexer reports each one to a
//! [`DiagnosticSink`] and keeps scanning. Sinks decide what to do with them,
//! from logging to collecting them for rendering with `codespan-reporting`.

use codespan_reporting::diagnostic::{Diagnostic, Label};
use std::ops::Range;
use thiserror::Error;

/// A position where no token pattern matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexicalError {
    #[error("Illegal character '{ch}' on line {line}")]
    IllegalCharacter { ch: char, line: usize, position: usize },

    #[error("Integer literal '{literal}' on line {line} does not fit in 64 bits")]
    IntegerOverflow {
        literal: String,
        line: usize,
        position: usize,
    },
}

impl LexicalError {
    pub fn line(&self) -> usize {
        match self {
            LexicalError::IllegalCharacter { line, .. }
            | LexicalError::IntegerOverflow { line, .. } => *line,
        }
    }

    pub fn position(&self) -> usize {
        match self {
            LexicalError::IllegalCharacter { position, .. }
            | LexicalError::IntegerOverflow { position, .. } => *position,
        }
    }

    /// Byte range of the offending text.
    pub fn span(&self) -> Range<usize> {
        match self {
            LexicalError::IllegalCharacter { ch, position, .. } => {
                *position..*position + ch.len_utf8()
            }
            LexicalError::IntegerOverflow {
                literal, position, ..
            } => *position..*position + literal.len(),
        }
    }
}

pub type LexResult<T> = Result<T, LexicalError>;

/// Receiver for lexical diagnostics.
pub trait DiagnosticSink {
    fn report(&mut self, error: &LexicalError);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, error: &LexicalError) {
        (**self).report(error);
    }
}

/// Discards every diagnostic.
impl DiagnosticSink for () {
    fn report(&mut self, _error: &LexicalError) {}
}

impl DiagnosticSink for Vec<LexicalError> {
    fn report(&mut self, error: &LexicalError) {
        self.push(error.clone());
    }
}

/// Sends diagnostics to the `log` facade at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&mut self, error: &LexicalError) {
        log::warn!("{}", error);
    }
}

/// Adapts a closure into a sink.
pub struct CallbackSink<F>(pub F);

impl<F: FnMut(&LexicalError)> DiagnosticSink for CallbackSink<F> {
    fn report(&mut self, error: &LexicalError) {
        (self.0)(error)
    }
}

/// A lexical error tied to a source file.
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: LexicalError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: LexicalError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// Convert into a codespan-reporting diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let label = match &self.error {
            LexicalError::IllegalCharacter { .. } => "no token starts with this character",
            LexicalError::IntegerOverflow { .. } => "literal exceeds 18446744073709551615",
        };

        Diagnostic::error()
            .with_message(self.error.to_string())
            .with_labels(vec![
                Label::primary(self.file_id, self.error.span()).with_message(label)
            ])
    }
}

/// Accumulates the diagnostics of one file.
#[derive(Debug, Default)]
pub struct ErrorCollector {
    file_id: usize,
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new(file_id: usize) -> Self {
        Self {
            file_id,
            errors: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: LexicalError) {
        self.errors.push(DiagnosticError::new(error, self.file_id));
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    pub fn first_error(&self) -> Option<&DiagnosticError> {
        self.errors.first()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic<usize>> + '_ {
        self.errors.iter().map(DiagnosticError::to_diagnostic)
    }
}

impl DiagnosticSink for ErrorCollector {
    fn report(&mut self, error: &LexicalError) {
        self.add_error(error.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    fn illegal(ch: char, position: usize) -> LexicalError {
        LexicalError::IllegalCharacter {
            ch,
            line: 2,
            position,
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(illegal('@', 4).to_string(), "Illegal character '@' on line 2");
        let overflow = LexicalError::IntegerOverflow {
            literal: "99999999999999999999".into(),
            line: 1,
            position: 0,
        };
        assert_eq!(
            overflow.to_string(),
            "Integer literal '99999999999999999999' on line 1 does not fit in 64 bits"
        );
        assert_eq!(overflow.span(), 0..20);
    }

    #[test]
    fn test_span_covers_whole_character() {
        assert_eq!(illegal('@', 4).span(), 4..5);
        assert_eq!(illegal('ق', 4).span(), 4..6);
    }

    #[test]
    fn test_collector() {
        let mut collector = ErrorCollector::new(3);
        assert!(!collector.has_errors());

        collector.report(&illegal('@', 0));
        collector.report(&illegal('$', 5));

        assert_eq!(collector.error_count(), 2);
        let first = collector.first_error().unwrap();
        assert_eq!(first.file_id, 3);
        assert_eq!(first.error, illegal('@', 0));

        let diagnostic = first.to_diagnostic();
        assert_eq!(diagnostic.message, "Illegal character '@' on line 2");
        assert_eq!(diagnostic.labels[0].range, 0..1);
        assert_eq!(collector.diagnostics().count(), 2);
    }

    struct CaptureLogger;

    static CAPTURED: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());
    static LOGGER: CaptureLogger = CaptureLogger;

    impl log::Log for CaptureLogger {
        fn enabled(&self, _metadata: &log::Metadata) -> bool {
            true
        }

        fn log(&self, record: &log::Record) {
            CAPTURED
                .lock()
                .unwrap()
                .push((record.level(), record.args().to_string()));
        }

        fn flush(&self) {}
    }

    #[test]
    fn test_log_sink_warns() {
        let _ = log::set_logger(&LOGGER);
        log::set_max_level(log::LevelFilter::Warn);

        let mut sink = LogSink;
        sink.report(&illegal('§', 9));

        let captured = CAPTURED.lock().unwrap();
        assert!(captured
            .iter()
            .any(|(level, message)| *level == log::Level::Warn
                && message == "Illegal character '§' on line 2"));
    }

    #[test]
    fn test_callback_and_borrowed_sinks() {
        let mut seen = Vec::new();
        {
            let mut sink = CallbackSink(|e: &LexicalError| seen.push(e.line()));
            sink.report(&illegal('@', 0));
        }
        assert_eq!(seen, vec![2]);

        fn feed<S: DiagnosticSink>(mut sink: S) {
            sink.report(&illegal('!', 1));
        }
        let mut errors: Vec<LexicalError> = Vec::new();
        feed(&mut errors);
        feed(&mut errors);
        assert_eq!(errors.len(), 2);
    }
}
