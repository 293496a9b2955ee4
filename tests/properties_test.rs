//! Properties that hold for every input.

use darija::lexer::{reserved, Lexer, LexerOptions, TokenKind};
use darija::{tokenize, tokenize_collect, LexicalError};
use proptest::prelude::*;

/// Mostly lexable text, with the occasional stray or non-ASCII character.
fn source() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"([a-z_0-9 +*/()\-\t\n#]|wa|ila|3aref|3amm|@|ق){0,64}").unwrap()
}

proptest! {
    #[test]
    fn tokenizing_is_deterministic(s in source()) {
        prop_assert_eq!(tokenize_collect(&s), tokenize_collect(&s));
    }

    #[test]
    fn restart_replays_the_stream(s in source()) {
        let mut lexer = Lexer::with_sink(&s, LexerOptions::default(), ());
        let first: Vec<_> = lexer.by_ref().collect();
        lexer.restart();
        let second: Vec<_> = lexer.collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn positions_strictly_increase(s in source()) {
        let tokens = tokenize(&s);
        for pair in tokens.windows(2) {
            prop_assert!(pair[1].position >= pair[0].position + pair[0].len);
            prop_assert!(pair[1].position > pair[0].position);
        }
    }

    #[test]
    fn lines_never_decrease(s in source()) {
        let tokens = tokenize(&s);
        for pair in tokens.windows(2) {
            prop_assert!(pair[1].line >= pair[0].line);
        }
        if let Some(last) = tokens.last() {
            prop_assert!(last.line <= 1 + s.matches('\n').count());
        }
    }

    #[test]
    fn spans_point_at_token_text(s in source()) {
        for token in tokenize(&s) {
            let text = &s[token.span()];
            match token.kind {
                TokenKind::Identifier => prop_assert_eq!(token.as_text(), Some(text)),
                TokenKind::Number => prop_assert_eq!(token.as_integer(), text.parse::<u64>().ok()),
                kind => prop_assert_eq!(kind.spelling(), Some(text)),
            }
        }
    }

    #[test]
    fn unreserved_words_are_identifiers(word in "[a-zA-Z_][a-zA-Z0-9_]{0,12}") {
        prop_assume!(reserved::lookup(&word).is_none());
        let tokens = tokenize(&word);
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Identifier);
        prop_assert_eq!(tokens[0].as_text(), Some(word.as_str()));
    }

    #[test]
    fn every_illegal_character_is_reported_once(s in source()) {
        let (_, errors) = tokenize_collect(&s);
        let illegal = errors
            .iter()
            .filter(|e| matches!(e, LexicalError::IllegalCharacter { .. }))
            .count();
        let outside_comments: usize = s
            .lines()
            .map(|line| line.split('#').next().unwrap_or(""))
            .map(|code| code.chars().filter(|c| matches!(c, '@' | 'ق')).count())
            .sum();
        prop_assert_eq!(illegal, outside_comments);
    }
}
