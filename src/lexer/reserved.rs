//! Reserved words
//!
//! Keywords are written in transliterated Darija. Every identifier-shaped
//! match is looked up here exactly once; the lookup is case-sensitive and
//! does no normalization.

use indexmap::IndexMap;
use std::sync::LazyLock;

use super::token::TokenKind;

const RESERVED: &[(&str, TokenKind)] = &[
    ("wa", TokenKind::And),
    ("b7al", TokenKind::As),
    ("ftared", TokenKind::Assert),
    ("mamtzamench", TokenKind::Async),
    ("tsna", TokenKind::Await),
    ("khrej", TokenKind::Break),
    ("naw3", TokenKind::Class),
    ("kmel", TokenKind::Continue),
    ("3aref", TokenKind::Def),
    ("mse7", TokenKind::Del),
    ("wlaila", TokenKind::Elif),
    ("wla", TokenKind::Else),
    ("masd9ch", TokenKind::Except),
    ("khate2", TokenKind::False),
    ("akhiran", TokenKind::Finally),
    ("lkola", TokenKind::For),
    ("men", TokenKind::From),
    ("3amm", TokenKind::Global),
    ("ila", TokenKind::If),
    ("jib", TokenKind::Import),
    ("fi", TokenKind::In),
    ("huwa", TokenKind::Is),
    ("lambda", TokenKind::Lambda),
    ("walo", TokenKind::None),
    ("machima7ali", TokenKind::Nonlocal),
    ("machi", TokenKind::Not),
    ("aw", TokenKind::Or),
    ("douz", TokenKind::Pass),
    ("tele3", TokenKind::Raise),
    ("red", TokenKind::Return),
    ("s7i7", TokenKind::True),
    ("jereb", TokenKind::Try),
    ("ma7ed", TokenKind::While),
    ("m3a", TokenKind::With),
    ("rje3", TokenKind::Yield),
];

static TABLE: LazyLock<IndexMap<&'static str, TokenKind>> =
    LazyLock::new(|| RESERVED.iter().copied().collect());

/// Keyword kind for `word`, if it is reserved.
pub fn lookup(word: &str) -> Option<TokenKind> {
    TABLE.get(word).copied()
}

/// All reserved spellings in declaration order.
pub fn words() -> impl Iterator<Item = (&'static str, TokenKind)> {
    TABLE.iter().map(|(word, kind)| (*word, *kind))
}

pub(crate) fn spelling_of(kind: TokenKind) -> Option<&'static str> {
    RESERVED
        .iter()
        .find(|(_, k)| *k == kind)
        .map(|(word, _)| *word)
}
