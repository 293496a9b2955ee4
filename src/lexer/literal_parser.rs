//! Literal decoding

/// Decode a run of ASCII decimal digits.
///
/// Returns `None` when the value does not fit in a `u64`.
pub fn parse_integer(digits: &str) -> Option<u64> {
    digits.parse::<u64>().ok()
}

/// Length in bytes of the identifier-character run at the start of `s`.
pub fn word_len(s: &str) -> usize {
    s.bytes()
        .take_while(|b| b.is_ascii_alphanumeric() || *b == b'_')
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer() {
        assert_eq!(parse_integer("0"), Some(0));
        assert_eq!(parse_integer("42"), Some(42));
        assert_eq!(parse_integer("007"), Some(7));
        assert_eq!(parse_integer("18446744073709551615"), Some(u64::MAX));
        assert_eq!(parse_integer("18446744073709551616"), None);
    }

    #[test]
    fn test_word_len() {
        assert_eq!(word_len("aref + 1"), 4);
        assert_eq!(word_len("a_1b)"), 4);
        assert_eq!(word_len(" x"), 0);
        assert_eq!(word_len(""), 0);
    }
}
