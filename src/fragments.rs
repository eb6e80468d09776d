//! Personal-info fragment matching.
//!
//! Derives the 3-character fragments of a user's name or email and checks
//! whether a password contains any of them, case-insensitively.

use regex::RegexBuilder;
use secrecy::{ExposeSecret, SecretString};

const FRAGMENT_LEN: usize = 3;

/// Splits `value` into its contiguous 3-character fragments.
///
/// For each of the three alignment offsets, the remaining suffix is cut into
/// consecutive non-overlapping 3-character chunks; a trailing remainder
/// shorter than 3 characters is dropped. The union over the offsets covers
/// every 3-character window of the value.
pub(crate) fn three_char_fragments(value: &str) -> Vec<String> {
    let chars: Vec<char> = value.chars().collect();
    let mut fragments = Vec::new();
    for offset in 0..FRAGMENT_LEN.min(chars.len()) {
        for chunk in chars[offset..].chunks_exact(FRAGMENT_LEN) {
            fragments.push(chunk.iter().collect());
        }
    }
    fragments
}

/// True if the password contains any 3-character fragment of `value`.
///
/// Values shorter than 3 characters carry no constraint and never match.
/// Fragments are matched literally (regex metacharacters escaped) and
/// case-insensitively.
pub(crate) fn contains_fragment_of(value: &str, password: &SecretString) -> bool {
    if value.chars().count() < FRAGMENT_LEN {
        return false;
    }

    let pattern = three_char_fragments(value)
        .iter()
        .map(|fragment| regex::escape(fragment))
        .collect::<Vec<_>>()
        .join("|");

    match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re.is_match(password.expose_secret()),
        // oversized values carry no usable constraint, same as short ones
        Err(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_fragments_of_five_chars() {
        assert_eq!(three_char_fragments("Alice"), vec!["Ali", "lic", "ice"]);
    }

    #[test]
    fn test_fragments_of_six_chars() {
        assert_eq!(
            three_char_fragments("abcdef"),
            vec!["abc", "def", "bcd", "cde"]
        );
    }

    #[test]
    fn test_fragments_of_short_value() {
        assert!(three_char_fragments("Jo").is_empty());
        assert!(three_char_fragments("").is_empty());
    }

    #[test]
    fn test_match_is_case_insensitive() {
        assert!(contains_fragment_of("Alice", &secret("zoLICpq")));
        assert!(contains_fragment_of("alice", &secret("xALIx")));
    }

    #[test]
    fn test_no_match() {
        assert!(!contains_fragment_of("Alice", &secret("R4nd0m!pwd")));
    }

    #[test]
    fn test_short_value_never_matches() {
        assert!(!contains_fragment_of("Al", &secret("Alabama")));
        assert!(!contains_fragment_of("", &secret("anything")));
    }

    #[test]
    fn test_metacharacters_are_literal() {
        // "a+b" must match only the literal text, not "one or more a, then b"
        assert!(contains_fragment_of("a+b@c", &secret("xa+by")));
        assert!(!contains_fragment_of("a+b@c", &secret("aab")));
    }
}
