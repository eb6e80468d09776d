//! Character variety section - points for lowercase, uppercase, digits and symbols.

use secrecy::{ExposeSecret, SecretString};

/// Symbols that satisfy the symbol class.
const SYMBOLS: &[char] = &[
    '!', ',', '%', '&', '@', '#', '$', '^', '*', '?', '_', '~', '<', '>',
];

/// Score contribution from character variety, one point per class present.
///
/// The four classes are lowercase ASCII letters, uppercase ASCII letters,
/// decimal digits, and the fixed symbol set.
pub fn character_variety_score(password: &SecretString) -> u32 {
    let pwd = password.expose_secret();
    let has_lower = pwd.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = pwd.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = pwd.chars().any(|c| c.is_ascii_digit());
    let has_symbol = pwd.chars().any(|c| SYMBOLS.contains(&c));

    [has_lower, has_upper, has_digit, has_symbol]
        .iter()
        .filter(|&&b| b)
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_variety_empty() {
        assert_eq!(character_variety_score(&secret("")), 0);
    }

    #[test]
    fn test_variety_single_classes() {
        assert_eq!(character_variety_score(&secret("lower")), 1);
        assert_eq!(character_variety_score(&secret("UPPER")), 1);
        assert_eq!(character_variety_score(&secret("2048")), 1);
        assert_eq!(character_variety_score(&secret("!@#")), 1);
    }

    #[test]
    fn test_variety_all_classes() {
        assert_eq!(character_variety_score(&secret("aZ3~")), 4);
    }

    #[test]
    fn test_comma_counts_as_symbol() {
        assert_eq!(character_variety_score(&secret(",")), 1);
    }

    #[test]
    fn test_characters_outside_symbol_set() {
        // space, dash and parentheses are not in the symbol set
        assert_eq!(character_variety_score(&secret(" -()")), 0);
        assert_eq!(character_variety_score(&secret("pass word-")), 1);
    }
}
