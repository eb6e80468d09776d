//! Personal-info section - checks the password against name/email fragments.

use secrecy::SecretString;

use crate::fragments::contains_fragment_of;

/// Checks whether the password embeds part of the given identity value.
///
/// Values shorter than 3 characters carry no constraint and never match.
pub fn personal_info_section(value: &str, password: &SecretString) -> bool {
    contains_fragment_of(value, password)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_name_fragment_in_password() {
        assert!(personal_info_section("Mario", &secret("BestMar10!")));
    }

    #[test]
    fn test_email_fragment_in_password() {
        assert!(personal_info_section(
            "alice@example.com",
            &secret("Xampl3-pwd")
        ));
    }

    #[test]
    fn test_unrelated_password_passes() {
        assert!(!personal_info_section("Mario", &secret("R4nd0m!pwd")));
    }

    #[test]
    fn test_short_value_is_not_checked() {
        assert!(!personal_info_section("Al", &secret("Alabama")));
    }
}
