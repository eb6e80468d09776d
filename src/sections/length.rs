//! Length section - additive points for password length thresholds.

use secrecy::{ExposeSecret, SecretString};

/// Score contribution from password length.
///
/// The thresholds are independent, not exclusive: a 16-character password
/// collects all three bonuses for a total of 6 points.
pub fn length_score(password: &SecretString) -> u32 {
    let len = password.expose_secret().chars().count();
    let mut score = 0;
    if len >= 8 {
        score += 1;
    }
    if len >= 12 {
        score += 2;
    }
    if len >= 16 {
        score += 3;
    }
    score
}
