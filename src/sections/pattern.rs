//! Pattern section - detects repeated runs and monotonic code-point sequences.

use secrecy::{ExposeSecret, SecretString};

/// True if any single character appears three or more times consecutively.
pub fn has_repeated_run(password: &SecretString) -> bool {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    let mut repeated_count = 1;
    for i in 1..chars.len() {
        if chars[i] == chars[i - 1] {
            repeated_count += 1;
            if repeated_count >= 3 {
                return true;
            }
        } else {
            repeated_count = 1;
        }
    }

    false
}

/// True if three consecutive characters form a strictly incrementing or
/// strictly decrementing run of code points.
///
/// Comparison is over raw code points, not alphabet positions, so "9:;"
/// counts as an incrementing run.
pub fn has_monotonic_sequence(password: &SecretString) -> bool {
    let chars: Vec<char> = password.expose_secret().chars().collect();

    chars.windows(3).any(|window| {
        let first = window[0] as i32;
        let second = window[1] as i32;
        let third = window[2] as i32;

        (first + 1 == second && second + 1 == third)
            || (first - 1 == second && second - 1 == third)
    })
}
