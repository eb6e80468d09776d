//! Password strength evaluator - main evaluation logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    character_variety_score, has_monotonic_sequence, has_repeated_run, length_score,
    personal_info_section,
};
use crate::types::{StrengthIndicator, StrengthTier};

/// Violation message when the password contains part of the user's name.
pub const NAME_VIOLATION: &str = "Password must not contain part of your name.";

/// Violation message when the password contains part of the user's email.
pub const EMAIL_VIOLATION: &str = "Password must not contain part of your email.";

/// Violation message for a character repeated three or more times in a row.
pub const REPEATED_SEQUENCE_VIOLATION: &str =
    "Password contains repeated sequences of characters.";

/// Violation message for incrementing or decrementing code-point runs.
pub const MONOTONIC_SEQUENCE_VIOLATION: &str =
    "Password contains incrementing or decrementing sequences of characters.";

/// Checks password strength against the user's declared name and email.
///
/// Scoring is additive (length thresholds plus character variety, 0-10).
/// The detectors then run in fixed order - name, email, repeated run,
/// monotonic sequence - and the first violation short-circuits with its
/// message and leaves the tier unassigned. Name, email and
/// monotonic-sequence violations reset the score to 0; a repeated-run
/// violation keeps the accumulated score.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `name` - The user's declared name; under 3 characters it is not checked
/// * `email` - The user's email; under 3 characters it is not checked
///
/// # Returns
/// A `StrengthIndicator` with the score, tier and any violation.
pub fn check_password_strength(
    password: &SecretString,
    name: &str,
    email: &str,
) -> StrengthIndicator {
    let mut indicator = StrengthIndicator::new(password);

    indicator.score = length_score(password) + character_variety_score(password);

    if personal_info_section(name, password) {
        indicator.error_message = Some(NAME_VIOLATION);
        indicator.flag = true;
        indicator.score = 0;
        return indicator;
    }

    if personal_info_section(email, password) {
        indicator.error_message = Some(EMAIL_VIOLATION);
        indicator.flag = true;
        indicator.score = 0;
        return indicator;
    }

    if has_repeated_run(password) {
        // the one violation that keeps the accumulated score
        indicator.error_message = Some(REPEATED_SEQUENCE_VIOLATION);
        indicator.flag = true;
        return indicator;
    }
    indicator.flag = false;

    if has_monotonic_sequence(password) {
        indicator.error_message = Some(MONOTONIC_SEQUENCE_VIOLATION);
        indicator.flag = true;
        indicator.score = 0;
        return indicator;
    }
    indicator.flag = false;

    indicator.tier = Some(StrengthTier::from_score(indicator.score));

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "password evaluated: score {} tier {}",
        indicator.score,
        indicator.strength_text()
    );

    indicator
}

/// Async version that debounces, then sends the indicator via channel.
///
/// A token cancelled during the debounce window drops the evaluation and
/// nothing is sent on the channel.
#[cfg(feature = "async")]
pub async fn check_password_strength_tx(
    password: &SecretString,
    name: &str,
    email: &str,
    token: CancellationToken,
    tx: mpsc::Sender<StrengthIndicator>,
) {
    use std::time::Duration;

    #[cfg(feature = "tracing")]
    tracing::info!("strength check is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("strength check cancelled");
        return;
    }

    let indicator = check_password_strength(password, name, email);

    if let Err(_e) = tx.send(indicator).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send strength indicator: {}", _e);
    }
}
