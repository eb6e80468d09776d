//! Password strength indication library
//!
//! This library scores a candidate password for strength and flags specific
//! weaknesses: reuse of the user's name or email, repeated characters, and
//! incrementing or decrementing character sequences.
//!
//! # Features
//!
//! - `async` (default): Enables a debounced async variant with cancellation
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_indicator::check_password_strength;
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd19".to_string().into());
//! let indicator = check_password_strength(&password, "Mario", "mario@example.com");
//!
//! println!("Score: {}", indicator.score);
//! println!("Strength: {}", indicator.strength_text());
//! ```

// Internal modules
mod evaluator;
mod fragments;
mod sections;
mod types;

// Public API
pub use evaluator::{
    check_password_strength, EMAIL_VIOLATION, MONOTONIC_SEQUENCE_VIOLATION, NAME_VIOLATION,
    REPEATED_SEQUENCE_VIOLATION,
};
pub use types::{StrengthIndicator, StrengthTier};

#[cfg(feature = "async")]
pub use evaluator::check_password_strength_tx;
