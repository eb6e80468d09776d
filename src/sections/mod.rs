//! Password evaluation sections
//!
//! Each section analyzes a specific aspect of password strength. The scoring
//! sections return additive points; the detector sections return whether
//! their rule was violated. The evaluator owns ordering and score effects.

mod length;
mod pattern;
mod personal_info;
mod variety;

pub use length::length_score;
pub use pattern::{has_monotonic_sequence, has_repeated_run};
pub use personal_info::personal_info_section;
pub use variety::character_variety_score;
