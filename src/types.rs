//! Result types for password strength indication.

use secrecy::{ExposeSecret, SecretString};

/// Ordered strength tiers mapped from the accumulated score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum StrengthTier {
    VeryWeak,
    Weak,
    Fair,
    Strong,
    VeryStrong,
}

impl StrengthTier {
    /// Maps an accumulated score (0-10) to its tier.
    pub fn from_score(score: u32) -> Self {
        match score {
            0..=2 => Self::VeryWeak,
            3..=4 => Self::Weak,
            5..=6 => Self::Fair,
            7..=8 => Self::Strong,
            _ => Self::VeryStrong,
        }
    }

    /// Display label for the tier.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Fair => "Fair",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }

    /// Ordinal position of the tier, 0-4.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Outcome of a single password strength check.
///
/// `tier` stays `None` on the paths where a detector rule fired before
/// tiering ran; `strength_text()` and `index()` report `""` and `0` there,
/// so the label and the ordinal can never disagree.
#[derive(Debug)]
pub struct StrengthIndicator {
    /// Accumulated score, 0-10. Forced to 0 by name, email and
    /// monotonic-sequence violations.
    pub score: u32,
    /// Assigned tier, or `None` when a detector short-circuited.
    pub tier: Option<StrengthTier>,
    /// True when a detector rule was violated.
    pub flag: bool,
    /// Violation message, or `None` when no rule fired.
    pub error_message: Option<&'static str>,
    /// Verbatim echo of the checked password.
    pub last_password: SecretString,
}

impl StrengthIndicator {
    pub(crate) fn new(password: &SecretString) -> Self {
        Self {
            score: 0,
            tier: None,
            flag: false,
            error_message: None,
            last_password: SecretString::new(password.expose_secret().to_owned().into()),
        }
    }

    /// Label of the assigned tier, or `""` when no tier was assigned.
    pub fn strength_text(&self) -> &'static str {
        self.tier.map(|tier| tier.label()).unwrap_or("")
    }

    /// Ordinal of the assigned tier (0-4), or `0` when no tier was assigned.
    pub fn index(&self) -> usize {
        self.tier.map(|tier| tier.index()).unwrap_or(0)
    }
}
