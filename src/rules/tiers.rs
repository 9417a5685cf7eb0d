//! Length tier rules - selects a tier by password length and applies that
//! tier's thresholds.

use super::{DistributionVerdict, RuleResult, TraitTally};
use crate::profile::CharacterProfile;
use crate::verdict::RejectReason;

/// Minimum acceptable password length. Shorter input is rejected by the
/// evaluator and never reaches the tier rules.
pub const MIN_LENGTH: usize = 8;

/// The only length at which the trailing-digit rule applies.
const TRAILING_DIGIT_LENGTH: usize = 8;

/// Thresholds applied to one length tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierThresholds {
    /// Minimum number of present character classes.
    pub min_traits: u8,
    /// Minimum unique-character share of the length, in percent.
    pub min_unique_percent: usize,
    /// Whether the length-8 trailing-digit rule is in force.
    pub trailing_digit_rule: bool,
}

/// Length tier of a password that cleared the minimum-length floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthTier {
    /// 8-15 characters.
    Short,
    /// 16-31 characters.
    Medium,
    /// 32 characters and up.
    Long,
}

impl LengthTier {
    /// Tier for `length`. Callers must have rejected lengths below
    /// [`MIN_LENGTH`] already.
    pub fn of(length: usize) -> LengthTier {
        debug_assert!(length >= MIN_LENGTH);
        if length < 16 {
            LengthTier::Short
        } else if length < 32 {
            LengthTier::Medium
        } else {
            LengthTier::Long
        }
    }

    /// The static threshold table.
    pub fn thresholds(&self) -> TierThresholds {
        match self {
            LengthTier::Short => TierThresholds {
                min_traits: 3,
                min_unique_percent: 60,
                trailing_digit_rule: true,
            },
            LengthTier::Medium => TierThresholds {
                min_traits: 2,
                min_unique_percent: 50,
                trailing_digit_rule: false,
            },
            LengthTier::Long => TierThresholds {
                min_traits: 2,
                min_unique_percent: 20,
                trailing_digit_rule: false,
            },
        }
    }

    fn insufficient_traits(&self) -> RejectReason {
        match self {
            LengthTier::Short => RejectReason::InsufficientTraitsShort,
            LengthTier::Medium | LengthTier::Long => RejectReason::InsufficientTraitsLongerTier,
        }
    }
}

/// Applies the thresholds of the password's length tier, in order:
/// trailing-digit rule, trait floor, uniqueness floor.
pub fn evaluate_tier(
    profile: &CharacterProfile,
    distribution: &DistributionVerdict,
    traits: &TraitTally,
) -> RuleResult {
    let tier = LengthTier::of(profile.length());
    let thresholds = tier.thresholds();

    // Fires only for a trailing run of exactly 2 or exactly 4 digits, and
    // only at exactly 8 characters; runs of 1, 3, or 5+ pass. The
    // asymmetry is inherited from the policy this module replaces and is
    // reproduced as-is rather than generalized.
    if thresholds.trailing_digit_rule
        && profile.length() == TRAILING_DIGIT_LENGTH
        && matches!(profile.trailing_digit_run(), 2 | 4)
    {
        return Err(RejectReason::TrailingDigitsAtEight);
    }

    if traits.present_classes < thresholds.min_traits {
        return Err(tier.insufficient_traits());
    }

    if distribution.unique_codepoints * 100 / profile.length() < thresholds.min_unique_percent {
        return Err(RejectReason::InsufficientUniqueness);
    }

    Ok(())
}
