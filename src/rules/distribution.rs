//! Distribution rule - detects character over-concentration and measures
//! uniqueness.

use std::ops::RangeInclusive;

use crate::profile::CharacterProfile;
use crate::verdict::RejectReason;

/// Largest share of the password any single printable character may hold.
const MAX_CODEPOINT_PERCENT: usize = 25;

/// Codepoint window walked by the analyzer. Slot 31 is a control byte the
/// scanner never counts; the walk starts there anyway to stay bit-for-bit
/// compatible with the policy module this replaces.
const WINDOW: RangeInclusive<u8> = 31..=126;

/// Uniqueness figures for a password that cleared the over-concentration
/// check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DistributionVerdict {
    /// Printable codepoints with at least one occurrence.
    pub unique_codepoints: usize,
    /// Largest share of the password held by a single codepoint, 0-100.
    pub max_codepoint_percent: usize,
}

/// Walks the occurrence table of `profile`.
///
/// Defined only for non-empty profiles: the percentages divide by the
/// length, and the evaluator rejects empty input before calling here.
///
/// # Returns
/// - `Ok(verdict)` with the uniqueness figures
/// - `Err(reason)` as soon as any codepoint exceeds 25% of the length;
///   this is a hard stop that applies uniformly across all length tiers
pub fn analyze_distribution(
    profile: &CharacterProfile,
) -> Result<DistributionVerdict, RejectReason> {
    debug_assert!(profile.length() > 0, "empty input must be rejected earlier");

    let length = profile.length();
    let mut unique_codepoints = 0;
    let mut max_codepoint_percent = 0;

    for codepoint in WINDOW {
        let count = profile.count_of(codepoint) as usize;
        let percent = count * 100 / length;
        if percent > MAX_CODEPOINT_PERCENT {
            return Err(RejectReason::DuplicateCharacterOverconcentration);
        }
        if count > 0 {
            unique_codepoints += 1;
        }
        max_codepoint_percent = max_codepoint_percent.max(percent);
    }

    Ok(DistributionVerdict {
        unique_codepoints,
        max_codepoint_percent,
    })
}
