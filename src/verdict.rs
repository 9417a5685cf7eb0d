//! Verdict and error types for the policy check.

use thiserror::Error;

/// Reason code for a rejected password.
///
/// Exactly one reason fires per rejected password; evaluation stops at the
/// first failing rule. The `Display` text is the user-facing message
/// handed back to the directory host.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Below the 8-character floor (including the empty password).
    #[error("Passwords must be at least 8 characters long")]
    TooShort,
    /// A single printable character occupies more than 25% of the password.
    #[error("Password contains too many duplicate characters")]
    DuplicateCharacterOverconcentration,
    /// Distinct printable characters fall below the tier's uniqueness floor.
    #[error("Password does not contain enough unique characters")]
    InsufficientUniqueness,
    /// An 8-character password ends in a trailing run of 2 or 4 digits.
    #[error("8-character passwords may not end with 2 or more digits")]
    TrailingDigitsAtEight,
    /// Fewer than 3 character classes in the 8-15 tier.
    #[error(
        "Passwords less than 16 characters require at least 3 traits (upper case, lower case, digits, or special characters)"
    )]
    InsufficientTraitsShort,
    /// Fewer than 2 character classes in the 16+ tiers.
    #[error(
        "Passwords longer than 15 characters require at least 2 traits (upper case, lower case, digits, or special characters)"
    )]
    InsufficientTraitsLongerTier,
}

/// Outcome of a policy check on a well-formed call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolicyVerdict {
    /// The password satisfies every rule of its length tier.
    Accept,
    /// The password violates a rule. The message is an owned string; the
    /// caller is free to hand it to the client verbatim.
    Reject {
        reason: RejectReason,
        message: String,
    },
}

impl PolicyVerdict {
    pub(crate) fn reject(reason: RejectReason) -> Self {
        PolicyVerdict::Reject {
            message: reason.to_string(),
            reason,
        }
    }

    /// Returns `true` if the password was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, PolicyVerdict::Accept)
    }

    /// The reason code, if the password was rejected.
    pub fn reason(&self) -> Option<RejectReason> {
        match self {
            PolicyVerdict::Accept => None,
            PolicyVerdict::Reject { reason, .. } => Some(*reason),
        }
    }
}

/// Malformed call to [`check_password`](crate::check_password).
///
/// Distinct from a policy rejection: a required reference was absent, so
/// no scanning took place and no verdict exists. Recoverable only by the
/// caller fixing its call.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationError {
    /// No password reference was supplied.
    #[error("password reference is missing")]
    MissingPassword,
    /// No subject record handle was supplied.
    #[error("subject record handle is missing")]
    MissingSubjectRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reject_carries_reason_message() {
        let verdict = PolicyVerdict::reject(RejectReason::TooShort);
        assert_eq!(verdict.reason(), Some(RejectReason::TooShort));
        match verdict {
            PolicyVerdict::Reject { message, .. } => {
                assert_eq!(message, "Passwords must be at least 8 characters long");
            }
            PolicyVerdict::Accept => panic!("expected a rejection"),
        }
    }

    #[test]
    fn test_accept_has_no_reason() {
        let verdict = PolicyVerdict::Accept;
        assert!(verdict.is_accepted());
        assert_eq!(verdict.reason(), None);
    }

    #[test]
    fn test_reason_messages_are_distinct() {
        let reasons = [
            RejectReason::TooShort,
            RejectReason::DuplicateCharacterOverconcentration,
            RejectReason::InsufficientUniqueness,
            RejectReason::TrailingDigitsAtEight,
            RejectReason::InsufficientTraitsShort,
            RejectReason::InsufficientTraitsLongerTier,
        ];
        for (i, a) in reasons.iter().enumerate() {
            for b in &reasons[i + 1..] {
                assert_ne!(a.to_string(), b.to_string());
            }
        }
    }
}
