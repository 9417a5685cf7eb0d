//! Password policy evaluator - main validation logic.

use secrecy::{ExposeSecret, SecretString};

use crate::profile::CharacterProfile;
use crate::rules::{MIN_LENGTH, RuleResult, analyze_distribution, count_traits, evaluate_tier};
use crate::verdict::{InvocationError, PolicyVerdict, RejectReason};

/// Checks a candidate password on behalf of the directory host.
///
/// The host hands over the password and an opaque subject record. The
/// record is never read; it is accepted only to satisfy the call
/// contract, so any dummy value works in tests. Both references must be
/// present or the call itself is malformed and no scanning takes place.
///
/// # Arguments
/// * `password` - The candidate password
/// * `subject` - Opaque handle of the entry whose password is changing
///
/// # Returns
/// A `PolicyVerdict` for a well-formed call, or an `InvocationError` when
/// a required reference is absent.
pub fn check_password<S>(
    password: Option<&SecretString>,
    subject: Option<&S>,
) -> Result<PolicyVerdict, InvocationError> {
    let Some(password) = password else {
        #[cfg(feature = "tracing")]
        tracing::error!("policy check invoked without a password reference");
        return Err(InvocationError::MissingPassword);
    };
    if subject.is_none() {
        #[cfg(feature = "tracing")]
        tracing::error!("policy check invoked without a subject record");
        return Err(InvocationError::MissingSubjectRecord);
    }

    Ok(evaluate(password))
}

/// Evaluates `password` against the tiered policy rules.
///
/// Pure function of the password bytes: no I/O, no shared state, no
/// suspension points; the same input always produces the same verdict,
/// and concurrent calls need no coordination.
pub fn evaluate(password: &SecretString) -> PolicyVerdict {
    let profile = CharacterProfile::scan(password.expose_secret().as_bytes());

    match apply_rules(&profile) {
        Ok(()) => PolicyVerdict::Accept,
        Err(reason) => {
            #[cfg(feature = "tracing")]
            tracing::debug!("password rejected: {:?}", reason);
            PolicyVerdict::reject(reason)
        }
    }
}

/// The ordered decision list. The length floor runs first so that the
/// percentage rules never divide by a zero length; over-concentration
/// runs next, ahead of every tier threshold.
fn apply_rules(profile: &CharacterProfile) -> RuleResult {
    if profile.length() < MIN_LENGTH {
        return Err(RejectReason::TooShort);
    }

    let distribution = analyze_distribution(profile)?;
    let traits = count_traits(profile);

    evaluate_tier(profile, &distribution, &traits)
}
