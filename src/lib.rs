//! Tiered password policy validation
//!
//! This library validates candidate passwords on behalf of a
//! directory-service password-change hook: a password is accepted or
//! rejected against a fixed set of length-tiered rules, and a rejection
//! carries the human-readable reason handed back to the client.
//!
//! Rules, in evaluation order:
//!
//! - minimum length of 8 characters (checked first, so the percentage
//!   rules never see empty input)
//! - no single printable character over 25% of the password
//! - per length tier (8-15, 16-31, 32+): a minimum number of character
//!   classes and a minimum share of unique characters; 8-character
//!   passwords additionally may not end in a run of 2 or 4 digits
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use pwd_policy::check_password;
//! use secrecy::SecretString;
//!
//! // The subject record is whatever opaque handle the host supplies;
//! // it is passed through unread.
//! let entry = ();
//! let password = SecretString::new("Str0ng&Uniq".to_string().into());
//!
//! let verdict = check_password(Some(&password), Some(&entry)).unwrap();
//! assert!(verdict.is_accepted());
//! ```

// Internal modules
mod evaluator;
mod profile;
mod rules;
mod verdict;

// Public API
pub use evaluator::{check_password, evaluate};
pub use profile::CharacterProfile;
pub use rules::{
    DistributionVerdict, LengthTier, MIN_LENGTH, TierThresholds, TraitTally,
    analyze_distribution, count_traits, evaluate_tier,
};
pub use verdict::{InvocationError, PolicyVerdict, RejectReason};
