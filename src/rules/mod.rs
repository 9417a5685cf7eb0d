//! Policy rules
//!
//! Each rule checks one aspect of the candidate password. Evaluation is an
//! ordered decision list: the first failing rule produces the rejection
//! and nothing after it runs.

mod distribution;
mod tiers;
mod traits;

pub use distribution::{DistributionVerdict, analyze_distribution};
pub use tiers::{LengthTier, MIN_LENGTH, TierThresholds, evaluate_tier};
pub use traits::{TraitTally, count_traits};

use crate::verdict::RejectReason;

/// Result type for rule evaluation functions.
/// - `Ok(())` - Rule passed
/// - `Err(reason)` - Rule failed; evaluation stops here
pub type RuleResult = Result<(), RejectReason>;
