//! Score-to-tier classification
//!
//! Tiers are an ordered table of exclusive lower bounds, checked from the
//! highest bound down. A score equal to a bound falls into the tier below it.

use shared_types::ComplianceStatus;

/// Scores strictly above this are compliant
pub const COMPLIANT_THRESHOLD: f64 = 0.75;

/// Scores strictly above this (and not compliant) are partial matches
pub const PARTIAL_THRESHOLD: f64 = 0.40;

/// (exclusive lower bound, status), highest bound first
pub const TIERS: &[(f64, ComplianceStatus)] = &[
    (COMPLIANT_THRESHOLD, ComplianceStatus::Compliant),
    (PARTIAL_THRESHOLD, ComplianceStatus::Partial),
];

/// Status for scores that clear no bound
pub const FLOOR: ComplianceStatus = ComplianceStatus::NonCompliant;

/// Classify an unrounded similarity score
pub fn classify(score: f64) -> ComplianceStatus {
    TIERS
        .iter()
        .find(|(lower_bound, _)| score > *lower_bound)
        .map(|(_, status)| *status)
        .unwrap_or(FLOOR)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Property: A higher score never lands in a worse tier
        #[test]
        fn classification_is_monotonic(s1 in 0.0f64..=1.0, s2 in 0.0f64..=1.0) {
            let (high, low) = if s1 >= s2 { (s1, s2) } else { (s2, s1) };
            prop_assert!(classify(high) >= classify(low));
        }
    }
}
