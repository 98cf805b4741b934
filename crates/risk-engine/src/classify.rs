//! Type-2 Max-Membership Classification

use membership::{MembershipInterval, MembershipPreset, RiskLevel};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Outcome of type-2 classification at one score
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Type2Outcome {
    /// Level with the greatest upper-band membership
    pub level: RiskLevel,
    /// That level's (lower, upper) degrees at the score
    pub uncertainty: MembershipInterval,
    /// Every level's degrees at the score, in level order
    pub memberships: Vec<(RiskLevel, MembershipInterval)>,
}

/// Pick the level whose upper-band membership at `score` is maximal.
///
/// Ties keep the earliest level in enum order, matching the original
/// sheets' first-wins behavior, so a score every band misses still yields
/// the lowest level deterministically.
pub fn classify_type2(preset: &MembershipPreset, score: f64) -> Type2Outcome {
    let memberships = preset.evaluate_all(score);

    let (mut level, mut uncertainty) = memberships[0];
    for (candidate, interval) in memberships.iter().skip(1) {
        if interval.upper > uncertainty.upper {
            level = *candidate;
            uncertainty = *interval;
        }
    }

    debug!(
        score,
        level = level.as_str(),
        lower = uncertainty.lower,
        upper = uncertainty.upper,
        "type-2 classification"
    );

    Type2Outcome {
        level,
        uncertainty,
        memberships,
    }
}
