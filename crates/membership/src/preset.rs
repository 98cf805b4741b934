//! Breakpoint Presets
//!
//! The source assessment sheets disagree on the band breakpoints, so both
//! sets are kept as named presets rather than silently reconciled.

use crate::level::RiskLevel;
use crate::trimf::Triangular;
use crate::type2::{IntervalType2, MembershipInterval};
use serde::{Deserialize, Serialize};

/// Named preset selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PresetKind {
    /// Breakpoints carried over unchanged from the original sheets,
    /// including their quirks (Medium and High share breakpoints, bands
    /// are shifted rather than nested)
    Legacy,
    /// Nested full-coverage bands over the whole score domain; the upper
    /// band dominates the lower band at every point
    #[default]
    Balanced,
}

impl PresetKind {
    /// Build the preset's membership table
    pub fn build(&self) -> MembershipPreset {
        match self {
            PresetKind::Legacy => MembershipPreset::legacy(),
            PresetKind::Balanced => MembershipPreset::balanced(),
        }
    }

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PresetKind::Legacy => "legacy",
            PresetKind::Balanced => "balanced",
        }
    }
}

/// One interval type-2 set per risk level, in level order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MembershipPreset {
    kind: PresetKind,
    bands: [(RiskLevel, IntervalType2); 5],
}

// Breakpoints are compile-time constants, so construction cannot fail.
fn tri(a: f64, b: f64, c: f64) -> Triangular {
    Triangular { a, b, c }
}

fn band(lower: Triangular, upper: Triangular) -> IntervalType2 {
    IntervalType2::new(lower, upper)
}

impl MembershipPreset {
    /// The breakpoints of the original assessment sheets, verbatim
    pub fn legacy() -> Self {
        Self {
            kind: PresetKind::Legacy,
            bands: [
                (
                    RiskLevel::VeryLow,
                    band(tri(-80.0, -70.0, -60.0), tri(-75.0, -65.0, -55.0)),
                ),
                (
                    RiskLevel::Low,
                    band(tri(-10.0, 10.0, 40.0), tri(0.0, 20.0, 40.0)),
                ),
                (
                    RiskLevel::Medium,
                    band(tri(10.0, 40.0, 70.0), tri(15.0, 45.0, 75.0)),
                ),
                (
                    RiskLevel::High,
                    band(tri(10.0, 40.0, 70.0), tri(15.0, 45.0, 75.0)),
                ),
                (
                    RiskLevel::VeryHigh,
                    band(tri(20.0, 50.0, 70.0), tri(25.0, 55.0, 75.0)),
                ),
            ],
        }
    }

    /// Nested bands covering the full score domain.
    ///
    /// Each level's upper band shares the lower band's peak and strictly
    /// contains its support, so upper >= lower everywhere.
    pub fn balanced() -> Self {
        Self {
            kind: PresetKind::Balanced,
            bands: [
                (
                    RiskLevel::VeryLow,
                    band(tri(-80.0, -80.0, -45.0), tri(-80.0, -80.0, -35.0)),
                ),
                (
                    RiskLevel::Low,
                    band(tri(-60.0, -35.0, -5.0), tri(-70.0, -35.0, 0.0)),
                ),
                (
                    RiskLevel::Medium,
                    band(tri(-20.0, 0.0, 25.0), tri(-30.0, 0.0, 30.0)),
                ),
                (
                    RiskLevel::High,
                    band(tri(10.0, 30.0, 55.0), tri(5.0, 30.0, 60.0)),
                ),
                (
                    RiskLevel::VeryHigh,
                    band(tri(40.0, 70.0, 70.0), tri(35.0, 70.0, 70.0)),
                ),
            ],
        }
    }

    /// Which named preset this is
    pub fn kind(&self) -> PresetKind {
        self.kind
    }

    /// Bands in level order
    pub fn bands(&self) -> &[(RiskLevel, IntervalType2)] {
        &self.bands
    }

    /// The set for one level
    pub fn get(&self, level: RiskLevel) -> &IntervalType2 {
        // bands are stored in RiskLevel::ALL order
        &self.bands[level as usize].1
    }

    /// Evaluate every level's interval at `x`, in level order
    pub fn evaluate_all(&self, x: f64) -> Vec<(RiskLevel, MembershipInterval)> {
        self.bands
            .iter()
            .map(|(level, set)| (*level, set.evaluate(x)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SCORE_MAX, SCORE_MIN};

    #[test]
    fn test_bands_stored_in_level_order() {
        for preset in [MembershipPreset::legacy(), MembershipPreset::balanced()] {
            for (i, (level, _)) in preset.bands().iter().enumerate() {
                assert_eq!(*level, RiskLevel::ALL[i]);
                assert_eq!(preset.get(*level), &preset.bands()[i].1);
            }
        }
    }

    #[test]
    fn test_balanced_upper_dominates_lower_everywhere() {
        let preset = MembershipPreset::balanced();
        let mut x = SCORE_MIN;
        while x <= SCORE_MAX {
            for (level, interval) in preset.evaluate_all(x) {
                assert!(
                    interval.upper >= interval.lower - 1e-12,
                    "upper < lower for {level:?} at x={x}: {interval:?}"
                );
            }
            x += 0.25;
        }
    }

    #[test]
    fn test_balanced_covers_full_domain() {
        let preset = MembershipPreset::balanced();
        let mut x = SCORE_MIN;
        while x <= SCORE_MAX {
            let best = preset
                .evaluate_all(x)
                .into_iter()
                .map(|(_, interval)| interval.upper)
                .fold(0.0f64, f64::max);
            assert!(best > 0.0, "no band covers x={x}");
            x += 0.5;
        }
    }

    #[test]
    fn test_legacy_matches_source_sheet() {
        let preset = MembershipPreset::legacy();
        // Peak of the Très faible lower band
        let interval = preset.get(RiskLevel::VeryLow).evaluate(-70.0);
        assert_eq!(interval.lower, 1.0);
        // Legacy quirk kept as-is: Medium and High share breakpoints
        assert_eq!(
            preset.get(RiskLevel::Medium),
            preset.get(RiskLevel::High)
        );
    }

    #[test]
    fn test_balanced_peaks_at_domain_edges() {
        let preset = MembershipPreset::balanced();
        assert_eq!(preset.get(RiskLevel::VeryLow).evaluate(SCORE_MIN).upper, 1.0);
        assert_eq!(preset.get(RiskLevel::VeryHigh).evaluate(SCORE_MAX).upper, 1.0);
    }
}
