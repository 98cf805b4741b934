//! Risk Level Enumeration

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    VeryHigh,
}

impl RiskLevel {
    /// All levels in ascending order (tie-break order for classification)
    pub const ALL: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::VeryHigh,
    ];

    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very_low",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::VeryHigh => "very_high",
        }
    }

    /// Display label, kept in French as in the source assessment sheets
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "Très faible",
            RiskLevel::Low => "Faible",
            RiskLevel::Medium => "Moyen",
            RiskLevel::High => "Fort",
            RiskLevel::VeryHigh => "Très fort",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levels_are_ordered() {
        assert!(RiskLevel::VeryLow < RiskLevel::Low);
        assert!(RiskLevel::High < RiskLevel::VeryHigh);
    }

    #[test]
    fn test_labels() {
        assert_eq!(RiskLevel::Medium.label(), "Moyen");
        assert_eq!(RiskLevel::Medium.to_string(), "Moyen");
        assert_eq!(RiskLevel::VeryHigh.as_str(), "very_high");
    }
}
