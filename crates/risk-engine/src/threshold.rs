//! Threshold-Table Classification

use membership::{RiskLevel, SCORE_MAX, SCORE_MIN};
use serde::{Deserialize, Serialize};

/// One half-open classification band `[lower, upper)`.
///
/// The final band of a table is closed at the top so the domain edge
/// itself classifies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdBand {
    /// Inclusive lower edge
    pub lower: f64,
    /// Exclusive upper edge (inclusive for the last band)
    pub upper: f64,
    /// Level assigned inside the band
    pub level: RiskLevel,
}

/// Ordered, gap-free table of classification bands over the score range
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdTable {
    bands: Vec<ThresholdBand>,
}

impl ThresholdTable {
    /// The standard table over [-80, 70]
    pub fn standard() -> Self {
        let edges = [SCORE_MIN, -45.0, -10.0, 25.0, 50.0, SCORE_MAX];
        let bands = RiskLevel::ALL
            .iter()
            .enumerate()
            .map(|(i, level)| ThresholdBand {
                lower: edges[i],
                upper: edges[i + 1],
                level: *level,
            })
            .collect();
        Self { bands }
    }

    /// Classify a score; `None` means the score lies outside every band
    pub fn classify(&self, score: f64) -> Option<RiskLevel> {
        for (i, band) in self.bands.iter().enumerate() {
            let last = i == self.bands.len() - 1;
            let inside = if last {
                score >= band.lower && score <= band.upper
            } else {
                score >= band.lower && score < band.upper
            };
            if inside {
                return Some(band.level);
            }
        }
        None
    }

    /// Bands in ascending order
    pub fn bands(&self) -> &[ThresholdBand] {
        &self.bands
    }
}

impl Default for ThresholdTable {
    fn default() -> Self {
        Self::standard()
    }
}
