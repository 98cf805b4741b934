//! Risk Score Computation

use input_validator::AssessmentInput;
use membership::{SCORE_MAX, SCORE_MIN};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Score formula preset.
///
/// The source assessment sheets disagree on the formula, so both are kept
/// as first-class presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFormula {
    /// Plain average of the three raw measures
    Average,
    /// Sum of signed deviations from the per-measure reference midpoints
    #[default]
    DeviationSum,
}

impl ScoreFormula {
    /// Get string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreFormula::Average => "average",
            ScoreFormula::DeviationSum => "deviation_sum",
        }
    }
}

/// Score configuration
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Formula to apply
    pub formula: ScoreFormula,
    /// Technology reference midpoint
    pub technology_midpoint: f64,
    /// Norms reference midpoint
    pub norms_midpoint: f64,
    /// Scope reference midpoint
    pub scope_midpoint: f64,
    /// Closed range the score is clamped to
    pub clamp: (f64, f64),
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            formula: ScoreFormula::default(),
            technology_midpoint: 50.0,
            norms_midpoint: 40.0,
            scope_midpoint: 25.0,
            clamp: (SCORE_MIN, SCORE_MAX),
        }
    }
}

/// Compute the risk score for an already-validated input triple
pub fn compute_score(config: &ScoreConfig, input: &AssessmentInput) -> f64 {
    let raw = match config.formula {
        ScoreFormula::Average => (input.technology + input.norms + input.scope) / 3.0,
        ScoreFormula::DeviationSum => {
            (input.technology - config.technology_midpoint)
                + (input.norms - config.norms_midpoint)
                + (input.scope - config.scope_midpoint)
        }
    };
    let score = raw.clamp(config.clamp.0, config.clamp.1);
    debug!(
        formula = config.formula.as_str(),
        raw, score, "score computed"
    );
    score
}
