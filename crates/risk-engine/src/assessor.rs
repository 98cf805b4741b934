//! End-to-End Assessment Pipeline

use crate::classify::classify_type2;
use crate::score::{compute_score, ScoreConfig};
use crate::threshold::ThresholdTable;
use crate::AssessError;
use input_validator::{AssessmentInput, ValidationConfig, Validator};
use membership::{MembershipInterval, MembershipPreset, PresetKind, RiskLevel};
use serde::{Deserialize, Serialize};
use tracing::info;

/// How the score is mapped to a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClassificationMethod {
    /// Fixed half-open bands over the score range
    Threshold,
    /// Interval type-2 fuzzy membership, winner by upper-band degree
    #[default]
    Type2,
}

/// Assessor configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssessorConfig {
    /// Input ranges
    pub validation: ValidationConfig,
    /// Score formula and clamp
    pub score: ScoreConfig,
    /// Breakpoint preset for type-2 classification
    pub preset: PresetKind,
    /// Classification method
    pub method: ClassificationMethod,
}

/// Result of one assessment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Assessment {
    /// The validated input triple
    pub input: AssessmentInput,
    /// Clamped risk score
    pub score: f64,
    /// Winning risk level
    pub level: RiskLevel,
    /// (lower, upper) degrees at the score; present for type-2 only
    pub uncertainty: Option<MembershipInterval>,
    /// Per-level degrees at the score, in level order; present for type-2 only
    pub memberships: Vec<(RiskLevel, MembershipInterval)>,
    /// Method that produced the level
    pub method: ClassificationMethod,
}

/// Stateless validate → score → classify pipeline.
///
/// Each call is independent; nothing is carried between assessments.
pub struct Assessor {
    validator: Validator,
    score: ScoreConfig,
    preset: MembershipPreset,
    table: ThresholdTable,
    method: ClassificationMethod,
}

impl Assessor {
    /// Create an assessor from config
    pub fn new(config: AssessorConfig) -> Self {
        Self {
            validator: Validator::new(config.validation),
            score: config.score,
            preset: config.preset.build(),
            table: ThresholdTable::standard(),
            method: config.method,
        }
    }

    /// Run one full assessment
    pub fn assess(&self, input: AssessmentInput) -> Result<Assessment, AssessError> {
        self.validator.validate(&input)?;
        let score = compute_score(&self.score, &input);

        let assessment = match self.method {
            ClassificationMethod::Threshold => {
                let level = self
                    .table
                    .classify(score)
                    .ok_or(AssessError::UnclassifiableScore(score))?;
                Assessment {
                    input,
                    score,
                    level,
                    uncertainty: None,
                    memberships: Vec::new(),
                    method: self.method,
                }
            }
            ClassificationMethod::Type2 => {
                let outcome = classify_type2(&self.preset, score);
                Assessment {
                    input,
                    score,
                    level: outcome.level,
                    uncertainty: Some(outcome.uncertainty),
                    memberships: outcome.memberships,
                    method: self.method,
                }
            }
        };

        info!(
            score = assessment.score,
            level = assessment.level.as_str(),
            "assessment complete"
        );
        Ok(assessment)
    }

    /// The membership preset in use (for rendering)
    pub fn preset(&self) -> &MembershipPreset {
        &self.preset
    }
}

impl Default for Assessor {
    fn default() -> Self {
        Self::new(AssessorConfig::default())
    }
}
