//! Risk Assessment Engine
//!
//! Turns a validated input triple into a clamped risk score and classifies
//! it, either through the threshold table or through interval type-2 fuzzy
//! membership.

mod assessor;
mod classify;
mod score;
mod threshold;

pub use assessor::{Assessment, Assessor, AssessorConfig, ClassificationMethod};
pub use classify::{classify_type2, Type2Outcome};
pub use score::{compute_score, ScoreConfig, ScoreFormula};
pub use threshold::{ThresholdBand, ThresholdTable};

use input_validator::ValidationError;
use thiserror::Error;

/// Errors during assessment
#[derive(Debug, Error)]
pub enum AssessError {
    /// Input rejected before any score was computed
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Score fell outside every threshold band
    #[error("score {0} is outside every classification band")]
    UnclassifiableScore(f64),
}
