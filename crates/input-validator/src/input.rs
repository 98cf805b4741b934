//! Assessment Input Triple

use serde::{Deserialize, Serialize};

/// The three measures of a single assessment.
///
/// Immutable once built; each evaluation is independent of the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssessmentInput {
    /// Technology complexity measure (valid range 20-80)
    pub technology: f64,
    /// Norms and standards measure (valid range 9-70)
    pub norms: f64,
    /// Project scope measure (valid range 5-50)
    pub scope: f64,
}

impl AssessmentInput {
    /// Build an input triple without validating it
    pub fn new(technology: f64, norms: f64, scope: f64) -> Self {
        Self {
            technology,
            norms,
            scope,
        }
    }
}
