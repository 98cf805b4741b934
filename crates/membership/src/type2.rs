//! Interval Type-2 Fuzzy Sets

use crate::trimf::Triangular;
use serde::{Deserialize, Serialize};

/// Membership degrees bounding the uncertain true degree at a point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MembershipInterval {
    /// Lower-band degree
    pub lower: f64,
    /// Upper-band degree
    pub upper: f64,
}

/// Interval type-2 fuzzy set: two triangular bands bounding the membership
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalType2 {
    lower: Triangular,
    upper: Triangular,
}

impl IntervalType2 {
    /// Build a set from its lower and upper bands
    pub fn new(lower: Triangular, upper: Triangular) -> Self {
        Self { lower, upper }
    }

    /// Evaluate both bands at `x`
    pub fn evaluate(&self, x: f64) -> MembershipInterval {
        MembershipInterval {
            lower: self.lower.evaluate(x),
            upper: self.upper.evaluate(x),
        }
    }

    /// Lower band
    pub fn lower(&self) -> &Triangular {
        &self.lower
    }

    /// Upper band
    pub fn upper(&self) -> &Triangular {
        &self.upper
    }
}
