//! Fuzzy Membership Engine
//!
//! Provides triangular membership functions, interval type-2 fuzzy sets,
//! and the named breakpoint presets used for risk classification.

mod level;
mod preset;
mod trimf;
mod type2;

pub use level::RiskLevel;
pub use preset::{MembershipPreset, PresetKind};
pub use trimf::Triangular;
pub use type2::{IntervalType2, MembershipInterval};

use thiserror::Error;

/// Score domain the membership functions are defined over
pub const SCORE_MIN: f64 = -80.0;
/// Upper end of the score domain
pub const SCORE_MAX: f64 = 70.0;

/// Errors building membership functions
#[derive(Debug, Clone, Error)]
pub enum MembershipError {
    /// Breakpoints must be ordered a <= b <= c
    #[error("Breakpoints must satisfy a <= b <= c, got ({a}, {b}, {c})")]
    UnorderedBreakpoints { a: f64, b: f64, c: f64 },
}
