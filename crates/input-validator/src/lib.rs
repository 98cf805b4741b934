//! Input Validation
//!
//! Provides parsing and range checking for the three assessment measures.

mod error;
mod input;
mod validator;

pub use error::ValidationError;
pub use input::AssessmentInput;
pub use validator::{parse_field, ValidationConfig, Validator};
