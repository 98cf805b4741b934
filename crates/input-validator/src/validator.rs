//! Range Validator for Assessment Inputs

use crate::error::ValidationError;
use crate::input::AssessmentInput;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Validation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Technology valid range
    pub technology_range: (f64, f64),
    /// Norms valid range
    pub norms_range: (f64, f64),
    /// Scope valid range
    pub scope_range: (f64, f64),
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            technology_range: (20.0, 80.0),
            norms_range: (9.0, 70.0),
            scope_range: (5.0, 50.0),
        }
    }
}

/// Parse a text field into a finite number.
///
/// Empty or non-numeric text is rejected with the field name; NaN and
/// infinities count as non-numeric since no downstream range can hold them.
pub fn parse_field(field: &'static str, text: &str) -> Result<f64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber {
            field,
            text: text.to_string(),
        }),
    }
}

/// Validator for the assessment input triple
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Create a new validator with given config
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Validate a single value against a range
    pub fn validate_range(
        &self,
        field: &'static str,
        value: f64,
        range: (f64, f64),
    ) -> Result<(), ValidationError> {
        if value < range.0 || value > range.1 {
            Err(ValidationError::OutOfRange {
                field,
                value,
                min: range.0,
                max: range.1,
            })
        } else {
            Ok(())
        }
    }

    /// Validate the technology measure
    pub fn validate_technology(&self, value: f64) -> Result<(), ValidationError> {
        self.validate_range("technology", value, self.config.technology_range)
    }

    /// Validate the norms measure
    pub fn validate_norms(&self, value: f64) -> Result<(), ValidationError> {
        self.validate_range("norms", value, self.config.norms_range)
    }

    /// Validate the scope measure
    pub fn validate_scope(&self, value: f64) -> Result<(), ValidationError> {
        self.validate_range("scope", value, self.config.scope_range)
    }

    /// Validate a full input triple, reporting the first violation
    pub fn validate(&self, input: &AssessmentInput) -> Result<(), ValidationError> {
        self.validate_technology(input.technology)?;
        self.validate_norms(input.norms)?;
        self.validate_scope(input.scope)?;
        debug!(
            technology = input.technology,
            norms = input.norms,
            scope = input.scope,
            "input validated"
        );
        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_technology() {
        let validator = Validator::default();
        assert!(validator.validate_technology(50.0).is_ok());
        assert!(validator.validate_technology(20.0).is_ok());
        assert!(validator.validate_technology(80.0).is_ok());
    }

    #[test]
    fn test_technology_below_bound_names_field() {
        let validator = Validator::default();
        let err = validator.validate_technology(10.0).unwrap_err();
        match err {
            ValidationError::OutOfRange { field, min, max, .. } => {
                assert_eq!(field, "technology");
                assert_eq!(min, 20.0);
                assert_eq!(max, 80.0);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_norms_and_scope_ranges() {
        let validator = Validator::default();
        assert!(validator.validate_norms(9.0).is_ok());
        assert!(validator.validate_norms(70.0).is_ok());
        assert!(validator.validate_norms(8.9).is_err());
        assert!(validator.validate_scope(5.0).is_ok());
        assert!(validator.validate_scope(50.0).is_ok());
        assert!(validator.validate_scope(50.1).is_err());
    }

    #[test]
    fn test_validate_triple_reports_first_violation() {
        let validator = Validator::default();
        let input = AssessmentInput::new(10.0, 200.0, 25.0);
        let err = validator.validate(&input).unwrap_err();
        assert_eq!(err.field(), "technology");
    }

    #[test]
    fn test_parse_field_accepts_numbers() {
        assert_eq!(parse_field("technology", "42.5").unwrap(), 42.5);
        assert_eq!(parse_field("technology", " 20 ").unwrap(), 20.0);
    }

    #[test]
    fn test_parse_field_rejects_garbage() {
        let err = parse_field("norms", "abc").unwrap_err();
        match err {
            ValidationError::InvalidNumber { field, .. } => assert_eq!(field, "norms"),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(parse_field("norms", "NaN").is_err());
        assert!(parse_field("norms", "inf").is_err());
    }

    #[test]
    fn test_parse_field_rejects_empty() {
        let err = parse_field("scope", "   ").unwrap_err();
        match err {
            ValidationError::MissingField(field) => assert_eq!(field, "scope"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_message_names_field_and_bounds() {
        let validator = Validator::default();
        let msg = validator.validate_technology(10.0).unwrap_err().to_string();
        assert!(msg.contains("technology"));
        assert!(msg.contains("20"));
        assert!(msg.contains("80"));
    }
}
