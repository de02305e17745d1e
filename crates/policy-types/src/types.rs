use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::{FieldName, NormalizedFields};

/// Machine-stable violation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ViolationCode {
    MissingField,
    InvalidDateFormat,
    InvalidNumberFormat,
    InvalidDateRange,
    NonPositiveValue,
    VesselNotAllowed,
    DateOutOfRange,
    PolicyDurationTooLong,
    ValueOutOfRange,
    PolicyNumberTooLong,
}

impl ViolationCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ViolationCode::MissingField => "MISSING_FIELD",
            ViolationCode::InvalidDateFormat => "INVALID_DATE_FORMAT",
            ViolationCode::InvalidNumberFormat => "INVALID_NUMBER_FORMAT",
            ViolationCode::InvalidDateRange => "INVALID_DATE_RANGE",
            ViolationCode::NonPositiveValue => "NON_POSITIVE_VALUE",
            ViolationCode::VesselNotAllowed => "VESSEL_NOT_ALLOWED",
            ViolationCode::DateOutOfRange => "DATE_OUT_OF_RANGE",
            ViolationCode::PolicyDurationTooLong => "POLICY_DURATION_TOO_LONG",
            ViolationCode::ValueOutOfRange => "VALUE_OUT_OF_RANGE",
            ViolationCode::PolicyNumberTooLong => "POLICY_NUMBER_TOO_LONG",
        }
    }
}

impl fmt::Display for ViolationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// `None` for document-level problems
    pub field: Option<FieldName>,
    pub code: ViolationCode,
    pub message: String,
}

impl Violation {
    pub fn field(field: FieldName, code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: Some(field),
            code,
            message: message.into(),
        }
    }

    pub fn document(code: ViolationCode, message: impl Into<String>) -> Self {
        Self {
            field: None,
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.field {
            Some(field) => write!(f, "[{}] {}: {}", self.code, field, self.message),
            None => write!(f, "[{}] {}", self.code, self.message),
        }
    }
}

/// Outcome of one extract-normalize-validate run
///
/// `is_valid` is derived from the violation list when the result is built and
/// cannot be set on its own.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationResult {
    fields: NormalizedFields,
    violations: Vec<Violation>,
    is_valid: bool,
}

impl ValidationResult {
    pub fn new(fields: NormalizedFields, violations: Vec<Violation>) -> Self {
        let is_valid = violations.is_empty();
        Self {
            fields,
            violations,
            is_valid,
        }
    }

    pub fn fields(&self) -> &NormalizedFields {
        &self.fields
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Violations carrying `code`, in report order
    pub fn violations_with(&self, code: ViolationCode) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(move |v| v.code == code)
    }

    pub fn has_violation(&self, field: FieldName, code: ViolationCode) -> bool {
        self.violations
            .iter()
            .any(|v| v.code == code && v.field == Some(field))
    }

    /// Human-readable messages, in report order
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(|v| v.message.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_is_valid_tracks_violations() {
        let ok = ValidationResult::new(NormalizedFields::new(), Vec::new());
        assert!(ok.is_valid());

        let bad = ValidationResult::new(
            NormalizedFields::new(),
            vec![Violation::field(
                FieldName::InsuredValue,
                ViolationCode::MissingField,
                "insured_value is missing",
            )],
        );
        assert!(!bad.is_valid());
        assert!(bad.has_violation(FieldName::InsuredValue, ViolationCode::MissingField));
        assert!(!bad.has_violation(FieldName::VesselName, ViolationCode::MissingField));
    }

    #[test]
    fn test_violation_code_wire_format() {
        let json = serde_json::to_value(ViolationCode::PolicyDurationTooLong).unwrap();
        assert_eq!(json, serde_json::json!("POLICY_DURATION_TOO_LONG"));
        assert_eq!(
            ViolationCode::VesselNotAllowed.to_string(),
            "VESSEL_NOT_ALLOWED"
        );
    }

    #[test]
    fn test_result_serializes_flag_and_violations() {
        let result = ValidationResult::new(
            NormalizedFields::new(),
            vec![Violation::document(
                ViolationCode::MissingField,
                "document is empty",
            )],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["is_valid"], serde_json::json!(false));
        assert_eq!(json["violations"][0]["field"], serde_json::Value::Null);
        assert_eq!(json["violations"][0]["code"], serde_json::json!("MISSING_FIELD"));
        assert!(json["fields"].is_object());
    }

    #[test]
    fn test_violation_display() {
        let v = Violation::field(
            FieldName::PolicyEndDate,
            ViolationCode::InvalidDateRange,
            "end before start",
        );
        assert_eq!(
            v.to_string(),
            "[INVALID_DATE_RANGE] policy_end_date: end before start"
        );
    }
}
