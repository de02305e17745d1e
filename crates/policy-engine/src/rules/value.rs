// Insured value checks
use policy_types::{FieldName, NormalizedFields, Violation, ViolationCode};

/// Largest plausible insured value (1 quadrillion)
pub const MAX_INSURED_VALUE: f64 = 1e15;

/// Insured value must be strictly positive
///
/// The normalizer already rejects negative amounts, so in practice this
/// catches exactly zero.
pub fn check_positive_value(fields: &NormalizedFields) -> Vec<Violation> {
    match fields.amount(FieldName::InsuredValue) {
        Some(value) if value <= 0.0 => vec![Violation::field(
            FieldName::InsuredValue,
            ViolationCode::NonPositiveValue,
            format!("insured_value ({}) must be greater than zero", value),
        )],
        _ => Vec::new(),
    }
}

/// Insured value must not exceed [`MAX_INSURED_VALUE`]
pub fn check_value_ceiling(fields: &NormalizedFields) -> Vec<Violation> {
    match fields.amount(FieldName::InsuredValue) {
        Some(value) if value > MAX_INSURED_VALUE => vec![Violation::field(
            FieldName::InsuredValue,
            ViolationCode::ValueOutOfRange,
            format!(
                "insured_value ({}) exceeds the maximum of {}",
                value, MAX_INSURED_VALUE
            ),
        )],
        _ => Vec::new(),
    }
}
