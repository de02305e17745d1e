// Policy number checks
use policy_types::{FieldName, NormalizedFields, Violation, ViolationCode};

/// Longest accepted policy identifier, in characters
pub const MAX_POLICY_NUMBER_LEN: usize = 100;

pub fn check_policy_number_length(fields: &NormalizedFields) -> Vec<Violation> {
    match fields.text(FieldName::PolicyNumber) {
        Some(number) if number.chars().count() > MAX_POLICY_NUMBER_LEN => {
            vec![Violation::field(
                FieldName::PolicyNumber,
                ViolationCode::PolicyNumberTooLong,
                format!(
                    "policy_number is {} characters long (maximum {})",
                    number.chars().count(),
                    MAX_POLICY_NUMBER_LEN
                ),
            )]
        }
        _ => Vec::new(),
    }
}
