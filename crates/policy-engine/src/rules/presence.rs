// Required field checks
use policy_types::{FieldName, NormalizedFields, Violation, ViolationCode};

/// Every field must have survived normalization
///
/// Not-found and found-but-unparsable both count as missing here. The
/// normalizer's own violation for an unparsable value is reported separately.
pub fn check_required_fields(fields: &NormalizedFields) -> Vec<Violation> {
    FieldName::ALL
        .iter()
        .filter(|field| !fields.contains(**field))
        .map(|field| {
            Violation::field(
                *field,
                ViolationCode::MissingField,
                format!("{} is missing or invalid", field),
            )
        })
        .collect()
}
