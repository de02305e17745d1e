//! Conversion of raw extracted strings into typed field values
//!
//! Normalization is total: it always returns the fields it could convert
//! together with one violation per field it could not. Absent fields are left
//! absent without a violation; turning absence into a violation is the
//! presence rule's job.

use chrono::NaiveDate;
use policy_types::{
    ExtractedFields, FieldKind, FieldName, FieldValue, NormalizedFields, Violation, ViolationCode,
};
use tracing::debug;

use crate::patterns::{AMOUNT_SHAPE, ISO_DATE_SHAPE};

/// Why an amount could not be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    NotNumeric,
    Negative,
}

/// Normalize every extracted field according to its kind
pub fn normalize_fields(extracted: &ExtractedFields) -> (NormalizedFields, Vec<Violation>) {
    let mut normalized = NormalizedFields::new();
    let mut violations = Vec::new();

    for (field, raw) in extracted.iter() {
        match normalize_value(field, raw) {
            Ok(value) => normalized.insert(field, value),
            Err(violation) => {
                debug!("Normalization failed for {}: {}", field, violation.message);
                violations.push(violation);
            }
        }
    }

    (normalized, violations)
}

fn normalize_value(field: FieldName, raw: &str) -> Result<FieldValue, Violation> {
    match field.kind() {
        FieldKind::Text => Ok(FieldValue::Text(raw.trim().to_string())),
        FieldKind::Date => parse_date(raw).map(FieldValue::Date).ok_or_else(|| {
            Violation::field(
                field,
                ViolationCode::InvalidDateFormat,
                format!(
                    "{} '{}' is not a valid date (expected YYYY-MM-DD)",
                    field,
                    raw.trim()
                ),
            )
        }),
        FieldKind::Amount => parse_amount(raw).map(FieldValue::Amount).map_err(|err| {
            let message = match err {
                AmountError::Negative => {
                    format!("{} '{}' must not be negative", field, raw.trim())
                }
                AmountError::NotNumeric => {
                    format!("{} '{}' is not a valid number", field, raw.trim())
                }
            };
            Violation::field(field, ViolationCode::InvalidNumberFormat, message)
        }),
    }
}

/// Parse a strict `YYYY-MM-DD` calendar date, ignoring surrounding quotes
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let candidate = raw.trim().trim_matches(|c: char| c == '"' || c == '\'').trim();
    if !ISO_DATE_SHAPE.is_match(candidate) {
        return None;
    }
    NaiveDate::parse_from_str(candidate, "%Y-%m-%d").ok()
}

/// Parse a non-negative decimal amount
///
/// Accepts plain digits with an optional fractional part, optionally preceded
/// by a currency marker (`$`, `€`, `£` or a three-letter code) and grouped
/// with comma thousands separators.
pub fn parse_amount(raw: &str) -> Result<f64, AmountError> {
    let caps = AMOUNT_SHAPE
        .captures(raw.trim())
        .ok_or(AmountError::NotNumeric)?;

    if caps.name("sign").is_some() || caps.name("sign2").is_some() {
        return Err(AmountError::Negative);
    }

    let int = caps
        .name("int")
        .map(|m| m.as_str().replace(',', ""))
        .ok_or(AmountError::NotNumeric)?;
    let literal = match caps.name("frac") {
        Some(frac) => format!("{}.{}", int, frac.as_str()),
        None => int,
    };

    let value: f64 = literal.parse().map_err(|_| AmountError::NotNumeric)?;
    if !value.is_finite() {
        return Err(AmountError::NotNumeric);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extracted(pairs: &[(FieldName, &str)]) -> ExtractedFields {
        pairs
            .iter()
            .map(|(f, v)| (*f, v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_date_accepts_iso() {
        assert_eq!(parse_date("2024-01-01"), NaiveDate::from_ymd_opt(2024, 1, 1));
        assert_eq!(parse_date(" '2024-06-30' "), NaiveDate::from_ymd_opt(2024, 6, 30));
        assert_eq!(parse_date("\"2024-06-30\""), NaiveDate::from_ymd_opt(2024, 6, 30));
    }

    #[test]
    fn test_parse_date_rejects_other_shapes() {
        assert_eq!(parse_date("2024-02-31"), None);
        assert_eq!(parse_date("2024-1-1"), None);
        assert_eq!(parse_date("01/06/2024"), None);
        assert_eq!(parse_date("not-a-date"), None);
        assert_eq!(parse_date(""), None);
    }

    #[test]
    fn test_parse_amount_plain_and_decorated() {
        assert_eq!(parse_amount("1000000"), Ok(1_000_000.0));
        assert_eq!(parse_amount("1.0"), Ok(1.0));
        assert_eq!(parse_amount("$1,234,567.89"), Ok(1_234_567.89));
        assert_eq!(parse_amount("$5,000,000.5"), Ok(5_000_000.5));
        assert_eq!(parse_amount("USD 2500"), Ok(2500.0));
        assert_eq!(parse_amount("0"), Ok(0.0));
    }

    #[test]
    fn test_parse_amount_rejects_negative_and_text() {
        assert_eq!(parse_amount("-100000"), Err(AmountError::Negative));
        assert_eq!(parse_amount("$-5"), Err(AmountError::Negative));
        assert_eq!(parse_amount("abc"), Err(AmountError::NotNumeric));
        assert_eq!(parse_amount("1.2.3"), Err(AmountError::NotNumeric));
        assert_eq!(parse_amount(""), Err(AmountError::NotNumeric));
    }

    #[test]
    fn test_parse_amount_rejects_word_prefixes() {
        assert_eq!(parse_amount("abc123"), Err(AmountError::NotNumeric));
        assert_eq!(parse_amount("one 100"), Err(AmountError::NotNumeric));
        assert_eq!(parse_amount("ten 5"), Err(AmountError::NotNumeric));
        assert_eq!(parse_amount("xyz 1,000"), Err(AmountError::NotNumeric));
        assert_eq!(parse_amount("EUR 1,000"), Ok(1000.0));
    }

    #[test]
    fn test_parse_amount_rejects_overflow() {
        let huge = "9".repeat(400);
        assert_eq!(parse_amount(&huge), Err(AmountError::NotNumeric));
    }

    #[test]
    fn test_normalize_typed_values() {
        let (fields, violations) = normalize_fields(&extracted(&[
            (FieldName::PolicyNumber, "POL-123"),
            (FieldName::PolicyStartDate, "2024-01-01"),
            (FieldName::InsuredValue, "1000000"),
        ]));
        assert!(violations.is_empty());
        assert_eq!(fields.text(FieldName::PolicyNumber), Some("POL-123"));
        assert_eq!(
            fields.date(FieldName::PolicyStartDate),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(fields.amount(FieldName::InsuredValue), Some(1_000_000.0));
    }

    #[test]
    fn test_unparsable_values_become_violations() {
        let (fields, violations) = normalize_fields(&extracted(&[
            (FieldName::PolicyEndDate, "30/06/2024"),
            (FieldName::InsuredValue, "abc"),
        ]));
        assert!(fields.is_empty());
        let codes: Vec<_> = violations.iter().map(|v| (v.field, v.code)).collect();
        assert_eq!(
            codes,
            vec![
                (Some(FieldName::PolicyEndDate), ViolationCode::InvalidDateFormat),
                (Some(FieldName::InsuredValue), ViolationCode::InvalidNumberFormat),
            ]
        );
    }

    #[test]
    fn test_negative_amount_message() {
        let (_, violations) =
            normalize_fields(&extracted(&[(FieldName::InsuredValue, "-100000")]));
        assert_eq!(violations.len(), 1);
        assert!(violations[0].message.contains("negative"));
    }

    #[test]
    fn test_absence_is_not_a_violation() {
        let (fields, violations) = normalize_fields(&ExtractedFields::new());
        assert!(fields.is_empty());
        assert!(violations.is_empty());
    }
}
