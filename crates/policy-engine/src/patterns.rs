//! Label synonyms and the compiled line patterns used for extraction

use lazy_static::lazy_static;
use policy_types::FieldName;
use regex::Regex;

/// Policy identifier labels
pub const POLICY_NUMBER_LABELS: &[&str] = &[
    "policy number",
    "policy no.",
    "policy no",
    "policy #",
    "policy id",
    "contract number",
    "contract no.",
    "contract no",
];

/// Vessel labels
pub const VESSEL_NAME_LABELS: &[&str] = &["vessel name", "ship name", "vessel"];

/// Cover start labels
pub const START_DATE_LABELS: &[&str] = &[
    "policy start date",
    "policy start",
    "start date",
    "effective date",
    "inception date",
];

/// Cover end labels
pub const END_DATE_LABELS: &[&str] = &[
    "policy end date",
    "policy end",
    "end date",
    "expiry date",
    "expiration date",
];

/// Insured amount labels
pub const INSURED_VALUE_LABELS: &[&str] =
    &["insured value", "sum insured", "insured amount", "limit"];

/// ISO 4217 codes accepted as an amount prefix
pub const CURRENCY_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "NZD", "SGD", "HKD", "NOK", "SEK",
    "DKK", "CNY",
];

/// Label synonyms recognized for `field`
pub fn labels_for(field: FieldName) -> &'static [&'static str] {
    match field {
        FieldName::PolicyNumber => POLICY_NUMBER_LABELS,
        FieldName::VesselName => VESSEL_NAME_LABELS,
        FieldName::PolicyStartDate => START_DATE_LABELS,
        FieldName::PolicyEndDate => END_DATE_LABELS,
        FieldName::InsuredValue => INSURED_VALUE_LABELS,
    }
}

/// Build a case-insensitive pattern matching `<label> <sep> <value>` on one line.
///
/// Only horizontal whitespace is allowed around the separator, so an empty
/// value never swallows the following line.
fn label_line_pattern(labels: &[&str]) -> Regex {
    let alternatives = labels
        .iter()
        .map(|label| {
            label
                .split_whitespace()
                .map(regex::escape)
                .collect::<Vec<_>>()
                .join(r"[ \t]+")
        })
        .collect::<Vec<_>>()
        .join("|");

    Regex::new(&format!(
        r"(?im)^[ \t]*(?:{})[ \t]*[:=\-][ \t]*(?P<value>.*)$",
        alternatives
    ))
    .unwrap()
}

lazy_static! {
    static ref POLICY_NUMBER_PATTERN: Regex = label_line_pattern(POLICY_NUMBER_LABELS);
    static ref VESSEL_NAME_PATTERN: Regex = label_line_pattern(VESSEL_NAME_LABELS);
    static ref START_DATE_PATTERN: Regex = label_line_pattern(START_DATE_LABELS);
    static ref END_DATE_PATTERN: Regex = label_line_pattern(END_DATE_LABELS);
    static ref INSURED_VALUE_PATTERN: Regex = label_line_pattern(INSURED_VALUE_LABELS);

    /// Strict ISO calendar date shape
    pub static ref ISO_DATE_SHAPE: Regex = Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap();

    /// Amount with optional sign, currency marker, thousands separators and fraction
    pub static ref AMOUNT_SHAPE: Regex = Regex::new(&format!(
        r"^(?P<sign>-)?[ \t]*(?:[$€£]|(?:{}))?[ \t]*(?P<sign2>-)?[ \t]*(?P<int>\d{{1,3}}(?:,\d{{3}})+|\d+)(?:\.(?P<frac>\d+))?$",
        CURRENCY_CODES.join("|")
    ))
    .unwrap();
}

/// Compiled line pattern for `field`
pub fn pattern_for(field: FieldName) -> &'static Regex {
    match field {
        FieldName::PolicyNumber => &*POLICY_NUMBER_PATTERN,
        FieldName::VesselName => &*VESSEL_NAME_PATTERN,
        FieldName::PolicyStartDate => &*START_DATE_PATTERN,
        FieldName::PolicyEndDate => &*END_DATE_PATTERN,
        FieldName::InsuredValue => &*INSURED_VALUE_PATTERN,
    }
}
