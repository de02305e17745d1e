// Cover period checks: ordering, plausible calendar window, maximum span
use chrono::Datelike;
use policy_types::{FieldName, NormalizedFields, Violation, ViolationCode};

/// Earliest accepted policy year
pub const MIN_POLICY_YEAR: i32 = 1900;
/// Latest accepted policy year
pub const MAX_POLICY_YEAR: i32 = 2100;
/// Longest accepted cover period (~50 years)
pub const MAX_POLICY_DURATION_DAYS: i64 = 50 * 365;

/// Start date must be strictly before end date
pub fn check_date_order(fields: &NormalizedFields) -> Vec<Violation> {
    let (Some(start), Some(end)) = (
        fields.date(FieldName::PolicyStartDate),
        fields.date(FieldName::PolicyEndDate),
    ) else {
        return Vec::new();
    };

    if start < end {
        return Vec::new();
    }

    vec![Violation::field(
        FieldName::PolicyEndDate,
        ViolationCode::InvalidDateRange,
        format!(
            "policy_end_date ({}) must be after policy_start_date ({})",
            end, start
        ),
    )]
}

/// Each date must fall inside the accepted year window
pub fn check_date_window(fields: &NormalizedFields) -> Vec<Violation> {
    [FieldName::PolicyStartDate, FieldName::PolicyEndDate]
        .into_iter()
        .filter_map(|field| fields.date(field).map(|date| (field, date)))
        .filter(|(_, date)| !(MIN_POLICY_YEAR..=MAX_POLICY_YEAR).contains(&date.year()))
        .map(|(field, date)| {
            Violation::field(
                field,
                ViolationCode::DateOutOfRange,
                format!(
                    "{} ({}) is outside reasonable range ({}-{})",
                    field, date, MIN_POLICY_YEAR, MAX_POLICY_YEAR
                ),
            )
        })
        .collect()
}

/// An ordered cover period must not exceed the maximum duration
///
/// Misordered periods are left to [`check_date_order`].
pub fn check_policy_duration(fields: &NormalizedFields) -> Vec<Violation> {
    let (Some(start), Some(end)) = (
        fields.date(FieldName::PolicyStartDate),
        fields.date(FieldName::PolicyEndDate),
    ) else {
        return Vec::new();
    };

    let days = (end - start).num_days();
    if days <= MAX_POLICY_DURATION_DAYS {
        return Vec::new();
    }

    vec![Violation::field(
        FieldName::PolicyEndDate,
        ViolationCode::PolicyDurationTooLong,
        format!(
            "policy duration of {} days exceeds maximum of 50 years ({} days)",
            days, MAX_POLICY_DURATION_DAYS
        ),
    )]
}
