//! Field identifiers and the per-stage field maps
//!
//! The set of recognized fields is closed. Iteration and serialization always
//! follow `FieldName::ALL`, so two runs over the same document produce the
//! same ordering.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A data point expected in a marine policy document
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    PolicyNumber,
    VesselName,
    PolicyStartDate,
    PolicyEndDate,
    InsuredValue,
}

/// Shape a field's raw text is normalized into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Date,
    Amount,
}

impl FieldName {
    /// Every field, in canonical order
    pub const ALL: [FieldName; 5] = [
        FieldName::PolicyNumber,
        FieldName::VesselName,
        FieldName::PolicyStartDate,
        FieldName::PolicyEndDate,
        FieldName::InsuredValue,
    ];

    pub fn kind(self) -> FieldKind {
        match self {
            FieldName::PolicyNumber | FieldName::VesselName => FieldKind::Text,
            FieldName::PolicyStartDate | FieldName::PolicyEndDate => FieldKind::Date,
            FieldName::InsuredValue => FieldKind::Amount,
        }
    }

    /// Wire name, matching the serde representation
    pub fn as_str(self) -> &'static str {
        match self {
            FieldName::PolicyNumber => "policy_number",
            FieldName::VesselName => "vessel_name",
            FieldName::PolicyStartDate => "policy_start_date",
            FieldName::PolicyEndDate => "policy_end_date",
            FieldName::InsuredValue => "insured_value",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw label values captured from a document, before any type coercion
///
/// A missing key means the label was not found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExtractedFields {
    values: BTreeMap<FieldName, String>,
}

impl ExtractedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldName) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Found fields in canonical order
    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> {
        self.values.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl FromIterator<(FieldName, String)> for ExtractedFields {
    fn from_iter<I: IntoIterator<Item = (FieldName, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// A typed field value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Text(String),
    /// Serialized as an ISO-8601 date string
    Date(NaiveDate),
    Amount(f64),
}

/// Field values that survived normalization
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NormalizedFields {
    values: BTreeMap<FieldName, FieldValue>,
}

impl NormalizedFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: FieldName, value: FieldValue) {
        self.values.insert(field, value);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValue> {
        self.values.get(&field)
    }

    pub fn contains(&self, field: FieldName) -> bool {
        self.values.contains_key(&field)
    }

    pub fn text(&self, field: FieldName) -> Option<&str> {
        match self.values.get(&field) {
            Some(FieldValue::Text(s)) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn date(&self, field: FieldName) -> Option<NaiveDate> {
        match self.values.get(&field) {
            Some(FieldValue::Date(d)) => Some(*d),
            _ => None,
        }
    }

    pub fn amount(&self, field: FieldName) -> Option<f64> {
        match self.values.get(&field) {
            Some(FieldValue::Amount(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

// Every known field is written, absent ones as null, so callers see a fixed shape.
impl Serialize for NormalizedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(FieldName::ALL.len()))?;
        for field in FieldName::ALL {
            map.serialize_entry(field.as_str(), &self.values.get(&field))?;
        }
        map.end()
    }
}
