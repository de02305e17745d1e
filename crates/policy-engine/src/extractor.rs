//! Field extraction from line-oriented `Label: value` text
//!
//! Extraction only answers "was a label present, and what literal text
//! followed it". It never coerces types and never fails: a field whose label
//! is not found is simply absent from the returned [`ExtractedFields`].

use policy_types::{ExtractedFields, FieldName};
use tracing::{debug, warn};

use crate::patterns::pattern_for;

/// Documents above this size are not scanned (1 MiB)
pub const DEFAULT_MAX_DOCUMENT_BYTES: usize = 1024 * 1024;

/// Label-based field extractor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldExtractor {
    max_document_bytes: usize,
}

impl FieldExtractor {
    pub fn new() -> Self {
        Self {
            max_document_bytes: DEFAULT_MAX_DOCUMENT_BYTES,
        }
    }

    /// Override the document size ceiling
    pub fn with_max_document_bytes(mut self, max_document_bytes: usize) -> Self {
        self.max_document_bytes = max_document_bytes;
        self
    }

    pub fn max_document_bytes(&self) -> usize {
        self.max_document_bytes
    }

    /// Extract every known field from `text`
    ///
    /// Each field is looked up independently. When a label appears more than
    /// once, the first occurrence with a non-empty value wins.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        let mut fields = ExtractedFields::new();

        if text.len() > self.max_document_bytes {
            warn!(
                "Document of {} bytes exceeds the {} byte limit; skipping extraction",
                text.len(),
                self.max_document_bytes
            );
            return fields;
        }

        debug!("Starting extraction from text (length: {})", text.len());

        for field in FieldName::ALL {
            match first_labeled_value(field, text) {
                Some(value) => {
                    debug!("Found {}: {}", field, value);
                    fields.insert(field, value);
                }
                None => debug!("No label found for {}", field),
            }
        }

        if fields.is_empty() && !text.trim().is_empty() {
            warn!("No fields were extracted from the document");
        }

        fields
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Extract fields with the default extractor
pub fn extract_fields(text: &str) -> ExtractedFields {
    FieldExtractor::new().extract(text)
}

fn first_labeled_value(field: FieldName, text: &str) -> Option<String> {
    pattern_for(field)
        .captures_iter(text)
        .filter_map(|caps| caps.name("value"))
        .map(|m| m.as_str().trim())
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const SAMPLE: &str = "Policy Number: POL-123\n\
                          Vessel Name: Sea Breeze\n\
                          Policy Start Date: 2024-01-01\n\
                          Policy End Date: 2024-06-30\n\
                          Insured Value: 1000000";

    #[test]
    fn test_extracts_all_labeled_fields() {
        let fields = extract_fields(SAMPLE);
        assert_eq!(fields.get(FieldName::PolicyNumber), Some("POL-123"));
        assert_eq!(fields.get(FieldName::VesselName), Some("Sea Breeze"));
        assert_eq!(fields.get(FieldName::PolicyStartDate), Some("2024-01-01"));
        assert_eq!(fields.get(FieldName::PolicyEndDate), Some("2024-06-30"));
        assert_eq!(fields.get(FieldName::InsuredValue), Some("1000000"));
    }

    #[test]
    fn test_empty_text_yields_no_fields() {
        assert!(extract_fields("").is_empty());
        assert!(extract_fields("   \n\t  ").is_empty());
    }

    #[test]
    fn test_text_without_labels_yields_no_fields() {
        let fields = extract_fields("This document has no recognizable structure at all.");
        assert!(fields.is_empty());
    }

    #[test]
    fn test_first_occurrence_wins() {
        let text = "Vessel Name: First Light\nVessel Name: Second Wind";
        let fields = extract_fields(text);
        assert_eq!(fields.get(FieldName::VesselName), Some("First Light"));
    }

    #[test]
    fn test_empty_value_is_skipped() {
        let text = "Policy Number:   \nPolicy Number: POL-9";
        let fields = extract_fields(text);
        assert_eq!(fields.get(FieldName::PolicyNumber), Some("POL-9"));
    }

    #[test]
    fn test_label_with_only_empty_value_is_absent() {
        let fields = extract_fields("Policy Number:\nVessel Name: Sea Breeze");
        assert!(!fields.contains(FieldName::PolicyNumber));
        assert_eq!(fields.get(FieldName::VesselName), Some("Sea Breeze"));
    }

    #[test]
    fn test_synonym_labels() {
        let text = "    CONTRACT NO: AXA-777-B\n\
                    SHIP NAME: Oceanic Star\n\
                    EFFECTIVE DATE: 2024-10-01\n\
                    EXPIRY DATE: 2025-10-01\n\
                    LIMIT: $5,000,000.5\n";
        let fields = extract_fields(text);
        assert_eq!(fields.get(FieldName::PolicyNumber), Some("AXA-777-B"));
        assert_eq!(fields.get(FieldName::VesselName), Some("Oceanic Star"));
        assert_eq!(fields.get(FieldName::PolicyStartDate), Some("2024-10-01"));
        assert_eq!(fields.get(FieldName::PolicyEndDate), Some("2025-10-01"));
        assert_eq!(fields.get(FieldName::InsuredValue), Some("$5,000,000.5"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = "Policy Number: POL-1\r\nVessel Name: Sea Breeze\r\n";
        let fields = extract_fields(text);
        assert_eq!(fields.get(FieldName::PolicyNumber), Some("POL-1"));
        assert_eq!(fields.get(FieldName::VesselName), Some("Sea Breeze"));
    }

    #[test]
    fn test_values_are_not_coerced() {
        let fields = extract_fields("Insured Value: abc\nPolicy Start Date: tomorrow");
        assert_eq!(fields.get(FieldName::InsuredValue), Some("abc"));
        assert_eq!(fields.get(FieldName::PolicyStartDate), Some("tomorrow"));
    }

    #[test]
    fn test_oversized_document_is_not_scanned() {
        let extractor = FieldExtractor::new().with_max_document_bytes(16);
        let fields = extractor.extract(SAMPLE);
        assert!(fields.is_empty());
    }

    #[test]
    fn test_partial_document() {
        let fields = extract_fields("Vessel Name: Sea Breeze\nInsured Value: 10");
        assert_eq!(fields.len(), 2);
        assert!(!fields.contains(FieldName::PolicyNumber));
    }
}
