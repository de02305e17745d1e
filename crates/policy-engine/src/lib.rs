//! Marine policy extraction and validation
//!
//! The pipeline runs in three pure stages:
//!
//! 1. [`extractor`] captures raw `Label: value` text per field
//! 2. [`normalizer`] converts raw text into typed values
//! 3. [`rules`] checks the typed values against business rules and the
//!    [`VesselRegistry`]
//!
//! Every stage is total. Malformed or incomplete documents come back as a
//! [`ValidationResult`] with violations, never as an error.

pub mod error;
pub mod extractor;
pub mod normalizer;
pub mod patterns;
pub mod registry;
pub mod rules;

use std::sync::Arc;

use policy_types::ValidationResult;
use tracing::{debug, info};

pub use error::RegistryError;
pub use extractor::{extract_fields, FieldExtractor};
pub use normalizer::normalize_fields;
pub use registry::VesselRegistry;
pub use rules::{Rule, RuleEngine};

/// PolicyValidator entry point
///
/// Cheap to clone; the registry is shared read-only.
#[derive(Debug, Clone)]
pub struct PolicyValidator {
    registry: Arc<VesselRegistry>,
    extractor: FieldExtractor,
    engine: RuleEngine,
}

impl PolicyValidator {
    pub fn new(registry: Arc<VesselRegistry>) -> Self {
        Self {
            registry,
            extractor: FieldExtractor::new(),
            engine: RuleEngine::new(),
        }
    }

    pub fn with_extractor(mut self, extractor: FieldExtractor) -> Self {
        self.extractor = extractor;
        self
    }

    pub fn with_engine(mut self, engine: RuleEngine) -> Self {
        self.engine = engine;
        self
    }

    pub fn registry(&self) -> &VesselRegistry {
        &self.registry
    }

    /// Extract, normalize and validate one document
    ///
    /// Violations are ordered by phase: normalization first, then rules in
    /// engine order.
    pub fn validate(&self, text: &str) -> ValidationResult {
        let extracted = self.extractor.extract(text);
        let (normalized, mut violations) = normalize_fields(&extracted);
        debug!(
            "Extracted {} field(s), normalized {}, {} normalization violation(s)",
            extracted.len(),
            normalized.len(),
            violations.len()
        );

        violations.extend(self.engine.evaluate(&normalized, &self.registry));

        let result = ValidationResult::new(normalized, violations);
        info!(
            "Validation finished: is_valid={}, violations={}",
            result.is_valid(),
            result.violations().len()
        );
        result
    }
}

/// Validate `text` with the default extractor and rule set
pub fn validate_document(text: &str, registry: &VesselRegistry) -> ValidationResult {
    let extracted = extract_fields(text);
    let (normalized, mut violations) = normalize_fields(&extracted);
    violations.extend(RuleEngine::new().evaluate(&normalized, registry));
    ValidationResult::new(normalized, violations)
}
