//! Validation rules and the engine that runs them
//!
//! Each rule is a pure function of the normalized fields and the vessel
//! registry. No rule looks at another rule's output, so rules can be added,
//! removed or reordered without changing what the others report.

pub mod dates;
pub mod policy_number;
pub mod presence;
pub mod value;
pub mod vessel;

use policy_types::{NormalizedFields, Violation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::VesselRegistry;

/// The closed set of validation rules
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rule {
    /// Every field must be present and parsable
    Presence,
    /// Start date strictly before end date
    DateOrder,
    /// Insured value greater than zero
    PositiveValue,
    /// Vessel name in the registry
    VesselAllowlist,
    /// Dates between 1900 and 2100
    DateWindow,
    /// Cover period at most 50 years
    PolicyDuration,
    /// Insured value at most 1e15
    ValueCeiling,
    /// Policy number at most 100 characters
    PolicyNumberLength,
}

impl Rule {
    /// Default evaluation order
    pub const ALL: [Rule; 8] = [
        Rule::Presence,
        Rule::DateOrder,
        Rule::PositiveValue,
        Rule::VesselAllowlist,
        Rule::DateWindow,
        Rule::PolicyDuration,
        Rule::ValueCeiling,
        Rule::PolicyNumberLength,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Rule::Presence => "presence",
            Rule::DateOrder => "date_order",
            Rule::PositiveValue => "positive_value",
            Rule::VesselAllowlist => "vessel_allowlist",
            Rule::DateWindow => "date_window",
            Rule::PolicyDuration => "policy_duration",
            Rule::ValueCeiling => "value_ceiling",
            Rule::PolicyNumberLength => "policy_number_length",
        }
    }

    pub fn check(&self, fields: &NormalizedFields, registry: &VesselRegistry) -> Vec<Violation> {
        match self {
            Rule::Presence => presence::check_required_fields(fields),
            Rule::DateOrder => dates::check_date_order(fields),
            Rule::PositiveValue => value::check_positive_value(fields),
            Rule::VesselAllowlist => vessel::check_vessel_allowed(fields, registry),
            Rule::DateWindow => dates::check_date_window(fields),
            Rule::PolicyDuration => dates::check_policy_duration(fields),
            Rule::ValueCeiling => value::check_value_ceiling(fields),
            Rule::PolicyNumberLength => policy_number::check_policy_number_length(fields),
        }
    }
}

/// Runs an ordered list of rules, collecting every violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    pub fn new() -> Self {
        Self {
            rules: Rule::ALL.to_vec(),
        }
    }

    /// Engine over a custom rule list, evaluated in the given order
    pub fn with_rules(rules: impl IntoIterator<Item = Rule>) -> Self {
        Self {
            rules: rules.into_iter().collect(),
        }
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Evaluate every rule; never stops at the first failure
    pub fn evaluate(&self, fields: &NormalizedFields, registry: &VesselRegistry) -> Vec<Violation> {
        let mut violations = Vec::new();
        for rule in &self.rules {
            let found = rule.check(fields, registry);
            if !found.is_empty() {
                debug!("Rule {} reported {} violation(s)", rule.name(), found.len());
            }
            violations.extend(found);
        }
        violations
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}
