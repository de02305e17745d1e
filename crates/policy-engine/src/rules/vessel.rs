// Vessel allowlist checks
use policy_types::{FieldName, NormalizedFields, Violation, ViolationCode};

use crate::registry::VesselRegistry;

/// Vessel name must appear in the registry
///
/// Runs against an empty registry too, in which case every vessel is
/// rejected.
pub fn check_vessel_allowed(fields: &NormalizedFields, registry: &VesselRegistry) -> Vec<Violation> {
    match fields.text(FieldName::VesselName) {
        Some(name) if !registry.contains(name) => vec![Violation::field(
            FieldName::VesselName,
            ViolationCode::VesselNotAllowed,
            format!("vessel_name '{}' is not in the list of allowed vessels", name),
        )],
        _ => Vec::new(),
    }
}
