pub mod fields;
pub mod types;

pub use fields::{ExtractedFields, FieldKind, FieldName, FieldValue, NormalizedFields};
pub use types::{ValidationResult, Violation, ViolationCode};
