//! Error types for the policy engine
//!
//! Only collaborator setup can fail. Validating a document never returns an
//! error; bad data is reported as violations instead.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Failed to read vessel registry {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Vessel registry {path} is not valid JSON: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Vessel registry {0} must contain a JSON array of strings")]
    InvalidFormat(PathBuf),
}
