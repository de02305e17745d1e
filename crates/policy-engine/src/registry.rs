//! Vessel allowlist
//!
//! The registry is loaded once at startup and then only read. Names are
//! compared case-insensitively with runs of whitespace collapsed, so
//! `"sea   breeze"` matches `"Sea Breeze"`.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use crate::error::RegistryError;

/// Immutable set of approved vessel names
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VesselRegistry {
    names: HashSet<String>,
}

impl VesselRegistry {
    /// An empty registry; every vessel lookup fails against it
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a registry from display names, dropping blank entries
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names
            .into_iter()
            .map(|name| registry_key(name.as_ref()))
            .filter(|key| !key.is_empty())
            .collect();
        Self { names }
    }

    /// Load a JSON array of vessel names from `path`
    pub fn load(path: impl AsRef<Path>) -> Result<Self, RegistryError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let json: Value = serde_json::from_str(&raw).map_err(|source| RegistryError::Json {
            path: path.to_path_buf(),
            source,
        })?;

        let items = json
            .as_array()
            .ok_or_else(|| RegistryError::InvalidFormat(path.to_path_buf()))?;
        let names = items
            .iter()
            .map(|item| item.as_str())
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| RegistryError::InvalidFormat(path.to_path_buf()))?;

        let registry = Self::from_names(names);
        info!(
            "Loaded {} vessel names from {}",
            registry.len(),
            path.display()
        );
        Ok(registry)
    }

    /// Load from `path`, degrading to an empty registry on any error
    ///
    /// An empty registry rejects every vessel, so a failed load surfaces as
    /// `VESSEL_NOT_ALLOWED` violations instead of a crash.
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        match Self::load(path) {
            Ok(registry) => registry,
            Err(e) => {
                warn!("{}; continuing with an empty vessel registry", e);
                Self::empty()
            }
        }
    }

    /// Case-insensitive membership test
    pub fn contains(&self, name: &str) -> bool {
        let key = registry_key(name);
        !key.is_empty() && self.names.contains(&key)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Normalized names, sorted
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.names.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

fn registry_key(name: &str) -> String {
    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_uppercase()
}
