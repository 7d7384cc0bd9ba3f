//! Provenance and schema descriptors for reference datasets.

use serde::{Deserialize, Serialize};

/// Semantic version describing the schema of a serialized dataset document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Major version incremented for breaking changes.
    pub major: u32,
    /// Minor version incremented for additive changes.
    pub minor: u32,
    /// Patch version incremented for data corrections.
    pub patch: u32,
}

impl SchemaVersion {
    /// Creates a new schema version descriptor.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Returns true when a document written with `other` can be read by `self`.
    pub fn reads(&self, other: &SchemaVersion) -> bool {
        self.major == other.major && self.minor >= other.minor
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

impl std::fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Identifies the published standard a reference dataset reproduces.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetProvenance {
    /// Name of the published standard.
    pub standard: String,
    /// Publication year of the standard.
    pub year: u16,
    /// Schema version of the dataset document.
    pub schema_version: SchemaVersion,
    /// Hex encoded SHA-256 digest of the canonical dataset bytes.
    #[serde(default)]
    pub digest: String,
}

impl Default for DatasetProvenance {
    fn default() -> Self {
        Self {
            standard: "WHO Child Growth Standards".into(),
            year: 2006,
            schema_version: SchemaVersion::default(),
            digest: String::new(),
        }
    }
}
