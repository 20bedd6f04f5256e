//! Core types for bwl-report

use serde::{Deserialize, Serialize};

/// Unique identifier of a blueprint in the platform library
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BlueprintId(pub String);

impl BlueprintId {
    /// Create a new BlueprintId
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for BlueprintId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for BlueprintId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BlueprintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One successfully fetched blueprint, shaped for the data report
///
/// Immutable once built; rows are accumulated in fetch-completion order,
/// which concurrency may reorder relative to the listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArtifactRecord {
    /// Blueprint identifier
    pub id: BlueprintId,
    /// Blueprint name
    pub name: String,
    /// Name of the space the blueprint lives in
    pub space: String,
    /// Last-modified date, kept in the rendition the platform returned
    pub last_modified: String,
    /// Whole days elapsed since the last modification
    pub age_in_days: i64,
}

/// A blueprint whose fetch did not produce a usable document
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ErrorRecord {
    /// Blueprint identifier
    pub id: BlueprintId,
}

/// Outcome of the bounded fan-out: the two owned sequences that partition
/// the listed identifiers
#[derive(Clone, Debug, Default)]
pub struct FetchReport {
    /// Successfully fetched blueprints, in completion order
    pub records: Vec<ArtifactRecord>,
    /// Blueprints that failed to fetch or parse, in completion order
    pub errors: Vec<ErrorRecord>,
}

impl FetchReport {
    /// Total number of outcomes accumulated so far
    pub fn len(&self) -> usize {
        self.records.len() + self.errors.len()
    }

    /// True when no outcome has been accumulated
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.errors.is_empty()
    }
}

/// Counts reported back to the console after a completed run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Number of identifiers returned by the listing call
    pub listed: usize,
    /// Number of blueprints exported to the data report
    pub exported: usize,
    /// Number of blueprints recorded in the error report
    pub failed: usize,
}
