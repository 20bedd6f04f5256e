//! Error types for bwl-report
//!
//! Two classes of failure flow through the tool:
//! - fatal errors (config, auth, listing, report output) that abort the run,
//! - per-blueprint errors (bad status, transport trouble, malformed document)
//!   that the fetch loop downgrades to an error-report row.
//!
//! Both classes share the same [`Error`] enum; the distinction is where an
//! error surfaces, not which variant it is.

use thiserror::Error;

/// Result type alias for bwl-report operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for bwl-report
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "root-url")
        key: Option<String>,
    },

    /// Token acquisition failed (missing or empty access token, rejected grant)
    #[error("authentication error: {0}")]
    Auth(String),

    /// The library listing call failed or returned an unusable body
    #[error("listing error: {0}")]
    Listing(String),

    /// A blueprint fetch returned a non-success HTTP status
    #[error("unexpected response status: {0}")]
    UnexpectedStatus(reqwest::StatusCode),

    /// A blueprint document was missing an expected field or carried an
    /// unusable value
    #[error("malformed blueprint document: {0}")]
    Document(String),

    /// Network error
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    /// Shorthand for a [`Error::Config`] tied to a specific key
    pub fn config(message: impl Into<String>, key: impl Into<String>) -> Self {
        Error::Config {
            message: message.into(),
            key: Some(key.into()),
        }
    }
}
