//! # bwl-report
//!
//! One-shot blueprint inventory reporter for Blueworks Live libraries.
//!
//! A run authenticates against the platform's reporting API, lists every
//! BLUEPRINT artifact in the library, fetches each blueprint's document with
//! bounded concurrency, and writes two CSV files: the inventory itself and
//! the identifiers that could not be fetched.
//!
//! ## Quick Start
//!
//! ```no_run
//! use bwl_report::{Config, run_report};
//! use std::path::Path;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.yaml"))?;
//!     let summary = run_report(&config, Path::new(".")).await?;
//!     println!(
//!         "{} listed, {} exported, {} failed",
//!         summary.listed, summary.exported, summary.failed
//!     );
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// OAuth token acquisition
pub mod auth;
/// Configuration types
pub mod config;
/// Error types
pub mod error;
/// Field extraction from blueprint documents
pub mod extract;
/// Bounded concurrent blueprint fetching
pub mod fetch;
/// Library listing and listing-body parsing
pub mod listing;
/// CSV report output
pub mod report;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use error::{Error, Result};
pub use types::{ArtifactRecord, BlueprintId, ErrorRecord, FetchReport, RunSummary};

use std::path::Path;
use tracing::info;

/// User agent attached to every request the tool makes
pub const USER_AGENT: &str = concat!("bwl-report/", env!("CARGO_PKG_VERSION"));

/// Run one complete reporting pass: authenticate, list, fetch, write
///
/// Report files land in `out_dir`, overwriting any previous run.
///
/// # Errors
///
/// Fails on configuration, authentication, listing, or output errors; those
/// are the fatal classes. Per-blueprint fetch failures never surface here —
/// they are collected into the error report and counted in the returned
/// [`RunSummary`].
pub async fn run_report(config: &Config, out_dir: &Path) -> Result<RunSummary> {
    let api_client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;

    // Per-blueprint fetches skip certificate verification; auth and listing
    // stay on the verifying client.
    let fetch_client = reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .danger_accept_invalid_certs(true)
        .build()?;

    let token = auth::acquire_token(&api_client, config).await?;

    let ids = listing::list_blueprints(&api_client, config, &token).await?;
    let listed = ids.len();
    info!(count = listed, "found blueprints");

    let report = fetch::fetch_all(&fetch_client, config, &token, ids).await;

    report::write_reports(&report, out_dir).await?;

    Ok(RunSummary {
        listed,
        exported: report.records.len(),
        failed: report.errors.len(),
    })
}
