//! Library listing and listing-body parsing
//!
//! The listing endpoint returns plain text rather than JSON: one line per
//! artifact, each identifier wrapped in quotes and a leading slash, preceded
//! by a marker line and terminated by a trailing newline.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::types::BlueprintId;
use tracing::debug;

/// Fetch the identifiers of every blueprint in the library
///
/// One synchronous call; the platform does not paginate this endpoint.
///
/// # Errors
///
/// Returns [`Error::Listing`] if the endpoint answers with a non-success
/// status or the body cannot be read. Both are fatal for the run.
pub async fn list_blueprints(
    client: &reqwest::Client,
    config: &Config,
    token: &str,
) -> Result<Vec<BlueprintId>> {
    let response = client
        .get(config.listing_endpoint())
        .bearer_auth(token)
        .send()
        .await
        .map_err(|e| Error::Listing(format!("listing request failed: {}", e)))?;

    let status = response.status();
    if !status.is_success() {
        return Err(Error::Listing(format!(
            "listing endpoint returned HTTP {}",
            status.as_u16()
        )));
    }

    let body = response
        .text()
        .await
        .map_err(|e| Error::Listing(format!("failed to read listing body: {}", e)))?;

    let ids = parse_listing(&body);
    debug!(count = ids.len(), "library listing parsed");
    Ok(ids)
}

/// Parse the raw listing body into blueprint identifiers
///
/// Body contract: a marker line (the requested column name), then one
/// wrapped identifier per line, then a trailing newline. So a body of
///
/// ```text
/// "ID"
/// "/abc"
/// "/def"
/// ```
///
/// parses to `["abc", "def"]`.
///
/// The first and last `\n`-separated elements are dropped unconditionally
/// (the marker line and the empty residue after the trailing newline), then
/// each remaining entry is stripped of `/` and `"` wrapping.
///
/// Edge cases:
/// - A body with two or fewer lines parses to an empty list. A single- or
///   zero-entry library therefore needs the marker and trailing newline to
///   be present, which the platform always emits.
/// - Entries that are empty after trimming are retained; they surface as
///   per-item failures downstream rather than being silently skipped.
pub fn parse_listing(body: &str) -> Vec<BlueprintId> {
    let lines: Vec<&str> = body.split('\n').collect();
    if lines.len() <= 2 {
        return Vec::new();
    }

    lines[1..lines.len() - 1]
        .iter()
        .map(|entry| BlueprintId::new(entry.trim_matches(|c| c == '/' || c == '"')))
        .collect()
}
