//! Bounded concurrent blueprint fetching
//!
//! One GET per listed identifier, at most [`MAX_IN_FLIGHT`] requests open at
//! a time. The fan-out always joins every item — a failing blueprint never
//! cancels or delays its neighbours, it just lands in the error sequence
//! instead of the data sequence.

use crate::config::Config;
use crate::error::{Error, Result};
use crate::extract;
use crate::types::{ArtifactRecord, BlueprintId, ErrorRecord, FetchReport};
use chrono::Utc;
use futures::stream::{self, StreamExt};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, error, warn};

/// Maximum number of blueprint requests in flight at once
///
/// Excess items queue until a slot frees.
pub const MAX_IN_FLIGHT: usize = 5;

/// Fetch every listed blueprint and partition the outcomes
///
/// Completion contract: returns only after every identifier has produced
/// exactly one outcome, so
/// `report.records.len() + report.errors.len() == ids.len()` always holds.
/// Outcomes accumulate in completion order, which concurrency may reorder
/// relative to the listing.
pub async fn fetch_all(
    client: &reqwest::Client,
    config: &Config,
    token: &str,
    ids: Vec<BlueprintId>,
) -> FetchReport {
    let total = ids.len();
    let completed = Arc::new(AtomicUsize::new(0));

    let outcomes: Vec<(BlueprintId, Result<ArtifactRecord>)> = stream::iter(ids)
        .map(|id| {
            let client = client.clone();
            let completed = Arc::clone(&completed);

            async move {
                let outcome = fetch_one(&client, config, token, &id).await;

                match &outcome {
                    Ok(record) => {
                        debug!(
                            id = %record.id,
                            space = %record.space,
                            name = %record.name,
                            "finished processing blueprint"
                        );
                    }
                    Err(Error::UnexpectedStatus(status)) => {
                        warn!(id = %id, status = %status, "error processing blueprint");
                    }
                    Err(e) => {
                        error!(id = %id, error = %e, "unexpected error processing blueprint");
                    }
                }

                let done = completed.fetch_add(1, Ordering::Relaxed) + 1;
                debug!(completed = done, total, "progress");

                (id, outcome)
            }
        })
        .buffer_unordered(MAX_IN_FLIGHT)
        .collect()
        .await;

    let mut report = FetchReport::default();
    for (id, outcome) in outcomes {
        match outcome {
            Ok(record) => report.records.push(record),
            Err(_) => report.errors.push(ErrorRecord { id }),
        }
    }
    report
}

/// Fetch and shape a single blueprint
///
/// Any error here is per-item: the caller records it and moves on. No retry.
async fn fetch_one(
    client: &reqwest::Client,
    config: &Config,
    token: &str,
    id: &BlueprintId,
) -> Result<ArtifactRecord> {
    let response = client
        .get(config.blueprint_endpoint(id))
        .bearer_auth(token)
        .send()
        .await?;

    let status = response.status();
    if status != reqwest::StatusCode::OK {
        return Err(Error::UnexpectedStatus(status));
    }

    let doc: serde_json::Value = response.json().await?;

    let name = extract::blueprint_name(&doc)?;
    let space = extract::space_name(&doc)?;
    let last_modified = extract::last_modified(&doc)?;
    let age_in_days = extract::age_in_days(last_modified.timestamp, Utc::now());

    Ok(ArtifactRecord {
        id: id.clone(),
        name,
        space,
        last_modified: last_modified.display,
        age_in_days,
    })
}
