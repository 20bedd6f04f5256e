//! CSV report output
//!
//! Two files per run, both overwritten in place: the data report (one row
//! per exported blueprint) and the error report (one row per failed id).
//! Headers are only written when at least one data row exists — a run that
//! exports nothing leaves an empty, headerless file behind rather than a
//! lone header row.

use crate::error::Result;
use crate::types::{ArtifactRecord, ErrorRecord, FetchReport};
use std::borrow::Cow;
use std::path::Path;
use tracing::info;

/// File name of the success report
pub const DATA_FILE: &str = "data_file.csv";

/// File name of the error report
pub const ERROR_FILE: &str = "error_file.csv";

const DATA_HEADER: &str = "ID,Name,Space,LMD,Age in Days";
const ERROR_HEADER: &str = "ID";

/// Write both report files into `dir`, overwriting previous runs
pub async fn write_reports(report: &FetchReport, dir: &Path) -> Result<()> {
    let data_path = dir.join(DATA_FILE);
    tokio::fs::write(&data_path, render_data(&report.records)).await?;
    info!(
        path = %data_path.display(),
        rows = report.records.len(),
        "data report written"
    );

    let error_path = dir.join(ERROR_FILE);
    tokio::fs::write(&error_path, render_errors(&report.errors)).await?;
    info!(
        path = %error_path.display(),
        rows = report.errors.len(),
        "error report written"
    );

    Ok(())
}

/// Render the data report, rows in the order records were accumulated
pub fn render_data(records: &[ArtifactRecord]) -> String {
    if records.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(DATA_HEADER);
    out.push('\n');

    for record in records {
        let row = [
            csv_field(record.id.as_str()),
            csv_field(&record.name),
            csv_field(&record.space),
            csv_field(&record.last_modified),
            Cow::Owned(record.age_in_days.to_string()),
        ];
        out.push_str(&row.join(","));
        out.push('\n');
    }

    out
}

/// Render the error report
pub fn render_errors(errors: &[ErrorRecord]) -> String {
    if errors.is_empty() {
        return String::new();
    }

    let mut out = String::new();
    out.push_str(ERROR_HEADER);
    out.push('\n');

    for error in errors {
        out.push_str(&csv_field(error.id.as_str()));
        out.push('\n');
    }

    out
}

/// Quote a field when it contains a separator, quote, or line break;
/// embedded quotes are doubled
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
