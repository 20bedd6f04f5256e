//! Field extraction from blueprint documents
//!
//! The per-blueprint endpoint returns a JSON document; only four fields
//! matter to the report. Extraction is pure so document-shape quirks can be
//! pinned down in unit tests without a server. Every function returns
//! [`Error::Document`] on a missing or unusable field, which the fetch loop
//! downgrades to an error-report row.

use crate::error::{Error, Result};
use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value;

/// Last-modified information carried by a blueprint document
///
/// `display` keeps the platform's own rendition for the report (the raw
/// string when the field was a string, `%Y-%m-%d` UTC formatting when it was
/// an epoch-milliseconds number); `timestamp` is the parsed instant used for
/// the age computation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LastModified {
    /// Rendition written to the report
    pub display: String,
    /// Parsed instant
    pub timestamp: DateTime<Utc>,
}

/// Extract the blueprint name
pub fn blueprint_name(doc: &Value) -> Result<String> {
    doc.get("name")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::Document("missing or non-string field: name".to_string()))
}

/// Extract the containing space's name
///
/// Newer documents carry a flat `spaceName`; older ones nest it under
/// `space.name`. Both forms are accepted.
pub fn space_name(doc: &Value) -> Result<String> {
    if let Some(name) = doc.get("spaceName").and_then(Value::as_str) {
        return Ok(name.to_string());
    }

    doc.get("space")
        .and_then(|space| space.get("name"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| Error::Document("missing or non-string field: spaceName".to_string()))
}

/// Extract the last-modified date
///
/// `lastModifiedDate` arrives as an epoch-milliseconds number in current
/// API responses, but string dates (`%Y-%m-%d` or RFC 3339) also appear in
/// exported documents and are accepted.
pub fn last_modified(doc: &Value) -> Result<LastModified> {
    let field = doc
        .get("lastModifiedDate")
        .ok_or_else(|| Error::Document("missing field: lastModifiedDate".to_string()))?;

    match field {
        Value::Number(n) => {
            let millis = n.as_i64().ok_or_else(|| {
                Error::Document(format!("lastModifiedDate is not an integer: {}", n))
            })?;
            let timestamp = DateTime::<Utc>::from_timestamp_millis(millis).ok_or_else(|| {
                Error::Document(format!("lastModifiedDate out of range: {}", millis))
            })?;
            Ok(LastModified {
                display: timestamp.format("%Y-%m-%d").to_string(),
                timestamp,
            })
        }
        Value::String(s) => {
            let timestamp = parse_date_string(s)?;
            Ok(LastModified {
                display: s.clone(),
                timestamp,
            })
        }
        other => Err(Error::Document(format!(
            "lastModifiedDate has unexpected type: {}",
            other
        ))),
    }
}

fn parse_date_string(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        // Interpret a bare date as midnight UTC.
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }

    Err(Error::Document(format!(
        "lastModifiedDate is not a recognized date: {}",
        s
    )))
}

/// Whole days elapsed between a last-modified instant and `now`
///
/// `now` is a parameter so callers can pin the clock in tests; the fetch
/// loop passes `Utc::now()`.
pub fn age_in_days(last_modified: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - last_modified).num_days()
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blueprint_name() {
        let doc = json!({"name": "Customer Onboarding"});
        assert_eq!(blueprint_name(&doc).unwrap(), "Customer Onboarding");

        assert!(blueprint_name(&json!({})).is_err());
        assert!(blueprint_name(&json!({"name": 7})).is_err());
    }

    #[test]
    fn test_space_name_flat_and_nested() {
        let flat = json!({"spaceName": "HR Processes"});
        assert_eq!(space_name(&flat).unwrap(), "HR Processes");

        let nested = json!({"space": {"name": "HR Processes"}});
        assert_eq!(space_name(&nested).unwrap(), "HR Processes");

        // Flat form wins when both are present.
        let both = json!({"spaceName": "Flat", "space": {"name": "Nested"}});
        assert_eq!(space_name(&both).unwrap(), "Flat");

        assert!(space_name(&json!({})).is_err());
    }

    #[test]
    fn test_last_modified_epoch_millis() {
        // 2024-01-01T00:00:00Z
        let doc = json!({"lastModifiedDate": 1_704_067_200_000_i64});
        let lmd = last_modified(&doc).unwrap();
        assert_eq!(lmd.display, "2024-01-01");
        assert_eq!(lmd.timestamp.format("%Y-%m-%d %H:%M").to_string(), "2024-01-01 00:00");
    }

    #[test]
    fn test_last_modified_date_string() {
        let doc = json!({"lastModifiedDate": "2024-01-01"});
        let lmd = last_modified(&doc).unwrap();
        assert_eq!(lmd.display, "2024-01-01");
    }

    #[test]
    fn test_last_modified_rfc3339_string() {
        let doc = json!({"lastModifiedDate": "2024-01-01T12:30:00Z"});
        let lmd = last_modified(&doc).unwrap();
        assert_eq!(lmd.display, "2024-01-01T12:30:00Z");
        assert_eq!(lmd.timestamp.format("%H:%M").to_string(), "12:30");
    }

    #[test]
    fn test_last_modified_rejects_garbage() {
        assert!(last_modified(&json!({})).is_err());
        assert!(last_modified(&json!({"lastModifiedDate": "yesterday"})).is_err());
        assert!(last_modified(&json!({"lastModifiedDate": true})).is_err());
        assert!(last_modified(&json!({"lastModifiedDate": 1.5})).is_err());
    }

    #[test]
    fn test_age_in_days_pinned_clock() {
        let lmd = "2024-01-01T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        let now = "2024-01-11T00:00:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(age_in_days(lmd, now), 10);

        // Partial days truncate toward zero.
        let now = "2024-01-11T23:59:00Z".parse::<DateTime<Utc>>().unwrap();
        assert_eq!(age_in_days(lmd, now), 10);

        // A document modified "in the future" yields a negative age rather
        // than an error; the report simply carries the number.
        assert_eq!(age_in_days(now, lmd), -10);
    }
}
