//! Timestamp decoding for API payloads.
//!
//! The API emits RFC 3339 timestamps with an offset, or naive ISO-8601
//! timestamps which are taken as UTC.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};

/// Parse a timestamp in either accepted form.
pub fn parse(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    raw.parse::<NaiveDateTime>().ok().map(|naive| naive.and_utc())
}

/// `deserialize_with` adapter for `DateTime<Utc>` fields.
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse(&raw).ok_or_else(|| D::Error::custom(format!("invalid timestamp: {raw}")))
}
