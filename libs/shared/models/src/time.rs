//! Timestamp (de)serialization helpers for PostgREST rows.
//!
//! Columns declared `timestamp without time zone` come back from the REST
//! layer without an offset. All stored instants in this system are UTC, so
//! deserialization re-attaches UTC to offset-less values instead of failing.

use chrono::{DateTime, NaiveDateTime, Utc};

/// Parse a storage timestamp into a canonical UTC instant.
///
/// Accepts RFC 3339 values with any offset (normalized to UTC) and bare
/// `YYYY-MM-DDTHH:MM:SS[.f]` values (taken as already-UTC).
pub fn parse_utc(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
}

/// Serde adapter for `DateTime<Utc>` fields backed by storage timestamps.
pub mod utc_timestamp {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse_utc(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_rfc3339_with_offset_to_utc() {
        let parsed = parse_utc("2026-03-10T11:30:00+02:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap());
    }

    #[test]
    fn parses_utc_rfc3339() {
        let parsed = parse_utc("2026-03-10T09:30:00Z").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap());
    }

    #[test]
    fn reattaches_utc_to_naive_timestamps() {
        let parsed = parse_utc("2026-03-10T09:30:00").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 3, 10, 9, 30, 0).unwrap());

        let with_space = parse_utc("2026-03-10 09:30:00.5").unwrap();
        assert_eq!(with_space.timestamp(), parsed.timestamp());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_utc("next tuesday").is_err());
    }
}
