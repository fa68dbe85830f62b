//! Wire codecs
//!
//! Lenient readers for the amounts and timestamps the transactions API
//! sends, and the canonical writers used when we serve them ourselves.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, Utc};
use serde::de::{self, Deserializer, Visitor};
use serde::Serializer;
use std::fmt;

/// Parse a numeric string the way the dashboard reads balance fields.
///
/// Surrounding whitespace is ignored and an empty string reads as zero.
pub fn parse_amount(raw: &str) -> Result<f64, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed
        .parse::<f64>()
        .map_err(|_| format!("invalid amount: {:?}", raw))
}

/// Parse a `created_at` value into a UTC instant.
///
/// Accepts RFC 3339, an offset-less `YYYY-MM-DDTHH:MM:SS[.fff]` (read as
/// UTC) and a bare `YYYY-MM-DD` (UTC midnight).
pub fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, String> {
    let trimmed = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }

    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(naive.and_utc());
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }

    Err(format!("invalid timestamp: {:?}", raw))
}

struct AmountVisitor;

impl<'de> Visitor<'de> for AmountVisitor {
    type Value = f64;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a number or a numeric string")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<f64, E> {
        Ok(v)
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<f64, E> {
        Ok(v as f64)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<f64, E> {
        parse_amount(v).map_err(E::custom)
    }
}

/// Deserialize an amount sent as a JSON number or a numeric string
pub fn deserialize_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    deserializer.deserialize_any(AmountVisitor)
}

/// Serialize an amount as a numeric string (`1000`, `12.5`)
pub fn serialize_amount_string<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

/// Deserialize a `created_at` string
pub fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: String = serde::Deserialize::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(de::Error::custom)
}

/// Serialize a timestamp as `2020-05-24T00:00:00.000Z`
pub fn serialize_timestamp<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount("1000").unwrap(), 1000.0);
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
        assert_eq!(parse_amount("-3").unwrap(), -3.0);
        assert_eq!(parse_amount("").unwrap(), 0.0);
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_timestamp_rfc3339() {
        let ts = parse_timestamp("2020-05-24T00:00:00.000Z").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 5, 24, 0, 0, 0).unwrap());

        // Offsets are normalised to UTC
        let ts = parse_timestamp("2020-05-24T22:30:00-03:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 5, 25, 1, 30, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_without_offset() {
        let ts = parse_timestamp("2020-05-24T10:15:00").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 5, 24, 10, 15, 0).unwrap());

        let ts = parse_timestamp("2020-05-24").unwrap();
        assert_eq!(ts, Utc.with_ymd_and_hms(2020, 5, 24, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_timestamp_invalid() {
        assert!(parse_timestamp("yesterday").is_err());
        assert!(parse_timestamp("").is_err());
    }
}
