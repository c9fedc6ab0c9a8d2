//! Record normalization: loosely-typed documents in, strict entities out.
//!
//! Coercion never fails. Numeric fields that are missing or unparseable
//! resolve to zero, and timestamps that are missing or unparseable resolve to
//! "no timestamp". The only hard requirement on a record is its document id;
//! records without one are dropped by [`normalize_all`].

use core::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;

use smartstock_core::{DomainError, DomainResult, Entity};

use crate::record::RawRecord;

/// An entity that can be built from a fetched document.
pub trait FromRecord: Entity + Sized {
    /// Strict conversion; fails with [`DomainError::MalformedRecord`] when the
    /// record lacks its identity.
    fn from_record(record: &RawRecord) -> DomainResult<Self>;
}

/// Normalize a single record, or `None` if it lacks its identity field.
pub fn normalize<T: FromRecord>(record: &RawRecord) -> Option<T> {
    T::from_record(record).ok()
}

/// Normalize a batch, silently dropping malformed records.
///
/// Input order is preserved for the records that survive.
pub fn normalize_all<T: FromRecord>(records: &[RawRecord]) -> Vec<T> {
    let mut out = Vec::with_capacity(records.len());
    for record in records {
        match T::from_record(record) {
            Ok(entity) => out.push(entity),
            Err(e) => {
                tracing::debug!(kind = T::KIND, error = %e, "dropping malformed record");
            }
        }
    }
    out
}

/// Resolve the record's document id into a typed id.
pub(crate) fn document_id<I>(record: &RawRecord, kind: &'static str) -> DomainResult<I>
where
    I: FromStr<Err = DomainError>,
{
    let raw = record
        .id
        .as_deref()
        .ok_or_else(|| DomainError::malformed(kind, "missing document id"))?;
    raw.parse::<I>()
        .map_err(|e| DomainError::malformed(kind, e.to_string()))
}

/// Integer coercion. Fractions truncate toward zero; out-of-range values
/// saturate.
pub fn coerce_integer(value: Option<&Value>) -> Option<i64> {
    match value? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_u64().map(|_| i64::MAX))
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64)),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            s.parse::<i64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f as i64)
            })
        }
        _ => None,
    }
}

/// Non-negative integer field; anything negative or unparseable becomes 0.
pub fn coerce_count(value: Option<&Value>) -> u64 {
    coerce_integer(value)
        .filter(|n| *n >= 0)
        .map(|n| n as u64)
        .unwrap_or(0)
}

/// Exact decimal coercion from numbers or numeric strings.
pub fn coerce_decimal(value: Option<&Value>) -> Option<Decimal> {
    match value? {
        Value::Number(n) => {
            let repr = n.to_string();
            parse_decimal(&repr).or_else(|| n.as_f64().and_then(Decimal::from_f64))
        }
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

/// Non-negative decimal field; anything negative or unparseable becomes 0.
pub fn coerce_non_negative_decimal(value: Option<&Value>) -> Decimal {
    coerce_decimal(value)
        .filter(|d| !d.is_sign_negative())
        .map(|d| d.normalize())
        .unwrap_or(Decimal::ZERO)
}

fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}

/// The closed set of timestamp shapes the store may hand back.
#[derive(Debug, Clone, PartialEq)]
pub enum TimestampInput {
    /// Already an instant (in-process callers).
    Instant(DateTime<Utc>),
    /// RFC 3339 / ISO-8601 text. Offset-less text is read as UTC; a bare
    /// date means UTC midnight.
    Iso(String),
    /// Milliseconds since the Unix epoch.
    EpochMillis(i64),
    /// Provider-native wrapper (`{seconds, nanoseconds}`).
    Provider { seconds: i64, nanoseconds: i64 },
}

impl TimestampInput {
    /// Classify a raw JSON value; `None` for shapes outside the closed set.
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(s) => Some(Self::Iso(s.trim().to_string())),
            Value::Number(n) => n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
                .map(Self::EpochMillis),
            Value::Object(map) => {
                let seconds = map
                    .get("seconds")
                    .or_else(|| map.get("_seconds"))
                    .and_then(Value::as_i64)?;
                let nanoseconds = map
                    .get("nanoseconds")
                    .or_else(|| map.get("_nanoseconds"))
                    .map(|v| v.as_i64().unwrap_or(-1))
                    .unwrap_or(0);
                Some(Self::Provider {
                    seconds,
                    nanoseconds,
                })
            }
            _ => None,
        }
    }

    /// Convert to an instant; unparseable input fails closed to `None`.
    pub fn resolve(self) -> Option<DateTime<Utc>> {
        match self {
            Self::Instant(t) => Some(t),
            Self::Iso(s) => parse_iso(&s),
            Self::EpochMillis(ms) => DateTime::from_timestamp_millis(ms),
            Self::Provider {
                seconds,
                nanoseconds,
            } => {
                let nanos = u32::try_from(nanoseconds).ok().filter(|n| *n < 1_000_000_000)?;
                DateTime::from_timestamp(seconds, nanos)
            }
        }
    }
}

impl From<DateTime<Utc>> for TimestampInput {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Instant(value)
    }
}

fn parse_iso(s: &str) -> Option<DateTime<Utc>> {
    if s.is_empty() {
        return None;
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(s) {
        return Some(t.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Normalize any timestamp-ish field value.
pub fn normalize_timestamp(value: Option<&Value>) -> Option<DateTime<Utc>> {
    value
        .and_then(TimestampInput::from_value)
        .and_then(TimestampInput::resolve)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn integers_accept_numbers_and_numeric_strings() {
        assert_eq!(coerce_integer(Some(&json!(12))), Some(12));
        assert_eq!(coerce_integer(Some(&json!(" 7 "))), Some(7));
        assert_eq!(coerce_integer(Some(&json!("2.9"))), Some(2));
        assert_eq!(coerce_integer(Some(&json!(-3.5))), Some(-3));
        assert_eq!(coerce_integer(Some(&json!("abc"))), None);
        assert_eq!(coerce_integer(Some(&json!(true))), None);
        assert_eq!(coerce_integer(None), None);
    }

    #[test]
    fn counts_default_to_zero() {
        assert_eq!(coerce_count(Some(&json!("n/a"))), 0);
        assert_eq!(coerce_count(Some(&json!(-4))), 0);
        assert_eq!(coerce_count(Some(&json!(""))), 0);
        assert_eq!(coerce_count(Some(&json!("15"))), 15);
    }

    #[test]
    fn decimals_are_exact() {
        assert_eq!(
            coerce_non_negative_decimal(Some(&json!(0.1))),
            Decimal::new(1, 1)
        );
        assert_eq!(
            coerce_non_negative_decimal(Some(&json!("19.99"))),
            Decimal::new(1999, 2)
        );
        assert_eq!(
            coerce_non_negative_decimal(Some(&json!("1e2"))),
            Decimal::from(100)
        );
        assert_eq!(coerce_non_negative_decimal(Some(&json!(-5))), Decimal::ZERO);
        assert_eq!(coerce_non_negative_decimal(Some(&json!({}))), Decimal::ZERO);
    }

    #[test]
    fn timestamps_from_every_accepted_shape() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 5, 10, 30, 0).unwrap();

        assert_eq!(
            normalize_timestamp(Some(&json!("2024-03-05T10:30:00Z"))),
            Some(expected)
        );
        assert_eq!(
            normalize_timestamp(Some(&json!("2024-03-05T12:30:00+02:00"))),
            Some(expected)
        );
        assert_eq!(
            normalize_timestamp(Some(&json!("2024-03-05T10:30:00"))),
            Some(expected)
        );
        assert_eq!(
            normalize_timestamp(Some(&json!(expected.timestamp_millis()))),
            Some(expected)
        );
        assert_eq!(
            normalize_timestamp(Some(&json!({"seconds": expected.timestamp(), "nanoseconds": 0}))),
            Some(expected)
        );
        assert_eq!(
            normalize_timestamp(Some(&json!({"_seconds": expected.timestamp()}))),
            Some(expected)
        );
        assert_eq!(
            normalize_timestamp(Some(&json!("2024-03-05"))),
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 0, 0, 0).unwrap())
        );
        assert_eq!(TimestampInput::from(expected).resolve(), Some(expected));
    }

    #[test]
    fn unparseable_timestamps_fail_closed() {
        assert_eq!(normalize_timestamp(Some(&json!("yesterday"))), None);
        assert_eq!(normalize_timestamp(Some(&json!(""))), None);
        assert_eq!(normalize_timestamp(Some(&json!([1, 2]))), None);
        assert_eq!(normalize_timestamp(Some(&json!({"nanos": 5}))), None);
        assert_eq!(
            normalize_timestamp(Some(&json!({"seconds": 1, "nanoseconds": 2_000_000_000u64}))),
            None
        );
        assert_eq!(normalize_timestamp(None), None);
    }
}
