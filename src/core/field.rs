//! Field value types and ordering

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::OnceLock;
use uuid::Uuid;

/// A polymorphic field value that can hold different types
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Null,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view of integer and float values
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Integer(i) => Some(*i as f64),
            FieldValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Chronological view of the value
    ///
    /// `DateTime` values are returned as-is; strings are accepted when they
    /// look like an ISO 8601 date or date-time, including unpadded months
    /// and days (`2024-2-1`).
    pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::DateTime(dt) => Some(*dt),
            FieldValue::String(s) => parse_date_like(s),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Project the value to the string used for search and equality filters
    ///
    /// Returns `None` for `Null`.
    pub fn to_display_string(&self) -> Option<String> {
        match self {
            FieldValue::String(s) => Some(s.clone()),
            FieldValue::Integer(i) => Some(i.to_string()),
            FieldValue::Float(f) => Some(f.to_string()),
            FieldValue::Boolean(b) => Some(b.to_string()),
            FieldValue::Uuid(u) => Some(u.to_string()),
            FieldValue::DateTime(dt) => Some(dt.to_rfc3339()),
            FieldValue::Null => None,
        }
    }

    /// Total ordering between two defined values
    ///
    /// Values are ranked by kind first: numbers, then date-like values,
    /// then booleans, then everything else. Within a kind, numbers compare
    /// numerically (integers exactly), dates chronologically, booleans with
    /// `false < true`, and the rest by [`locale_cmp`] on the string
    /// projection. `Null` sorts last.
    pub fn compare(&self, other: &FieldValue) -> Ordering {
        let (left, right) = (self.rank(), other.rank());
        if left != right {
            return left.cmp(&right);
        }

        match (self, other) {
            (FieldValue::Integer(a), FieldValue::Integer(b)) => return a.cmp(b),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => return a.cmp(b),
            _ => {}
        }

        if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
            return a.total_cmp(&b);
        }

        if let (Some(a), Some(b)) = (self.as_datetime(), other.as_datetime()) {
            return a.cmp(&b);
        }

        let a = self.to_display_string().unwrap_or_default();
        let b = other.to_display_string().unwrap_or_default();
        locale_cmp(&a, &b)
    }

    /// Whether [`compare`](Self::compare) orders the two values by content
    /// rather than by kind
    pub fn is_comparable_with(&self, other: &FieldValue) -> bool {
        self.rank() == other.rank()
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Integer(_) | FieldValue::Float(_) => 0,
            FieldValue::DateTime(_) => 1,
            FieldValue::String(s) if parse_date_like(s).is_some() => 1,
            FieldValue::Boolean(_) => 2,
            FieldValue::String(_) | FieldValue::Uuid(_) => 3,
            FieldValue::Null => 4,
        }
    }
}

/// Case-insensitive string ordering with a raw-string tie-break
///
/// Mirrors what users expect from a list column: `apple`, `Banana`,
/// `cherry` rather than byte order, while staying total and deterministic.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

fn date_like_regex() -> &'static Regex {
    static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
    DATE_REGEX.get_or_init(|| {
        Regex::new(
            r"^(\d{4})-(\d{1,2})-(\d{1,2})(?:[T ](\d{1,2}):(\d{1,2})(?::(\d{1,2})(?:\.\d+)?)?(?:Z|[+-]\d{2}:?\d{2})?)?$",
        )
        .expect("date regex is valid")
    })
}

/// Parse an ISO 8601 date or date-time string into UTC
///
/// RFC 3339 strings keep their offset. Other accepted shapes are read as
/// UTC wall-clock time.
pub fn parse_date_like(input: &str) -> Option<DateTime<Utc>> {
    let input = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Some(dt.with_timezone(&Utc));
    }

    let caps = date_like_regex().captures(input)?;
    let number = |idx: usize| -> Option<u32> {
        caps.get(idx).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let year: i32 = caps.get(1)?.as_str().parse().ok()?;
    let date = NaiveDate::from_ymd_opt(year, number(2)?, number(3)?)?;
    let time = NaiveTime::from_hms_opt(number(4)?, number(5)?, number(6)?)?;
    Some(date.and_time(time).and_utc())
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u32> for FieldValue {
    fn from(value: u32) -> Self {
        FieldValue::Integer(value.into())
    }
}

impl From<u64> for FieldValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => FieldValue::Integer(v),
            Err(_) => FieldValue::Float(value as f64),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<Uuid> for FieldValue {
    fn from(value: Uuid) -> Self {
        FieldValue::Uuid(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::DateTime(value)
    }
}

impl From<NaiveDate> for FieldValue {
    fn from(value: NaiveDate) -> Self {
        FieldValue::DateTime(value.and_time(NaiveTime::MIN).and_utc())
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl From<&serde_json::Value> for FieldValue {
    fn from(value: &serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => FieldValue::Null,
            Value::Bool(b) => FieldValue::Boolean(*b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Integer(i),
                None => n.as_f64().map_or(FieldValue::Null, FieldValue::Float),
            },
            Value::String(s) => FieldValue::String(s.clone()),
            other => FieldValue::String(other.to_string()),
        }
    }
}
