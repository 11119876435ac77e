//! Categorical and range filters
//!
//! Filters arrive from list-page controls (`<select>` dropdowns) or from the
//! `filter` query parameter as a JSON object:
//!
//! ```text
//! {"segment": "vip", "status": "all", "stats.total_spent>=": 100}
//! ```
//!
//! A plain key is an equality filter; a key ending in `>`, `>=`, `<` or `<=`
//! compares the field against the operand.

use crate::core::error::QueryError;
use crate::core::field::{FieldValue, parse_date_like};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::cmp::Ordering;

/// Filter value meaning "no restriction"
pub const ALL_SENTINEL: &str = "all";

/// Comparison operator of a range filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CompareOp {
    #[serde(rename = ">")]
    Gt,
    #[serde(rename = ">=")]
    Gte,
    #[serde(rename = "<")]
    Lt,
    #[serde(rename = "<=")]
    Lte,
}

impl CompareOp {
    /// Whether `ordering` (field compared to operand) satisfies the operator
    pub fn holds(self, ordering: Ordering) -> bool {
        match self {
            CompareOp::Gt => ordering == Ordering::Greater,
            CompareOp::Gte => ordering != Ordering::Less,
            CompareOp::Lt => ordering == Ordering::Less,
            CompareOp::Lte => ordering != Ordering::Greater,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOp::Gt => ">",
            CompareOp::Gte => ">=",
            CompareOp::Lt => "<",
            CompareOp::Lte => "<=",
        }
    }

    /// Split a filter key such as `price>=` into its field and operator
    pub fn split_key(key: &str) -> (&str, Option<CompareOp>) {
        // two-character operators first so `>=` is not read as `>`
        for op in [CompareOp::Gte, CompareOp::Lte, CompareOp::Gt, CompareOp::Lt] {
            if let Some(field) = key.strip_suffix(op.symbol()) {
                return (field.trim_end(), Some(op));
            }
        }
        (key, None)
    }
}

/// The condition a single filter applies to its field
#[derive(Debug, Clone, PartialEq)]
pub enum FilterCondition {
    /// Normalised string equality; `"all"` or empty means inactive
    Equals(String),
    /// Ordering against an operand
    Compare(CompareOp, FieldValue),
}

/// One filter over one field
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub field: String,
    pub condition: FilterCondition,
}

impl Filter {
    /// Whether this filter restricts anything
    pub fn is_active(&self) -> bool {
        match &self.condition {
            FilterCondition::Equals(value) => !is_sentinel(value),
            FilterCondition::Compare(_, operand) => !operand.is_null(),
        }
    }

    /// Evaluate the filter against a resolved field value
    ///
    /// A missing or null field never satisfies an active filter.
    pub fn accepts(&self, value: Option<&FieldValue>) -> bool {
        if !self.is_active() {
            return true;
        }

        let Some(value) = value.filter(|v| !v.is_null()) else {
            return false;
        };

        match &self.condition {
            FilterCondition::Equals(expected) => {
                value
                    .to_display_string()
                    .is_some_and(|actual| normalize(&actual) == normalize(expected))
                    || same_date(value, expected)
            }
            FilterCondition::Compare(op, operand) => {
                value.is_comparable_with(operand) && op.holds(value.compare(operand))
            }
        }
    }
}

/// Ordered set of filters, at most one per field and operator
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    entries: Vec<Filter>,
}

impl Filters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an equality filter, replacing any previous one on the same field
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(Filter {
            field: field.into(),
            condition: FilterCondition::Equals(value.into()),
        });
        self
    }

    /// Add a range filter, replacing any previous one with the same operator
    pub fn compare(
        mut self,
        field: impl Into<String>,
        op: CompareOp,
        operand: impl Into<FieldValue>,
    ) -> Self {
        self.insert(Filter {
            field: field.into(),
            condition: FilterCondition::Compare(op, operand.into()),
        });
        self
    }

    pub fn insert(&mut self, filter: Filter) {
        let slot = self
            .entries
            .iter_mut()
            .find(|existing| existing.field == filter.field && same_kind(existing, &filter));
        match slot {
            Some(existing) => *existing = filter,
            None => self.entries.push(filter),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Filter> {
        self.entries.iter()
    }

    /// Filters that actually restrict the result
    pub fn active(&self) -> impl Iterator<Item = &Filter> {
        self.entries.iter().filter(|f| f.is_active())
    }

    pub fn is_empty(&self) -> bool {
        self.active().next().is_none()
    }

    /// Parse the JSON object form used by the `filter` query parameter
    pub fn from_json(value: &Value) -> Result<Self, QueryError> {
        let Value::Object(map) = value else {
            return Err(QueryError::invalid_filter("expected a JSON object"));
        };

        let mut filters = Filters::new();
        for (key, operand) in map {
            let (field, op) = CompareOp::split_key(key);
            if field.is_empty() {
                return Err(QueryError::invalid_filter(format!(
                    "filter key '{}' names no field",
                    key
                )));
            }

            let condition = match (op, operand) {
                (_, Value::Array(_) | Value::Object(_)) => {
                    return Err(QueryError::invalid_filter(format!(
                        "filter '{}' must be a scalar value",
                        key
                    )));
                }
                (None, Value::Null) => FilterCondition::Equals(String::new()),
                (None, Value::String(s)) => FilterCondition::Equals(s.clone()),
                (None, other) => FilterCondition::Equals(
                    FieldValue::from(other).to_display_string().unwrap_or_default(),
                ),
                (Some(_), Value::Null) => {
                    return Err(QueryError::invalid_filter(format!(
                        "filter '{}' needs an operand",
                        key
                    )));
                }
                (Some(op), other) => FilterCondition::Compare(op, FieldValue::from(other)),
            };

            filters.insert(Filter {
                field: field.to_string(),
                condition,
            });
        }
        Ok(filters)
    }

    /// Parse the JSON text form of the `filter` query parameter
    pub fn from_json_str(input: &str) -> Result<Self, QueryError> {
        let value: Value = serde_json::from_str(input)
            .map_err(|e| QueryError::invalid_filter(format!("malformed JSON: {}", e)))?;
        Self::from_json(&value)
    }
}

fn same_kind(a: &Filter, b: &Filter) -> bool {
    match (&a.condition, &b.condition) {
        (FilterCondition::Equals(_), FilterCondition::Equals(_)) => true,
        (FilterCondition::Compare(x, _), FilterCondition::Compare(y, _)) => x == y,
        _ => false,
    }
}

fn is_sentinel(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL_SENTINEL)
}

/// Date equality; a filter value without a time part matches the whole day
fn same_date(value: &FieldValue, expected: &str) -> bool {
    let (Some(actual), Some(wanted)) = (value.as_datetime(), parse_date_like(expected)) else {
        return false;
    };
    if expected.contains(':') {
        actual == wanted
    } else {
        actual.date_naive() == wanted.date_naive()
    }
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Timelike, Utc};
    use serde_json::json;

    fn text(s: &str) -> FieldValue {
        FieldValue::String(s.to_string())
    }

    #[test]
    fn test_sentinel_filters_are_inactive() {
        let filters = Filters::new().eq("segment", "all").eq("status", "  ");
        assert!(filters.is_empty());
        assert!(filters.iter().all(|f| f.accepts(None)));
    }

    #[test]
    fn test_equality_is_normalised() {
        let filter = Filter {
            field: "segment".to_string(),
            condition: FilterCondition::Equals("VIP ".to_string()),
        };
        assert!(filter.accepts(Some(&text("vip"))));
        assert!(!filter.accepts(Some(&text("regular"))));
    }

    #[test]
    fn test_missing_field_fails_active_filter() {
        let filter = Filter {
            field: "segment".to_string(),
            condition: FilterCondition::Equals("vip".to_string()),
        };
        assert!(!filter.accepts(None));
        assert!(!filter.accepts(Some(&FieldValue::Null)));
    }

    #[test]
    fn test_compare_filter() {
        let filter = Filter {
            field: "total".to_string(),
            condition: FilterCondition::Compare(CompareOp::Gte, FieldValue::Integer(100)),
        };
        assert!(filter.accepts(Some(&FieldValue::Float(100.0))));
        assert!(filter.accepts(Some(&FieldValue::Integer(250))));
        assert!(!filter.accepts(Some(&FieldValue::Integer(99))));
    }

    #[test]
    fn test_compare_filter_skips_other_kinds() {
        let filter = Filter {
            field: "total".to_string(),
            condition: FilterCondition::Compare(CompareOp::Lt, FieldValue::Integer(100)),
        };
        assert!(!filter.accepts(Some(&text("n/a"))));
        assert!(!filter.accepts(Some(&text("2024-01-01"))));
    }

    #[test]
    fn test_float_operand_matches_float_field() {
        let filters = Filters::from_json(&json!({ "price": 3.0 })).unwrap();
        let filter = filters.iter().next().unwrap();

        assert_eq!(filter.condition, FilterCondition::Equals("3".to_string()));
        assert!(filter.accepts(Some(&FieldValue::Float(3.0))));
        assert!(filter.accepts(Some(&FieldValue::Integer(3))));
        assert!(!filter.accepts(Some(&FieldValue::Float(3.5))));
    }

    #[test]
    fn test_date_equality_on_datetime_field() {
        let placed = Utc.with_ymd_and_hms(2024, 3, 15, 9, 30, 0).unwrap();
        let day = Filter {
            field: "placed_at".to_string(),
            condition: FilterCondition::Equals("2024-03-15".to_string()),
        };
        assert!(day.accepts(Some(&FieldValue::DateTime(placed))));
        assert!(day.accepts(Some(&text("2024-3-15"))));
        assert!(!day.accepts(Some(&FieldValue::DateTime(placed + chrono::Duration::days(1)))));

        let instant = Filter {
            field: "placed_at".to_string(),
            condition: FilterCondition::Equals("2024-03-15T09:30:00Z".to_string()),
        };
        assert!(instant.accepts(Some(&FieldValue::DateTime(placed))));
        assert!(!instant.accepts(Some(&FieldValue::DateTime(placed.with_hour(10).unwrap()))));
    }

    #[test]
    fn test_split_key() {
        assert_eq!(CompareOp::split_key("price>="), ("price", Some(CompareOp::Gte)));
        assert_eq!(CompareOp::split_key("price<"), ("price", Some(CompareOp::Lt)));
        assert_eq!(CompareOp::split_key("price"), ("price", None));
    }

    #[test]
    fn test_from_json() {
        let filters = Filters::from_json(&json!({
            "segment": "vip",
            "stats.total_spent>": 100,
            "active": true
        }))
        .unwrap();

        let condition = |field: &str| {
            filters
                .iter()
                .find(|f| f.field == field)
                .map(|f| f.condition.clone())
        };

        assert_eq!(filters.iter().count(), 3);
        assert_eq!(
            condition("segment"),
            Some(FilterCondition::Equals("vip".to_string()))
        );
        assert_eq!(
            condition("stats.total_spent"),
            Some(FilterCondition::Compare(CompareOp::Gt, FieldValue::Integer(100)))
        );
        assert_eq!(
            condition("active"),
            Some(FilterCondition::Equals("true".to_string()))
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(Filters::from_json(&json!(["vip"])).is_err());
        assert!(Filters::from_json(&json!({ "segment": ["vip"] })).is_err());
        assert!(Filters::from_json(&json!({ "price>": null })).is_err());
        assert!(Filters::from_json(&json!({ ">=": 3 })).is_err());
        assert!(Filters::from_json_str("{not json").is_err());
    }

    #[test]
    fn test_insert_replaces_same_field_and_kind() {
        let filters = Filters::new()
            .eq("segment", "vip")
            .eq("segment", "regular")
            .compare("price", CompareOp::Gte, 10)
            .compare("price", CompareOp::Lte, 50);

        let collected: Vec<_> = filters.iter().collect();
        assert_eq!(collected.len(), 3);
        assert_eq!(
            collected[0].condition,
            FilterCondition::Equals("regular".to_string())
        );
    }
}
