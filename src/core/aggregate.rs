//! Summary aggregates over the unfiltered store
//!
//! KPI cards show global totals. They are computed from the whole store and
//! never from the filtered view, so typing a search term does not turn
//! "3 VIP customers" into "0".

use crate::core::field::FieldValue;
use crate::core::record::Record;
use indexmap::IndexMap;
use serde::Serialize;

/// Label under which records with a missing, null or blank group value are counted
pub const UNKNOWN_BUCKET: &str = "unknown";

/// Count of records per distinct group value, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Aggregate {
    counts: IndexMap<String, usize>,
}

impl Aggregate {
    /// Count for a label, 0 when absent
    pub fn get(&self, label: &str) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Sum of all counts
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(label, count)| (label.as_str(), *count))
    }

    pub fn into_inner(self) -> IndexMap<String, usize> {
        self.counts
    }
}

/// Numeric totals per distinct group value, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Totals {
    sums: IndexMap<String, f64>,
}

impl Totals {
    pub fn get(&self, label: &str) -> f64 {
        self.sums.get(label).copied().unwrap_or(0.0)
    }

    pub fn grand_total(&self) -> f64 {
        self.sums.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.sums.iter().map(|(label, sum)| (label.as_str(), *sum))
    }

    pub fn into_inner(self) -> IndexMap<String, f64> {
        self.sums
    }
}

/// Count records per value of `group_field` across the whole store
///
/// Every record lands in exactly one bucket, so the counts sum to
/// `store.len()`.
pub fn count_by<R: Record>(store: &[R], group_field: &str) -> Aggregate {
    let mut counts: IndexMap<String, usize> = IndexMap::new();
    for record in store {
        *counts.entry(group_label(record, group_field)).or_insert(0) += 1;
    }
    Aggregate { counts }
}

/// Sum `value_field` per value of `group_field` across the whole store
///
/// Missing or non-numeric values add 0 but still create the group.
pub fn sum_by<R: Record>(store: &[R], group_field: &str, value_field: &str) -> Totals {
    let mut sums: IndexMap<String, f64> = IndexMap::new();
    for record in store {
        let amount = record
            .field_value(value_field)
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        *sums.entry(group_label(record, group_field)).or_insert(0.0) += amount;
    }
    Totals { sums }
}

fn group_label<R: Record>(record: &R, group_field: &str) -> String {
    record
        .field_value(group_field)
        .as_ref()
        .and_then(FieldValue::to_display_string)
        .filter(|label| !label.trim().is_empty())
        .unwrap_or_else(|| UNKNOWN_BUCKET.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn store() -> Vec<Value> {
        vec![
            json!({ "name": "Ana", "segment": "vip", "spent": 300 }),
            json!({ "name": "Bea", "segment": "regular", "spent": 40.5 }),
            json!({ "name": "Cas", "segment": "vip", "spent": 120 }),
            json!({ "name": "Dan" }),
            json!({ "name": "Eve", "segment": null, "spent": "n/a" }),
        ]
    }

    #[test]
    fn test_count_by_segment() {
        let store = store();
        let aggregate = count_by(&store, "segment");

        assert_eq!(aggregate.get("vip"), 2);
        assert_eq!(aggregate.get("regular"), 1);
        assert_eq!(aggregate.get(UNKNOWN_BUCKET), 2);
        assert_eq!(aggregate.get("wholesale"), 0);
        assert_eq!(aggregate.total(), store.len());
    }

    #[test]
    fn test_count_by_keeps_first_seen_order() {
        let store = store();
        let aggregate = count_by(&store, "segment");
        let labels: Vec<&str> = aggregate.iter().map(|(label, _)| label).collect();
        assert_eq!(labels, vec!["vip", "regular", UNKNOWN_BUCKET]);
    }

    #[test]
    fn test_count_by_empty_store() {
        let store: Vec<Value> = Vec::new();
        let aggregate = count_by(&store, "segment");
        assert!(aggregate.is_empty());
        assert_eq!(aggregate.total(), 0);
    }

    #[test]
    fn test_sum_by_segment() {
        let store = store();
        let totals = sum_by(&store, "segment", "spent");

        assert_eq!(totals.get("vip"), 420.0);
        assert_eq!(totals.get("regular"), 40.5);
        assert_eq!(totals.get(UNKNOWN_BUCKET), 0.0);
        assert_eq!(totals.grand_total(), 460.5);
    }

    #[test]
    fn test_aggregate_serializes_as_map() {
        let store = store();
        let json = serde_json::to_value(count_by(&store, "segment")).unwrap();
        assert_eq!(json["vip"], 2);
        assert_eq!(json["unknown"], 2);
    }
}
