//! Sort keys and the record comparator
//!
//! Sort expressions come in two shapes:
//!
//! - `field:asc` / `field:desc` (query-parameter form)
//! - `field-asc` / `field-desc` (sort dropdown form)
//!
//! A bare `field` sorts ascending. Several keys separated by commas are
//! applied in order, each later key breaking ties left by the earlier ones.

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::record::Record;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    /// Orient an ascending ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(QueryError::invalid_sort(s, format!("unknown direction '{}'", other))),
        }
    }
}

/// One sort criterion: a dotted field path and a direction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortKey {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
}

impl SortKey {
    pub fn new(field: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            field: field.into(),
            direction,
        }
    }

    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Ascending)
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, SortDirection::Descending)
    }

    /// Parse a single `field:dir`, `field-dir` or bare `field` expression
    pub fn parse(expression: &str) -> Result<Self, QueryError> {
        let expr = expression.trim();
        if expr.is_empty() {
            return Err(QueryError::invalid_sort(expression, "empty sort key"));
        }

        let (field, direction) = if let Some((field, dir)) = expr.split_once(':') {
            (field.trim(), dir.parse::<SortDirection>()?)
        } else if let Some((field, direction)) = expr
            .rsplit_once('-')
            .and_then(|(field, dir)| dir.parse::<SortDirection>().ok().map(|d| (field, d)))
        {
            // hyphenated field names stay intact unless the suffix is a direction
            (field.trim(), direction)
        } else {
            (expr, SortDirection::Ascending)
        };

        if field.is_empty() {
            return Err(QueryError::invalid_sort(expression, "missing field name"));
        }
        Ok(Self::new(field, direction))
    }

    /// Parse a comma-separated list of sort expressions
    pub fn parse_list(expression: &str) -> Result<Vec<Self>, QueryError> {
        expression
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(Self::parse)
            .collect()
    }

    /// Encode in the dropdown form (`field-desc`)
    pub fn to_option_value(&self) -> String {
        format!("{}-{}", self.field, self.direction.as_str())
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.field, self.direction.as_str())
    }
}

impl FromStr for SortKey {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Deterministic multi-key comparator over records
///
/// Missing or null values sink below every defined value whatever the
/// direction. Records that tie on every key keep their input order.
#[derive(Debug, Clone, Default)]
pub struct Comparator {
    keys: Vec<SortKey>,
}

impl Comparator {
    pub fn build(keys: &[SortKey]) -> Self {
        Self {
            keys: keys.to_vec(),
        }
    }

    pub fn keys(&self) -> &[SortKey] {
        &self.keys
    }

    pub fn compare<R: Record + ?Sized>(&self, a: &R, b: &R) -> Ordering {
        for key in &self.keys {
            let left = a.field_value(&key.field);
            let right = b.field_value(&key.field);
            let ordering = compare_resolved(key.direction, left.as_ref(), right.as_ref());
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }

    /// Stable sort of a sequence of records
    ///
    /// Each sort key is resolved once per record before sorting. A key that
    /// resolves on no record is logged and contributes nothing to the order.
    pub fn sort<'a, R: Record>(&self, items: Vec<&'a R>) -> Vec<&'a R> {
        if self.keys.is_empty() || items.len() < 2 {
            return items;
        }

        let mut decorated: Vec<(Vec<Option<FieldValue>>, &'a R)> = items
            .into_iter()
            .map(|record| {
                let resolved = self
                    .keys
                    .iter()
                    .map(|key| record.field_value(&key.field).filter(|v| !v.is_null()))
                    .collect();
                (resolved, record)
            })
            .collect();

        for (idx, key) in self.keys.iter().enumerate() {
            if decorated.iter().all(|(values, _)| values[idx].is_none()) {
                tracing::warn!(
                    sort_key = %key.field,
                    "Sort key resolved on no record; keeping filtered order"
                );
            }
        }

        // slice::sort_by is stable, ties keep the filtered order
        decorated.sort_by(|(left, _), (right, _)| {
            self.keys
                .iter()
                .enumerate()
                .map(|(idx, key)| {
                    compare_resolved(key.direction, left[idx].as_ref(), right[idx].as_ref())
                })
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });

        decorated.into_iter().map(|(_, record)| record).collect()
    }
}

fn compare_resolved(
    direction: SortDirection,
    left: Option<&FieldValue>,
    right: Option<&FieldValue>,
) -> Ordering {
    let left = left.filter(|v| !v.is_null());
    let right = right.filter(|v| !v.is_null());

    match (left, right) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => direction.apply(a.compare(b)),
    }
}
