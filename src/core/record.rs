//! Record abstraction and dotted-path field resolution

use crate::core::field::FieldValue;
use serde_json::Value;

/// A queryable domain record
///
/// Implementations expose the fields the engine may search, filter, sort
/// and group on. Paths may be dotted (`stats.total_spent`) to reach nested
/// data. A path the record does not know resolves to `None`, which the
/// engine treats as missing data rather than an error.
///
/// Typed entities implement this with the [`impl_record!`](crate::impl_record)
/// macro; loosely shaped data can use [`serde_json::Value`] directly.
pub trait Record {
    /// Resolve a (possibly dotted) field path
    fn field_value(&self, path: &str) -> Option<FieldValue>;

    /// Fields searched by free-text terms when the query names none
    fn default_search_fields() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }
}

impl<R: Record> Record for &R {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        (**self).field_value(path)
    }

    fn default_search_fields() -> &'static [&'static str] {
        R::default_search_fields()
    }
}

impl Record for Value {
    fn field_value(&self, path: &str) -> Option<FieldValue> {
        resolve_path(self, path).map(FieldValue::from)
    }
}

/// Walk a dotted path through nested JSON objects and arrays
///
/// Numeric segments index into arrays (`items.0.sku`). Any segment that
/// does not exist yields `None`.
pub fn resolve_path<'a>(value: &'a Value, path: &str) -> Option<&'a Value> {
    if path.is_empty() {
        return None;
    }

    let mut current = value;
    for segment in path.split('.') {
        current = match current {
            Value::Object(map) => map.get(segment)?,
            Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
            _ => return None,
        };
    }
    Some(current)
}
