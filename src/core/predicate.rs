//! Search-and-filter predicate over records

use crate::core::filter::{Filter, Filters};
use crate::core::record::Record;

/// Boolean test deciding whether a record belongs to the filtered view
///
/// A record matches when the free-text term is found in at least one
/// searchable field (case-insensitive substring) AND every active filter
/// accepts it. An empty term matches everything.
#[derive(Debug, Clone)]
pub struct Predicate {
    term: Option<String>,
    search_fields: Vec<String>,
    filters: Vec<Filter>,
}

impl Predicate {
    pub fn build<S: AsRef<str>>(
        search_term: &str,
        filters: &Filters,
        searchable_fields: &[S],
    ) -> Self {
        let term = search_term.trim();
        Self {
            term: (!term.is_empty()).then(|| term.to_lowercase()),
            search_fields: searchable_fields
                .iter()
                .map(|f| f.as_ref().to_string())
                .collect(),
            filters: filters.active().cloned().collect(),
        }
    }

    /// Whether this predicate accepts every record
    pub fn is_trivial(&self) -> bool {
        self.term.is_none() && self.filters.is_empty()
    }

    pub fn matches<R: Record + ?Sized>(&self, record: &R) -> bool {
        self.matches_term(record)
            && self
                .filters
                .iter()
                .all(|filter| filter.accepts(record.field_value(&filter.field).as_ref()))
    }

    fn matches_term<R: Record + ?Sized>(&self, record: &R) -> bool {
        let Some(term) = &self.term else {
            return true;
        };

        self.search_fields.iter().any(|field| {
            record
                .field_value(field)
                .and_then(|value| value.to_display_string())
                .is_some_and(|text| text.to_lowercase().contains(term.as_str()))
        })
    }
}
