//! Store traits for querying and summarising records

use crate::core::aggregate::{self, Aggregate, Totals};
use crate::core::error::QueryError;
use crate::core::executor;
use crate::core::pagination::PaginatedResponse;
use crate::core::query::Query;
use crate::core::record::Record;
use std::sync::Arc;

/// Trait for stores that support list queries and summary aggregates
///
/// Implementors only provide a snapshot of their records; querying and
/// aggregation run against that snapshot, so a concurrent reload never
/// mixes two generations of data in one result.
pub trait QueryableStore<R: Record + Clone>: Send + Sync {
    /// Get all records (unfiltered, unsorted)
    fn list_all(&self) -> Arc<[R]>;

    /// Run a list query and return an owned page of rows
    fn query(&self, query: &Query) -> Result<PaginatedResponse<R>, QueryError> {
        let snapshot = self.list_all();
        executor::execute(&snapshot[..], query).map(|page| page.cloned())
    }

    /// Count records per value of `group_field` over the whole store
    fn count_by(&self, group_field: &str) -> Aggregate {
        aggregate::count_by(&self.list_all()[..], group_field)
    }

    /// Sum `value_field` per value of `group_field` over the whole store
    fn sum_by(&self, group_field: &str, value_field: &str) -> Totals {
        aggregate::sum_by(&self.list_all()[..], group_field, value_field)
    }
}
