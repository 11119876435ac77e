//! List-query execution: filter, sort, paginate

use crate::core::error::QueryError;
use crate::core::pagination::{PaginatedResponse, PaginationMeta};
use crate::core::predicate::Predicate;
use crate::core::query::Query;
use crate::core::record::Record;
use crate::core::sort::Comparator;

/// Run a query against a record store
///
/// Steps, in order:
/// 1. keep the records the search term and filters accept, in store order
/// 2. stable-sort them by the query's sort keys
/// 3. count matches and derive `total_pages = max(1, ceil(total / page_size))`
/// 4. clamp the requested page into `[1, total_pages]`
/// 5. slice out that page
///
/// The store is only borrowed; rows in the response point into it. Use
/// [`PaginatedResponse::cloned`] to detach them.
///
/// # Errors
/// [`QueryError::InvalidQuery`] when `page` or `page_size` is zero. A sort
/// key no record resolves is not an error; the filtered order is kept.
pub fn execute<'a, R: Record>(
    store: &'a [R],
    query: &Query,
) -> Result<PaginatedResponse<&'a R>, QueryError> {
    query.validate()?;

    let search_fields = query.effective_search_fields(R::default_search_fields());
    let predicate = Predicate::build(&query.search_term, &query.filters, &search_fields);

    let matched: Vec<&'a R> = if predicate.is_trivial() {
        store.iter().collect()
    } else {
        store.iter().filter(|record| predicate.matches(*record)).collect()
    };

    let sorted = Comparator::build(&query.sort).sort(matched);
    let pagination = PaginationMeta::new(query.page, query.page_size, sorted.len())?;

    if pagination.page != query.page {
        tracing::debug!(
            requested = query.page,
            clamped = pagination.page,
            total_pages = pagination.total_pages,
            "Requested page out of range, clamped"
        );
    }

    tracing::debug!(
        store_size = store.len(),
        matched = pagination.total,
        page = pagination.page,
        total_pages = pagination.total_pages,
        "Executed list query"
    );

    let data = sorted[pagination.range()].to_vec();
    Ok(PaginatedResponse { data, pagination })
}
