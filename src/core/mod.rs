//! Core list-query engine: records, queries, filtering, sorting, pagination and aggregates

pub mod aggregate;
pub mod error;
pub mod executor;
pub mod field;
pub mod filter;
pub mod format;
pub mod pagination;
pub mod predicate;
pub mod query;
pub mod record;
pub mod service;
pub mod sort;
pub mod store;

pub use aggregate::{Aggregate, Totals, UNKNOWN_BUCKET, count_by, sum_by};
pub use error::{ConfigError, ErrorResponse, ListingError, ListingResult, QueryError};
pub use executor::execute;
pub use field::FieldValue;
pub use filter::{ALL_SENTINEL, CompareOp, Filter, FilterCondition, Filters};
pub use format::{format_currency, format_date};
pub use pagination::{PaginatedResponse, PaginationMeta};
pub use predicate::Predicate;
pub use query::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, Query, QueryParams};
pub use record::Record;
pub use service::RecordSource;
pub use sort::{Comparator, SortDirection, SortKey};
pub use store::QueryableStore;
