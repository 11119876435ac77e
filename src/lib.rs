//! # Backoffice Listing
//!
//! Search, filter, sort, paginate and summarise in-memory record collections
//! for back-office list pages (customers, promotions, products, orders).
//!
//! ## Features
//!
//! - **Typed Records**: expose struct fields to queries by dotted path with `impl_record!`
//! - **Free-Text Search**: case-insensitive substring match over configurable fields
//! - **Filters**: categorical dropdowns with an `"all"` sentinel, plus numeric/date ranges
//! - **Stable Multi-Key Sort**: missing values always sink to the end
//! - **Pagination**: pages are clamped, never out of range
//! - **Summary Cards**: per-group counts and totals over the whole store
//! - **Configuration-Based**: list pages declared in YAML
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use listing::prelude::*;
//!
//! let store = RecordStore::from_records(customers);
//!
//! let query = Query::new()
//!     .search("ana")
//!     .filter("segment", "vip")
//!     .sort_by("stats.total_spent", SortDirection::Descending)
//!     .page_size(10);
//!
//! let page = store.query(&query)?;
//! println!("{} of {}", page.len(), page.pagination.total);
//!
//! let cards = store.count_by("segment");
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod logging;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Types ===
    pub use crate::core::{
        aggregate::{Aggregate, Totals, UNKNOWN_BUCKET, count_by, sum_by},
        error::{ConfigError, ErrorResponse, ListingError, ListingResult, QueryError},
        executor::execute,
        field::FieldValue,
        filter::{ALL_SENTINEL, CompareOp, Filters},
        format::{format_currency, format_date},
        pagination::{PaginatedResponse, PaginationMeta},
        query::{Query, QueryParams},
        record::Record,
        service::RecordSource,
        sort::{SortDirection, SortKey},
        store::QueryableStore,
    };

    // === Macros ===
    pub use crate::{field_enum, impl_record};

    // === Entities ===
    pub use crate::entities::{Customer, Order, Product, Promotion};

    // === Storage ===
    pub use crate::storage::{RecordStore, StaticSource};

    // === Config ===
    pub use crate::config::{ListPageConfig, ListingConfig};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, NaiveDate, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
