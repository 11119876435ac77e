//! Query value object and query-parameter parsing

use crate::core::error::QueryError;
use crate::core::field::FieldValue;
use crate::core::filter::{CompareOp, Filter, Filters};
use crate::core::sort::{SortDirection, SortKey};
use serde::Deserialize;

/// Page size used when the caller gives none
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Upper bound applied to caller-supplied page sizes
pub const MAX_PAGE_SIZE: usize = 100;

/// The user's current search / filter / sort / pagination intent
///
/// A `Query` is an immutable value: the UI layer builds a new one on every
/// interaction and hands it to [`execute`](crate::core::executor::execute).
///
/// # Example
/// ```rust,ignore
/// let query = Query::new()
///     .search("ana")
///     .filter("marketing.customer_segment", "vip")
///     .sort_by("stats.total_spent", SortDirection::Descending)
///     .page(2)
///     .page_size(25);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// Free-text term, matched case-insensitively
    pub search_term: String,

    /// Fields searched by the term; `None` uses the record's defaults
    pub search_fields: Option<Vec<String>>,

    /// Categorical and range filters
    pub filters: Filters,

    /// Sort keys, primary first
    pub sort: Vec<SortKey>,

    /// Requested page (starts at 1)
    pub page: usize,

    /// Number of rows per page
    pub page_size: usize,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            search_term: String::new(),
            search_fields: None,
            filters: Filters::new(),
            sort: Vec::new(),
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search_term = term.into();
        self
    }

    pub fn search_in<S: Into<String>>(mut self, fields: impl IntoIterator<Item = S>) -> Self {
        self.search_fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters = self.filters.eq(field, value);
        self
    }

    pub fn filter_compare(
        mut self,
        field: impl Into<String>,
        op: CompareOp,
        operand: impl Into<FieldValue>,
    ) -> Self {
        self.filters = self.filters.compare(field, op, operand);
        self
    }

    pub fn filters(mut self, filters: Filters) -> Self {
        self.filters = filters;
        self
    }

    /// Replace the sort order with a single key
    pub fn sort_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort = vec![SortKey::new(field, direction)];
        self
    }

    /// Append a tie-breaking sort key
    pub fn then_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(SortKey::new(field, direction));
        self
    }

    pub fn sort_keys(mut self, keys: Vec<SortKey>) -> Self {
        self.sort = keys;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    pub fn page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Check the page / page size contract
    pub fn validate(&self) -> Result<(), QueryError> {
        if self.page_size == 0 {
            return Err(QueryError::invalid_query("page_size", "must be at least 1"));
        }
        if self.page == 0 {
            return Err(QueryError::invalid_query("page", "must be at least 1"));
        }
        Ok(())
    }

    /// Fields the search term applies to
    pub fn effective_search_fields<'a>(&'a self, defaults: &'a [&'a str]) -> Vec<&'a str> {
        match &self.search_fields {
            Some(fields) => fields.iter().map(String::as_str).collect(),
            None => defaults.to_vec(),
        }
    }
}

/// Query parameters for pagination and filtering
///
/// This structure mirrors the list-page controls as they appear in a URL
/// query string. All parameters have sensible defaults.
///
/// # Example
/// ```text
/// ?page=2&limit=10
/// ?search=ana&filter={"segment": "vip"}
/// ?page=1&limit=20&filter={"stats.total_spent>": 100}&sort=created_at:desc
/// ?sort=name-asc
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct QueryParams {
    /// Page number (starts at 1)
    pub page: usize,

    /// Number of items per page
    pub limit: Option<usize>,

    /// Free-text search term
    pub search: Option<String>,

    /// Filters as JSON object
    ///
    /// # Format
    /// - Exact match: `{"field": "value"}`
    /// - Comparison: `{"field>": value, "field<": value, "field>=": value, "field<=": value}`
    pub filter: Option<String>,

    /// Sort field and direction
    ///
    /// # Format
    /// - `field:asc`, `field-asc` or `field` (ascending)
    /// - `field:desc` or `field-desc` (descending)
    /// - comma-separated for tie-breakers
    pub sort: Option<String>,
}

impl Default for QueryParams {
    fn default() -> Self {
        Self {
            page: 1,
            limit: None,
            search: None,
            filter: None,
            sort: None,
        }
    }
}

impl QueryParams {
    /// Get page number, ensuring minimum of 1
    pub fn page(&self) -> usize {
        self.page.max(1)
    }

    /// Get limit, ensuring it doesn't exceed the maximum
    pub fn limit(&self) -> usize {
        self.limit_within(DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE)
    }

    /// Get limit with list-specific default and maximum
    pub fn limit_within(&self, default: usize, max: usize) -> usize {
        self.limit.unwrap_or(default).clamp(1, max.max(1))
    }

    /// Parse the filter JSON string
    pub fn filters(&self) -> Result<Filters, QueryError> {
        match self.filter.as_deref().map(str::trim) {
            None | Some("") => Ok(Filters::new()),
            Some(raw) => Filters::from_json_str(raw),
        }
    }

    /// Parse the sort expression
    pub fn sort_keys(&self) -> Result<Vec<SortKey>, QueryError> {
        match self.sort.as_deref() {
            None => Ok(Vec::new()),
            Some(raw) => SortKey::parse_list(raw),
        }
    }

    /// Build a validated [`Query`]
    ///
    /// Page and limit are defaulted and clamped here, so the resulting
    /// query always satisfies the page contract.
    pub fn to_query(&self) -> Result<Query, QueryError> {
        let query = Query {
            search_term: self.search.clone().unwrap_or_default(),
            search_fields: None,
            filters: self.filters()?,
            sort: self.sort_keys()?,
            page: self.page(),
            page_size: self.limit(),
        };
        query.validate()?;
        Ok(query)
    }
}

impl TryFrom<&QueryParams> for Query {
    type Error = QueryError;

    fn try_from(params: &QueryParams) -> Result<Self, Self::Error> {
        params.to_query()
    }
}

/// Field names referenced by filters, without operator suffixes
pub(crate) fn filter_fields(filters: &Filters) -> impl Iterator<Item = &str> {
    filters.iter().map(|Filter { field, .. }| field.as_str())
}
