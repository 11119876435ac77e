//! List-page configuration loading and management
//!
//! Each list page of the dashboard declares which fields its search box
//! covers, which dropdown filters and sort options it offers, and its page
//! sizes. The configuration is read from YAML:
//!
//! ```yaml
//! pages:
//!   - name: customers
//!     searchable_fields: [name, email]
//!     filter_fields: [segment, status]
//!     sort_options: [name-asc, name-desc, stats.total_spent-desc]
//!     default_sort: name-asc
//!     page_size: 10
//!     max_page_size: 50
//!     summary_field: segment
//! ```

use crate::core::error::{ConfigError, ListingResult, QueryError};
use crate::core::filter::{CompareOp, Filters};
use crate::core::query::{Query, QueryParams, filter_fields};
use crate::core::sort::SortKey;
use serde::{Deserialize, Serialize};
use std::path::Path;
use validator::Validate;

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    100
}

/// Configuration of one list page
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_page_sizes"))]
pub struct ListPageConfig {
    /// Page identifier (e.g., "customers", "promotions")
    #[validate(length(min = 1))]
    pub name: String,

    /// Fields the search box matches against
    #[validate(length(min = 1))]
    pub searchable_fields: Vec<String>,

    /// Fields exposed as dropdown filters; empty allows none
    #[serde(default)]
    pub filter_fields: Vec<String>,

    /// Sort dropdown values in `field-direction` form; empty allows any
    #[serde(default)]
    pub sort_options: Vec<String>,

    /// Sort applied when the user picked none
    #[serde(default)]
    pub default_sort: Option<String>,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1))]
    pub page_size: usize,

    #[serde(default = "default_max_page_size")]
    #[validate(range(min = 1))]
    pub max_page_size: usize,

    /// Field the summary cards group counts by
    #[serde(default)]
    pub summary_field: Option<String>,
}

fn validate_page_sizes(page: &ListPageConfig) -> Result<(), validator::ValidationError> {
    if page.page_size > page.max_page_size {
        let mut err = validator::ValidationError::new("page_size_exceeds_max");
        err.message = Some(
            format!(
                "page_size {} exceeds max_page_size {}",
                page.page_size, page.max_page_size
            )
            .into(),
        );
        return Err(err);
    }
    Ok(())
}

impl ListPageConfig {
    /// Parsed sort dropdown options
    pub fn sort_keys(&self) -> Result<Vec<SortKey>, QueryError> {
        self.sort_options.iter().map(|opt| SortKey::parse(opt)).collect()
    }

    /// Parsed default sort
    pub fn default_sort_keys(&self) -> Result<Vec<SortKey>, QueryError> {
        match self.default_sort.as_deref() {
            Some(raw) => SortKey::parse_list(raw),
            None => Ok(Vec::new()),
        }
    }

    /// Whether the page offers a dropdown filter on `field`
    pub fn allows_filter(&self, field: &str) -> bool {
        self.filter_fields.iter().any(|f| f == field)
    }

    /// Build the query for this page from incoming parameters
    ///
    /// Applies the page's search fields, page size bounds and default sort,
    /// and rejects filters or sorts the page does not offer.
    pub fn query_from(&self, params: &QueryParams) -> Result<Query, QueryError> {
        let filters = params.filters()?;
        if let Some(field) = filter_fields(&filters).find(|f| !self.allows_filter(f)) {
            return Err(QueryError::invalid_filter(format!(
                "'{}' cannot filter by '{}'",
                self.name, field
            )));
        }

        let mut sort = params.sort_keys()?;
        if sort.is_empty() {
            sort = self.default_sort_keys()?;
        } else if !self.sort_options.is_empty() {
            let offered = self.sort_keys()?;
            if let Some(key) = sort.iter().find(|key| !offered.contains(key)) {
                return Err(QueryError::invalid_sort(
                    &key.to_option_value(),
                    format!("not a sort option of '{}'", self.name),
                ));
            }
        }

        let query = Query::new()
            .search(params.search.clone().unwrap_or_default())
            .search_in(self.searchable_fields.iter().cloned())
            .filters(filters)
            .sort_keys(sort)
            .page(params.page())
            .page_size(params.limit_within(self.page_size, self.max_page_size));
        query.validate()?;
        Ok(query)
    }

    /// Query restricted to a range on one field, for drill-down links from summary cards
    pub fn range_query(&self, field: &str, op: CompareOp, operand: f64) -> Query {
        Query::new()
            .search_in(self.searchable_fields.iter().cloned())
            .filters(Filters::new().compare(field, op, operand))
            .page_size(self.page_size)
    }
}

/// Complete configuration for the dashboard's list pages
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ListingConfig {
    #[validate(nested)]
    pub pages: Vec<ListPageConfig>,
}

impl ListingConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ListingResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => ConfigError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => ConfigError::IoError {
                message: e.to_string(),
            },
        })?;

        let config = Self::parse(&content, &path.display().to_string())?;
        tracing::info!(
            path = %path.display(),
            pages = config.pages.len(),
            "Loaded list-page configuration"
        );
        Ok(config)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ListingResult<Self> {
        Ok(Self::parse(yaml, "<inline>")?)
    }

    fn parse(yaml: &str, origin: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::ParseError {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;
        config.check()?;
        Ok(config)
    }

    /// Validate field constraints and sort expressions
    pub fn check(&self) -> Result<(), ConfigError> {
        for page in &self.pages {
            page.validate().map_err(|e| ConfigError::Invalid {
                page: page.name.clone(),
                message: e.to_string(),
            })?;

            let sorts = page.sort_keys().and_then(|_| page.default_sort_keys());
            sorts.map_err(|e| ConfigError::Invalid {
                page: page.name.clone(),
                message: e.to_string(),
            })?;
        }

        if let Some(dup) = self
            .pages
            .iter()
            .enumerate()
            .find(|(idx, page)| self.pages[..*idx].iter().any(|p| p.name == page.name))
            .map(|(_, page)| page)
        {
            return Err(ConfigError::Invalid {
                page: dup.name.clone(),
                message: "duplicate page name".to_string(),
            });
        }
        Ok(())
    }

    /// Find a page by name
    pub fn page(&self, name: &str) -> Result<&ListPageConfig, ConfigError> {
        self.pages
            .iter()
            .find(|page| page.name == name)
            .ok_or_else(|| ConfigError::UnknownPage {
                name: name.to_string(),
            })
    }

    /// Merge several configurations, later pages replacing earlier ones by name
    pub fn merge(configs: Vec<ListingConfig>) -> Self {
        let mut pages: Vec<ListPageConfig> = Vec::new();
        for page in configs.into_iter().flat_map(|c| c.pages) {
            match pages.iter_mut().find(|p| p.name == page.name) {
                Some(existing) => *existing = page,
                None => pages.push(page),
            }
        }
        Self { pages }
    }

    /// Default configuration covering the stock dashboard pages
    pub fn default_config() -> Self {
        let page = |name: &str,
                    searchable: &[&str],
                    filters: &[&str],
                    sorts: &[&str],
                    summary: Option<&str>| ListPageConfig {
            name: name.to_string(),
            searchable_fields: searchable.iter().map(|s| s.to_string()).collect(),
            filter_fields: filters.iter().map(|s| s.to_string()).collect(),
            sort_options: sorts.iter().map(|s| s.to_string()).collect(),
            default_sort: sorts.first().map(|s| s.to_string()),
            page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            summary_field: summary.map(str::to_string),
        };

        Self {
            pages: vec![
                page(
                    "customers",
                    &["name", "email", "phone"],
                    &["segment", "status", "stats.total_spent"],
                    &[
                        "name-asc",
                        "name-desc",
                        "stats.total_spent-desc",
                        "stats.total_spent-asc",
                        "created_at-desc",
                    ],
                    Some("segment"),
                ),
                page(
                    "promotions",
                    &["name", "code"],
                    &["status", "kind"],
                    &["starts_at-desc", "starts_at-asc", "name-asc", "usage_count-desc"],
                    Some("status"),
                ),
                page(
                    "products",
                    &["name", "sku", "category"],
                    &["category", "status", "stock_level", "price"],
                    &["name-asc", "price-asc", "price-desc", "stock-asc", "created_at-desc"],
                    Some("category"),
                ),
                page(
                    "orders",
                    &["number", "customer.name", "customer.email"],
                    &["status", "payment_status", "total"],
                    &["placed_at-desc", "placed_at-asc", "total-desc", "total-asc"],
                    Some("status"),
                ),
            ],
        }
    }
}
