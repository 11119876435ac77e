//! Typed error handling for the listing engine
//!
//! Errors are grouped by category so callers can match on the specific
//! failure instead of a generic `anyhow::Error`.
//!
//! # Error Categories
//!
//! - [`QueryError`]: malformed or contract-violating list queries
//! - [`ConfigError`]: list-page configuration parsing and validation
//!
//! # Example
//!
//! ```rust,ignore
//! use listing::prelude::*;
//!
//! match execute(&customers, &query) {
//!     Ok(page) => render(page),
//!     Err(QueryError::InvalidQuery { field, .. }) => {
//!         eprintln!("bad query parameter: {}", field);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Result alias used across the crate
pub type ListingResult<T> = std::result::Result<T, ListingError>;

/// The main error type for the listing engine
#[derive(Debug, Error)]
pub enum ListingError {
    /// Query construction or execution errors
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Configuration errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A record source failed to produce data
    #[error("Failed to load records from {origin}: {message}")]
    Load { origin: String, message: String },
}

/// Error payload handed to the notification layer
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ListingError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            ListingError::Query(e) => e.error_code(),
            ListingError::Config(e) => e.error_code(),
            ListingError::Load { .. } => "LOAD_FAILED",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            ListingError::Query(QueryError::InvalidQuery { field, .. }) => {
                Some(serde_json::json!({ "field": field }))
            }
            ListingError::Query(QueryError::InvalidSort { expression, .. }) => {
                Some(serde_json::json!({ "sort": expression }))
            }
            ListingError::Config(ConfigError::UnknownPage { name }) => {
                Some(serde_json::json!({ "page": name }))
            }
            ListingError::Load { origin, .. } => Some(serde_json::json!({ "origin": origin })),
            _ => None,
        }
    }
}

impl From<anyhow::Error> for ListingError {
    fn from(err: anyhow::Error) -> Self {
        ListingError::Load {
            origin: "record source".to_string(),
            message: format!("{:#}", err),
        }
    }
}

// =============================================================================
// Query Errors
// =============================================================================

/// Errors raised while building or executing a list query
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// The query violates the page / page size contract
    #[error("Invalid query: '{field}' {message}")]
    InvalidQuery { field: String, message: String },

    /// The filter expression could not be interpreted
    #[error("Invalid filter: {message}")]
    InvalidFilter { message: String },

    /// The sort expression could not be interpreted
    #[error("Invalid sort '{expression}': {message}")]
    InvalidSort { expression: String, message: String },
}

impl QueryError {
    pub(crate) fn invalid_query(field: &str, message: impl Into<String>) -> Self {
        QueryError::InvalidQuery {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_filter(message: impl Into<String>) -> Self {
        QueryError::InvalidFilter {
            message: message.into(),
        }
    }

    pub(crate) fn invalid_sort(expression: &str, message: impl Into<String>) -> Self {
        QueryError::InvalidSort {
            expression: expression.to_string(),
            message: message.into(),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            QueryError::InvalidQuery { .. } => "INVALID_QUERY",
            QueryError::InvalidFilter { .. } => "INVALID_FILTER",
            QueryError::InvalidSort { .. } => "INVALID_SORT",
        }
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to list-page configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration
    #[error("Failed to parse config from {origin}: {message}")]
    ParseError { origin: String, message: String },

    /// Configuration parsed but holds invalid values
    #[error("Invalid configuration for '{page}': {message}")]
    Invalid { page: String, message: String },

    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    /// IO error while reading configuration
    #[error("IO error: {message}")]
    IoError { message: String },

    /// No list page registered under that name
    #[error("Unknown list page: {name}")]
    UnknownPage { name: String },
}

impl ConfigError {
    pub fn error_code(&self) -> &'static str {
        match self {
            ConfigError::ParseError { .. } => "CONFIG_PARSE_ERROR",
            ConfigError::Invalid { .. } => "CONFIG_INVALID",
            ConfigError::FileNotFound { .. } => "CONFIG_NOT_FOUND",
            ConfigError::IoError { .. } => "CONFIG_IO_ERROR",
            ConfigError::UnknownPage { .. } => "UNKNOWN_LIST_PAGE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_error_codes() {
        assert_eq!(
            QueryError::invalid_query("page_size", "must be at least 1").error_code(),
            "INVALID_QUERY"
        );
        assert_eq!(
            QueryError::invalid_filter("not an object").error_code(),
            "INVALID_FILTER"
        );
        assert_eq!(
            QueryError::invalid_sort("name:up", "unknown direction").error_code(),
            "INVALID_SORT"
        );
    }

    #[test]
    fn test_query_error_display() {
        let err = QueryError::invalid_query("page_size", "must be at least 1");
        assert_eq!(err.to_string(), "Invalid query: 'page_size' must be at least 1");
    }

    #[test]
    fn test_listing_error_wraps_query_error() {
        let err: ListingError = QueryError::invalid_query("page", "must be at least 1").into();
        assert_eq!(err.error_code(), "INVALID_QUERY");

        let response = err.to_response();
        assert_eq!(response.code, "INVALID_QUERY");
        assert_eq!(response.details, Some(serde_json::json!({ "field": "page" })));
    }

    #[test]
    fn test_anyhow_converts_to_load_error() {
        let err: ListingError = anyhow::anyhow!("connection refused").into();
        assert_eq!(err.error_code(), "LOAD_FAILED");
        assert!(err.to_string().contains("connection refused"));
    }

    #[test]
    fn test_error_response_skips_empty_details() {
        let err: ListingError = ConfigError::IoError {
            message: "denied".to_string(),
        }
        .into();
        let json = serde_json::to_value(err.to_response()).unwrap();
        assert!(json.get("details").is_none());
        assert_eq!(json["code"], "CONFIG_IO_ERROR");
    }
}
