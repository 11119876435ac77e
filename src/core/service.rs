//! Service trait for loading records

use anyhow::Result;
use async_trait::async_trait;

/// Source of records for a list page
///
/// Implementations fetch the full collection a page works on: mock data in
/// development, an HTTP API in a deployed dashboard. The engine never talks
/// to a source directly; a [`RecordStore`](crate::storage::RecordStore)
/// loads from it and replaces its snapshot wholesale.
#[async_trait]
pub trait RecordSource<R>: Send + Sync {
    /// Human-readable name used in logs and load errors
    fn name(&self) -> &str;

    /// Load the complete record collection
    async fn load(&self) -> Result<Vec<R>>;
}
