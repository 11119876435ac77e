//! In-memory record store and static record source

use crate::core::error::{ListingError, ListingResult};
use crate::core::record::Record;
use crate::core::service::RecordSource;
use crate::core::store::QueryableStore;
use anyhow::Result;
use async_trait::async_trait;
use std::sync::{Arc, PoisonError, RwLock};

/// In-memory record store
///
/// Holds an immutable snapshot of the records a list page works on. The
/// snapshot is only ever replaced as a whole (`replace`, `reload`), never
/// edited in place, so a query that grabbed it keeps a consistent view.
/// Cloning the store shares the same snapshot slot.
#[derive(Clone)]
pub struct RecordStore<R> {
    records: Arc<RwLock<Arc<[R]>>>,
}

impl<R> RecordStore<R> {
    /// Create an empty store
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Create a store holding `records`
    pub fn from_records(records: Vec<R>) -> Self {
        Self {
            records: Arc::new(RwLock::new(records.into())),
        }
    }

    /// Current snapshot
    pub fn snapshot(&self) -> Arc<[R]> {
        // the slot only ever holds a complete Arc, a poisoned lock still has a valid one
        self.records
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the whole collection
    pub fn replace(&self, records: Vec<R>) {
        let snapshot: Arc<[R]> = records.into();
        *self
            .records
            .write()
            .unwrap_or_else(PoisonError::into_inner) = snapshot;
    }

    pub fn len(&self) -> usize {
        self.snapshot().len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshot().is_empty()
    }

    /// Load from `source` and replace the snapshot
    ///
    /// On failure the store falls back to an empty snapshot, so the page
    /// renders its empty state, and the error is returned for the caller to
    /// surface as a notification.
    pub async fn reload<S>(&self, source: &S) -> ListingResult<usize>
    where
        S: RecordSource<R> + ?Sized,
    {
        match source.load().await {
            Ok(records) => {
                let count = records.len();
                self.replace(records);
                tracing::info!(source = source.name(), records = count, "Record store reloaded");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(
                    source = source.name(),
                    error = %err,
                    "Failed to load records, falling back to an empty store"
                );
                self.replace(Vec::new());
                Err(ListingError::Load {
                    origin: source.name().to_string(),
                    message: format!("{:#}", err),
                })
            }
        }
    }
}

impl<R> Default for RecordStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> QueryableStore<R> for RecordStore<R>
where
    R: Record + Clone + Send + Sync,
{
    fn list_all(&self) -> Arc<[R]> {
        self.snapshot()
    }
}

/// Record source serving a fixed collection
///
/// Stands in for the backend API while the dashboard runs on mock data.
#[derive(Debug, Clone)]
pub struct StaticSource<R> {
    name: String,
    records: Vec<R>,
}

impl<R> StaticSource<R> {
    pub fn new(name: impl Into<String>, records: Vec<R>) -> Self {
        Self {
            name: name.into(),
            records,
        }
    }
}

#[async_trait]
impl<R> RecordSource<R> for StaticSource<R>
where
    R: Clone + Send + Sync,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn load(&self) -> Result<Vec<R>> {
        Ok(self.records.clone())
    }
}
