use std::sync::Arc;

use thiserror::Error;

use smartstock_inventory::RawRecord;

/// Record store operation error.
///
/// These are **infrastructure errors** (connectivity, permissions, payload
/// decoding). Callers log them and leave the affected dashboard region
/// unresolved; nothing here is retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("record store unavailable: {0}")]
    Unavailable(String),

    #[error("permission denied for collection `{0}`")]
    PermissionDenied(String),

    #[error("failed to decode record store payload: {0}")]
    Decode(String),

    #[error("storage error: {0}")]
    Storage(String),
}

/// Read-only access to document collections.
///
/// ## Ordering
///
/// `fetch_recent()` returns records newest-first by `order_field`. Records
/// whose field holds no usable timestamp sort after all timestamped ones.
#[async_trait::async_trait]
pub trait RecordStore: Send + Sync {
    /// Every record in a collection, in store order.
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawRecord>, FetchError>;

    /// The `limit` most recent records by `order_field`, newest first.
    async fn fetch_recent(
        &self,
        collection: &str,
        order_field: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, FetchError>;
}

/// Point reads/writes by document id.
#[async_trait::async_trait]
pub trait DocumentStore: Send + Sync {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<RawRecord>, FetchError>;

    /// Insert or replace a record; returns its id (generated when absent).
    async fn put(&self, collection: &str, record: RawRecord) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl<S> RecordStore for Arc<S>
where
    S: RecordStore + ?Sized,
{
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawRecord>, FetchError> {
        (**self).fetch_all(collection).await
    }

    async fn fetch_recent(
        &self,
        collection: &str,
        order_field: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, FetchError> {
        (**self).fetch_recent(collection, order_field, limit).await
    }
}

#[async_trait::async_trait]
impl<S> DocumentStore for Arc<S>
where
    S: DocumentStore + ?Sized,
{
    async fn get(&self, collection: &str, id: &str) -> Result<Option<RawRecord>, FetchError> {
        (**self).get(collection, id).await
    }

    async fn put(&self, collection: &str, record: RawRecord) -> Result<String, FetchError> {
        (**self).put(collection, record).await
    }
}
