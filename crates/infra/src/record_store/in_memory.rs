use std::cmp::Reverse;
use std::collections::HashMap;
use std::path::Path;
use std::sync::RwLock;

use serde_json::Value as JsonValue;
use uuid::Uuid;

use smartstock_inventory::{normalize_timestamp, RawRecord};

use super::r#trait::{DocumentStore, FetchError, RecordStore};

/// In-memory document collections.
///
/// Intended for tests/dev. Collections keep insertion order; `put` replaces a
/// record in place when its id already exists.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    collections: RwLock<HashMap<String, Vec<RawRecord>>>,
}

impl InMemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a seed document: `{ "<collection>": [ {"id": ..., ...}, ... ] }`.
    pub fn from_seed(seed: JsonValue) -> Result<Self, FetchError> {
        let collections: HashMap<String, Vec<RawRecord>> =
            serde_json::from_value(seed).map_err(|e| FetchError::Decode(e.to_string()))?;
        let total: usize = collections.values().map(Vec::len).sum();
        tracing::info!(
            collections = collections.len(),
            records = total,
            "seeded in-memory record store"
        );
        Ok(Self {
            collections: RwLock::new(collections),
        })
    }

    /// Read a seed document from disk.
    pub fn load_seed_file(path: &Path) -> Result<Self, FetchError> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| FetchError::Storage(format!("{}: {e}", path.display())))?;
        let seed: JsonValue =
            serde_json::from_str(&raw).map_err(|e| FetchError::Decode(e.to_string()))?;
        Self::from_seed(seed)
    }

    /// Append a record, generating an id when it has none. Returns the id.
    pub fn insert(&self, collection: &str, mut record: RawRecord) -> Result<String, FetchError> {
        let id = record
            .id
            .get_or_insert_with(|| Uuid::now_v7().simple().to_string())
            .clone();

        let mut map = self.write()?;
        let docs = map.entry(collection.to_string()).or_default();
        match docs.iter_mut().find(|d| d.id.as_deref() == Some(id.as_str())) {
            Some(existing) => *existing = record,
            None => docs.push(record),
        }
        Ok(id)
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections
            .read()
            .map(|map| map.get(collection).map(Vec::len).unwrap_or(0))
            .unwrap_or(0)
    }

    fn read_collection(&self, collection: &str) -> Result<Vec<RawRecord>, FetchError> {
        let map = self
            .collections
            .read()
            .map_err(|_| FetchError::Storage("record store lock poisoned".to_string()))?;
        Ok(map.get(collection).cloned().unwrap_or_default())
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<String, Vec<RawRecord>>>, FetchError> {
        self.collections
            .write()
            .map_err(|_| FetchError::Storage("record store lock poisoned".to_string()))
    }
}

#[async_trait::async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn fetch_all(&self, collection: &str) -> Result<Vec<RawRecord>, FetchError> {
        self.read_collection(collection)
    }

    async fn fetch_recent(
        &self,
        collection: &str,
        order_field: &str,
        limit: usize,
    ) -> Result<Vec<RawRecord>, FetchError> {
        let mut docs = self.read_collection(collection)?;
        // Stable sort: newest first, untimestamped last, ties keep store order.
        docs.sort_by_cached_key(|d| {
            let ts = normalize_timestamp(d.field(order_field));
            (ts.is_none(), Reverse(ts))
        });
        docs.truncate(limit);
        Ok(docs)
    }
}

#[async_trait::async_trait]
impl DocumentStore for InMemoryRecordStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<RawRecord>, FetchError> {
        Ok(self
            .read_collection(collection)?
            .into_iter()
            .find(|d| d.id.as_deref() == Some(id)))
    }

    async fn put(&self, collection: &str, record: RawRecord) -> Result<String, FetchError> {
        self.insert(collection, record)
    }
}
