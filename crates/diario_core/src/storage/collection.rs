//! crates/diario_core/src/storage/collection.rs
//!
//! The shared persistence helper behind all four repositories: one collection
//! of records, serialized as a JSON array under a single store key, mutated
//! only by whole-array rewrites.

use std::marker::PhantomData;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::warn;

use crate::ports::{KeyValueStore, PortError, PortResult};

/// A record addressable by its string id.
pub trait Record {
    fn id(&self) -> &str;
}

/// A full collection of `T` persisted under one key.
///
/// Every mutation is an independent read-modify-write cycle: read the whole
/// array, transform it in memory, write the whole array back. There is no
/// locking between cycles; two operations that interleave their suspend
/// points overwrite each other and the last write wins.
pub struct Collection<T> {
    store: Arc<dyn KeyValueStore>,
    key: &'static str,
    _records: PhantomData<fn() -> T>,
}

impl<T> Collection<T>
where
    T: Record + Serialize + DeserializeOwned,
{
    pub fn new(store: Arc<dyn KeyValueStore>, key: &'static str) -> Self {
        Self {
            store,
            key,
            _records: PhantomData,
        }
    }

    /// Reads the whole collection, in insertion order.
    ///
    /// A key that was never written is the empty collection, not an error.
    /// Content that fails to decode is also read as empty so a damaged value
    /// can never wedge the caller; the decode failure is only logged.
    pub async fn list(&self) -> PortResult<Vec<T>> {
        let Some(raw) = self.store.get(self.key).await? else {
            return Ok(Vec::new());
        };
        match serde_json::from_str(&raw) {
            Ok(records) => Ok(records),
            Err(e) => {
                let err = PortError::CorruptData(format!("{}: {e}", self.key));
                warn!(key = self.key, %err, "discarding undecodable collection");
                Ok(Vec::new())
            }
        }
    }

    pub(crate) async fn write(&self, records: &[T]) -> PortResult<()> {
        let raw =
            serde_json::to_string(records).map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.store.set(self.key, raw).await
    }

    /// Appends `record` and rewrites the collection.
    pub async fn add(&self, record: T) -> PortResult<()> {
        let mut records = self.list().await?;
        records.push(record);
        self.write(&records).await
    }

    /// Replaces the entry whose id matches `record.id()`, leaving every
    /// other entry and the overall order untouched. An id that matches
    /// nothing leaves the collection as it was.
    pub async fn update(&self, record: T) -> PortResult<()> {
        let mut records = self.list().await?;
        if let Some(slot) = records.iter_mut().find(|r| r.id() == record.id()) {
            *slot = record;
        }
        self.write(&records).await
    }

    /// Drops the entry with `id`. Removing an absent id is a silent no-op,
    /// so the operation is idempotent.
    pub async fn remove(&self, id: &str) -> PortResult<()> {
        let mut records = self.list().await?;
        records.retain(|r| r.id() != id);
        self.write(&records).await
    }
}
