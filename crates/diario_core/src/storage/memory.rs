//! In-memory `KeyValueStore`, used by tests and ephemeral sessions.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::ports::{KeyValueStore, PortResult};

/// A `HashMap` behind an async mutex. Swapping this in for the durable store
/// keeps every repository testable without touching the filesystem.
#[derive(Default)]
pub struct MemoryStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        Ok(self.values.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: String) -> PortResult<()> {
        self.values.lock().await.insert(key.to_string(), value);
        Ok(())
    }
}
