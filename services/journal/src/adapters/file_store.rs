//! services/journal/src/adapters/file_store.rs
//!
//! This module contains the durable storage adapter, the concrete
//! implementation of the `KeyValueStore` port from the `core` crate. It keeps
//! one file per key under a data directory, standing in for the device-local
//! storage the journal was designed against.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use diario_core::ports::{KeyValueStore, PortError, PortResult};

/// A key-value store adapter backed by the local filesystem.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Creates a new `FileStore`, making sure the data directory exists.
    pub fn new(root: impl Into<PathBuf>) -> std::io::Result<Self> {
        let root = root.into();
        std::fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Store keys contain characters that are not portable in file names
    /// (`@`, `:`), so every byte outside `[A-Za-z0-9._-]` is %-escaped.
    fn path_for(&self, key: &str) -> PathBuf {
        let mut name = String::with_capacity(key.len());
        for b in key.bytes() {
            match b {
                b'a'..=b'z' | b'A'..=b'Z' | b'0'..=b'9' | b'.' | b'_' | b'-' => {
                    name.push(b as char)
                }
                other => name.push_str(&format!("%{other:02X}")),
            }
        }
        self.root.join(name)
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        match tokio::fs::read_to_string(self.path_for(key)).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PortError::Store(e.to_string())),
        }
    }

    async fn set(&self, key: &str, value: String) -> PortResult<()> {
        tokio::fs::write(self.path_for(key), value)
            .await
            .map_err(|e| PortError::Store(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn set_then_get_returns_the_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store
            .set("@diario-de-leituras:livros", "[]".to_string())
            .await
            .unwrap();
        let value = store.get("@diario-de-leituras:livros").await.unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
    }

    #[tokio::test]
    async fn missing_key_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        assert_eq!(store.get("@diario-de-leituras:autores").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_replaces_the_whole_value() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        store.set("k", "first".to_string()).await.unwrap();
        store.set("k", "second".to_string()).await.unwrap();
        assert_eq!(store.get("k").await.unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn keys_with_punctuation_map_to_distinct_files() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path()).unwrap();

        let a = store.path_for("@diario-de-leituras:livros");
        let b = store.path_for("@diario-de-leituras:autores");
        assert_ne!(a, b);
        assert!(!a.file_name().unwrap().to_str().unwrap().contains(':'));
    }
}
