//! crates/diario_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the journal's storage core.
//! These traits form the boundary of the hexagonal architecture, allowing the
//! core to be independent of specific external implementations like the
//! device key-value store or the remote book catalog.

use async_trait::async_trait;

use crate::domain::BookSearchResult;

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., filesystem, network).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// The value stored under a collection key is not a valid JSON array.
    /// Repositories log this and fall back to the empty collection; it never
    /// reaches their callers.
    #[error("Corrupt data under key: {0}")]
    CorruptData(String),
    /// The backing store itself could not be read or written.
    #[error("Store unavailable: {0}")]
    Store(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

/// Durable, unordered string-to-string persistence.
///
/// Both operations suspend while the backing I/O completes; those suspend
/// points are the only places a repository operation can interleave with
/// another. No delete or existence primitive is needed by the core.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Retrieves the value at `key`. A key that was never written is
    /// `Ok(None)`, not an error.
    async fn get(&self, key: &str) -> PortResult<Option<String>>;

    /// Replaces the whole value at `key` in a single write.
    async fn set(&self, key: &str, value: String) -> PortResult<()>;
}

/// The remote book catalog.
#[async_trait]
pub trait BookSearch: Send + Sync {
    /// Searches the catalog for candidate books. No-results, an empty query
    /// and transport failures all come back as an empty list; callers never
    /// see an error from this collaborator.
    async fn search_books(&self, query: &str) -> Vec<BookSearchResult>;
}

/// Strategy for minting client-side record ids.
pub trait IdGenerator: Send + Sync {
    fn next_id(&self) -> String;
}
