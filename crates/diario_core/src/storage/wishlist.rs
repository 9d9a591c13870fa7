//! Wishlist collection persistence.

use std::sync::Arc;

use tracing::info;

use crate::domain::WishlistItem;
use crate::ports::{KeyValueStore, PortResult};
use crate::storage::collection::{Collection, Record};

pub const WISHLIST_KEY: &str = "@diario-de-leituras:desejos";

impl Record for WishlistItem {
    fn id(&self) -> &str {
        &self.id
    }
}

/// CRUD over the wishlist, with insertion deduplicated on the derived id.
pub struct WishlistRepository {
    collection: Collection<WishlistItem>,
}

impl WishlistRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, WISHLIST_KEY),
        }
    }

    pub async fn list(&self) -> PortResult<Vec<WishlistItem>> {
        self.collection.list().await
    }

    /// Appends `item` unless an entry with the same derived id is already
    /// present, which keeps the list at one entry per title/author pair.
    /// The duplicate case is a logged no-op, never an error.
    pub async fn add(&self, item: WishlistItem) -> PortResult<()> {
        let mut items = self.collection.list().await?;
        if items.iter().any(|existing| existing.id == item.id) {
            info!(id = %item.id, "item is already on the wishlist");
            return Ok(());
        }
        items.push(item);
        self.collection.write(&items).await
    }

    pub async fn update(&self, item: WishlistItem) -> PortResult<()> {
        self.collection.update(item).await
    }

    pub async fn remove(&self, id: &str) -> PortResult<()> {
        self.collection.remove(id).await
    }
}
