//! Quote collection persistence.

use std::sync::Arc;

use crate::domain::Quote;
use crate::ports::{KeyValueStore, PortResult};
use crate::storage::collection::{Collection, Record};

pub const QUOTES_KEY: &str = "@diario-de-leituras:citacoes";

impl Record for Quote {
    fn id(&self) -> &str {
        &self.id
    }
}

/// CRUD over the quote collection, plus lookup by parent book.
pub struct QuoteRepository {
    collection: Collection<Quote>,
}

impl QuoteRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, QUOTES_KEY),
        }
    }

    pub async fn list(&self) -> PortResult<Vec<Quote>> {
        self.collection.list().await
    }

    /// All quotes whose `book_id` matches, in their original insertion order.
    pub async fn list_by_book(&self, book_id: &str) -> PortResult<Vec<Quote>> {
        let mut quotes = self.collection.list().await?;
        quotes.retain(|q| q.book_id == book_id);
        Ok(quotes)
    }

    pub async fn add(&self, quote: Quote) -> PortResult<()> {
        self.collection.add(quote).await
    }

    pub async fn update(&self, quote: Quote) -> PortResult<()> {
        self.collection.update(quote).await
    }

    pub async fn remove(&self, id: &str) -> PortResult<()> {
        self.collection.remove(id).await
    }
}
