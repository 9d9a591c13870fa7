//! Book collection persistence.

use std::sync::Arc;

use crate::domain::Book;
use crate::ports::{KeyValueStore, PortResult};
use crate::storage::collection::{Collection, Record};

pub const BOOKS_KEY: &str = "@diario-de-leituras:livros";

impl Record for Book {
    fn id(&self) -> &str {
        &self.id
    }
}

/// CRUD over the book collection.
///
/// The repository never validates `autor` against the author collection;
/// keeping the two consistent is choreography performed by the caller.
pub struct BookRepository {
    collection: Collection<Book>,
}

impl BookRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, BOOKS_KEY),
        }
    }

    pub async fn list(&self) -> PortResult<Vec<Book>> {
        self.collection.list().await
    }

    pub async fn add(&self, book: Book) -> PortResult<()> {
        self.collection.add(book).await
    }

    pub async fn update(&self, book: Book) -> PortResult<()> {
        self.collection.update(book).await
    }

    pub async fn remove(&self, id: &str) -> PortResult<()> {
        self.collection.remove(id).await
    }
}
