//! Author collection persistence.

use std::sync::Arc;

use crate::domain::Author;
use crate::ports::{KeyValueStore, PortResult};
use crate::storage::collection::{Collection, Record};

pub const AUTHORS_KEY: &str = "@diario-de-leituras:autores";

impl Record for Author {
    fn id(&self) -> &str {
        &self.id
    }
}

/// CRUD over the author collection.
///
/// Removing an author does not cascade to books: a book's `autor` field is a
/// denormalized name, and it keeps displaying after the record is gone.
pub struct AuthorRepository {
    collection: Collection<Author>,
}

impl AuthorRepository {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            collection: Collection::new(store, AUTHORS_KEY),
        }
    }

    pub async fn list(&self) -> PortResult<Vec<Author>> {
        self.collection.list().await
    }

    pub async fn add(&self, author: Author) -> PortResult<()> {
        self.collection.add(author).await
    }

    pub async fn update(&self, author: Author) -> PortResult<()> {
        self.collection.update(author).await
    }

    pub async fn remove(&self, id: &str) -> PortResult<()> {
        self.collection.remove(id).await
    }
}
