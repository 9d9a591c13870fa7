//! crates/diario_core/src/service.rs
//!
//! Cross-repository choreography. The repositories themselves never talk to
//! each other; the flows that keep a book's author name backed by an author
//! record, or turn a wishlist entry into a new-book prefill, live here.

use std::sync::Arc;

use tracing::info;

use crate::domain::{Author, Book, BookSearchResult, WishlistItem, UNKNOWN_AUTHOR};
use crate::ports::{IdGenerator, KeyValueStore, PortResult};
use crate::storage::{AuthorRepository, BookRepository, QuoteRepository, WishlistRepository};

//=========================================================================================
// Service Inputs and Outputs
//=========================================================================================

/// Input for a new book; the id is minted by the service.
#[derive(Debug, Clone, Default)]
pub struct BookDraft {
    pub titulo: String,
    pub autor: String,
    pub ano_publicacao: String,
    pub nota: u8,
    pub description: String,
    pub cover_image_uri: Option<String>,
}

/// Outcome of saving a book, including the author record that had to be
/// synthesized on the spot, if any.
#[derive(Debug, Clone)]
pub struct SavedBook {
    pub book: Book,
    pub created_author: Option<Author>,
}

/// Title/author pair handed forward when a wishlist item is consumed.
/// Nothing else carries over into the new book.
#[derive(Debug, Clone, PartialEq)]
pub struct WishlistPrefill {
    pub title: String,
    pub author: String,
}

//=========================================================================================
// The Journal Service
//=========================================================================================

/// Owns the four repositories over one shared store, plus the id strategy.
pub struct JournalService {
    pub books: BookRepository,
    pub authors: AuthorRepository,
    pub quotes: QuoteRepository,
    pub wishlist: WishlistRepository,
    ids: Arc<dyn IdGenerator>,
}

impl JournalService {
    pub fn new(store: Arc<dyn KeyValueStore>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            books: BookRepository::new(store.clone()),
            authors: AuthorRepository::new(store.clone()),
            quotes: QuoteRepository::new(store.clone()),
            wishlist: WishlistRepository::new(store),
            ids,
        }
    }

    /// Saves a book, first making sure its author name resolves to an author
    /// record. Names are compared case-insensitively; an unmatched name gets
    /// a minimal placeholder record, except for the catalog's unknown-author
    /// placeholder, which never becomes a record.
    pub async fn save_book(&self, draft: BookDraft) -> PortResult<SavedBook> {
        let mut created_author = None;
        let known = self
            .authors
            .list()
            .await?
            .iter()
            .any(|a| a.nome.to_lowercase() == draft.autor.to_lowercase());
        if !known && draft.autor != UNKNOWN_AUTHOR {
            let author = Author {
                id: format!("{}_autor", self.ids.next_id()),
                nome: draft.autor.clone(),
                nacionalidade: "N/A".to_string(),
                data_nascimento: String::new(),
                genero_principal: String::new(),
                biografia: "Adicionado automaticamente via busca".to_string(),
            };
            self.authors.add(author.clone()).await?;
            info!(nome = %author.nome, "author record synthesized for new book");
            created_author = Some(author);
        }

        let book = Book {
            id: self.ids.next_id(),
            titulo: draft.titulo,
            autor: draft.autor,
            ano_publicacao: draft.ano_publicacao,
            nota: draft.nota,
            description: draft.description,
            cover_image_uri: draft.cover_image_uri,
        };
        self.books.add(book.clone()).await?;
        Ok(SavedBook {
            book,
            created_author,
        })
    }

    /// Queues a manually entered title/author pair on the wishlist.
    pub async fn add_to_wishlist(&self, title: &str, author: &str) -> PortResult<()> {
        self.wishlist.add(WishlistItem::new(title, author)).await
    }

    /// Queues a catalog search hit on the wishlist. The derived id uses only
    /// the first author, while the display field joins all of them.
    pub async fn wishlist_from_search(&self, result: &BookSearchResult) -> PortResult<()> {
        let first = result.authors.first().map(String::as_str).unwrap_or("");
        let item = WishlistItem {
            id: format!("{}{first}", result.title),
            title: result.title.clone(),
            author: if result.authors.is_empty() {
                UNKNOWN_AUTHOR.to_string()
            } else {
                result.authors.join(", ")
            },
        };
        self.wishlist.add(item).await
    }

    /// Removes a wishlist item and returns its title/author pair so a
    /// new-book flow can be prefilled. An id that matches nothing removes
    /// nothing and yields `None`.
    pub async fn mark_wishlist_read(&self, id: &str) -> PortResult<Option<WishlistPrefill>> {
        let item = self
            .wishlist
            .list()
            .await?
            .into_iter()
            .find(|item| item.id == id);
        self.wishlist.remove(id).await?;
        Ok(item.map(|item| WishlistPrefill {
            title: item.title,
            author: item.author,
        }))
    }
}
