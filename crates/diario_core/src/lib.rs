pub mod domain;
pub mod ids;
pub mod ports;
pub mod service;
pub mod storage;

pub use domain::{Author, Book, BookSearchResult, Quote, WishlistItem, UNKNOWN_AUTHOR};
pub use ids::{TimestampIds, UuidIds};
pub use ports::{BookSearch, IdGenerator, KeyValueStore, PortError, PortResult};
pub use service::{BookDraft, JournalService, SavedBook, WishlistPrefill};
pub use storage::{
    AuthorRepository, BookRepository, MemoryStore, QuoteRepository, WishlistRepository,
};
