//! The four collection repositories and their shared persistence helper.
//!
//! Each repository wraps one store key and nothing else; the keys are
//! disjoint, so no repository ever observes another's writes.

mod authors;
mod books;
mod collection;
mod memory;
mod quotes;
mod wishlist;

pub use authors::{AuthorRepository, AUTHORS_KEY};
pub use books::{BookRepository, BOOKS_KEY};
pub use collection::{Collection, Record};
pub use memory::MemoryStore;
pub use quotes::{QuoteRepository, QUOTES_KEY};
pub use wishlist::{WishlistRepository, WISHLIST_KEY};
