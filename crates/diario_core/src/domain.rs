//! crates/diario_core/src/domain.rs
//!
//! Defines the pure, core data structures for the reading journal.
//! The structs double as the wire format: each collection is persisted as a
//! JSON array of these records, field names rendered in camelCase so the
//! on-disk layout matches what existing installs already hold.

use serde::{Deserialize, Serialize};

/// Display name stored on a book when the catalog has no author data.
/// Books carrying it never trigger author auto-creation.
pub const UNKNOWN_AUTHOR: &str = "Autor Desconhecido";

/// Fixed mood suggestions offered when tagging a quote. Free text is also
/// accepted; this set only feeds the suggestion menu.
pub const SENTIMENTOS: &[&str] = &[
    "Inspirador",
    "Reflexivo",
    "Engraçado",
    "Triste",
    "Impactante",
    "Poético",
    "Nostálgico",
];

/// Fixed genre suggestions offered when registering an author.
pub const GENEROS: &[&str] = &[
    "Romance",
    "Ficção Científica",
    "Fantasia",
    "Terror",
    "Mistério",
    "Biografia",
];

/// A book on the shelf.
///
/// `autor` is a denormalized display name, not a reference into the author
/// collection; it survives deletion of the matching author record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: String,
    pub titulo: String,
    pub autor: String,
    /// Publication year as entered, digits enforced by the form layer.
    pub ano_publicacao: String,
    /// Rating, 0 to 5 stars.
    pub nota: u8,
    /// Synopsis. Records saved from a catalog pick may lack the key.
    #[serde(default)]
    pub description: String,
    /// Local cover image reference. The key is left out of the JSON entirely
    /// when no cover was chosen, as the original records are shaped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image_uri: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    pub id: String,
    pub nome: String,
    pub nacionalidade: String,
    /// Birth date as a `DD/MM/YYYY` string, validated by the form layer.
    #[serde(default)]
    pub data_nascimento: String,
    pub genero_principal: String,
    pub biografia: String,
}

/// A quote extracted from a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub id: String,
    /// Logical reference to a book; existence is never enforced.
    pub book_id: String,
    pub texto: String,
    #[serde(default)]
    pub pagina: String,
    #[serde(default)]
    pub capitulo: String,
    #[serde(default)]
    pub personagem: String,
    #[serde(default)]
    pub sentimento: String,
}

/// A book the user wants to acquire later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WishlistItem {
    /// Derived as title + author, so the same pair always collides with
    /// itself. That collision is what makes wishlist insertion idempotent.
    pub id: String,
    pub title: String,
    pub author: String,
}

impl WishlistItem {
    pub fn new(title: impl Into<String>, author: impl Into<String>) -> Self {
        let title = title.into();
        let author = author.into();
        Self {
            id: format!("{title}{author}"),
            title,
            author,
        }
    }
}

/// One candidate record returned by the remote book catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookSearchResult {
    pub title: String,
    pub authors: Vec<String>,
    pub published_date: String,
}
