use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use diario_core::domain::{Author, BookSearchResult, UNKNOWN_AUTHOR};
use diario_core::ports::IdGenerator;
use diario_core::service::{BookDraft, JournalService};
use diario_core::storage::MemoryStore;

/// Deterministic ids so assertions do not depend on the clock.
struct SeqIds(AtomicU64);

impl SeqIds {
    fn new() -> Self {
        Self(AtomicU64::new(1))
    }
}

impl IdGenerator for SeqIds {
    fn next_id(&self) -> String {
        self.0.fetch_add(1, Ordering::SeqCst).to_string()
    }
}

fn service() -> JournalService {
    JournalService::new(Arc::new(MemoryStore::new()), Arc::new(SeqIds::new()))
}

fn draft(titulo: &str, autor: &str) -> BookDraft {
    BookDraft {
        titulo: titulo.to_string(),
        autor: autor.to_string(),
        ano_publicacao: "1956".to_string(),
        nota: 4,
        ..BookDraft::default()
    }
}

#[tokio::test]
async fn saving_a_book_with_a_new_author_synthesizes_the_record() {
    let service = service();

    let saved = service
        .save_book(draft("A Hora da Estrela", "Clarice Lispector"))
        .await
        .unwrap();

    let created = saved.created_author.expect("author should be created");
    assert!(created.id.ends_with("_autor"));
    assert_eq!(created.nome, "Clarice Lispector");
    assert_eq!(created.nacionalidade, "N/A");
    assert_eq!(created.biografia, "Adicionado automaticamente via busca");

    let authors = service.authors.list().await.unwrap();
    assert_eq!(authors, vec![created]);
    assert_eq!(service.books.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn author_lookup_is_case_insensitive() {
    let service = service();
    service
        .authors
        .add(Author {
            id: "a1".to_string(),
            nome: "clarice lispector".to_string(),
            nacionalidade: "Brasileira".to_string(),
            data_nascimento: "10/12/1920".to_string(),
            genero_principal: "Romance".to_string(),
            biografia: String::new(),
        })
        .await
        .unwrap();

    let saved = service
        .save_book(draft("Perto do Coração Selvagem", "Clarice Lispector"))
        .await
        .unwrap();

    assert!(saved.created_author.is_none());
    assert_eq!(service.authors.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn the_unknown_author_placeholder_never_becomes_a_record() {
    let service = service();

    let saved = service
        .save_book(draft("Sem Créditos", UNKNOWN_AUTHOR))
        .await
        .unwrap();

    assert!(saved.created_author.is_none());
    assert!(service.authors.list().await.unwrap().is_empty());
    assert_eq!(service.books.list().await.unwrap()[0].autor, UNKNOWN_AUTHOR);
}

#[tokio::test]
async fn deleting_an_author_leaves_referencing_books_intact() {
    let service = service();
    let saved = service
        .save_book(draft("Memórias Póstumas", "Machado de Assis"))
        .await
        .unwrap();
    let author = saved.created_author.unwrap();

    service.authors.remove(&author.id).await.unwrap();

    assert!(service.authors.list().await.unwrap().is_empty());
    let books = service.books.list().await.unwrap();
    assert_eq!(books.len(), 1);
    assert_eq!(books[0].autor, "Machado de Assis");
}

#[tokio::test]
async fn wishlist_add_via_service_dedups() {
    let service = service();

    service
        .add_to_wishlist("O Alienista", "Machado de Assis")
        .await
        .unwrap();
    service
        .add_to_wishlist("O Alienista", "Machado de Assis")
        .await
        .unwrap();

    assert_eq!(service.wishlist.list().await.unwrap().len(), 1);
}

#[tokio::test]
async fn search_hit_uses_the_first_author_for_the_id_and_joins_all() {
    let service = service();
    let result = BookSearchResult {
        title: "Bom Dia".to_string(),
        authors: vec!["Primeira Autora".to_string(), "Segundo Autor".to_string()],
        published_date: "2019".to_string(),
    };

    service.wishlist_from_search(&result).await.unwrap();

    let items = service.wishlist.list().await.unwrap();
    assert_eq!(items[0].id, "Bom DiaPrimeira Autora");
    assert_eq!(items[0].author, "Primeira Autora, Segundo Autor");
}

#[tokio::test]
async fn search_hit_without_authors_falls_back_to_the_placeholder() {
    let service = service();
    let result = BookSearchResult {
        title: "Anônimo".to_string(),
        authors: Vec::new(),
        published_date: String::new(),
    };

    service.wishlist_from_search(&result).await.unwrap();

    let items = service.wishlist.list().await.unwrap();
    assert_eq!(items[0].id, "Anônimo");
    assert_eq!(items[0].author, UNKNOWN_AUTHOR);
}

#[tokio::test]
async fn mark_wishlist_read_removes_and_returns_the_prefill() {
    let service = service();
    service
        .add_to_wishlist("Claro Enigma", "Drummond")
        .await
        .unwrap();
    let id = service.wishlist.list().await.unwrap()[0].id.clone();

    let prefill = service.mark_wishlist_read(&id).await.unwrap().unwrap();

    assert_eq!(prefill.title, "Claro Enigma");
    assert_eq!(prefill.author, "Drummond");
    assert!(service.wishlist.list().await.unwrap().is_empty());
    // Nothing is copied into the shelf automatically.
    assert!(service.books.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn mark_read_with_an_unknown_id_yields_none() {
    let service = service();

    assert!(service
        .mark_wishlist_read("nunca-existiu")
        .await
        .unwrap()
        .is_none());
}
