//! services/journal/src/adapters/google_books.rs
//!
//! Remote catalog adapter, the concrete implementation of the `BookSearch`
//! port against the Google Books volumes endpoint. Transport and decode
//! failures are logged and reported as empty results; the core never sees
//! an error from this collaborator.

use async_trait::async_trait;
use diario_core::domain::{BookSearchResult, UNKNOWN_AUTHOR};
use diario_core::ports::BookSearch;
use serde_json::Value;
use tracing::error;

/// Result-count cap sent with every query.
const MAX_RESULTS: u32 = 10;

/// A book search adapter that implements the `BookSearch` port.
pub struct GoogleBooksAdapter {
    client: reqwest::Client,
    base_url: String,
}

impl GoogleBooksAdapter {
    /// Creates a new `GoogleBooksAdapter` against the given volumes endpoint.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

/// Maps one volumes response body to the search result shape. Items without
/// a title are dropped; missing authors become the unknown-author
/// placeholder and a missing published date becomes the empty string.
fn map_volumes(body: &Value) -> Vec<BookSearchResult> {
    let Some(items) = body.get("items").and_then(Value::as_array) else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            let info = item.get("volumeInfo")?;
            let title = info.get("title")?.as_str()?.to_string();
            let authors = info
                .get("authors")
                .and_then(Value::as_array)
                .map(|authors| {
                    authors
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .filter(|authors| !authors.is_empty())
                .unwrap_or_else(|| vec![UNKNOWN_AUTHOR.to_string()]);
            let published_date = info
                .get("publishedDate")
                .and_then(Value::as_str)
                .unwrap_or("")
                .to_string();
            Some(BookSearchResult {
                title,
                authors,
                published_date,
            })
        })
        .collect()
}

#[async_trait]
impl BookSearch for GoogleBooksAdapter {
    async fn search_books(&self, query: &str) -> Vec<BookSearchResult> {
        if query.is_empty() {
            return Vec::new();
        }

        let request = self.client.get(&self.base_url).query(&[
            ("q", query.to_string()),
            ("maxResults", MAX_RESULTS.to_string()),
        ]);
        let body = match request.send().await {
            Ok(response) => match response.json::<Value>().await {
                Ok(body) => body,
                Err(e) => {
                    error!(%e, "undecodable response from the books catalog");
                    return Vec::new();
                }
            },
            Err(e) => {
                error!(%e, "books catalog request failed");
                return Vec::new();
            }
        };
        map_volumes(&body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn maps_title_authors_and_date() {
        let body = json!({
            "items": [{
                "volumeInfo": {
                    "title": "O Cortiço",
                    "authors": ["Aluísio Azevedo"],
                    "publishedDate": "1890"
                }
            }]
        });

        let results = map_volumes(&body);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "O Cortiço");
        assert_eq!(results[0].authors, vec!["Aluísio Azevedo"]);
        assert_eq!(results[0].published_date, "1890");
    }

    #[test]
    fn missing_authors_become_the_placeholder() {
        let body = json!({
            "items": [{
                "volumeInfo": { "title": "Anônimo" }
            }]
        });

        let results = map_volumes(&body);
        assert_eq!(results[0].authors, vec![UNKNOWN_AUTHOR]);
        assert_eq!(results[0].published_date, "");
    }

    #[test]
    fn no_items_key_means_no_results() {
        assert!(map_volumes(&json!({ "totalItems": 0 })).is_empty());
    }

    #[test]
    fn items_without_a_title_are_dropped() {
        let body = json!({
            "items": [
                { "volumeInfo": { "publishedDate": "2001" } },
                { "volumeInfo": { "title": "Com Título" } }
            ]
        });

        let results = map_volumes(&body);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Com Título");
    }
}
