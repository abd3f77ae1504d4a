//! IT Bookstore API model types
//!
//! Data structures for search responses.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single search result
///
/// Extra fields in the payload (`subtitle`, `isbn13`, `url`) are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookEntry {
    /// Cover image URL
    pub image: String,
    pub title: String,
    /// Already formatted by the API, e.g. "$39.99"
    pub price: String,
}

impl BookEntry {
    pub fn new(
        image: impl Into<String>,
        title: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            image: image.into(),
            title: title.into(),
            price: price.into(),
        }
    }
}

/// Body of `GET /search/{term}`
#[derive(Debug, Deserialize)]
struct SearchResponse {
    books: Vec<BookEntry>,
}

/// Parse a search response body into its book entries.
///
/// Fails when the body is not JSON, has no `books` array, or any book lacks
/// one of `image`, `title`, `price`.
pub fn parse_search_response(body: &str) -> Result<Vec<BookEntry>> {
    let response: SearchResponse =
        serde_json::from_str(body).context("malformed search response")?;
    Ok(response.books)
}
