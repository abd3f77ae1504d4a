//! Book search state
//!
//! Owns the search text and the displayed result list. Network access is
//! left to the caller: `submit` hands back a [`SearchRequest`] and the
//! outcome is fed back through `apply_results`.

use std::fmt;

use crate::api::BookEntry;
use crate::i18n::Key;

/// User-facing search failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchError {
    /// Submit with an empty search field
    EmptyTerm,
    /// Zero results, or the fetch failed
    NoBooks,
}

impl SearchError {
    /// Translation key of the notice shown for this error
    pub fn notice_key(&self) -> Key {
        match self {
            SearchError::EmptyTerm => Key::NoticeEmptyTerm,
            SearchError::NoBooks => Key::NoticeNoBooks,
        }
    }
}

impl fmt::Display for SearchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SearchError::EmptyTerm => write!(f, "Please enter a search term"),
            SearchError::NoBooks => write!(f, "No Books Founds!"),
        }
    }
}

impl std::error::Error for SearchError {}

/// A fetch the caller should run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub term: String,
    /// Tags the response so superseded ones can be dropped
    pub generation: u64,
}

/// What `apply_results` did with a response
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// List replaced with this many entries
    Populated(usize),
    /// List cleared; the notice should be shown
    Empty(SearchError),
    /// Response belonged to an older submit and was ignored
    Stale,
}

#[derive(Debug, Default)]
pub struct SearchController {
    search_text: String,
    books: Vec<BookEntry>,
    generation: u64,
    searching: bool,
}

impl SearchController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search_text(&self) -> &str {
        &self.search_text
    }

    pub fn books(&self) -> &[BookEntry] {
        &self.books
    }

    /// True while the latest submitted request has not resolved
    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn update_search_text(&mut self, text: impl Into<String>) {
        self.search_text = text.into();
    }

    /// Validate the current text and start a new search generation.
    ///
    /// The current list is kept until the response arrives.
    pub fn submit(&mut self) -> Result<SearchRequest, SearchError> {
        if self.search_text.is_empty() {
            return Err(SearchError::EmptyTerm);
        }

        self.generation += 1;
        self.searching = true;
        Ok(SearchRequest {
            term: self.search_text.clone(),
            generation: self.generation,
        })
    }

    /// Apply the outcome of the request tagged `generation`.
    pub fn apply_results<E>(
        &mut self,
        generation: u64,
        result: Result<Vec<BookEntry>, E>,
    ) -> SearchOutcome {
        if generation != self.generation {
            return SearchOutcome::Stale;
        }
        self.searching = false;

        match result {
            Ok(books) if !books.is_empty() => {
                let count = books.len();
                self.books = books;
                SearchOutcome::Populated(count)
            }
            _ => {
                self.books.clear();
                SearchOutcome::Empty(SearchError::NoBooks)
            }
        }
    }

    /// Remove the entry at `position`, returning it.
    ///
    /// Later entries shift down by one. Out-of-range positions are ignored.
    pub fn remove_entry(&mut self, position: usize) -> Option<BookEntry> {
        if position < self.books.len() {
            Some(self.books.remove(position))
        } else {
            None
        }
    }
}
