//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Bookfinder");

    // Search
    m.insert(Key::SearchPlaceholder, "Enter a word to search");
    m.insert(Key::SearchButton, "SEARCH");
    m.insert(Key::Searching, "Searching...");
    m.insert(Key::EmptyHint, "Search for a book to get started");

    // Book card
    m.insert(Key::PriceLabel, "Price:");
    m.insert(Key::RemoveButton, "Remove");

    // Notices
    m.insert(Key::NoticeEmptyTerm, "Please enter a search term");
    m.insert(Key::NoticeNoBooks, "No Books Founds!");

    // Header
    m.insert(Key::DarkMode, "Dark mode");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
