//! Internationalization (i18n) support for Bookfinder
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - en.rs: English translations
//! - zh.rs: Chinese translations

mod en;
mod zh;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    English,
    Chinese,
}

impl Language {
    /// Get language display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Chinese => "中文",
        }
    }

    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Chinese => "zh",
        }
    }

    /// Parse a language code, falling back to English
    pub fn from_code(code: &str) -> Self {
        match code {
            "zh" => Language::Chinese,
            _ => Language::English,
        }
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::English, Language::Chinese]
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Search
    SearchPlaceholder,
    SearchButton,
    Searching,
    EmptyHint,

    // Book card
    PriceLabel,
    RemoveButton,

    // Notices
    NoticeEmptyTerm,
    NoticeNoBooks,

    // Header
    DarkMode,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::English => en::translations(),
        Language::Chinese => zh::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_KEYS: &[Key] = &[
        Key::AppName,
        Key::SearchPlaceholder,
        Key::SearchButton,
        Key::Searching,
        Key::EmptyHint,
        Key::PriceLabel,
        Key::RemoveButton,
        Key::NoticeEmptyTerm,
        Key::NoticeNoBooks,
        Key::DarkMode,
    ];

    #[test]
    fn every_key_is_translated() {
        for &lang in Language::all() {
            for &key in ALL_KEYS {
                assert_ne!(t(lang, key), "???", "{:?} missing for {:?}", key, lang);
            }
        }
    }

    #[test]
    fn english_notices_match_search_errors() {
        use crate::features::SearchError;

        let locale = Locale::new(Language::English);
        for err in [SearchError::EmptyTerm, SearchError::NoBooks] {
            assert_eq!(locale.get(err.notice_key()), err.to_string());
        }
    }

    #[test]
    fn language_codes() {
        assert_eq!(Language::from_code("zh"), Language::Chinese);
        assert_eq!(Language::from_code("fr"), Language::English);
        for &lang in Language::all() {
            assert_eq!(Language::from_code(lang.code()), lang);
        }
    }
}
