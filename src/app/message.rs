//! Application messages

use iced::widget::image;

use crate::api::BookEntry;
use crate::i18n::Language;

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Search ============
    /// Search field edited
    SearchChanged(String),
    /// SEARCH pressed (or Enter in the field)
    SubmitSearch,
    /// Search request resolved (generation, books or error text)
    SearchCompleted(u64, Result<Vec<BookEntry>, String>),
    /// Remove pressed on the card at this position
    RemoveBook(usize),
    /// Cover image downloaded (image URL, decoded handle or error text)
    CoverLoaded(String, Result<image::Handle, String>),

    // ============ Toast ============
    /// Hide the toast with this id, if it is still the current one
    HideToast(u64),

    // ============ Settings ============
    ToggleDarkMode(bool),
    SelectLanguage(Language),

    // ============ Window ============
    /// Main window closed
    WindowClosed,
}
