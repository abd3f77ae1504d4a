//! Application state definitions

use std::collections::HashMap;

use iced::widget::image;

use crate::api::BookClient;
use crate::features::{SearchController, Settings};
use crate::i18n::{Language, Locale};
use crate::ui::widgets::Toast;

/// Main application state
pub struct App {
    /// Settings, locale and the API client
    pub core: CoreState,
    /// Search text and the displayed result list
    pub search: SearchController,
    /// Covers and notices
    pub ui: UiState,
}

/// Core Infrastructure & Services
pub struct CoreState {
    pub settings: Settings,
    pub locale: Locale,
    /// `None` if the HTTP client could not be built; searches then fail
    pub client: Option<BookClient>,
}

impl CoreState {
    pub fn new(settings: Settings) -> Self {
        let locale = Locale::new(Language::from_code(&settings.display.language));

        let client = match BookClient::new(&settings.api.base_url) {
            Ok(client) => {
                tracing::info!("Book API client ready: {}", client.base_url());
                Some(client)
            }
            Err(e) => {
                tracing::error!("Failed to create book API client: {:#}", e);
                None
            }
        };

        Self {
            settings,
            locale,
            client,
        }
    }
}

/// UI State
#[derive(Default)]
pub struct UiState {
    /// Decoded covers keyed by image URL
    pub covers: HashMap<String, image::Handle>,
    /// Current notice, if shown
    pub toast: Option<Toast>,
    /// Bumped for every toast so older hide timers are ignored
    pub toast_id: u64,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }
}
