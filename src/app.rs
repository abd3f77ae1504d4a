//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use crate::features::{SearchController, Settings};
use crate::i18n::Key;
pub use message::Message;
pub use state::App;
use state::{CoreState, UiState};

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let app = Self::with_settings(Settings::load());

        let (window_id, open_window) = iced::window::open(iced::window::Settings {
            size: iced::Size::new(480.0, 800.0),
            min_size: Some(iced::Size::new(360.0, 480.0)),
            #[cfg(target_os = "linux")]
            platform_specific: iced::window::settings::PlatformSpecific {
                application_id: "bookfinder".to_string(),
                ..Default::default()
            },
            ..Default::default()
        });
        tracing::info!("Opening main window with id: {:?}", window_id);

        (app, open_window.discard())
    }

    /// Build state from already loaded settings, without opening a window
    pub fn with_settings(settings: Settings) -> Self {
        Self {
            core: CoreState::new(settings),
            search: SearchController::new(),
            ui: UiState::new(),
        }
    }

    pub fn theme(&self, _window_id: iced::window::Id) -> Theme {
        if self.core.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title, with the result count once there is a list
    pub fn title(&self, _window_id: iced::window::Id) -> String {
        let name = self.core.locale.get(Key::AppName);
        match self.search.books().len() {
            0 => name.to_string(),
            n => format!("{} ({})", name, n),
        }
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        iced::window::close_events().map(|_id| Message::WindowClosed)
    }
}
