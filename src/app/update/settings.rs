//! Settings update handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::i18n::Locale;

impl App {
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::ToggleDarkMode(enabled) => {
                self.core.settings.display.dark_mode = *enabled;
                Some(self.save_settings())
            }

            Message::SelectLanguage(language) => {
                self.core.settings.display.language = language.code().to_string();
                self.core.locale = Locale::new(*language);
                Some(self.save_settings())
            }

            _ => None,
        }
    }

    /// Write the current settings in the background
    fn save_settings(&self) -> Task<Message> {
        let settings = self.core.settings.clone();
        Task::future(async move {
            if let Err(e) = settings.save() {
                tracing::warn!("Failed to save settings: {}", e);
            }
        })
        .discard()
    }
}
