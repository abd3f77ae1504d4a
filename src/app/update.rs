//! Message update handlers - thin dispatcher delegating to submodules

mod search;
mod settings;
mod toast;
mod window;

use iced::Task;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        if let Some(task) = self.handle_search(&message) {
            return task;
        }
        if let Some(task) = self.handle_toast(&message) {
            return task;
        }
        if let Some(task) = self.handle_settings(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        Task::none()
    }
}
