//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            // Running as a daemon, so closing the only window has to exit explicitly
            Message::WindowClosed => {
                tracing::info!("Main window closed, exiting");
                Some(iced::exit())
            }
            _ => None,
        }
    }
}
