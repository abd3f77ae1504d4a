//! Toast notice handlers

use std::time::Duration;

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::SearchError;
use crate::ui::widgets::Toast;

const TOAST_DURATION: Duration = Duration::from_secs(3);

impl App {
    pub fn handle_toast(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::HideToast(id) => {
                if *id == self.ui.toast_id {
                    self.ui.toast = None;
                }
                Some(Task::none())
            }
            _ => None,
        }
    }

    /// Show a toast, replacing any current one, and schedule its hide
    pub(super) fn show_toast(&mut self, toast: Toast) -> Task<Message> {
        self.ui.toast_id += 1;
        let id = self.ui.toast_id;
        self.ui.toast = Some(toast);

        Task::perform(
            async {
                tokio::time::sleep(TOAST_DURATION).await;
            },
            move |_| Message::HideToast(id),
        )
    }

    /// Show the localized notice for a search error
    pub(super) fn show_notice(&mut self, error: SearchError) -> Task<Message> {
        let text = self.core.locale.get(error.notice_key());
        let toast = match error {
            SearchError::EmptyTerm => Toast::warning(text),
            SearchError::NoBooks => Toast::error(text),
        };
        self.show_toast(toast)
    }
}
