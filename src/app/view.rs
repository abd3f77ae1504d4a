//! View rendering

use iced::widget::{Space, column, container, stack};
use iced::{Alignment, Element, Fill};

use super::{App, Message};
use crate::ui::{components, theme, widgets};

impl App {
    /// Main window view
    pub fn view(&self, _window_id: iced::window::Id) -> Element<'_, Message> {
        let locale = self.core.locale;

        let header = components::header::view(self.core.settings.display.dark_mode, locale);
        let search_bar = components::search_bar::view(self.search.search_text(), locale);
        let book_list = components::book_list::view(
            self.search.books(),
            &self.ui.covers,
            self.search.is_searching(),
            locale,
        );

        let main_layout = container(column![header, search_bar, book_list].height(Fill))
            .width(Fill)
            .height(Fill)
            .style(theme::main_content);

        // Keep the stack shape stable so the list keeps its scroll position
        let toast_overlay: Element<'_, Message> = match &self.ui.toast {
            Some(toast) => container(widgets::view_toast(toast))
                .width(Fill)
                .height(Fill)
                .padding(24)
                .align_x(Alignment::Center)
                .align_y(iced::alignment::Vertical::Bottom)
                .into(),
            None => Space::new().width(0).height(0).into(),
        };

        stack![main_layout, toast_overlay]
            .width(Fill)
            .height(Fill)
            .into()
    }
}
