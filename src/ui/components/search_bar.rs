//! Search bar component
//! Bordered text field with a full-width SEARCH button underneath

use iced::widget::{Space, button, column, container, row, svg, text, text_input};
use iced::{Alignment, Element, Fill};

use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme::{self, SEMIBOLD_WEIGHT};

/// Build the search bar component
pub fn view(search_text: &str, locale: Locale) -> Element<'_, Message> {
    let input = text_input(locale.get(Key::SearchPlaceholder), search_text)
        .on_input(Message::SearchChanged)
        .on_submit(Message::SubmitSearch)
        .padding(10)
        .size(14)
        .style(theme::search_input);

    let search_icon = svg(svg::Handle::from_memory(crate::ui::icons::SEARCH.as_bytes()))
        .width(16)
        .height(16)
        .style(|_theme, _status| svg::Style {
            color: Some(iced::Color::WHITE),
        });

    let label = row![
        search_icon,
        Space::new().width(8),
        text(locale.get(Key::SearchButton)).font(iced::Font {
            weight: SEMIBOLD_WEIGHT,
            ..Default::default()
        }),
    ]
    .align_y(Alignment::Center);

    let search_button = button(container(label).width(Fill).align_x(Alignment::Center))
        .width(Fill)
        .padding(8)
        .style(theme::primary_button)
        .on_press(Message::SubmitSearch);

    column![input, search_button]
        .spacing(15)
        .padding(18)
        .width(Fill)
        .into()
}
