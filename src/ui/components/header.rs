//! Header component: app name, dark mode toggle and language picker

use iced::widget::{Space, pick_list, row, text, toggler};
use iced::{Alignment, Element, Fill, Padding};

use crate::app::Message;
use crate::i18n::{Key, Language, Locale};
use crate::ui::theme::{self, BOLD_WEIGHT};

pub fn view<'a>(dark_mode: bool, locale: Locale) -> Element<'a, Message> {
    let title = text(locale.get(Key::AppName)).size(22).font(iced::Font {
        weight: BOLD_WEIGHT,
        ..Default::default()
    });

    let dark_toggle = toggler(dark_mode)
        .label(locale.get(Key::DarkMode))
        .text_size(13)
        .on_toggle(Message::ToggleDarkMode);

    let language = pick_list(
        Language::all(),
        Some(locale.language),
        Message::SelectLanguage,
    )
    .text_size(13)
    .style(theme::language_pick_list);

    row![
        title,
        Space::new().width(Fill),
        dark_toggle,
        Space::new().width(12),
        language,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(18.0).bottom(0.0))
    .into()
}
