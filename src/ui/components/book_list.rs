//! Result list component
//!
//! Maps each book to a card whose remove button emits `Message::RemoveBook`.

use std::collections::HashMap;

use iced::widget::{column, container, image, scrollable, text};
use iced::{Alignment, Element, Fill, Padding};

use crate::api::BookEntry;
use crate::app::Message;
use crate::i18n::{Key, Locale};
use crate::ui::theme;
use crate::ui::widgets::{BookCardLabels, book_card};

pub fn view<'a>(
    books: &'a [BookEntry],
    covers: &'a HashMap<String, image::Handle>,
    searching: bool,
    locale: Locale,
) -> Element<'a, Message> {
    if books.is_empty() {
        let hint = if searching {
            locale.get(Key::Searching)
        } else {
            locale.get(Key::EmptyHint)
        };

        return container(text(hint).size(14).style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        }))
        .width(Fill)
        .height(Fill)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .into();
    }

    let labels = BookCardLabels {
        price: locale.get(Key::PriceLabel),
        remove: locale.get(Key::RemoveButton),
    };

    let cards: Vec<Element<'a, Message>> = books
        .iter()
        .enumerate()
        .map(|(position, book)| {
            book_card::view(
                book,
                position,
                covers.get(&book.image),
                labels,
                Message::RemoveBook,
            )
        })
        .collect();

    let mut content = column![].spacing(10);
    if searching {
        content = content.push(
            text(locale.get(Key::Searching))
                .size(13)
                .style(|theme| text::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        );
    }
    content = content.push(column(cards).spacing(10));

    scrollable(container(content).padding(Padding::new(10.0).top(0.0)))
        .width(Fill)
        .height(Fill)
        .style(theme::list_scrollable)
        .into()
}
