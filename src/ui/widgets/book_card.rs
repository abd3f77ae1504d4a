//! Book card widget
//!
//! Renders one search result: cover, title, price and a remove button.
//! Holds no state; the remove button emits whatever `on_remove(position)`
//! returns.

use iced::widget::{Space, button, column, container, image, row, svg, text};
use iced::{Alignment, Element, Fill, Length, Padding};

use crate::api::BookEntry;
use crate::ui::theme::{self, BOLD_WEIGHT, SEMIBOLD_WEIGHT};

const COVER_WIDTH: f32 = 150.0;
const COVER_HEIGHT: f32 = 170.0;

/// Labels are passed in so the widget stays locale-agnostic
#[derive(Debug, Clone, Copy)]
pub struct BookCardLabels {
    pub price: &'static str,
    pub remove: &'static str,
}

pub fn view<'a, Message: Clone + 'a>(
    book: &'a BookEntry,
    position: usize,
    cover: Option<&image::Handle>,
    labels: BookCardLabels,
    on_remove: impl Fn(usize) -> Message,
) -> Element<'a, Message> {
    let cover: Element<'a, Message> = match cover {
        Some(handle) => image(handle.clone())
            .width(COVER_WIDTH)
            .height(COVER_HEIGHT)
            .content_fit(iced::ContentFit::Contain)
            .into(),
        None => container(
            svg(svg::Handle::from_memory(crate::ui::icons::BOOK.as_bytes()))
                .width(40)
                .height(40)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::text_secondary(theme)),
                }),
        )
        .width(COVER_WIDTH)
        .height(COVER_HEIGHT)
        .align_x(Alignment::Center)
        .align_y(Alignment::Center)
        .style(|theme| container::Style {
            background: Some(iced::Background::Color(theme::placeholder_bg(theme))),
            ..Default::default()
        })
        .into(),
    };

    let title = text(book.title.as_str())
        .size(20)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        });

    let price = text(format_price(labels.price, &book.price))
        .size(13)
        .font(iced::Font {
            weight: BOLD_WEIGHT,
            ..Default::default()
        })
        .style(|theme| text::Style {
            color: Some(theme::text_secondary(theme)),
        });

    let remove = button(
        container(text(labels.remove).font(iced::Font {
            weight: SEMIBOLD_WEIGHT,
            ..Default::default()
        }))
        .width(Fill)
        .align_x(Alignment::Center),
    )
    .width(Length::FillPortion(2))
    .padding(8)
    .style(theme::remove_button)
    .on_press(on_remove(position));

    let info = column![
        title,
        Space::new().height(6),
        price,
        Space::new().height(6),
        row![remove, Space::new().width(Length::FillPortion(1))],
    ]
    .width(Fill)
    .padding(15);

    container(
        row![cover, info]
            .align_y(Alignment::Center)
            .padding(Padding::new(5.0)),
    )
    .width(Fill)
    .style(theme::book_card)
    .into()
}

/// "Price: $39.99"
pub fn format_price(label: &str, price: &str) -> String {
    format!("{} {}", label, price)
}
