//! Toast notification widget
//!
//! Floating notice with a colored accent bar and icon.

use iced::widget::{Space, container, row, text};
use iced::{Alignment, Element, Padding};

use crate::ui::theme;

/// Toast notification style
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStyle {
    Error,
    Warning,
}

impl ToastStyle {
    /// Accent color for the bar and icon
    pub fn accent_color(&self, theme: &iced::Theme) -> iced::Color {
        match self {
            ToastStyle::Error => theme::danger(theme),
            ToastStyle::Warning => theme::warning(theme),
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ToastStyle::Error => "✗",
            ToastStyle::Warning => "⚠",
        }
    }
}

/// Toast notification data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub style: ToastStyle,
}

impl Toast {
    pub fn new(message: impl Into<String>, style: ToastStyle) -> Self {
        Self {
            message: message.into(),
            style,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Error)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, ToastStyle::Warning)
    }
}

/// Build a toast notification widget
pub fn view_toast<'a, Message: 'a>(toast: &Toast) -> Element<'a, Message> {
    let style = toast.style;

    let accent_bar = container(Space::new().width(3).height(20)).style(move |theme| {
        container::Style {
            background: Some(iced::Background::Color(style.accent_color(theme))),
            border: iced::Border {
                radius: 2.0.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let icon = text(style.icon()).size(14).style(move |theme| text::Style {
        color: Some(style.accent_color(theme)),
    });

    let message = text(toast.message.clone())
        .size(14)
        .style(|theme| text::Style {
            color: Some(theme::text_primary(theme)),
        });

    let content = row![
        accent_bar,
        Space::new().width(12),
        icon,
        Space::new().width(10),
        message,
    ]
    .align_y(Alignment::Center)
    .padding(Padding::new(14.0).left(12.0).right(20.0));

    container(content).style(theme::toast).into()
}
