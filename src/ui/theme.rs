//! Theme system for the book search window
//! Supports both light and dark modes with a small shared palette

use iced::color;
use iced::font::Weight;
use iced::widget::{button, container, pick_list, scrollable, text_input};
use iced::{Background, Border, Color, Shadow, Theme, Vector};

pub const BOLD_WEIGHT: Weight = Weight::Bold;
pub const SEMIBOLD_WEIGHT: Weight = Weight::Semibold;

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1e1e1e);
    pub const BORDER: Color = color!(0x3a3a3a);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SURFACE: Color = color!(0xffffff);
    pub const BORDER: Color = color!(0x808080);
    pub const TEXT_SECONDARY: Color = color!(0x808080);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Search button color
pub const ACCENT: Color = color!(0x800080);
pub const ACCENT_HOVER: Color = color!(0x9b309b);

/// Remove button color
pub const REMOVE: Color = color!(0xffa500);
pub const REMOVE_HOVER: Color = color!(0xffb733);

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Surface elevated color (for toasts)
pub fn surface_elevated(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.12, 0.12, 0.14)
    } else {
        Color::from_rgb(0.96, 0.96, 0.98)
    }
}

/// Placeholder background (for covers still loading)
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.18, 0.18, 0.18)
    } else {
        Color::from_rgb(0.9, 0.9, 0.9)
    }
}

/// Shadow color for floating elements
pub fn shadow_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(0.0, 0.0, 0.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.15)
    }
}

/// Danger/error color
pub fn danger(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.3, 0.3)
    } else {
        Color::from_rgb(0.8, 0.2, 0.2)
    }
}

/// Warning color
pub fn warning(_theme: &Theme) -> Color {
    Color::from_rgb(0.95, 0.75, 0.3)
}

// ============================================================================
// Container Styles
// ============================================================================

/// Window background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Bordered card holding one book
pub fn book_card(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            radius: 5.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        ..Default::default()
    }
}

/// Toast container
pub fn toast(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(surface_elevated(theme))),
        border: Border {
            radius: 8.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
        shadow: Shadow {
            color: shadow_color(theme),
            offset: Vector::new(0.0, 4.0),
            blur_radius: 12.0,
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

fn filled_button(base_color: Color, hover_color: Color, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(base_color)),
        text_color: Color::WHITE,
        border: Border {
            radius: 5.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered | button::Status::Pressed => button::Style {
            background: Some(Background::Color(hover_color)),
            ..base
        },
        _ => base,
    }
}

/// SEARCH button
pub fn primary_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(ACCENT, ACCENT_HOVER, status)
}

/// Remove button on a book card
pub fn remove_button(_theme: &Theme, status: button::Status) -> button::Style {
    filled_button(REMOVE, REMOVE_HOVER, status)
}

// ============================================================================
// Input Styles
// ============================================================================

/// Bordered search field
pub fn search_input(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let border = match status {
        text_input::Status::Focused { .. } => ACCENT,
        _ => border_color(theme),
    };

    text_input::Style {
        background: Background::Color(surface(theme)),
        border: Border {
            radius: 0.0.into(),
            width: 1.0,
            color: border,
        },
        icon: text_secondary(theme),
        placeholder: text_secondary(theme),
        value: text_primary(theme),
        selection: ACCENT_HOVER,
    }
}

/// Language dropdown
pub fn language_pick_list(theme: &Theme, status: pick_list::Status) -> pick_list::Style {
    let bg = if is_dark(theme) {
        match status {
            pick_list::Status::Active => Color::from_rgba(1.0, 1.0, 1.0, 0.08),
            pick_list::Status::Hovered => Color::from_rgba(1.0, 1.0, 1.0, 0.12),
            pick_list::Status::Opened { .. } => Color::from_rgba(1.0, 1.0, 1.0, 0.15),
        }
    } else {
        match status {
            pick_list::Status::Active => Color::from_rgba(0.0, 0.0, 0.0, 0.05),
            pick_list::Status::Hovered => Color::from_rgba(0.0, 0.0, 0.0, 0.08),
            pick_list::Status::Opened { .. } => Color::from_rgba(0.0, 0.0, 0.0, 0.1),
        }
    };

    pick_list::Style {
        text_color: text_primary(theme),
        placeholder_color: text_secondary(theme),
        handle_color: text_secondary(theme),
        background: Background::Color(bg),
        border: Border {
            radius: 5.0.into(),
            width: 1.0,
            color: border_color(theme),
        },
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for the result list
pub fn list_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let rail = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: rail.clone(),
        horizontal_rail: rail,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_secondary(theme),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_and_dark_differ() {
        assert_ne!(background(&Theme::Light), background(&Theme::Dark));
        assert_ne!(text_primary(&Theme::Light), text_primary(&Theme::Dark));
    }

    #[test]
    fn hovered_buttons_change_color() {
        let idle = primary_button(&Theme::Light, button::Status::Active);
        let hovered = primary_button(&Theme::Light, button::Status::Hovered);
        assert_ne!(idle.background, hovered.background);
    }
}
