//! Custom styles for Emome UI widgets.

use super::theme::EmomeTheme;
use iced::widget::{button, container};
use iced::{Background, Border, Shadow};

/// Style for the main container.
pub fn main_container(theme: &EmomeTheme, opacity: f32) -> container::Style {
    container::Style {
        background: Some(Background::Color(EmomeTheme::with_alpha(
            theme.background,
            opacity,
        ))),
        text_color: Some(theme.text),
        ..Default::default()
    }
}

/// Style for an emoji slot.
pub fn emoji_button(theme: &EmomeTheme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => theme.button_hover,
        button::Status::Pressed => EmomeTheme::with_alpha(theme.accent, 0.6),
        button::Status::Active | button::Status::Disabled => theme.button,
    };
    let border_color = match status {
        button::Status::Hovered | button::Status::Pressed => theme.accent,
        _ => EmomeTheme::with_alpha(theme.accent, 0.0),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: theme.text,
        border: Border {
            color: border_color,
            width: 1.0,
            radius: 8.0.into(),
        },
        shadow: Shadow::default(),
    }
}
