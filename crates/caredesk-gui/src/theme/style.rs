//! Shared widget style functions.

use iced::widget::{button, text_input};
use iced::{Background, Border, Theme};

use super::{BORDER_RADIUS_SM, DeskColors};

/// Filled accent button for primary actions.
pub fn button_primary(theme: &Theme, status: button::Status) -> button::Style {
    let desk = theme.desk();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => iced::Color {
            a: 0.85,
            ..desk.accent
        },
        button::Status::Disabled => desk.text_disabled,
        button::Status::Active => desk.accent,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: desk.on_accent,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Borderless button for toolbars and icon actions.
pub fn button_ghost(theme: &Theme, status: button::Status) -> button::Style {
    let desk = theme.desk();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(desk.surface_alt.into()),
        _ => None,
    };
    button::Style {
        background,
        text_color: desk.text_secondary,
        border: Border {
            radius: BORDER_RADIUS_SM.into(),
            ..Border::default()
        },
        ..Default::default()
    }
}

/// Toggleable chip button, tinted with the accent when active.
pub fn button_chip(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let desk = theme.desk();
        let accent_light = iced::Color {
            a: 0.15,
            ..desk.accent
        };
        let (background, text_color, border_color) = if active {
            (accent_light, desk.accent, desk.accent)
        } else {
            match status {
                button::Status::Hovered => (desk.surface_alt, desk.text_secondary, desk.border),
                _ => (desk.surface, desk.text_secondary, desk.border),
            }
        };
        button::Style {
            background: Some(background.into()),
            text_color,
            border: Border {
                color: border_color,
                width: 1.0,
                radius: BORDER_RADIUS_SM.into(),
            },
            ..Default::default()
        }
    }
}

/// Default single-line text input style.
pub fn text_input_default(theme: &Theme, status: text_input::Status) -> text_input::Style {
    let desk = theme.desk();
    let border_color = match status {
        text_input::Status::Active | text_input::Status::Disabled => desk.border,
        text_input::Status::Hovered => desk.text_muted,
        // Focused
        _ => desk.accent,
    };
    text_input::Style {
        background: Background::Color(desk.surface),
        border: Border {
            color: border_color,
            width: 1.0,
            radius: BORDER_RADIUS_SM.into(),
        },
        icon: desk.text_muted,
        placeholder: desk.text_muted,
        value: desk.text_primary,
        selection: iced::Color {
            a: 0.3,
            ..desk.accent
        },
    }
}
