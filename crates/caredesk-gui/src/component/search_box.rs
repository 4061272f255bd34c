//! Search input with clear button.

use iced::widget::{button, container, row, text_input};
use iced::{Border, Element, Length, Padding, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, DeskColors, SPACING_XS, button_ghost, text_input_default,
};

/// Creates a search input with a magnifier prefix and a clear button that
/// appears once text is entered.
pub fn search_box<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let search_icon =
        container(lucide::search().size(14)).style(|theme: &Theme| container::Style {
            text_color: Some(theme.desk().text_muted),
            ..Default::default()
        });

    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding(Padding::new(8.0).left(8.0))
        .width(Length::Fill)
        .style(text_input_default);

    let clear_button = if value.is_empty() {
        None
    } else {
        Some(
            button(
                container(lucide::x().size(14)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.desk().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([4.0, 8.0])
            .style(button_ghost),
        )
    };

    let mut content = row![
        container(search_icon)
            .width(Length::Fixed(28.0))
            .center_x(Length::Shrink)
            .center_y(Length::Shrink),
        container(input).width(Length::Fill),
    ]
    .align_y(iced::Alignment::Center);

    if let Some(btn) = clear_button {
        content = content.push(btn);
    }

    container(content)
        .width(Length::Fill)
        .style(|theme: &Theme| {
            let desk = theme.desk();
            container::Style {
                background: Some(desk.surface.into()),
                border: Border {
                    color: desk.border,
                    width: 1.0,
                    radius: BORDER_RADIUS_SM.into(),
                },
                ..Default::default()
            }
        })
        .into()
}

/// Compact variant for pickers and side panels.
pub fn search_box_compact<'a, M: Clone + 'a>(
    value: &str,
    placeholder: &str,
    on_change: impl Fn(String) -> M + 'a,
    on_clear: M,
) -> Element<'a, M> {
    let input = text_input(placeholder, value)
        .on_input(on_change)
        .padding([6.0, 8.0])
        .size(13)
        .width(Length::Fill)
        .style(text_input_default);

    let mut content = row![input].spacing(SPACING_XS);

    if !value.is_empty() {
        content = content.push(
            button(
                container(lucide::x().size(13)).style(|theme: &Theme| container::Style {
                    text_color: Some(theme.desk().text_muted),
                    ..Default::default()
                }),
            )
            .on_press(on_clear)
            .padding([2.0, 6.0])
            .style(button_ghost),
        );
    }

    container(content).width(Length::Fill).into()
}
