//! Summary stat card.

use iced::widget::{Space, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};

use crate::theme::{BORDER_RADIUS_MD, DeskColors, SPACING_MD, SPACING_SM};

/// Card with a big value, a label underneath, and an icon to the left.
/// Used in page headers for at-a-glance counts.
pub fn stat_card<'a, M: 'a>(
    icon: impl Into<Element<'a, M>>,
    value: impl Into<String>,
    label: impl Into<String>,
) -> Element<'a, M> {
    let icon_badge = container(icon.into())
        .padding(SPACING_SM)
        .style(|theme: &Theme| {
            let desk = theme.desk();
            container::Style {
                background: Some(
                    iced::Color {
                        a: 0.12,
                        ..desk.accent
                    }
                    .into(),
                ),
                text_color: Some(desk.accent),
                border: Border {
                    radius: BORDER_RADIUS_MD.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        });

    let numbers = column![
        text(value.into())
            .size(22)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_primary),
            }),
        text(label.into())
            .size(12)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_muted),
            }),
    ]
    .spacing(2);

    container(
        row![icon_badge, Space::new().width(SPACING_SM), numbers].align_y(Alignment::Center),
    )
    .padding(SPACING_MD)
    .width(Length::Fill)
    .style(|theme: &Theme| {
        let desk = theme.desk();
        container::Style {
            background: Some(desk.surface.into()),
            border: Border {
                color: desk.border,
                width: 1.0,
                radius: BORDER_RADIUS_MD.into(),
            },
            ..Default::default()
        }
    })
    .into()
}
