//! Page header with title and subtitle.

use iced::widget::{column, text};
use iced::{Element, Theme};

pub fn page_header<'a, M: 'a>(
    title: impl Into<String>,
    subtitle: impl Into<String>,
) -> Element<'a, M> {
    column![
        text(title.into())
            .size(24)
            .style(|theme: &Theme| text::Style {
                color: Some(crate::theme::DeskColors::desk(theme).text_primary),
            }),
        text(subtitle.into())
            .size(13)
            .style(|theme: &Theme| text::Style {
                color: Some(crate::theme::DeskColors::desk(theme).text_muted),
            }),
    ]
    .spacing(4)
    .into()
}
