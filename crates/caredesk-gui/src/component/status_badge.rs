//! Status badge pill.

use iced::widget::{container, text};
use iced::{Border, Color, Element, Theme};

/// Semantic color for a badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Warning,
    Danger,
    Info,
    Neutral,
}

impl Tone {
    fn color(self, theme: &Theme) -> Color {
        use crate::theme::DeskColors;
        let desk = theme.desk();
        match self {
            Tone::Success => desk.success,
            Tone::Warning => desk.warning,
            Tone::Danger => desk.danger,
            Tone::Info => desk.info,
            Tone::Neutral => desk.text_muted,
        }
    }
}

/// Small rounded pill with a tinted background, used for lifecycle states in
/// table cells and detail panels.
pub fn status_badge<'a, M: 'a>(label: impl Into<String>, tone: Tone) -> Element<'a, M> {
    container(
        text(label.into())
            .size(11)
            .style(move |theme: &Theme| text::Style {
                color: Some(tone.color(theme)),
            }),
    )
    .padding([2.0, 8.0])
    .style(move |theme: &Theme| {
        let color = tone.color(theme);
        container::Style {
            background: Some(Color { a: 0.12, ..color }.into()),
            border: Border {
                color: Color { a: 0.35, ..color },
                width: 1.0,
                radius: 999.0.into(),
            },
            ..Default::default()
        }
    })
    .into()
}
