//! Empty, loading, and error feedback states.
//!
//! Standardized feedback for the three terminal conditions a listing can be
//! in besides showing rows: nothing to display, a fetch in flight, or a
//! failed fetch.

use iced::widget::{Space, button, column, container, row, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::theme::{
    BORDER_RADIUS_SM, DeskColors, SPACING_LG, SPACING_MD, SPACING_SM, button_primary,
};

// =============================================================================
// EMPTY STATE
// =============================================================================

/// Empty state with icon, title, and optional description.
pub struct EmptyState<'a, M> {
    icon: Element<'a, M>,
    title: String,
    description: Option<String>,
}

impl<'a, M: 'a> EmptyState<'a, M> {
    pub fn new(icon: impl Into<Element<'a, M>>, title: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            title: title.into(),
            description: None,
        }
    }

    /// Add a description below the title.
    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    /// Build the element, centered in the available space.
    pub fn view(self) -> Element<'a, M> {
        let mut content = column![self.icon, Space::new().height(SPACING_MD)].push(
            text(self.title)
                .size(16)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_secondary),
                }),
        );

        if let Some(desc) = self.description {
            content = content.push(Space::new().height(SPACING_SM)).push(
                text(desc).size(13).style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_muted),
                }),
            );
        }

        container(content.align_x(Alignment::Center))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Shrink)
            .center_y(Length::Shrink)
            .into()
    }
}

// =============================================================================
// LOADING STATE
// =============================================================================

/// Loading state shown while a directory call is in flight.
pub struct LoadingState {
    title: String,
    description: Option<String>,
}

impl LoadingState {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    pub fn description(mut self, desc: impl Into<String>) -> Self {
        self.description = Some(desc.into());
        self
    }

    pub fn view<'a, M: 'a>(self) -> Element<'a, M> {
        let mut content = column![
            lucide::loader()
                .size(36)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().accent),
                }),
            Space::new().height(SPACING_LG),
            text(self.title)
                .size(16)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_primary),
                }),
        ]
        .align_x(Alignment::Center);

        if let Some(desc) = self.description {
            content = content.push(Space::new().height(SPACING_SM)).push(
                text(desc).size(13).style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_muted),
                }),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Shrink)
            .center_y(Length::Shrink)
            .into()
    }
}

// =============================================================================
// ERROR STATE
// =============================================================================

/// Error state with message and optional retry action.
pub struct ErrorState<M> {
    title: String,
    message: Option<String>,
    suggestion: Option<String>,
    retry: Option<M>,
}

impl<M: Clone> ErrorState<M> {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: None,
            suggestion: None,
            retry: None,
        }
    }

    /// Set the error detail text.
    pub fn message(mut self, msg: impl Into<String>) -> Self {
        self.message = Some(msg.into());
        self
    }

    /// Add a hint about what to do next.
    pub fn suggestion(mut self, hint: impl Into<String>) -> Self {
        self.suggestion = Some(hint.into());
        self
    }

    /// Add a retry button.
    pub fn retry(mut self, message: M) -> Self {
        self.retry = Some(message);
        self
    }

    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let mut content = column![
            lucide::circle_alert()
                .size(40)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().danger),
                }),
            Space::new().height(SPACING_LG),
            text(self.title)
                .size(16)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_primary),
                }),
        ]
        .align_x(Alignment::Center)
        .max_width(420.0);

        if let Some(msg) = self.message {
            content = content.push(Space::new().height(SPACING_SM)).push(
                container(text(msg).size(12).style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_secondary),
                }))
                .padding(SPACING_MD)
                .style(|theme: &Theme| container::Style {
                    background: Some(theme.desk().surface_alt.into()),
                    border: Border {
                        radius: BORDER_RADIUS_SM.into(),
                        ..Border::default()
                    },
                    ..Default::default()
                }),
            );
        }

        if let Some(hint) = self.suggestion {
            content = content.push(Space::new().height(SPACING_SM)).push(
                text(hint).size(12).style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_muted),
                }),
            );
        }

        if let Some(retry_msg) = self.retry {
            content = content.push(Space::new().height(SPACING_LG)).push(
                button(
                    row![
                        lucide::refresh_cw().size(14),
                        Space::new().width(SPACING_SM),
                        text("Retry").size(14),
                    ]
                    .align_y(Alignment::Center),
                )
                .on_press(retry_msg)
                .padding([8.0, 20.0])
                .style(button_primary),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Shrink)
            .center_y(Length::Shrink)
            .into()
    }
}

// =============================================================================
// NO FILTERED RESULTS
// =============================================================================

/// State when a search yields zero matches.
pub struct NoFilteredResults<M> {
    filter_name: String,
    clear_action: Option<M>,
}

impl<M: Clone> NoFilteredResults<M> {
    /// `filter_name` names what was filtered, e.g. "patients".
    pub fn new(filter_name: impl Into<String>) -> Self {
        Self {
            filter_name: filter_name.into(),
            clear_action: None,
        }
    }

    /// Add a clear-search button.
    pub fn clear_action(mut self, message: M) -> Self {
        self.clear_action = Some(message);
        self
    }

    pub fn view<'a>(self) -> Element<'a, M>
    where
        M: 'a,
    {
        let mut content = column![
            lucide::search().size(28).style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_disabled),
            }),
            Space::new().height(SPACING_MD),
            text(format!("No {} found", self.filter_name))
                .size(14)
                .style(|theme: &Theme| text::Style {
                    color: Some(theme.desk().text_secondary),
                }),
        ]
        .align_x(Alignment::Center);

        if let Some(clear_msg) = self.clear_action {
            content = content.push(Space::new().height(SPACING_MD)).push(
                button(text("Clear search").size(12))
                    .on_press(clear_msg)
                    .padding([6.0, 12.0])
                    .style(crate::theme::button_ghost),
            );
        }

        container(content)
            .width(Length::Fill)
            .height(Length::Fixed(200.0))
            .center_x(Length::Shrink)
            .center_y(Length::Shrink)
            .into()
    }
}
