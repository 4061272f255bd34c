//! Searchable selection list.
//!
//! A compact search input over a pre-filtered list of entries. The component
//! is stateless: the caller runs the filter, owns the query and the current
//! selection, and receives the picked key through a message. Clicking a row
//! only emits; it never mutates.

use iced::widget::{button, column, container, row, scrollable, text};
use iced::{Alignment, Border, Color, Element, Length, Theme};

use crate::component::NoFilteredResults;
use crate::component::search_box::search_box_compact;
use crate::theme::{BORDER_RADIUS_SM, DeskColors, SPACING_SM, SPACING_XS};

/// One selectable row. `secondary` is dimmed supporting text, e.g. an id or
/// a specialty next to a name.
#[derive(Debug, Clone)]
pub struct PickerEntry {
    pub key: String,
    pub primary: String,
    pub secondary: Option<String>,
}

impl PickerEntry {
    pub fn new(key: impl Into<String>, primary: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            primary: primary.into(),
            secondary: None,
        }
    }

    pub fn secondary(mut self, secondary: impl Into<String>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }
}

/// Searchable selection list over caller-filtered entries.
pub struct Picker<'a, M> {
    query: &'a str,
    placeholder: &'a str,
    entries: Vec<PickerEntry>,
    selected: Option<&'a str>,
    subject: String,
    on_query: Box<dyn Fn(String) -> M + 'a>,
    on_clear: M,
    on_pick: Box<dyn Fn(String) -> M + 'a>,
    height: f32,
}

impl<'a, M: Clone + 'a> Picker<'a, M> {
    pub fn new(
        query: &'a str,
        placeholder: &'a str,
        entries: Vec<PickerEntry>,
        on_query: impl Fn(String) -> M + 'a,
        on_clear: M,
        on_pick: impl Fn(String) -> M + 'a,
    ) -> Self {
        Self {
            query,
            placeholder,
            entries,
            selected: None,
            subject: "results".to_string(),
            on_query: Box::new(on_query),
            on_clear,
            on_pick: Box::new(on_pick),
            height: 180.0,
        }
    }

    /// Key of the current selection, highlighted in the list.
    pub fn selected(mut self, key: Option<&'a str>) -> Self {
        self.selected = key;
        self
    }

    /// What the list holds, used in the zero-match copy ("No patients found").
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn height(mut self, height: f32) -> Self {
        self.height = height;
        self
    }

    pub fn view(self) -> Element<'a, M> {
        let search = search_box_compact(
            self.query,
            self.placeholder,
            self.on_query,
            self.on_clear.clone(),
        );

        let body: Element<'a, M> = if self.entries.is_empty() && !self.query.is_empty() {
            NoFilteredResults::new(self.subject)
                .clear_action(self.on_clear)
                .view()
        } else {
            let mut list = column![].spacing(2);
            for entry in self.entries {
                let is_selected = self.selected == Some(entry.key.as_str());
                list = list.push(entry_row(entry, is_selected, &self.on_pick));
            }
            scrollable(list).height(Length::Fixed(self.height)).into()
        };

        container(column![search, body].spacing(SPACING_SM))
            .padding(SPACING_SM)
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
}

fn entry_row<'a, M: Clone + 'a>(
    entry: PickerEntry,
    is_selected: bool,
    on_pick: &(dyn Fn(String) -> M + 'a),
) -> Element<'a, M> {
    let mut content = row![
        text(entry.primary)
            .size(13)
            .style(move |theme: &Theme| text::Style {
                color: Some(if is_selected {
                    theme.desk().accent
                } else {
                    theme.desk().text_primary
                }),
            }),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    if let Some(secondary) = entry.secondary {
        content = content.push(text(secondary).size(11).style(|theme: &Theme| text::Style {
            color: Some(theme.desk().text_muted),
        }));
    }

    button(content)
        .on_press(on_pick(entry.key))
        .width(Length::Fill)
        .padding([6.0, 8.0])
        .style(move |theme: &Theme, status| {
            let desk = theme.desk();
            let background = if is_selected {
                Some(
                    Color {
                        a: 0.12,
                        ..desk.accent
                    }
                    .into(),
                )
            } else {
                match status {
                    button::Status::Hovered => Some(desk.surface_alt.into()),
                    _ => None,
                }
            };
            button::Style {
                background,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        })
        .into()
}
