//! Data table component.
//!
//! Maps a [`TableRender`] view model onto widgets. Exactly one of the three
//! render states is shown; rows keep their input order and cells their
//! column order. Pagination controls are drawn from caller-owned
//! [`PaginationState`] and only emit the clamped target page, they never
//! advance the cursor themselves.

use iced::widget::{button, column, container, row, rule, scrollable, space, text};
use iced::{Border, Color, Element, Length, Theme};
use iced_fonts::lucide;

use caredesk_listing::{ColumnWidth, PaginationState, TableBody, TableRender, TableRow};

use crate::component::empty_state::{EmptyState, LoadingState};
use crate::theme::{
    DeskColors, SPACING_SM, TABLE_CELL_PADDING_X, TABLE_CELL_PADDING_Y, button_ghost,
};

fn width_to_length(width: ColumnWidth) -> Length {
    match width {
        ColumnWidth::Fixed(px) => Length::Fixed(px),
        ColumnWidth::Fill => Length::Fill,
        ColumnWidth::Portion(portion) => Length::FillPortion(portion),
    }
}

// =============================================================================
// DATA TABLE
// =============================================================================

/// Table widget over a prepared [`TableRender`].
///
/// ```rust,ignore
/// DataTable::new(render)
///     .selected(ui.selected.clone())
///     .on_select(|key| Message::Patients(PatientsMessage::RowSelected(key)))
///     .paginate(pager, |page| Message::Patients(PatientsMessage::PageChanged(page)))
///     .empty_copy("No patients", "Register a patient to get started")
///     .view()
/// ```
pub struct DataTable<'a, M> {
    render: TableRender,
    selected: Option<String>,
    on_select: Option<Box<dyn Fn(String) -> M + 'a>>,
    pagination: Option<(PaginationState, Box<dyn Fn(u32) -> M + 'a>)>,
    empty_title: String,
    empty_description: Option<String>,
    loading_title: String,
}

impl<'a, M: Clone + 'a> DataTable<'a, M> {
    pub fn new(render: TableRender) -> Self {
        Self {
            render,
            selected: None,
            on_select: None,
            pagination: None,
            empty_title: "Nothing to display".to_string(),
            empty_description: None,
            loading_title: "Loading".to_string(),
        }
    }

    /// Key of the caller-owned selection, highlighted in the body.
    pub fn selected(mut self, key: Option<String>) -> Self {
        self.selected = key;
        self
    }

    /// Make rows clickable; the message carries the row key.
    pub fn on_select(mut self, f: impl Fn(String) -> M + 'a) -> Self {
        self.on_select = Some(Box::new(f));
        self
    }

    /// Attach pagination controls below the body.
    pub fn paginate(mut self, state: PaginationState, f: impl Fn(u32) -> M + 'a) -> Self {
        self.pagination = Some((state, Box::new(f)));
        self
    }

    /// Copy for the Empty state.
    pub fn empty_copy(mut self, title: impl Into<String>, description: impl Into<String>) -> Self {
        self.empty_title = title.into();
        self.empty_description = Some(description.into());
        self
    }

    /// Title for the Loading state.
    pub fn loading_title(mut self, title: impl Into<String>) -> Self {
        self.loading_title = title.into();
        self
    }

    /// Build the element.
    pub fn view(self) -> Element<'a, M> {
        match self.render {
            TableRender::Loading => LoadingState::new(self.loading_title).view(),
            TableRender::Empty => {
                let mut empty = EmptyState::new(lucide::inbox().size(40), self.empty_title);
                if let Some(desc) = self.empty_description {
                    empty = empty.description(desc);
                }
                empty.view()
            }
            TableRender::Populated(body) => {
                populated(body, self.selected, self.on_select, self.pagination)
            }
        }
    }
}

fn populated<'a, M: Clone + 'a>(
    body: TableBody,
    selected: Option<String>,
    on_select: Option<Box<dyn Fn(String) -> M + 'a>>,
    pagination: Option<(PaginationState, Box<dyn Fn(u32) -> M + 'a>)>,
) -> Element<'a, M> {
    let widths: Vec<Length> = body
        .header
        .iter()
        .map(|cell| width_to_length(cell.width))
        .collect();

    // Header row
    let mut header = row![].spacing(0);
    for cell in body.header {
        let width = width_to_length(cell.width);
        header = header.push(
            container(
                text(cell.label)
                    .size(12)
                    .style(|theme: &Theme| text::Style {
                        color: Some(theme.desk().text_muted),
                    }),
            )
            .width(width)
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
            .style(|theme: &Theme| container::Style {
                background: Some(theme.desk().surface.into()),
                ..Default::default()
            }),
        );
    }

    // Data rows, zebra striped, optionally clickable.
    let mut data_rows = column![].spacing(0);
    for (row_idx, table_row) in body.rows.into_iter().enumerate() {
        let is_selected = selected.as_deref() == Some(table_row.key.as_str());
        let element = match &on_select {
            Some(f) => {
                let message = f(table_row.key.clone());
                clickable_row(table_row, &widths, row_idx % 2 == 0, is_selected, message)
            }
            None => plain_row(table_row, &widths, row_idx % 2 == 0),
        };
        data_rows = data_rows.push(element);
    }

    let divider = || {
        rule::horizontal(1).style(|theme: &Theme| rule::Style {
            color: theme.desk().border,
            radius: 0.0.into(),
            fill_mode: rule::FillMode::Full,
            snap: true,
        })
    };

    let mut table = column![header, divider(), scrollable(data_rows).height(Length::Fill)]
        .spacing(0);

    if let Some((state, on_page_change)) = pagination {
        if state.has_controls() {
            table = table
                .push(divider())
                .push(container(pagination_controls(state, on_page_change)).padding(SPACING_SM));
        }
    }

    table.into()
}

fn plain_row<'a, M: 'a>(table_row: TableRow, widths: &[Length], is_even: bool) -> Element<'a, M> {
    let mut data_row = row![].spacing(0);
    for (col_idx, cell) in table_row.cells.into_iter().enumerate() {
        let width = widths.get(col_idx).copied().unwrap_or(Length::Fill);
        data_row = data_row.push(
            container(text(cell).size(13).style(|theme: &Theme| text::Style {
                color: Some(theme.desk().text_secondary),
            }))
            .width(width)
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X])
            .style(move |theme: &Theme| {
                let desk = theme.desk();
                container::Style {
                    background: Some(if is_even { desk.surface_alt } else { desk.background }.into()),
                    ..Default::default()
                }
            }),
        );
    }
    data_row.into()
}

fn clickable_row<'a, M: Clone + 'a>(
    table_row: TableRow,
    widths: &[Length],
    is_even: bool,
    is_selected: bool,
    on_click: M,
) -> Element<'a, M> {
    let mut data_row = row![].spacing(0);
    for (col_idx, cell) in table_row.cells.into_iter().enumerate() {
        let width = widths.get(col_idx).copied().unwrap_or(Length::Fill);
        data_row = data_row.push(
            container(
                text(cell)
                    .size(13)
                    .style(move |theme: &Theme| text::Style {
                        color: Some(if is_selected {
                            theme.desk().text_primary
                        } else {
                            theme.desk().text_secondary
                        }),
                    }),
            )
            .width(width)
            .padding([TABLE_CELL_PADDING_Y, TABLE_CELL_PADDING_X]),
        );
    }

    button(data_row)
        .on_press(on_click)
        .width(Length::Fill)
        .padding(0)
        .style(move |theme: &Theme, status| {
            let desk = theme.desk();
            let accent_light = Color {
                a: 0.15,
                ..desk.accent
            };
            let background = if is_selected {
                accent_light
            } else {
                match status {
                    button::Status::Hovered => desk.surface_alt,
                    _ if is_even => desk.surface_alt,
                    _ => desk.background,
                }
            };
            button::Style {
                background: Some(background.into()),
                border: Border::default(),
                ..Default::default()
            }
        })
        .into()
}

fn pagination_controls<'a, M: Clone + 'a>(
    state: PaginationState,
    on_page_change: Box<dyn Fn(u32) -> M + 'a>,
) -> Element<'a, M> {
    let prev_enabled = state.previous().is_some();
    let next_enabled = state.next().is_some();

    let prev_button = button(container(lucide::chevron_left().size(14)).style(
        move |theme: &Theme| container::Style {
            text_color: Some(if prev_enabled {
                theme.desk().text_secondary
            } else {
                theme.desk().text_disabled
            }),
            ..Default::default()
        },
    ))
    .on_press_maybe(state.previous().map(&on_page_change))
    .padding([4.0, 10.0])
    .style(button_ghost);

    let next_button = button(container(lucide::chevron_right().size(14)).style(
        move |theme: &Theme| container::Style {
            text_color: Some(if next_enabled {
                theme.desk().text_secondary
            } else {
                theme.desk().text_disabled
            }),
            ..Default::default()
        },
    ))
    .on_press_maybe(state.next().map(&on_page_change))
    .padding([4.0, 10.0])
    .style(button_ghost);

    let page_info = text(format!(
        "Page {} of {}",
        state.current_page(),
        state.total_pages()
    ))
    .size(12)
    .style(|theme: &Theme| text::Style {
        color: Some(theme.desk().text_muted),
    });

    row![
        space::horizontal(),
        prev_button,
        page_info,
        next_button,
        space::horizontal(),
    ]
    .spacing(SPACING_SM)
    .align_y(iced::Alignment::Center)
    .into()
}
