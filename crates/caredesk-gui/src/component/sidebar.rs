//! Navigation sidebar.

use iced::widget::{Space, button, column, container, row, rule, text};
use iced::{Alignment, Border, Element, Length, Theme};
use iced_fonts::lucide;

use crate::state::Section;
use crate::theme::{
    BORDER_RADIUS_SM, DeskColors, SIDEBAR_WIDTH, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost,
};

/// One navigation row.
pub struct SidebarItem<'a, M> {
    icon: Element<'a, M>,
    label: &'static str,
    active: bool,
    on_press: M,
}

impl<'a, M: Clone + 'a> SidebarItem<'a, M> {
    pub fn new(
        icon: impl Into<Element<'a, M>>,
        label: &'static str,
        active: bool,
        on_press: M,
    ) -> Self {
        Self {
            icon: icon.into(),
            label,
            active,
            on_press,
        }
    }

    fn view(self) -> Element<'a, M> {
        let active = self.active;
        button(
            row![
                container(self.icon).width(Length::Fixed(24.0)),
                text(self.label).size(14),
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center),
        )
        .on_press(self.on_press)
        .width(Length::Fill)
        .padding([8.0, 12.0])
        .style(move |theme: &Theme, status| {
            let desk = theme.desk();
            let (background, text_color) = if active {
                (
                    Some(
                        iced::Color {
                            a: 0.15,
                            ..desk.accent
                        }
                        .into(),
                    ),
                    desk.accent,
                )
            } else {
                match status {
                    button::Status::Hovered => (Some(desk.surface_alt.into()), desk.text_primary),
                    _ => (None, desk.text_secondary),
                }
            };
            button::Style {
                background,
                text_color,
                border: Border {
                    radius: BORDER_RADIUS_SM.into(),
                    ..Border::default()
                },
                ..Default::default()
            }
        })
        .into()
    }
}

fn section_icon<'a, M: 'a>(section: Section) -> Element<'a, M> {
    let icon = match section {
        Section::Patients => lucide::users(),
        Section::Appointments => lucide::calendar(),
        Section::Pharmacy => lucide::pill(),
        Section::Laboratory => lucide::flask_conical(),
        Section::Insurance => lucide::shield(),
        Section::Nursing => lucide::clipboard_list(),
        Section::Admin => lucide::activity(),
    };
    icon.size(16).into()
}

/// Full-height navigation column with the app title, one item per section,
/// and the appearance toggle pinned to the bottom.
pub fn sidebar<'a, M: Clone + 'a>(
    active: Section,
    dark_mode: bool,
    on_navigate: impl Fn(Section) -> M + 'a,
    on_toggle_dark: M,
) -> Element<'a, M> {
    let title = row![
        lucide::cross().size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.desk().accent),
        }),
        text("CareDesk").size(18).style(|theme: &Theme| text::Style {
            color: Some(theme.desk().text_primary),
        }),
    ]
    .spacing(SPACING_SM)
    .align_y(Alignment::Center);

    let mut nav = column![].spacing(SPACING_XS);
    for section in Section::all() {
        nav = nav.push(
            SidebarItem::new(
                section_icon(section),
                section.label(),
                section == active,
                on_navigate(section),
            )
            .view(),
        );
    }

    let mode_toggle = button(
        row![
            if dark_mode {
                lucide::sun().size(14)
            } else {
                lucide::moon().size(14)
            },
            text(if dark_mode { "Light mode" } else { "Dark mode" }).size(13),
        ]
        .spacing(SPACING_SM)
        .align_y(Alignment::Center),
    )
    .on_press(on_toggle_dark)
    .width(Length::Fill)
    .padding([8.0, 12.0])
    .style(button_ghost);

    let divider = rule::horizontal(1).style(|theme: &Theme| rule::Style {
        color: theme.desk().border,
        radius: 0.0.into(),
        fill_mode: rule::FillMode::Full,
        snap: true,
    });

    container(
        column![
            title,
            Space::new().height(SPACING_MD),
            divider,
            Space::new().height(SPACING_MD),
            nav,
            Space::new().height(Length::Fill),
            mode_toggle,
        ]
        .padding(SPACING_MD),
    )
    .width(Length::Fixed(SIDEBAR_WIDTH))
    .height(Length::Fill)
    .style(|theme: &Theme| {
        let desk = theme.desk();
        container::Style {
            background: Some(desk.surface.into()),
            border: Border {
                color: desk.border,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        }
    })
    .into()
}
