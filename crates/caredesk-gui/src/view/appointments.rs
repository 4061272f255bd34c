//! Appointments: directory-backed schedule with specialty filter chips.
//!
//! The row data lives behind an async directory call, so this page renders
//! all four lifecycle outcomes: loading, terminal error with retry, empty,
//! and populated.

use iced::widget::{Space, button, column, row, text};
use iced::{Element, Length};
use iced_fonts::lucide;

use caredesk_listing::{
    Column, ColumnSet, PaginationState, QueryFields, build_table, filter_candidates,
};
use caredesk_model::AppointmentDetail;

use crate::component::{DataTable, ErrorState, NoFilteredResults, page_header, search_box};
use crate::message::{AppointmentsMessage, Message};
use crate::state::AppointmentsUi;
use crate::theme::{SPACING_LG, SPACING_MD, SPACING_SM, button_chip, button_ghost};
use crate::view::card;

const PAGE_SIZE: usize = 8;

fn query_fields() -> QueryFields<AppointmentDetail> {
    QueryFields::new()
        .field(|a: &AppointmentDetail| a.patient_name.clone())
        .field(|a: &AppointmentDetail| a.doctor_name.clone())
        .field(|a: &AppointmentDetail| a.appointment.reason.clone())
        .field(|a: &AppointmentDetail| a.appointment.id.clone())
}

fn columns() -> ColumnSet<AppointmentDetail> {
    ColumnSet::new(vec![
        Column::new("id", "ID", |a: &AppointmentDetail| {
            a.appointment.id.clone()
        })
        .fixed(90.0),
        Column::new("when", "When", |a: &AppointmentDetail| {
            format!(
                "{} {}",
                a.appointment.date.format("%d/%m"),
                a.appointment.time.format("%H:%M")
            )
        })
        .fixed(110.0),
        Column::new("patient", "Patient", |a: &AppointmentDetail| {
            a.patient_name.clone()
        })
        .portion(2),
        Column::new("doctor", "Doctor", |a: &AppointmentDetail| {
            a.doctor_name.clone()
        })
        .portion(2),
        Column::new("specialty", "Specialty", |a: &AppointmentDetail| {
            a.specialty_name.clone()
        })
        .portion(2),
        Column::new("status", "Status", |a: &AppointmentDetail| {
            a.appointment.status.display_name().to_string()
        })
        .fixed(110.0),
        Column::new("reason", "Reason", |a: &AppointmentDetail| {
            a.appointment.reason.clone()
        })
        .portion(3),
    ])
    .expect("column keys are unique")
}

pub fn view(ui: &AppointmentsUi) -> Element<'_, Message> {
    let header = page_header("Appointments", "Schedule across all specialties");

    if let Some(error) = &ui.error {
        let mut error_view = ErrorState::new("Could not load the schedule")
            .message(error.to_string())
            .retry(Message::Appointments(AppointmentsMessage::Reload));
        if let Some(hint) = error.suggestion() {
            error_view = error_view.suggestion(hint);
        }
        return column![header, Space::new().height(SPACING_MD), card(error_view.view())]
            .padding(SPACING_LG)
            .into();
    }

    let search = search_box(
        &ui.query,
        "Search by patient, doctor, or reason",
        |q| Message::Appointments(AppointmentsMessage::QueryChanged(q)),
        Message::Appointments(AppointmentsMessage::QueryCleared),
    );

    let reload = button(
        row![lucide::refresh_cw().size(14), text("Reload").size(13)]
            .spacing(SPACING_SM)
            .align_y(iced::Alignment::Center),
    )
    .on_press(Message::Appointments(AppointmentsMessage::Reload))
    .padding([8.0, 12.0])
    .style(button_ghost);

    let toolbar = row![search, reload]
        .spacing(SPACING_SM)
        .align_y(iced::Alignment::Center);

    // Specialty chips drawn from the directory; the active chip is a toggle.
    let mut chips = row![].spacing(SPACING_SM);
    for specialty in &ui.specialties {
        let active = ui.specialty.as_deref() == Some(specialty.code.as_str());
        chips = chips.push(
            button(text(specialty.name.clone()).size(12))
                .on_press(Message::Appointments(AppointmentsMessage::SpecialtyToggled(
                    specialty.code.clone(),
                )))
                .padding([5.0, 10.0])
                .style(button_chip(active)),
        );
    }

    let table: Element<'_, Message> = match &ui.rows {
        Some(rows) if !ui.is_loading => {
            let by_specialty: Vec<AppointmentDetail> = rows
                .iter()
                .filter(|a| {
                    ui.specialty
                        .as_deref()
                        .is_none_or(|code| a.specialty_code == code)
                })
                .cloned()
                .collect();
            let filtered = filter_candidates(&by_specialty, &query_fields(), &ui.query);

            if filtered.is_empty() && !ui.query.is_empty() {
                NoFilteredResults::new("appointments")
                    .clear_action(Message::Appointments(AppointmentsMessage::QueryCleared))
                    .view()
            } else {
                let pager = PaginationState::for_len(ui.page, filtered.len(), PAGE_SIZE);
                let window: Vec<AppointmentDetail> = pager
                    .page_slice(&filtered, PAGE_SIZE)
                    .iter()
                    .map(|&a| a.clone())
                    .collect();
                let render = build_table(
                    &columns(),
                    Some(&window),
                    |a| a.appointment.id.clone(),
                    false,
                );
                DataTable::new(render)
                    .paginate(pager, |page| {
                        Message::Appointments(AppointmentsMessage::PageChanged(page))
                    })
                    .empty_copy("No appointments", "Booked appointments appear here")
                    .view()
            }
        }
        // Absent rows before the first answer; never rendered as an error.
        other => {
            let render = build_table(
                &columns(),
                other.as_deref(),
                |a: &AppointmentDetail| a.appointment.id.clone(),
                ui.is_loading,
            );
            DataTable::new(render)
                .loading_title("Fetching the schedule")
                .empty_copy("No appointments", "Booked appointments appear here")
                .view()
        }
    };

    column![
        header,
        Space::new().height(SPACING_MD),
        toolbar,
        Space::new().height(SPACING_SM),
        chips,
        Space::new().height(SPACING_SM),
        card(table),
    ]
    .padding(SPACING_LG)
    .height(Length::Fill)
    .into()
}
